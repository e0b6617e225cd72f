mod repository;

pub use repository::{MarsPhotosRepository, NetworkMarsPhotosRepository};
