mod photo;

pub use photo::MarsPhoto;
