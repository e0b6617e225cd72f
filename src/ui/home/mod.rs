mod intent;
mod reducer;
mod screen;
mod state;
mod view_model;

pub use intent::MarsIntent;
pub use reducer::{success_summary, MarsReducer};
pub use screen::{render_home_screen, LOADING_FAILED_TEXT, LOADING_TEXT};
pub use state::MarsUiState;
pub use view_model::MarsViewModel;
