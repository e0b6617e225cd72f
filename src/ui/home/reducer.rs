use crate::ui::home::intent::MarsIntent;
use crate::ui::home::state::MarsUiState;
use crate::ui::mvi::Reducer;

/// Display text for a successful fetch of `count` photos.
pub fn success_summary(count: usize) -> String {
    format!("Success: {} Mars photos retrieved", count)
}

pub struct MarsReducer;

impl Reducer for MarsReducer {
    type State = MarsUiState;
    type Intent = MarsIntent;

    // Every intent replaces the state regardless of what preceded it, so a
    // fetch that completes after a newer trigger still overwrites it.
    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MarsIntent::FetchStarted => MarsUiState::Loading,
            MarsIntent::FetchSucceeded { count } => MarsUiState::Success(success_summary(count)),
            MarsIntent::FetchFailed => MarsUiState::Error,
        }
    }
}
