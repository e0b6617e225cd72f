use crate::ui::mvi::UiState;

/// What the home screen should currently show.
///
/// `Error` deliberately carries no cause.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MarsUiState {
    #[default]
    Loading,
    Success(String),
    Error,
}

impl UiState for MarsUiState {}

impl MarsUiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True once a fetch attempt has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }
}
