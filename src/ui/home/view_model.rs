//! Fetch-and-present state machine for the home screen.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::data::MarsPhotosRepository;
use crate::ui::home::intent::MarsIntent;
use crate::ui::home::reducer::MarsReducer;
use crate::ui::home::state::MarsUiState;
use crate::ui::mvi::Reducer;

/// Owns the published `MarsUiState` and drives it from repository calls.
///
/// The view model is the only writer. Observers get a `watch::Receiver`
/// and are notified on every transition.
///
/// Triggers are not deduplicated: if several fetches overlap, whichever
/// completes last decides the final state.
pub struct MarsViewModel {
    repository: Arc<dyn MarsPhotosRepository>,
    runtime: Handle,
    state: Arc<watch::Sender<MarsUiState>>,
}

impl MarsViewModel {
    /// Create the view model and start the first fetch.
    pub fn new(repository: Arc<dyn MarsPhotosRepository>, runtime: Handle) -> Self {
        let (state, _) = watch::channel(MarsUiState::default());
        let view_model = Self {
            repository,
            runtime,
            state: Arc::new(state),
        };
        view_model.get_mars_photos();
        view_model
    }

    /// Publish `Loading` and start a fetch in the background.
    ///
    /// `Loading` is visible to observers before this returns. The returned
    /// handle completes once the outcome has been published (or discarded,
    /// if the view model was dropped in the meantime).
    pub fn get_mars_photos(&self) -> JoinHandle<()> {
        tracing::info!("Fetching Mars photos");
        dispatch(&self.state, MarsIntent::FetchStarted);

        let repository = Arc::clone(&self.repository);
        let state = Arc::downgrade(&self.state);

        self.runtime.spawn(async move {
            let intent = match repository.get_mars_photos().await {
                Ok(photos) => {
                    tracing::debug!("Retrieved {} Mars photos", photos.len());
                    MarsIntent::FetchSucceeded {
                        count: photos.len(),
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        kind = err.kind(),
                        transport = err.is_transport(),
                        "Failed to fetch Mars photos: {}",
                        err
                    );
                    MarsIntent::FetchFailed
                }
            };

            let Some(state) = state.upgrade() else {
                tracing::trace!("Fetch result dropped (view model gone)");
                return;
            };
            dispatch(&state, intent);
        })
    }

    /// Snapshot of the current state.
    pub fn ui_state(&self) -> MarsUiState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<MarsUiState> {
        self.state.subscribe()
    }
}

fn dispatch(state: &watch::Sender<MarsUiState>, intent: MarsIntent) {
    state.send_modify(|current| {
        *current = MarsReducer::reduce(std::mem::take(current), intent);
    });
}
