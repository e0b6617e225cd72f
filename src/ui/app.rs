use crate::ui::home::{MarsUiState, MarsViewModel};

pub struct App {
    should_quit: bool,
    view_model: MarsViewModel,
    /// Last state observed from the view model.
    ui_state: MarsUiState,
    /// Animation frame counter, advanced while loading.
    tick: usize,
}

impl App {
    pub fn new(view_model: MarsViewModel) -> Self {
        let ui_state = view_model.ui_state();
        Self {
            should_quit: false,
            view_model,
            ui_state,
            tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn ui_state(&self) -> &MarsUiState {
        &self.ui_state
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn on_tick(&mut self) {
        if self.ui_state.is_loading() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    pub fn on_state_changed(&mut self, state: MarsUiState) {
        self.ui_state = state;
    }

    /// Start a new fetch. The screen switches to loading right away.
    pub fn retry(&mut self) {
        self.view_model.get_mars_photos();
        self.ui_state = self.view_model.ui_state();
    }
}
