use leptos::prelude::*;

/// App-wide loading overlay state. Panels bracket their requests with
/// `begin`/`end`; the overlay stays up while any request is in flight.
#[derive(Clone, Copy)]
pub struct LoadingContext {
    active: RwSignal<u32>,
}

impl LoadingContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(0),
        }
    }

    pub fn begin(&self) {
        self.active.update(|n| *n += 1);
    }

    pub fn end(&self) {
        self.active.update(|n| *n = n.saturating_sub(1));
    }

    pub fn is_active(&self) -> bool {
        self.active.get() > 0
    }
}

impl Default for LoadingContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_loading() -> LoadingContext {
    use_context::<LoadingContext>().expect("LoadingContext not found. Provide it at the app root.")
}
