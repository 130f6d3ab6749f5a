use crate::shared::components::pagination_controls::total_pages;
use leptos::prelude::*;

pub const PER_PAGE: u32 = 20;

#[derive(Clone, Debug)]
pub struct UsersListState {
    /// 1-based, mirrors the backend's `page` parameter.
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub search: String,
    pub premium_only: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PER_PAGE,
            total: 0,
            search: String::new(),
            premium_only: false,
        }
    }
}

impl UsersListState {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.per_page)
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_follow_server_totals() {
        let mut state = UsersListState::default();
        state.total = 45;
        assert_eq!(state.total_pages(), 3);
        state.total = 40;
        assert_eq!(state.total_pages(), 2);
    }
}
