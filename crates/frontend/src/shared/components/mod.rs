pub mod access_denied;
pub mod number_format;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
