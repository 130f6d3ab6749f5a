//! DTOs shared between the admin Mini App frontend and the bot's REST API.
//!
//! The backend owns these payloads; the frontend passes them through
//! unmodified. Field names match the wire format exactly.

pub mod admin_logs;
pub mod balances;
pub mod feedback;
pub mod logs;
pub mod roles;
pub mod settings;
pub mod stats;
pub mod users;
