//! Pure screen state: no rendering, no network.

pub mod confirm;
pub mod list_state;
pub mod modal_state;
pub mod notices;
