pub mod bootstrap;
pub mod flow;
pub mod messages;
pub mod ports;
pub mod state;

pub use flow::RECENT_DISPLAY_LIMIT;
pub use state::AppState;
