pub mod locale;
pub mod meta;
pub mod project;
pub mod threads;
pub mod time;

pub use project::{project_display_name, RecentProject, RecentProjectInput};
