pub mod args;
pub mod command;
pub mod render;
pub mod session;

// Re-export specific structs for easy access
pub use args::Args;
pub use command::{Command, CommandError};
pub use session::{Outcome, Session};
