pub mod action;
pub mod command;
pub mod error;

pub use action::{Action, NotifyLevel};
pub use command::{parse_command, Command};
pub use error::{CatalogError, SelectionKind, ViewError};
