mod cli;
mod error;

pub use cli::{Cli, Command, Limits, Paths};
pub use error::Error;
