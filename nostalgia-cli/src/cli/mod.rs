mod cli;
mod style;

pub use cli::{Cli, Command, SaveArgs, ViewArgs};
pub use style::Style;
