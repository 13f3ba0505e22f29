pub mod args;
pub mod prompt;
pub mod shell;

pub use args::{HELP, Invocation, VERSION};
pub use prompt::DialoguerPrompt;
