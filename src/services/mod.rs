mod picker;
mod shell_service;
mod status_prober;

pub use picker::{BACK_OPTION, FILE_PROMPT, NO_SERVICES_OPTION, Picker, Selection, ServiceChoices};
pub use shell_service::ShellService;
pub use status_prober::{StatusProber, parse_ps_output};
