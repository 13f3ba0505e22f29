mod container;
mod definition;
mod template;
pub mod traits;

pub use container::RunStatus;
pub use definition::{DEFINITION_FILE_NAMES, DefinitionFile, SearchPath, is_definition_file_name};
pub use template::{COMPOSE_PLACEHOLDER, CommandTemplate, SERVICE_PLACEHOLDER};
pub use traits::{ContainerRuntime, Prompt};
