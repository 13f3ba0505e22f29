pub mod compose_discovery;
pub mod compose_file;
pub mod config;
pub mod docker_adapter;

pub use compose_discovery::ComposeDiscovery;
pub use config::AppConfig;
pub use docker_adapter::DockerAdapter;
