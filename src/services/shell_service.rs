use crate::domain::{CommandTemplate, ContainerRuntime, DefinitionFile, RunStatus};
use crate::error::ShellError;
use crate::services::StatusProber;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Opens a shell in a compose service, picking the command by run status.
pub struct ShellService {
    runtime: Arc<dyn ContainerRuntime>,
    prober: StatusProber,
    exec_command: CommandTemplate,
    exec_command_not_running: CommandTemplate,
}

impl ShellService {
    pub fn new(
        runtime: Arc<dyn ContainerRuntime>,
        exec_command: CommandTemplate,
        exec_command_not_running: CommandTemplate,
    ) -> Self {
        Self {
            prober: StatusProber::new(runtime.clone()),
            runtime,
            exec_command,
            exec_command_not_running,
        }
    }

    pub fn status(&self, file: &DefinitionFile, service: &str) -> RunStatus {
        self.prober.probe(file.path(), service)
    }

    pub fn template_for(&self, status: RunStatus) -> &CommandTemplate {
        if status.is_running() {
            &self.exec_command
        } else {
            &self.exec_command_not_running
        }
    }

    /// Renders the command that `attach` would run for the given status.
    pub fn command_for(
        &self,
        file: &DefinitionFile,
        service: &str,
        status: RunStatus,
    ) -> Result<Vec<String>, ShellError> {
        let template = self.template_for(status);
        let argv = template.render(&file.display_path(), service);

        if argv.is_empty() {
            return Err(ShellError::EmptyCommand(template.as_str().to_string()));
        }

        Ok(argv)
    }

    /// Probes the service, then runs the matching command with the terminal
    /// handed over. Blocks until the command exits.
    pub fn attach(&self, file: &DefinitionFile, service: &str) -> Result<()> {
        let status = self.status(file, service);
        let argv = self.command_for(file, service, status)?;

        info!("Docker container {} {} is {}", file, service, status);
        info!("exec:  {}", argv.join(" "));

        self.runtime.exec_interactive(&argv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockRuntime;
    use std::path::PathBuf;

    fn service(mock: Arc<MockRuntime>) -> ShellService {
        ShellService::new(
            mock,
            CommandTemplate::new("attach -f %COMPOSE %SERVICE"),
            CommandTemplate::new("start -f %COMPOSE %SERVICE"),
        )
    }

    fn file() -> DefinitionFile {
        DefinitionFile::new(PathBuf::from("/srv/container/app/compose.yml"))
    }

    #[test]
    fn test_attach_running_uses_running_template() {
        let mock = Arc::new(MockRuntime::new());
        mock.set_ps_output("web", r#"{"State":"running"}"#);

        service(mock.clone()).attach(&file(), "web").unwrap();

        assert_eq!(
            mock.get_executed(),
            vec![vec![
                "attach".to_string(),
                "-f".to_string(),
                "/srv/container/app/compose.yml".to_string(),
                "web".to_string(),
            ]]
        );
    }

    #[test]
    fn test_attach_not_running_uses_fallback_template() {
        let mock = Arc::new(MockRuntime::new());
        mock.set_ps_output("web", r#"{"State":"exited"}"#);

        service(mock.clone()).attach(&file(), "web").unwrap();

        let executed = mock.get_executed();
        assert_eq!(executed.len(), 1);
        assert_eq!(executed[0][0], "start");
    }

    #[test]
    fn test_attach_probe_failure_uses_fallback_template() {
        let mock = Arc::new(MockRuntime::new());
        mock.set_fail_on("compose_ps");

        service(mock.clone()).attach(&file(), "web").unwrap();

        assert_eq!(mock.get_executed()[0][0], "start");
    }

    #[test]
    fn test_attach_propagates_exec_failure() {
        let mock = Arc::new(MockRuntime::new());
        mock.set_fail_on("exec_interactive");

        assert!(service(mock).attach(&file(), "web").is_err());
    }

    #[test]
    fn test_empty_template_is_rejected_before_exec() {
        let mock = Arc::new(MockRuntime::new());
        let shell = ShellService::new(
            mock.clone(),
            CommandTemplate::new("attach %SERVICE"),
            CommandTemplate::new(""),
        );

        let err = shell.attach(&file(), "web").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShellError>(),
            Some(ShellError::EmptyCommand(_))
        ));
        assert!(mock.get_executed().is_empty());
    }
}
