use crate::domain::{ContainerRuntime, Prompt};
use anyhow::{Result, bail};
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::RwLock;

/// In-memory runtime recording every call.
#[derive(Debug)]
pub struct MockRuntime {
    ps_output: RwLock<HashMap<String, String>>,
    commands: RwLock<Vec<String>>,
    executed: RwLock<Vec<Vec<String>>>,
    fail_on: RwLock<Option<String>>,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self {
            ps_output: RwLock::new(HashMap::new()),
            commands: RwLock::new(Vec::new()),
            executed: RwLock::new(Vec::new()),
            fail_on: RwLock::new(None),
        }
    }

    /// Raw stdout returned by `compose_ps` for `service`. Unknown services
    /// get empty output.
    pub fn set_ps_output(&self, service: &str, stdout: &str) {
        self.ps_output
            .write()
            .unwrap()
            .insert(service.to_string(), stdout.to_string());
    }

    pub fn set_fail_on(&self, operation: &str) {
        *self.fail_on.write().unwrap() = Some(operation.to_string());
    }

    pub fn get_commands(&self) -> Vec<String> {
        self.commands.read().unwrap().clone()
    }

    /// Every argv passed to `exec_interactive`, in order.
    pub fn get_executed(&self) -> Vec<Vec<String>> {
        self.executed.read().unwrap().clone()
    }

    fn record_command(&self, cmd: &str) {
        self.commands.write().unwrap().push(cmd.to_string());
    }

    fn check_fail(&self, operation: &str) -> Result<()> {
        if let Some(ref fail_on) = *self.fail_on.read().unwrap() {
            if fail_on == operation {
                bail!("Mock failure on: {}", operation);
            }
        }
        Ok(())
    }
}

impl Default for MockRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerRuntime for MockRuntime {
    fn compose_ps(&self, compose_file: &Path, service: &str) -> Result<String> {
        self.record_command(&format!("compose_ps:{}:{}", compose_file.display(), service));
        self.check_fail("compose_ps")?;

        Ok(self
            .ps_output
            .read()
            .unwrap()
            .get(service)
            .cloned()
            .unwrap_or_default())
    }

    fn exec_interactive(&self, argv: &[String]) -> Result<()> {
        self.record_command(&format!("exec_interactive:{}", argv.join(" ")));
        self.check_fail("exec_interactive")?;

        self.executed.write().unwrap().push(argv.to_vec());
        Ok(())
    }
}

/// Prompt that replays pre-recorded answers and records what it was shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<usize>>,
    calls: Vec<(String, Vec<String>)>,
}

impl ScriptedPrompt {
    pub fn new<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = Option<usize>>,
    {
        Self {
            answers: answers.into_iter().collect(),
            calls: Vec::new(),
        }
    }

    /// `(title, items)` of every selection shown so far.
    pub fn calls(&self) -> &[(String, Vec<String>)] {
        &self.calls
    }
}

impl Prompt for ScriptedPrompt {
    fn select(&mut self, title: &str, items: &[String]) -> Result<Option<usize>> {
        self.calls.push((title.to_string(), items.to_vec()));

        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("scripted prompt exhausted at {:?}", title),
        }
    }
}
