use deplister::prelude::*;
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock CommandRunner replaying canned outputs keyed by the full command line
///
/// Each command line has a queue of outputs; the last one is repeated once
/// the queue runs dry.
#[derive(Default, Clone)]
pub struct MockCommandRunner {
    responses: Arc<Mutex<HashMap<String, VecDeque<CommandOutput>>>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, command: &str, output: CommandOutput) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry(command.to_string())
            .or_default()
            .push_back(output);
        self
    }

    pub fn call_count(&self, command: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == command)
            .count()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, program: &str, args: &[&str], _working_dir: &Path) -> Result<CommandOutput> {
        let command = format!("{} {}", program, args.join(" "));
        self.calls.lock().unwrap().push(command.clone());

        let mut responses = self.responses.lock().unwrap();
        let queue = match responses.get_mut(&command) {
            Some(queue) => queue,
            None => anyhow::bail!("Mock has no response for `{}`", command),
        };
        let output = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        output.ok_or_else(|| anyhow::anyhow!("Mock response queue for `{}` is empty", command))
    }
}
