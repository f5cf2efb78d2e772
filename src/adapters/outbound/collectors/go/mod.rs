mod go_mod;
mod tool_output;

use crate::dependency_resolution::domain::{Ecosystem, NodeMetadata, NodeRecord};
use crate::ports::outbound::{
    CollectedDependencies, CommandRunner, DependencyCollector, ManifestReader,
};
use crate::shared::error::DeplisterError;
use crate::shared::Result;
use go_mod::{parse_go_mod, GO_MOD};
use std::path::Path;
use std::thread;
use std::time::Duration;
use tool_output::{parse_module_graph, parse_module_list};

const GO_PROGRAM: &str = "go";
const LIST_ARGS: [&str; 4] = ["list", "-m", "-json", "all"];
const GRAPH_ARGS: [&str; 2] = ["mod", "graph"];

/// Base delay between attempts; attempt `n` waits `n` times this long
const RETRY_DELAY_MS: u64 = 200;

/// GoCollector adapter combining go.mod with the Go toolchain's module graph
///
/// go.mod supplies the root module path and the declared requirements.
/// `go list -m -json all` supplies node metadata and `go mod graph` the edges.
pub struct GoCollector<R, C> {
    reader: R,
    runner: C,
    max_attempts: u32,
    retry_delay: Duration,
}

impl<R, C> GoCollector<R, C>
where
    R: ManifestReader,
    C: CommandRunner,
{
    /// `max_attempts` of 0 is treated as 1
    pub fn new(reader: R, runner: C, max_attempts: u32) -> Self {
        Self {
            reader,
            runner,
            max_attempts: max_attempts.max(1),
            retry_delay: Duration::from_millis(RETRY_DELAY_MS),
        }
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Runs a go subcommand, retrying failed runs with a linear backoff
    ///
    /// A process that cannot be spawned at all is not retried.
    fn run_go(&self, args: &[&str], project_path: &Path) -> Result<String> {
        let mut last_details = String::new();

        for attempt in 1..=self.max_attempts {
            let output = self.runner.run(GO_PROGRAM, args, project_path)?;
            if output.success {
                return Ok(output.stdout);
            }
            last_details = output.stderr.trim().to_string();

            if attempt < self.max_attempts {
                thread::sleep(self.retry_delay * attempt);
            }
        }

        Err(DeplisterError::ScanFailed {
            command: format!("{} {}", GO_PROGRAM, args.join(" ")),
            details: format!(
                "failed after {} attempt(s): {}",
                self.max_attempts, last_details
            ),
        }
        .into())
    }
}

impl<R, C> DependencyCollector for GoCollector<R, C>
where
    R: ManifestReader,
    C: CommandRunner,
{
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Go
    }

    fn detect(&self, project_path: &Path) -> bool {
        self.reader.manifest_exists(project_path, GO_MOD)
    }

    fn collect(&self, project_path: &Path) -> Result<CollectedDependencies> {
        let go_mod = parse_go_mod(&self.reader.read_manifest(project_path, GO_MOD)?)?;
        let mut collected = CollectedDependencies::new(Ecosystem::Go, go_mod.module.clone());
        collected.declared_direct = go_mod
            .direct_requirements()
            .map(|req| req.path.clone())
            .collect();

        let modules = parse_module_list(&self.run_go(&LIST_ARGS, project_path)?)?;
        collected.nodes = modules
            .iter()
            .filter(|module| !module.main)
            .map(|module| {
                let record = NodeRecord::new(
                    module.version.clone().unwrap_or_default(),
                    NodeMetadata::Go(module.metadata()),
                );
                (module.path.clone(), record)
            })
            .collect();

        let edges = parse_module_graph(&self.run_go(&GRAPH_ARGS, project_path)?, &go_mod.module)?;
        collected.edges = edges.into_iter().collect();

        Ok(collected)
    }
}
