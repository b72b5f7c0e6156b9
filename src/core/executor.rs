use crate::domain::model::{ExitOutcome, ResolvedCommand};
use crate::domain::ports::Executor;
use crate::utils::error::Result;
use crate::utils::monitor::BuildMonitor;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

const MONITOR_SAMPLE_INTERVAL: Duration = Duration::from_millis(500);

/// Runs the resolved command as a child process with inherited standard
/// streams, blocking until it exits. Optionally samples the child's resource
/// usage while it runs.
#[derive(Debug, Default)]
pub struct ShellExecutor {
    monitor: bool,
}

impl ShellExecutor {
    pub fn new(monitor: bool) -> Self {
        Self { monitor }
    }
}

#[async_trait]
impl Executor for ShellExecutor {
    async fn execute(&self, command: &ResolvedCommand) -> Result<ExitOutcome> {
        // Canonicalize so a relative project directory keeps pointing at the
        // wrapper after the child's chdir; relative program resolution
        // against current_dir is platform specific.
        let working_dir = command.working_dir.canonicalize()?;
        let program = working_dir.join(command.program.trim_start_matches("./"));

        let mut child = Command::new(program)
            .args(&command.args)
            .current_dir(&working_dir)
            .envs(command.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?;

        let mut monitor = self.monitor.then(|| BuildMonitor::new(child.id()));
        let mut interval = tokio::time::interval(MONITOR_SAMPLE_INTERVAL);

        let status = loop {
            tokio::select! {
                status = child.wait() => break status?,
                _ = interval.tick() => {
                    if let Some(monitor) = monitor.as_mut() {
                        monitor.sample();
                    }
                }
            }
        };

        if let Some(monitor) = &monitor {
            let stats = monitor.stats();
            tracing::info!(
                "Build finished in {:.1}s (peak memory {} MB, cpu {:.1}%)",
                stats.elapsed_time.as_secs_f64(),
                stats.peak_memory_mb,
                stats.cpu_usage
            );
        }

        Ok(ExitOutcome {
            code: status.code(),
        })
    }
}
