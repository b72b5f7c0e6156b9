use std::time::{Duration, Instant};
use sysinfo::{Pid, System};

#[derive(Debug, Clone)]
pub struct BuildStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub elapsed_time: Duration,
}

/// Samples the build child process while it runs. With no pid (the child
/// already exited before the first sample) only elapsed time is reported.
pub struct BuildMonitor {
    system: System,
    pid: Option<Pid>,
    start_time: Instant,
    peak_memory: u64,
    last_memory: u64,
    last_cpu: f32,
}

impl BuildMonitor {
    pub fn new(child_pid: Option<u32>) -> Self {
        Self {
            system: System::new(),
            pid: child_pid.map(Pid::from_u32),
            start_time: Instant::now(),
            peak_memory: 0,
            last_memory: 0,
            last_cpu: 0.0,
        }
    }

    pub fn sample(&mut self) {
        let Some(pid) = self.pid else {
            return;
        };

        self.system.refresh_all();

        if let Some(process) = self.system.process(pid) {
            let memory_mb = process.memory() / 1024 / 1024;
            if memory_mb > self.peak_memory {
                self.peak_memory = memory_mb;
            }
            self.last_memory = memory_mb;
            self.last_cpu = process.cpu_usage();
        }
    }

    pub fn stats(&self) -> BuildStats {
        BuildStats {
            cpu_usage: self.last_cpu,
            memory_usage_mb: self.last_memory,
            peak_memory_mb: self.peak_memory,
            elapsed_time: self.start_time.elapsed(),
        }
    }
}
