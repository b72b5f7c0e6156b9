use crate::domain::model::{ExitOutcome, ResolvedCommand};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Configuration surface the launcher core reads, regardless of whether the
/// values came from CLI flags or a TOML manifest.
pub trait ConfigProvider: Send + Sync {
    fn project_dir(&self) -> &Path;
    fn wrapper_name(&self) -> &str;
    fn build_args(&self) -> &[String];

    fn env_vars(&self) -> &[(String, String)] {
        &[]
    }

    fn monitor(&self) -> bool {
        false
    }
}

/// Executes a resolved command to completion, inheriting standard streams.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, command: &ResolvedCommand) -> Result<ExitOutcome>;
}
