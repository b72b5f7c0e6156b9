pub mod manifest;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "gradle-launch")]
#[command(about = "Cross-platform launcher for a project's Gradle wrapper")]
pub struct CliConfig {
    /// Directory containing the build wrapper; the build runs here.
    #[arg(long, default_value = "apps/api")]
    pub project_dir: PathBuf,

    /// File name of the checked-in build wrapper.
    #[arg(long, default_value = "gradlew")]
    pub wrapper_name: String,

    /// Load launch settings from a TOML manifest instead of flags.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Report build resource usage when the build finishes")]
    pub monitor: bool,

    /// Arguments forwarded verbatim, in order, to the build wrapper.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub build_args: Vec<String>,
}

impl ConfigProvider for CliConfig {
    fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    fn wrapper_name(&self) -> &str {
        &self.wrapper_name
    }

    fn build_args(&self) -> &[String] {
        &self.build_args
    }

    fn monitor(&self) -> bool {
        self.monitor
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("project_dir", &self.project_dir.to_string_lossy())?;
        validation::validate_wrapper_name("wrapper_name", &self.wrapper_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            project_dir: PathBuf::from("apps/api"),
            wrapper_name: "gradlew".to_string(),
            config: None,
            verbose: false,
            monitor: false,
            build_args: vec![],
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_wrapper_name_with_separator_is_rejected() {
        let config = CliConfig {
            wrapper_name: "bin/gradlew".to_string(),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_trailing_arguments_pass_through_in_order() {
        let config =
            CliConfig::try_parse_from(["gradle-launch", "build", "-x", "test"]).unwrap();
        assert_eq!(config.build_args, vec!["build", "-x", "test"]);
    }

    #[test]
    fn test_flags_before_build_arguments() {
        let config = CliConfig::try_parse_from([
            "gradle-launch",
            "--project-dir",
            "services/backend",
            "--monitor",
            "clean",
            "build",
        ])
        .unwrap();

        assert_eq!(config.project_dir, PathBuf::from("services/backend"));
        assert!(config.monitor);
        assert_eq!(config.build_args, vec!["clean", "build"]);
    }
}
