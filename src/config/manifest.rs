use crate::config::CliConfig;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{LaunchError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const DEFAULT_WRAPPER_NAME: &str = "gradlew";

/// TOML launch manifest: the checked-in, shareable counterpart of the CLI
/// flags. `${VAR}` references are substituted from the environment at load
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchManifest {
    pub project: ProjectConfig,
    pub wrapper: Option<WrapperConfig>,
    pub monitoring: Option<MonitoringConfig>,
    pub environment: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub dir: PathBuf,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrapperConfig {
    pub name: Option<String>,
    /// Arguments prepended before the caller's arguments on every launch.
    pub default_args: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl LaunchManifest {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LaunchError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LaunchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn wrapper_name(&self) -> &str {
        self.wrapper
            .as_ref()
            .and_then(|w| w.name.as_deref())
            .unwrap_or(DEFAULT_WRAPPER_NAME)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    /// Merges the manifest with CLI overrides into one resolved settings
    /// value. Manifest default arguments come first, then the caller's
    /// pass-through arguments in their original order.
    pub fn into_settings(self, cli: &CliConfig) -> LaunchSettings {
        let mut build_args = self
            .wrapper
            .as_ref()
            .and_then(|w| w.default_args.clone())
            .unwrap_or_default();
        build_args.extend(cli.build_args.iter().cloned());

        let mut env: Vec<(String, String)> = self
            .environment
            .clone()
            .unwrap_or_default()
            .into_iter()
            .collect();
        env.sort();

        LaunchSettings {
            monitor: cli.monitor || self.monitoring_enabled(),
            wrapper_name: self.wrapper_name().to_string(),
            project_dir: self.project.dir,
            build_args,
            env,
        }
    }
}

impl Validate for LaunchManifest {
    fn validate(&self) -> Result<()> {
        validation::validate_path("project.dir", &self.project.dir.to_string_lossy())?;
        validation::validate_wrapper_name("wrapper.name", self.wrapper_name())?;
        Ok(())
    }
}

/// Replaces `${VAR_NAME}` references with values from the process
/// environment. Unresolved references are left as written.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;

    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

/// Launch settings after merging a manifest with CLI overrides.
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    project_dir: PathBuf,
    wrapper_name: String,
    build_args: Vec<String>,
    env: Vec<(String, String)>,
    monitor: bool,
}

impl ConfigProvider for LaunchSettings {
    fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    fn wrapper_name(&self) -> &str {
        &self.wrapper_name
    }

    fn build_args(&self) -> &[String] {
        &self.build_args
    }

    fn env_vars(&self) -> &[(String, String)] {
        &self.env
    }

    fn monitor(&self) -> bool {
        self.monitor
    }
}
