use gradle_launch::domain::ports::ConfigProvider;
use gradle_launch::utils::validation::Validate;
use gradle_launch::{CliConfig, LaunchManifest};
use std::path::{Path, PathBuf};

fn cli_with_args(args: &[&str]) -> CliConfig {
    CliConfig {
        project_dir: PathBuf::from("apps/api"),
        wrapper_name: "gradlew".to_string(),
        config: None,
        verbose: false,
        monitor: false,
        build_args: args.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_full_manifest_parses() {
    let manifest = LaunchManifest::from_toml_str(
        r#"
[project]
dir = "apps/api"
description = "Backend API build"

[wrapper]
name = "gradlew"
default_args = ["--console=plain"]

[monitoring]
enabled = true

[environment]
GRADLE_OPTS = "-Xmx512m"
"#,
    )
    .unwrap();

    assert_eq!(manifest.project.dir, PathBuf::from("apps/api"));
    assert_eq!(manifest.wrapper_name(), "gradlew");
    assert!(manifest.monitoring_enabled());
    assert!(manifest.validate().is_ok());
}

#[test]
fn test_minimal_manifest_uses_defaults() {
    let manifest = LaunchManifest::from_toml_str(
        r#"
[project]
dir = "apps/api"
"#,
    )
    .unwrap();

    assert_eq!(manifest.wrapper_name(), "gradlew");
    assert!(!manifest.monitoring_enabled());
}

#[test]
fn test_env_var_substitution() {
    std::env::set_var("GL_TEST_PROJECT_DIR", "services/backend");

    let manifest = LaunchManifest::from_toml_str(
        r#"
[project]
dir = "${GL_TEST_PROJECT_DIR}"
"#,
    )
    .unwrap();

    assert_eq!(manifest.project.dir, PathBuf::from("services/backend"));
}

#[test]
fn test_unresolved_env_var_is_left_as_written() {
    let manifest = LaunchManifest::from_toml_str(
        r#"
[project]
dir = "${GL_TEST_MISSING_VAR}"
"#,
    )
    .unwrap();

    assert_eq!(manifest.project.dir, PathBuf::from("${GL_TEST_MISSING_VAR}"));
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let result = LaunchManifest::from_toml_str("[project\ndir = ");
    assert!(result.is_err());
}

#[test]
fn test_settings_prepend_manifest_default_args() {
    let manifest = LaunchManifest::from_toml_str(
        r#"
[project]
dir = "apps/api"

[wrapper]
default_args = ["--console=plain"]
"#,
    )
    .unwrap();

    let settings = manifest.into_settings(&cli_with_args(&["build", "-x", "test"]));

    assert_eq!(
        settings.build_args(),
        &["--console=plain", "build", "-x", "test"]
    );
    assert_eq!(settings.project_dir(), Path::new("apps/api"));
}

#[test]
fn test_cli_monitor_flag_overrides_manifest() {
    let manifest = LaunchManifest::from_toml_str(
        r#"
[project]
dir = "apps/api"
"#,
    )
    .unwrap();

    let cli = CliConfig {
        monitor: true,
        ..cli_with_args(&[])
    };
    let settings = manifest.into_settings(&cli);

    assert!(settings.monitor());
}

#[test]
fn test_manifest_with_bad_wrapper_name_fails_validation() {
    let manifest = LaunchManifest::from_toml_str(
        r#"
[project]
dir = "apps/api"

[wrapper]
name = "bin/gradlew"
"#,
    )
    .unwrap();

    assert!(manifest.validate().is_err());
}
