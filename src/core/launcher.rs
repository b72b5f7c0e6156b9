use crate::core::command::resolve_command;
use crate::domain::model::Platform;
use crate::domain::ports::{ConfigProvider, Executor};
use crate::utils::error::{LaunchError, Result};
use std::path::Path;

/// Single-shot build launcher: permission step, command resolution, echo,
/// execution. No retries; failure is terminal for the invocation.
pub struct Launcher<E: Executor> {
    executor: E,
    platform: Platform,
}

impl<E: Executor> Launcher<E> {
    pub fn new(executor: E) -> Self {
        Self::with_platform(executor, Platform::current())
    }

    pub fn with_platform(executor: E, platform: Platform) -> Self {
        Self { executor, platform }
    }

    pub async fn run<C: ConfigProvider>(&self, config: &C) -> Result<()> {
        // The wrapper must be executable before the command is even built;
        // a failed permission step means the build is never attempted.
        if self.platform != Platform::Windows {
            let wrapper = config.project_dir().join(config.wrapper_name());
            ensure_executable(&wrapper)?;
        }

        let command = resolve_command(self.platform, config);
        tracing::debug!("Resolved build command: {:?}", command);
        println!(
            "Running command: {} in {}",
            command.command_line(),
            command.working_dir.display()
        );

        let outcome = self
            .executor
            .execute(&command)
            .await
            .map_err(|e| match e {
                LaunchError::IoError(err) => LaunchError::BuildExecutionError {
                    message: format!("Failed to spawn '{}': {}", command.command_line(), err),
                },
                other => other,
            })?;

        if !outcome.success() {
            let message = match outcome.code {
                Some(code) => {
                    format!("'{}' exited with status {}", command.command_line(), code)
                }
                None => format!("'{}' was terminated by a signal", command.command_line()),
            };
            return Err(LaunchError::BuildExecutionError { message });
        }

        Ok(())
    }
}

#[cfg(unix)]
fn ensure_executable(wrapper: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(wrapper).map_err(|e| permission_error(wrapper, e))?;
    let mut permissions = metadata.permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    std::fs::set_permissions(wrapper, permissions).map_err(|e| permission_error(wrapper, e))
}

#[cfg(not(unix))]
fn ensure_executable(_wrapper: &Path) -> Result<()> {
    Ok(())
}

#[cfg(unix)]
fn permission_error(path: &Path, source: std::io::Error) -> LaunchError {
    LaunchError::PermissionError {
        path: path.display().to_string(),
        source,
    }
}
