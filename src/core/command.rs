use crate::domain::model::{Platform, ResolvedCommand};
use crate::domain::ports::ConfigProvider;

/// Invocation token for the build wrapper on the given platform.
pub fn wrapper_token(platform: Platform, wrapper_name: &str) -> String {
    match platform {
        Platform::Windows => format!("{}.bat", wrapper_name),
        Platform::Unix => format!("./{}", wrapper_name),
    }
}

/// Builds the full invocation from configuration and pass-through arguments.
/// Argument order is preserved exactly as supplied.
pub fn resolve_command<C: ConfigProvider>(platform: Platform, config: &C) -> ResolvedCommand {
    ResolvedCommand {
        program: wrapper_token(platform, config.wrapper_name()),
        args: config.build_args().to_vec(),
        working_dir: config.project_dir().to_path_buf(),
        env: config.env_vars().to_vec(),
    }
}
