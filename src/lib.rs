pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::manifest::{LaunchManifest, LaunchSettings};
pub use config::CliConfig;
pub use core::executor::ShellExecutor;
pub use core::launcher::Launcher;
pub use domain::model::{ExitOutcome, Platform, ResolvedCommand};
pub use utils::error::{LaunchError, Result};
