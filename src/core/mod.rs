pub mod command;
pub mod executor;
pub mod launcher;

pub use crate::domain::model::{ExitOutcome, Platform, ResolvedCommand};
pub use crate::domain::ports::{ConfigProvider, Executor};
pub use crate::utils::error::Result;
