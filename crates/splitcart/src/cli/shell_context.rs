use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;

use splitcart_config::{Config, ConfigManager};

use crate::cli::registry::CommandRegistry;
use crate::core::ListManager;

/// How the shell consumes its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliMode {
    /// rustyline-powered prompt with history and completion.
    Interactive,
    /// Line-at-a-time stdin consumption, used by scripted runs and tests.
    Script,
}

/// Mutable state threaded through every command handler.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub manager: ListManager,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub base_dir: PathBuf,
    pub running: bool,
}
