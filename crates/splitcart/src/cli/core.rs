//! Shell plumbing: command errors, dispatch, and context construction.

use std::env;
use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;
use thiserror::Error;

use splitcart_config::{ConfigError, ConfigManager};
use splitcart_core::CoreError;
use splitcart_storage_json::JsonListStorage;

use crate::cli::commands;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandRegistry;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::core::ListManager;
use crate::errors::AppError;

/// Environment variable overriding the application home directory.
pub const HOME_ENV: &str = "SPLITCART_HOME";

/// Errors surfaced to the user by command handlers.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("no list loaded; use `list new <name>` or `list load <name>` first")]
    ListNotLoaded,
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    App(#[from] AppError),
    /// Not an error in the usual sense; signals an orderly shutdown.
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::App(AppError::from(err))
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::App(AppError::from(err))
    }
}

/// Whether the read loop should keep going after a dispatched line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Maximum edit distance considered close enough for a suggestion.
const SUGGESTION_DISTANCE: usize = 3;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, AppError> {
        let base_dir = resolve_base_dir();
        let config_manager = ConfigManager::with_base_dir(base_dir.clone())?;
        let config = config_manager.load()?;
        io::apply_config(&config);

        let lists_dir = config.resolve_list_root(&base_dir);
        let backups_dir = config.resolve_backup_root(&base_dir);
        let storage = JsonListStorage::new(lists_dir, backups_dir).map_err(AppError::from)?;
        let manager = ListManager::new(Box::new(storage));

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let mut ctx = Self {
            mode,
            registry,
            manager,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            base_dir,
            running: true,
        };

        if mode == CliMode::Interactive {
            ctx.auto_load_last();
        }

        Ok(ctx)
    }

    /// Loads the most recently opened list, if configured. Failures are
    /// reported as warnings rather than aborting startup.
    fn auto_load_last(&mut self) {
        let Some(name) = self.config.last_opened_list.clone() else {
            return;
        };
        match self.manager.load(&name) {
            Ok(report) => {
                io::print_info(format!("Loaded list `{}`.", name));
                for warning in report.warnings {
                    io::print_warning(warning);
                }
            }
            Err(err) => {
                io::print_warning(format!("could not reopen `{}`: {}", name, err));
            }
        }
    }

    /// Shell prompt string, including the loaded list name when present.
    pub fn prompt(&self) -> String {
        match self.manager.current().map(|list| list.name.as_str()) {
            Some(name) => format!("splitcart[{}]> ", name),
            None => "splitcart> ".to_string(),
        }
    }

    /// Looks up and runs the handler for a tokenized input line.
    pub fn dispatch(&mut self, parts: &[&str]) -> LoopControl {
        let Some((command, args)) = parts.split_first() else {
            return LoopControl::Continue;
        };
        let Some(handler) = self.registry.handler(command) else {
            output::error(format!("unknown command `{}`", command));
            if let Some(suggestion) = self.suggest_command(command) {
                io::print_info(format!("did you mean `{}`?", suggestion));
            } else {
                io::print_info("type `help` to list available commands");
            }
            return LoopControl::Continue;
        };
        match handler(self, args) {
            Ok(()) => LoopControl::Continue,
            Err(CommandError::ExitRequested) => LoopControl::Exit,
            Err(err) => {
                self.report_error(command, &err);
                LoopControl::Continue
            }
        }
    }

    fn report_error(&self, command: &str, err: &CommandError) {
        output::error(err);
        if matches!(err, CommandError::InvalidArguments(_)) {
            if let Some(entry) = self.registry.get(command) {
                io::print_info(format!("usage: {}", entry.usage));
            }
        }
    }

    /// Nearest registered command by edit distance, for typo hints.
    pub fn suggest_command(&self, input: &str) -> Option<&'static str> {
        self.registry
            .names()
            .map(|name| (strsim::levenshtein(input, name), name))
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }

    /// Writes the in-memory config back to disk.
    pub fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    /// Records the list that should reopen on the next interactive start.
    pub fn update_last_opened(&mut self, name: Option<String>) {
        if self.config.last_opened_list == name {
            return;
        }
        self.config.last_opened_list = name;
        if let Err(err) = self.persist_config() {
            io::print_warning(format!("could not persist configuration: {}", err));
        }
    }
}

fn resolve_base_dir() -> PathBuf {
    if let Ok(custom) = env::var(HOME_ENV) {
        if !custom.trim().is_empty() {
            return PathBuf::from(custom);
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".splitcart"))
        .unwrap_or_else(|| PathBuf::from(".splitcart"))
}
