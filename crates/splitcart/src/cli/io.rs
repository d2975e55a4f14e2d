use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use splitcart_config::Config;

use crate::cli::core::CommandError;
use crate::cli::output;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Propagates accessibility and color preferences into the output layer.
pub fn apply_config(config: &Config) {
    output::set_preferences(output::OutputPreferences {
        plain_mode: config.accessibility.plain_output,
        high_contrast_mode: config.accessibility.high_contrast,
    });
    if !config.ui_color_enabled {
        colored::control::set_override(false);
    }
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Prompt the user for free-form text input. With `allow_empty` the answer
/// may be blank, for optional fields.
pub fn prompt_text(
    theme: &ColorfulTheme,
    prompt: &str,
    allow_empty: bool,
) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(CommandError::from)
}

/// Prompt the user to pick one of `options`; returns the selected index.
pub fn prompt_select(
    theme: &ColorfulTheme,
    prompt: &str,
    options: &[String],
) -> Result<usize, CommandError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact()
        .map_err(CommandError::from)
}
