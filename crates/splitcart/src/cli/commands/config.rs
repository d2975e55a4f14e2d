use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Inspect and change CLI preferences",
        "config <show|set|path|backup|backups|restore> [args]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((subcommand, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments("missing subcommand".into()));
    };

    match *subcommand {
        "show" => cmd_show(context),
        "set" => cmd_set(context, rest),
        "path" => cmd_path(context),
        "backup" => cmd_backup(context, rest),
        "backups" => cmd_backups(context),
        "restore" => cmd_restore(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown subcommand `{}`",
            other
        ))),
    }
}

fn cmd_show(context: &mut ShellContext) -> CommandResult {
    let config = &context.config;
    output::section("Configuration");
    output::info(format!("locale         {}", config.locale));
    output::info(format!("currency       {}", config.currency));
    output::info(format!("color          {}", config.ui_color_enabled));
    output::info(format!(
        "plain-output   {}",
        config.accessibility.plain_output
    ));
    output::info(format!(
        "high-contrast  {}",
        config.accessibility.high_contrast
    ));
    if let Some(last) = &config.last_opened_list {
        output::info(format!("last list      {}", last));
    }
    Ok(())
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (Some(key), Some(value)) = (args.first(), args.get(1)) else {
        return Err(CommandError::InvalidArguments(
            "usage: config set <key> <value>".into(),
        ));
    };

    match *key {
        "currency" => context.config.currency = value.to_uppercase(),
        "locale" => context.config.locale = value.to_string(),
        "color" => context.config.ui_color_enabled = parse_bool(value)?,
        "plain-output" => context.config.accessibility.plain_output = parse_bool(value)?,
        "high-contrast" => context.config.accessibility.high_contrast = parse_bool(value)?,
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown key `{}`; known keys: currency, locale, color, plain-output, high-contrast",
                other
            )))
        }
    }

    io::apply_config(&context.config);
    context.persist_config()?;
    output::success(format!("Set {} = {}.", key, value));
    Ok(())
}

fn cmd_path(context: &mut ShellContext) -> CommandResult {
    output::info(format!(
        "config  {}",
        context.config_manager.config_path().display()
    ));
    output::info(format!("home    {}", context.base_dir.display()));
    Ok(())
}

fn cmd_backup(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let note = if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    };
    let name = context
        .config_manager
        .backup(&context.config, note.as_deref())?;
    output::success(format!("Configuration backup written: {}", name));
    Ok(())
}

fn cmd_backups(context: &mut ShellContext) -> CommandResult {
    let backups = context.config_manager.list_backups()?;
    if backups.is_empty() {
        output::info("No configuration backups yet.");
        return Ok(());
    }
    output::section("Configuration backups");
    for name in backups {
        output::info(format!("  {}", name));
    }
    Ok(())
}

fn cmd_restore(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(name) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "usage: config restore <backup-name>".into(),
        ));
    };
    let restored = context.config_manager.restore(name)?;
    context.config = restored;
    io::apply_config(&context.config);
    context.persist_config()?;
    output::success(format!("Configuration restored from {}.", name));
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(CommandError::InvalidArguments(format!(
            "`{}` is not a boolean",
            other
        ))),
    }
}
