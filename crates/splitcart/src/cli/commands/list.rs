use splitcart_core::StatsService;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::formatters::format_amount;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CliMode, ShellContext};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "list",
        "Create, open, save and inspect shopping lists",
        "list <new|load|save|save-as|show|all|delete|backup|backups|restore> [args]",
        cmd_list,
    )]
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((subcommand, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "missing subcommand".into(),
        ));
    };

    match *subcommand {
        "new" => cmd_new(context, rest),
        "load" => cmd_load(context, rest),
        "save" => cmd_save(context, rest),
        "save-as" => cmd_save_as(context, rest),
        "show" => cmd_show(context),
        "all" => cmd_all(context),
        "delete" => cmd_delete(context, rest),
        "backup" => cmd_backup(context, rest),
        "backups" => cmd_backups(context),
        "restore" => cmd_restore(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown subcommand `{}`",
            other
        ))),
    }
}

fn cmd_new(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = args.join(" ");
    if name.trim().is_empty() {
        return Err(CommandError::InvalidArguments("usage: list new <name>".into()));
    }
    let list = context.manager.create(name.trim());
    output::success(format!(
        "Created list `{}`. Use `list save <name>` to persist it.",
        list.name
    ));
    Ok(())
}

fn cmd_load(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(name) = args.first() else {
        return Err(CommandError::InvalidArguments("usage: list load <name>".into()));
    };
    let report = context.manager.load(name)?;
    output::success(format!("Loaded list `{}`.", name));
    for warning in report.warnings {
        io::print_warning(warning);
    }
    context.update_last_opened(Some(name.to_string()));
    Ok(())
}

fn cmd_save(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        Some(name) => {
            context.manager.save_as(name)?;
            output::success(format!("Saved list as `{}`.", name));
            context.update_last_opened(Some(name.to_string()));
        }
        None => {
            context.manager.save()?;
            output::success("Saved list.");
        }
    }
    Ok(())
}

fn cmd_save_as(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(name) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "usage: list save-as <name>".into(),
        ));
    };
    cmd_save(context, &[*name])
}

fn cmd_show(context: &mut ShellContext) -> CommandResult {
    let currency = context.config.currency.clone();
    context.manager.with_current(|list| {
        let stats = StatsService::compute(list);
        output::section(&list.name);
        output::info(format!("Members        {}", stats.member_count));
        output::info(format!("Items          {}", stats.item_count));
        output::info(format!("Still to buy   {}", stats.items_left));
        output::info(format!(
            "Estimated      {}",
            format_amount(&currency, stats.estimated_total)
        ));
        output::info(format!(
            "Purchased      {}",
            format_amount(&currency, stats.purchased_total)
        ));
        output::info(format!("Updated        {}", list.updated_at.to_rfc3339()));
    })?;
    Ok(())
}

fn cmd_all(context: &mut ShellContext) -> CommandResult {
    let names = context.manager.storage().list_lists()?;
    if names.is_empty() {
        output::info("No saved lists yet.");
        return Ok(());
    }
    output::section("Saved lists");
    for name in names {
        output::info(format!("  {}", name));
    }
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(name) = args.first() else {
        return Err(CommandError::InvalidArguments("usage: list delete <name>".into()));
    };
    if context.mode == CliMode::Interactive {
        let prompt = format!("Delete list `{}`? This cannot be undone.", name);
        if !io::confirm_action(&context.theme, &prompt, false)? {
            output::info("Aborted.");
            return Ok(());
        }
    }
    context.manager.delete(name)?;
    if context.config.last_opened_list.as_deref() == Some(*name) {
        context.update_last_opened(None);
    }
    output::success(format!("Deleted list `{}`.", name));
    Ok(())
}

fn cmd_backup(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = context
        .manager
        .current_name()
        .map(str::to_string)
        .ok_or(CommandError::ListNotLoaded)?;
    let note = if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    };
    let info = context.manager.with_current(|list| list.clone())?;
    let backup = context
        .manager
        .storage()
        .backup_list(&name, &info, note.as_deref())?;
    output::success(format!("Backup written: {}", backup.id));
    Ok(())
}

fn cmd_backups(context: &mut ShellContext) -> CommandResult {
    let name = context
        .manager
        .current_name()
        .map(str::to_string)
        .ok_or(CommandError::ListNotLoaded)?;
    let backups = context.manager.storage().list_backups(&name)?;
    if backups.is_empty() {
        output::info("No backups yet.");
        return Ok(());
    }
    output::section(format!("Backups for `{}`", name));
    for backup in backups {
        output::info(format!("  {}  ({})", backup.id, backup.created_at));
    }
    Ok(())
}

fn cmd_restore(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(backup_id) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "usage: list restore <backup-id>".into(),
        ));
    };
    let name = context
        .manager
        .current_name()
        .map(str::to_string)
        .ok_or(CommandError::ListNotLoaded)?;
    let backups = context.manager.storage().list_backups(&name)?;
    let info = backups
        .into_iter()
        .find(|backup| backup.id == *backup_id)
        .ok_or_else(|| CommandError::Message(format!("backup `{}` not found", backup_id)))?;
    context.manager.storage().restore_backup(&info)?;
    let report = context.manager.load(&name)?;
    for warning in report.warnings {
        io::print_warning(warning);
    }
    output::success(format!("Restored `{}` from {}.", name, info.id));
    Ok(())
}
