use splitcart_domain::CURRENT_SCHEMA_VERSION;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("SplitCart {}", meta.version));
    output::info(format!("CLI version  {}", build_info::CLI_VERSION));
    output::info(format!("Schema       v{}", CURRENT_SCHEMA_VERSION));
    output::info(format!("Build hash   {} ({})", meta.git_hash, meta.git_status));
    output::info(format!("Built at     {}", meta.timestamp));
    output::info(format!("Target       {}", meta.target));
    output::info(format!("Profile      {}", meta.profile));
    output::info(format!("Rustc        {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(raw) = args.first() {
        let lookup = raw.to_lowercase();
        if let Some(entry) = context.registry.get(&lookup) {
            help::print_command(entry);
        } else if let Some(suggestion) = context.suggest_command(raw) {
            output::warning(format!(
                "unknown command `{}`; did you mean `{}`?",
                raw, suggestion
            ));
        } else {
            output::warning(format!("unknown command `{}`", raw));
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
