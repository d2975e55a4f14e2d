use splitcart_core::MemberService;
use splitcart_domain::{default_member_color, Member, MEMBER_COLORS};

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CliMode, ShellContext};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "member",
        "Manage household members",
        "member <add|list> [args]",
        cmd_member,
    )]
}

fn cmd_member(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((subcommand, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments("missing subcommand".into()));
    };

    match *subcommand {
        "add" => cmd_add(context, rest),
        "list" => cmd_list(context),
        "remove" => {
            io::print_warning(
                "member removal is not supported; purchase history stays attributed to its buyer",
            );
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown subcommand `{}`",
            other
        ))),
    }
}

/// `member add [name] [color] [avatar]`; with no arguments the interactive
/// shell walks through the fields instead.
fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() && context.mode == CliMode::Interactive {
        return add_interactive(context);
    }
    let Some(name) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "usage: member add <name> [color] [avatar]".into(),
        ));
    };
    let color = args.get(1).map(|token| token.to_string());
    let avatar = args.get(2).map(|token| token.to_string());
    add_member(context, name.to_string(), color, avatar)
}

fn add_interactive(context: &mut ShellContext) -> CommandResult {
    // Fail before prompting when no list is loaded.
    if context.manager.current().is_none() {
        return Err(CommandError::ListNotLoaded);
    }

    let name = io::prompt_text(&context.theme, "Member name", false)?;
    let palette: Vec<String> = MEMBER_COLORS.iter().map(|color| color.to_string()).collect();
    let choice = io::prompt_select(&context.theme, "Display color", &palette)?;
    let avatar = io::prompt_text(&context.theme, "Avatar (optional)", true)?;
    let avatar = if avatar.trim().is_empty() {
        None
    } else {
        Some(avatar.trim().to_string())
    };

    add_member(context, name, Some(palette[choice].clone()), avatar)
}

fn add_member(
    context: &mut ShellContext,
    name: String,
    color: Option<String>,
    avatar: Option<String>,
) -> CommandResult {
    let member_count = context
        .manager
        .current()
        .map(|list| list.member_count())
        .ok_or(CommandError::ListNotLoaded)?;
    let color = color.unwrap_or_else(|| default_member_color(member_count).to_string());

    let mut member = Member::new(name, color.clone());
    if let Some(avatar) = avatar {
        member = member.with_avatar(avatar);
    }
    let added_name = member.name.clone();
    context
        .manager
        .with_current_mut(|list| MemberService::add(list, member).map(|_| ()))?;
    output::success(format!("Added member `{}` ({}).", added_name, color));
    Ok(())
}

fn cmd_list(context: &mut ShellContext) -> CommandResult {
    context.manager.with_current(|list| {
        if list.members.is_empty() {
            output::info("No members yet. Use `member add <name>`.");
            return;
        }
        output::section("Members");
        for (idx, member) in list.members.iter().enumerate() {
            let avatar = member
                .avatar
                .as_deref()
                .map(|value| format!("  avatar: {}", value))
                .unwrap_or_default();
            output::info(format!(
                "  {:>2}. {}  [{}]{}",
                idx + 1,
                member.name,
                member.color,
                avatar
            ));
        }
    })?;
    Ok(())
}
