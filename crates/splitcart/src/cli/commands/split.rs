use splitcart_core::{SplitService, StatsService};

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::formatters::{format_amount, format_balance};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "split",
            "Compute the equal-split settlement for purchased items",
            "split",
            cmd_split,
        ),
        CommandEntry::new(
            "stats",
            "Show list totals and progress",
            "stats",
            cmd_stats,
        ),
    ]
}

fn cmd_split(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let currency = context.config.currency.clone();
    let list = context
        .manager
        .current()
        .ok_or(CommandError::ListNotLoaded)?;

    if list.members.is_empty() {
        output::info("No members in this list; nothing to split.");
        return Ok(());
    }

    let report = SplitService::compute(&list.items, &list.members);

    output::section("Cost Summary");
    output::info(format!(
        "Total purchased   {}",
        format_amount(&currency, report.total_cost)
    ));
    output::info(format!(
        "Per person        {}",
        format_amount(&currency, report.per_person_cost)
    ));

    output::section("Individual Breakdown");
    for breakdown in &report.per_member {
        let name = list
            .member(breakdown.member_id)
            .map(|member| member.name.as_str())
            .unwrap_or("<unknown>");
        output::info(format!(
            "  {}  spent {}  ·  {}",
            name,
            format_amount(&currency, breakdown.spent),
            format_balance(&currency, breakdown.owes)
        ));
    }

    output::separator();

    if report.settlements.is_empty() {
        output::info("Everyone is settled up.");
    } else {
        output::section("Settlements Needed");
        for settlement in &report.settlements {
            let name = list
                .member(settlement.member_id)
                .map(|member| member.name.as_str())
                .unwrap_or("<unknown>");
            output::info(format!(
                "  {}  {}",
                name,
                format_balance(&currency, settlement.owes)
            ));
        }
    }
    Ok(())
}

fn cmd_stats(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let currency = context.config.currency.clone();
    context.manager.with_current(|list| {
        let stats = StatsService::compute(list);
        output::section("List Stats");
        output::info(format!("Members          {}", stats.member_count));
        output::info(format!("Items            {}", stats.item_count));
        output::info(format!("Still to buy     {}", stats.items_left));
        output::info(format!(
            "Estimated total  {}",
            format_amount(&currency, stats.estimated_total)
        ));
        output::info(format!(
            "Purchased total  {}",
            format_amount(&currency, stats.purchased_total)
        ));
    })?;
    Ok(())
}
