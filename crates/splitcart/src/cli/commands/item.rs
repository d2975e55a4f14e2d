use splitcart_core::ItemService;
use splitcart_domain::{is_known_category, ShoppingItem, DEFAULT_CATEGORY};

use crate::cli::commands::{parse_amount, resolve_item_id, resolve_member_id};
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::formatters::format_amount;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "item",
        "Manage shopping items and their purchase state",
        "item <add|list|remove|purchase|unpurchase|price|estimate> [args]",
        cmd_item,
    )]
}

fn cmd_item(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((subcommand, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments("missing subcommand".into()));
    };

    match *subcommand {
        "add" => cmd_add(context, rest),
        "list" => cmd_list(context),
        "remove" => cmd_remove(context, rest),
        "purchase" => cmd_purchase(context, rest),
        "unpurchase" => cmd_unpurchase(context, rest),
        "price" => cmd_price(context, rest),
        "estimate" => cmd_estimate(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown subcommand `{}`",
            other
        ))),
    }
}

/// `item add <name> <added-by> [estimate] [qty] [category]`
fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (Some(name), Some(member_token)) = (args.first(), args.get(1)) else {
        return Err(CommandError::InvalidArguments(
            "usage: item add <name> <added-by> [estimate] [qty] [category]".into(),
        ));
    };
    let estimate = match args.get(2) {
        Some(token) => parse_amount(token)?,
        None => 0.0,
    };
    let quantity: u32 = match args.get(3) {
        Some(token) => token.parse().map_err(|_| {
            CommandError::InvalidArguments(format!("`{}` is not a quantity", token))
        })?,
        None => 1,
    };
    let category = args
        .get(4)
        .map(|token| token.to_string())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    if !is_known_category(&category) {
        io::print_warning(format!("`{}` is not a recognized category", category));
    }

    let added_by = context
        .manager
        .current()
        .ok_or(CommandError::ListNotLoaded)
        .and_then(|list| resolve_member_id(list, member_token))?;

    let item = ShoppingItem::new(*name, quantity, estimate, category, added_by);
    let label = item.name.clone();
    context
        .manager
        .with_current_mut(|list| ItemService::add(list, item).map(|_| ()))?;
    output::success(format!("Added item `{}`.", label));
    Ok(())
}

fn cmd_list(context: &mut ShellContext) -> CommandResult {
    let currency = context.config.currency.clone();
    context.manager.with_current(|list| {
        if list.items.is_empty() {
            output::info("No items yet. Use `item add <name> <added-by>`.");
            return;
        }
        output::section("Items");
        for (idx, item) in list.items.iter().enumerate() {
            let state = if item.purchased { "bought" } else { "to buy" };
            let buyer = item
                .purchased_by
                .and_then(|id| list.member(id))
                .map(|member| format!(" by {}", member.name))
                .unwrap_or_default();
            output::info(format!(
                "  {:>2}. {} (x{}) [{}] {} {}{}",
                idx + 1,
                item.name,
                item.quantity,
                item.category,
                format_amount(&currency, item.effective_price()),
                state,
                buyer
            ));
        }
    })?;
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(token) = args.first() else {
        return Err(CommandError::InvalidArguments("usage: item remove <number>".into()));
    };
    let item_id = context
        .manager
        .current()
        .ok_or(CommandError::ListNotLoaded)
        .and_then(|list| resolve_item_id(list, token))?;
    let removed = context
        .manager
        .with_current_mut(|list| ItemService::remove(list, item_id))?;
    output::success(format!("Removed item `{}`.", removed.name));
    Ok(())
}

/// `item purchase <number> [price] [buyer]` — price and buyer fall back to
/// the item's effective price and its original adder.
fn cmd_purchase(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(token) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "usage: item purchase <number> [price] [buyer]".into(),
        ));
    };
    let price = match args.get(1) {
        Some(value) => Some(parse_amount(value)?),
        None => None,
    };

    let (item_id, purchaser) = {
        let list = context.manager.current().ok_or(CommandError::ListNotLoaded)?;
        let item_id = resolve_item_id(list, token)?;
        let purchaser = match args.get(2) {
            Some(member_token) => Some(resolve_member_id(list, member_token)?),
            None => None,
        };
        (item_id, purchaser)
    };

    context
        .manager
        .with_current_mut(|list| ItemService::mark_purchased(list, item_id, price, purchaser))?;
    output::success("Marked purchased.");
    Ok(())
}

fn cmd_unpurchase(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(token) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "usage: item unpurchase <number>".into(),
        ));
    };
    let item_id = context
        .manager
        .current()
        .ok_or(CommandError::ListNotLoaded)
        .and_then(|list| resolve_item_id(list, token))?;
    context
        .manager
        .with_current_mut(|list| ItemService::mark_unpurchased(list, item_id))?;
    output::success("Purchase reverted.");
    Ok(())
}

/// Re-records the paid price of a purchased item.
fn cmd_price(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (Some(token), Some(amount_token)) = (args.first(), args.get(1)) else {
        return Err(CommandError::InvalidArguments(
            "usage: item price <number> <amount>".into(),
        ));
    };
    let amount = parse_amount(amount_token)?;
    let item_id = context
        .manager
        .current()
        .ok_or(CommandError::ListNotLoaded)
        .and_then(|list| resolve_item_id(list, token))?;
    context
        .manager
        .with_current_mut(|list| ItemService::set_actual_price(list, item_id, amount))?;
    output::success("Price updated.");
    Ok(())
}

/// Updates the planning estimate; allowed in any purchase state.
fn cmd_estimate(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (Some(token), Some(amount_token)) = (args.first(), args.get(1)) else {
        return Err(CommandError::InvalidArguments(
            "usage: item estimate <number> <amount>".into(),
        ));
    };
    let amount = parse_amount(amount_token)?;
    let item_id = context
        .manager
        .current()
        .ok_or(CommandError::ListNotLoaded)
        .and_then(|list| resolve_item_id(list, token))?;
    context
        .manager
        .with_current_mut(|list| ItemService::set_estimated_price(list, item_id, amount))?;
    output::success("Estimate updated.");
    Ok(())
}
