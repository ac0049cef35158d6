use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "Show income and expense items", "list", cmd_list),
        CommandEntry::new(
            "summary",
            "Show budget, totals, and share of income spent",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new("dump", "Print the ledger state as JSON", "dump", cmd_dump),
        CommandEntry::new("reset", "Remove every item and start over", "reset", cmd_reset),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.render_items();
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.render_summary();
    context.render_percentages();
    Ok(())
}

fn cmd_dump(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(&context.ledger)?);
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.reset_ledger();
    io::print_success(format!(
        "Ledger cleared (id policy: {}).",
        context.ledger.id_policy()
    ));
    context.render_summary();
    Ok(())
}
