use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::formatting::print_two_column;
use crate::config::CONFIG_KEYS;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change display preferences",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => show_config(context),
        [action] if action.eq_ignore_ascii_case("show") => show_config(context),
        [action, key, value @ ..] if action.eq_ignore_ascii_case("set") && !value.is_empty() => {
            set_config_value(context, key, &value.join(" "))
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: config set <{}> <value>",
            CONFIG_KEYS.join("|")
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    print_two_column(&context.config.entries());
    io::print_info(format!("File: {}", context.config_manager.path().display()));
    Ok(())
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let key = key.to_ascii_lowercase();
    context.config.set(&key, value)?;
    context.apply_config();
    context.persist_config()?;
    io::print_success(format!("{key} set to {value}"));
    if key == "id_policy" && context.ledger.id_policy() != context.config.id_policy {
        io::print_hint("The new id policy applies after `reset` or on next start.");
    }
    Ok(())
}
