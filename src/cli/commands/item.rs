use tracing::debug;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::input::{parse_handle, InputError, ItemInput};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::ledger::Variant;

const ADD_USAGE: &str = "add <inc|exp> <description> <value>";
const DELETE_USAGE: &str = "delete <inc|exp>-<id>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Add an income or expense item (prompts when run without arguments)",
            ADD_USAGE,
            cmd_add,
        ),
        CommandEntry::new("delete", "Delete an item by reference", DELETE_USAGE, cmd_delete),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (variant, description, value) = match args {
        [] if context.can_prompt() => prompt_item_fields(context)?,
        [variant, description @ .., value] => {
            (variant.to_string(), description.join(" "), value.to_string())
        }
        _ => return Err(CommandError::InvalidArguments(format!("usage: {ADD_USAGE}"))),
    };

    match ItemInput::parse(&variant, &description, &value) {
        Ok(input) => context.add_item(input),
        Err(InputError::UnknownVariant(err)) => {
            return Err(CommandError::InvalidArguments(err.to_string()))
        }
        // Bad descriptions or amounts are dropped without feedback.
        Err(err) => debug!(%err, "ignoring invalid item input"),
    }
    Ok(())
}

fn prompt_item_fields(context: &ShellContext) -> Result<(String, String, String), CommandError> {
    let choices = ["inc  (+) income", "exp  (-) expense"];
    let index = io::prompt_choice(&context.theme, "Type", &choices)?;
    let variant = Variant::ALL
        .get(index)
        .copied()
        .unwrap_or(Variant::Income);
    let description = io::prompt_text(&context.theme, "Description")?;
    let value = io::prompt_text(&context.theme, "Value")?;
    Ok((variant.tag().to_string(), description, value))
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(format!(
            "usage: {DELETE_USAGE}"
        )));
    }
    let (variant, id) =
        parse_handle(args).map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
    context.delete_item(variant, id);
    Ok(())
}
