pub mod config;
pub mod item;
pub mod system;
pub mod view;

use crate::cli::registry::CommandRegistry;

/// Every shell command, in menu order.
pub(crate) fn registry() -> CommandRegistry {
    CommandRegistry::from_entries(
        item::definitions()
            .into_iter()
            .chain(view::definitions())
            .chain(config::definitions())
            .chain(system::definitions()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_registers_every_command_in_menu_order() {
        let names: Vec<_> = registry().names().collect();
        assert_eq!(
            names,
            vec![
                "add", "delete", "list", "summary", "dump", "reset", "config", "help", "version",
                "exit"
            ]
        );
    }
}
