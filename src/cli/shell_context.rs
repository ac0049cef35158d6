use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    ledger::Ledger,
};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler can touch. The ledger lives here for the
/// whole session and is dropped on exit.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: Ledger,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    pub fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }
}
