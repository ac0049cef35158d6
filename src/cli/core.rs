//! Shell context lifecycle, dispatch, and error reporting.

use std::io;

use chrono::Local;
use dialoguer::theme::ColorfulTheme;
use tracing::{debug, warn};

use crate::{
    cli::input::ItemInput,
    config::{Config, ConfigManager},
    currency::{format_budget, month_label},
    errors::{BudgetError, CliError},
    ledger::{Ledger, Variant},
};

use super::commands;
use super::io as cli_io;
use super::output::{self, current_preferences, OutputPreferences};
use super::registry::CommandEntry;
pub use super::shell_context::{CliMode, ShellContext};
use super::ui::formatting::print_two_column;
use super::views;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::new())
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let registry = commands::registry();

        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %config_manager.path().display(), %err, "ignoring unreadable config");
                Config::default()
            }
        };
        output::set_preferences(OutputPreferences::from(&config));

        Ok(ShellContext {
            mode,
            registry,
            ledger: Ledger::with_id_policy(config.id_policy),
            config,
            config_manager,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub(crate) fn prompt(&self) -> String {
        let arrow = if current_preferences().plain_mode {
            ">"
        } else {
            "⮞"
        };
        format!(
            "budgety [{}] {arrow} ",
            format_budget(self.ledger.summary().budget, self.currency_symbol())
        )
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.get(command).map(|entry| entry.handler) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        if let Some(name) = self.registry.suggest(input) {
            cli_io::print_info(format!("Suggestion: `{name}`?"));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            other => cli_io::print_error(other),
        }
    }

    /// Adds a validated item, echoes the new row, then refreshes the summary.
    pub(crate) fn add_item(&mut self, input: ItemInput) {
        let item = self
            .ledger
            .add_item(input.variant, input.description, input.value);
        cli_io::print_success(views::added_line(&item, self.currency_symbol()));
        self.refresh_and_render();
    }

    pub(crate) fn delete_item(&mut self, variant: Variant, id: u64) {
        if let Some(item) = self.ledger.delete_item(variant, id) {
            cli_io::print_success(format!("Deleted {}", item.handle()));
            self.refresh_and_render();
        }
    }

    /// Recomputes totals and shares, then redraws the summary and share line.
    pub(crate) fn refresh_and_render(&mut self) {
        let summary = self.ledger.refresh();
        debug!(?summary, "budget updated");
        self.render_summary();
        self.render_percentages();
    }

    pub(crate) fn render_summary(&self) {
        output::section(month_label(Local::now().date_naive()));
        print_two_column(&views::summary_entries(
            &self.ledger.summary(),
            self.currency_symbol(),
        ));
    }

    pub(crate) fn render_percentages(&self) {
        if let Some(line) = views::percentages_line(&self.ledger) {
            cli_io::print_info(format!("Shares of income: {line}"));
        }
    }

    pub(crate) fn render_items(&self) {
        let symbol = self.currency_symbol();
        for variant in Variant::ALL {
            output::section(variant.label());
            match views::items_table(&self.ledger, variant, symbol, self.config.plain_mode) {
                Some(table) => cli_io::print_info(table),
                None => cli_io::print_info(format!("No {} yet.", variant.label().to_lowercase())),
            }
        }
    }

    pub(crate) fn reset_ledger(&mut self) {
        self.ledger = Ledger::with_id_policy(self.config.id_policy);
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager
            .save(&self.config)
            .map_err(CommandError::from)
    }

    pub(crate) fn apply_config(&self) {
        output::set_preferences(OutputPreferences::from(&self.config));
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Core(core) => CliError::Core(core),
            CommandError::Io(io) => CliError::Io(io),
            other => CliError::Command(other.to_string()),
        }
    }
}

#[cfg(test)]
pub(crate) fn process_script(lines: &[&str]) -> Result<ShellContext, CliError> {
    let base = tempfile::tempdir()?;
    let mut context =
        ShellContext::with_config_manager(CliMode::Script, ConfigManager::with_base_dir(base.path()))?;
    for line in lines {
        match crate::cli::shell::handle_line(&mut context, line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
    }
    Ok(context)
}
