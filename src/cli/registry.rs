//! The shell's command table, kept in menu order and looked up by name.

use strsim::levenshtein;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Order used by `help` and completion. Unlisted commands go last.
const SHELL_ORDER: &[&str] = &[
    "add", "delete", "list", "summary", "dump", "reset", "config", "help", "version", "exit",
];

const MAX_SUGGESTION_DISTANCE: usize = 3;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }

    fn rank(&self) -> usize {
        SHELL_ORDER
            .iter()
            .position(|name| *name == self.name)
            .unwrap_or(SHELL_ORDER.len())
    }
}

#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = CommandEntry>) -> Self {
        let mut registry = Self::new();
        for entry in entries {
            registry.register(entry);
        }
        registry
    }

    /// Adds `entry` at its menu position, replacing a command of the same name.
    pub fn register(&mut self, entry: CommandEntry) {
        self.entries.retain(|existing| existing.name != entry.name);
        let rank = entry.rank();
        let at = self.entries.partition_point(|existing| existing.rank() <= rank);
        self.entries.insert(at, entry);
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Closest command name to a mistyped `input`, if any is near enough.
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        let needle = input.to_lowercase();
        self.names()
            .map(|name| (levenshtein(name, &needle), name))
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }
}
