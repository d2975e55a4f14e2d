//! The shell's command table.

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// A top-level shell command: `list`, `member`, `split`, and so on.
/// Subcommand routing happens inside the handler.
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
}

/// Ordered command table. The command set is small and fixed at startup, so
/// lookups are a linear scan in registration order; that order is also the
/// order `help` lists commands in.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command, replacing any earlier entry with the same name.
    pub fn register(&mut self, entry: CommandEntry) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.name.eq_ignore_ascii_case(entry.name))
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut ShellContext, _: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn lookup_is_case_insensitive_and_ordered() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("split", "", "split", noop));
        registry.register(CommandEntry::new("stats", "", "stats", noop));

        assert!(registry.get("SPLIT").is_some());
        assert!(registry.get("nope").is_none());
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["split", "stats"]);
    }

    #[test]
    fn re_registering_replaces_in_place() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("split", "old", "split", noop));
        registry.register(CommandEntry::new("stats", "", "stats", noop));
        registry.register(CommandEntry::new("split", "new", "split", noop));

        assert_eq!(registry.entries().len(), 2);
        assert_eq!(registry.get("split").unwrap().description, "new");
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["split", "stats"]);
    }
}
