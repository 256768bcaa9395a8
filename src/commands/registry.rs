//! Command registry
//!
//! The table of REPL commands, in the order `help` lists them.

/// Identifies which handler runs for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// A REPL command as shown by `help`.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// All commands understood by the REPL.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        usage: "help",
        description: "Displays a help message",
        kind: CommandKind::Help,
    },
    Command {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
        kind: CommandKind::Exit,
    },
    Command {
        name: "map",
        usage: "map",
        description: "Show the next page of location areas",
        kind: CommandKind::Map,
    },
    Command {
        name: "mapb",
        usage: "mapb",
        description: "Show the previous page of location areas",
        kind: CommandKind::MapBack,
    },
    Command {
        name: "explore",
        usage: "explore <location-area>",
        description: "List all Pokemon in a location area",
        kind: CommandKind::Explore,
    },
    Command {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Attempt to catch a Pokemon by name",
        kind: CommandKind::Catch,
    },
    Command {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Show details about a caught Pokemon",
        kind: CommandKind::Inspect,
    },
    Command {
        name: "pokedex",
        usage: "pokedex",
        description: "List all Pokemon you have caught",
        kind: CommandKind::Pokedex,
    },
];

/// Looks up a command by its (already lowercased) name.
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.name == name)
}
