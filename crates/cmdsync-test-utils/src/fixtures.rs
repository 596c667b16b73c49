//! Canned command definitions for tests.

use cmdsync_model::{CommandDefinition, CommandOption, OptionKind};

/// A minimal chat-input command with no options.
pub fn simple(name: &str, description: &str) -> CommandDefinition {
    CommandDefinition::new(name, description)
}

/// A command with a required leaf option carrying choices.
pub fn with_choices(name: &str) -> CommandDefinition {
    CommandDefinition::new(name, "Pick a flavour").option(
        CommandOption::leaf("flavour", "Which flavour", OptionKind::String)
            .required()
            .choice("vanilla", "vanilla")
            .choice("chocolate", "chocolate"),
    )
}

/// A command with a two-level subcommand tree.
pub fn with_subcommands(name: &str) -> CommandDefinition {
    CommandDefinition::new(name, "Moderation tools").option(CommandOption::group(
        "user",
        "User actions",
        OptionKind::SubCommandGroup,
        vec![CommandOption::group(
            "ban",
            "Ban a user",
            OptionKind::SubCommand,
            vec![CommandOption::leaf("who", "The user", OptionKind::User).required()],
        )],
    ))
}
