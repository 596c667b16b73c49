//! Command definition types
//!
//! A [`CommandDefinition`] is the caller-declared target state for a single
//! application command. Options form a tree: subcommands and subcommand
//! groups are [`CommandOption::Group`] nodes, everything else is a
//! [`CommandOption::Leaf`]. The split is a typed variant rather than
//! field-presence sniffing so recursive traversal is exhaustive.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of application command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandKind {
    /// Slash command invoked from the chat input.
    #[default]
    ChatInput,
    /// Command invoked from a user's context menu.
    UserContext,
    /// Command invoked from a message's context menu.
    MessageContext,
}

/// Kind of a command option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionKind {
    SubCommand,
    SubCommandGroup,
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Number,
    Attachment,
}

/// A fixed choice offered for a leaf option.
///
/// The value is kept as raw JSON so string and numeric choices share one
/// representation and compare by exact raw equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub name: String,
    pub value: Value,
}

impl Choice {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A node in a command's option tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandOption {
    /// A value-carrying option (string, integer, user, ...).
    Leaf {
        name: String,
        description: String,
        kind: OptionKind,
        #[serde(default)]
        required: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        choices: Option<Vec<Choice>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_length: Option<u16>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<u16>,
    },
    /// A subcommand or subcommand group holding nested options.
    Group {
        name: String,
        description: String,
        kind: OptionKind,
        #[serde(default)]
        required: bool,
        options: Vec<CommandOption>,
    },
}

impl CommandOption {
    /// Create a leaf option with no choices or constraints.
    pub fn leaf(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: OptionKind,
    ) -> Self {
        Self::Leaf {
            name: name.into(),
            description: description.into(),
            kind,
            required: false,
            choices: None,
            min_value: None,
            max_value: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create a group option (subcommand or subcommand group).
    pub fn group(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: OptionKind,
        options: Vec<CommandOption>,
    ) -> Self {
        Self::Group {
            name: name.into(),
            description: description.into(),
            kind,
            required: false,
            options,
        }
    }

    /// Mark the option as required.
    pub fn required(mut self) -> Self {
        match &mut self {
            Self::Leaf { required, .. } | Self::Group { required, .. } => *required = true,
        }
        self
    }

    /// Add a fixed choice to a leaf option.
    ///
    /// No-op on group options; groups carry nested options, not choices.
    pub fn choice(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Self::Leaf { choices, .. } = &mut self {
            choices
                .get_or_insert_with(Vec::new)
                .push(Choice::new(name, value));
        }
        self
    }

    /// Option name, shared by both shapes.
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf { name, .. } | Self::Group { name, .. } => name,
        }
    }

    /// Option description, shared by both shapes.
    pub fn description(&self) -> &str {
        match self {
            Self::Leaf { description, .. } | Self::Group { description, .. } => description,
        }
    }
}

/// Caller-declared target state for one application command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Unique identifying key within a scope.
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub kind: CommandKind,
    /// Ordered option tree. Order is semantically significant: structural
    /// equality compares options by position, not by name.
    #[serde(default)]
    pub options: Vec<CommandOption>,
    /// Raw permission bits, or absent. Compared by raw equality only —
    /// `None` vs. an explicit default value counts as a difference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_member_permissions: Option<u64>,
    #[serde(default)]
    pub nsfw: bool,
    /// Optional locale → localized-name mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localizations: Option<BTreeMap<String, String>>,
}

impl CommandDefinition {
    /// Create a chat-input command with no options.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: CommandKind::default(),
            options: Vec::new(),
            default_member_permissions: None,
            nsfw: false,
            localizations: None,
        }
    }

    pub fn kind(mut self, kind: CommandKind) -> Self {
        self.kind = kind;
        self
    }

    /// Append an option to the end of the option tree.
    pub fn option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn default_member_permissions(mut self, bits: u64) -> Self {
        self.default_member_permissions = Some(bits);
        self
    }

    pub fn nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    /// Add a localization entry for the given locale.
    pub fn localization(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.localizations
            .get_or_insert_with(BTreeMap::new)
            .insert(locale.into(), text.into());
        self
    }
}
