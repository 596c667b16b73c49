//! Structural equality between command definitions
//!
//! Decides whether a name-matched desired/observed pair actually differs,
//! i.e. whether the differ must schedule an update. The comparison is
//! positional and exact:
//!
//! - options compare by position, never by name — reordering two options
//!   with identical content reports inequality (kept deliberately; see the
//!   differ docs before "fixing" this)
//! - `default_member_permissions` compares by raw value, so an absent value
//!   and an explicit default count as different
//! - localizations and leaf numeric/length constraints do not participate
//!
//! Short-circuits on the first mismatch at any depth.

use cmdsync_model::{Choice, CommandDefinition, CommandOption};

/// Whether two same-named definitions are structurally equal.
///
/// Pure and deterministic. Reflexive for any well-formed definition; the
/// caller guarantees the names already match, so names are not re-checked
/// at the top level.
pub fn definitions_equal(a: &CommandDefinition, b: &CommandDefinition) -> bool {
    if a.description != b.description {
        return false;
    }
    if a.default_member_permissions != b.default_member_permissions {
        return false;
    }
    if a.nsfw != b.nsfw {
        return false;
    }
    options_equal(&a.options, &b.options)
}

fn options_equal(a: &[CommandOption], b: &[CommandOption]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| option_equal(x, y))
}

fn option_equal(a: &CommandOption, b: &CommandOption) -> bool {
    match (a, b) {
        (
            CommandOption::Leaf {
                name: a_name,
                description: a_description,
                kind: a_kind,
                required: a_required,
                choices: a_choices,
                ..
            },
            CommandOption::Leaf {
                name: b_name,
                description: b_description,
                kind: b_kind,
                required: b_required,
                choices: b_choices,
                ..
            },
        ) => {
            a_name == b_name
                && a_description == b_description
                && a_kind == b_kind
                && a_required == b_required
                && choices_equal(a_choices.as_deref(), b_choices.as_deref())
        }
        (
            CommandOption::Group {
                name: a_name,
                description: a_description,
                kind: a_kind,
                required: a_required,
                options: a_options,
            },
            CommandOption::Group {
                name: b_name,
                description: b_description,
                kind: b_kind,
                required: b_required,
                options: b_options,
            },
        ) => {
            a_name == b_name
                && a_description == b_description
                && a_kind == b_kind
                && a_required == b_required
                && options_equal(a_options, b_options)
        }
        // One side carries nested options and the other does not.
        _ => false,
    }
}

fn choices_equal(a: Option<&[Choice]>, b: Option<&[Choice]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b)
                    .all(|(x, y)| x.name == y.name && x.value == y.value)
        }
        // Only one side declares choices.
        _ => false,
    }
}
