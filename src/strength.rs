use serde::Serialize;
use std::fmt;

/// Characters that count towards the symbol requirement.
const SYMBOLS: &str = "~!@#$%^&*()_+-=;:<>[]\\|/";

/// Minimum length, in UTF-16 code units, for the length requirement.
const MIN_LENGTH: usize = 8;

/// The categorical strength sent alongside a new password.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum StrengthTier {
    Red,
    Yellow,
    Green,
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthTier::Red => "RED",
            StrengthTier::Yellow => "YELLOW",
            StrengthTier::Green => "GREEN",
        };
        f.write_str(name)
    }
}

/// An individual password requirement, checked independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Length,
    Lowercase,
    Uppercase,
    Number,
    Symbol,
}

impl Requirement {
    /// All requirements, in the order they are presented to the user.
    pub const ALL: [Requirement; 5] = [
        Requirement::Length,
        Requirement::Lowercase,
        Requirement::Uppercase,
        Requirement::Number,
        Requirement::Symbol,
    ];

    /// Whether the given password satisfies this requirement.
    /// An empty password satisfies nothing.
    pub fn is_met(self, password: &str) -> bool {
        if password.is_empty() {
            return false;
        }

        match self {
            Requirement::Length => password.encode_utf16().count() >= MIN_LENGTH,
            Requirement::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Requirement::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Requirement::Number => password.chars().any(|c| c.is_ascii_digit()),
            Requirement::Symbol => password.chars().any(|c| SYMBOLS.contains(c)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Requirement::Length => "Must have at least 8 characters",
            Requirement::Lowercase => "Include lowercase characters (for example, abcdef)",
            Requirement::Uppercase => "Include uppercase characters (for example, ABCDEF)",
            Requirement::Number => "Include numbers (for example, 123456)",
            Requirement::Symbol => "Include symbols (for example, !@#$%^*)",
        }
    }
}

/// Checks one requirement on its own, as each checklist line does.
pub fn check_requirement(password: &str, requirement: Requirement) -> bool {
    requirement.is_met(password)
}

/// Scores a password by how many requirements it meets.
///
/// All five yield ``Green``, three or four yield ``Yellow``,
/// and anything less (including an empty password) is ``Red``.
pub fn calculate_strength(password: &str) -> StrengthTier {
    let score = Requirement::ALL
        .iter()
        .filter(|requirement| requirement.is_met(password))
        .count();

    match score {
        5 => StrengthTier::Green,
        3 | 4 => StrengthTier::Yellow,
        _ => StrengthTier::Red,
    }
}

/// A single line of the live requirement checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    pub requirement: Requirement,
    pub met: bool,
}

pub fn checklist(password: &str) -> Vec<ChecklistItem> {
    Requirement::ALL
        .iter()
        .map(|&requirement| ChecklistItem {
            requirement,
            met: check_requirement(password, requirement),
        })
        .collect()
}
