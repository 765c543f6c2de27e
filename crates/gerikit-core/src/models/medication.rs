use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The writing system a medication surface form was recognized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Script {
    Latin,
    Hebrew,
}

impl Script {
    /// Classify a token. Any Hebrew letter makes the whole token Hebrew.
    pub fn of(token: &str) -> Self {
        if token.chars().any(is_hebrew) {
            Script::Hebrew
        } else {
            Script::Latin
        }
    }
}

/// True for characters in the Hebrew Unicode block (U+0590–U+05FF).
pub fn is_hebrew(c: char) -> bool {
    ('\u{0590}'..='\u{05FF}').contains(&c)
}

/// A single medication recognized in free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicationMention {
    /// The token exactly as it appeared in the text.
    pub surface: String,
    /// Canonical lower-case generic name the surface form maps to.
    pub canonical: String,
    pub script: Script,
    /// Byte offset range in the original text: `(start, end)`.
    pub offset: (usize, usize),
}

/// Lower-case and trim a medication name for table lookups.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
