//! Text transform registry.
//!
//! Every processing mode the dashboard offers is a variant of
//! [`TransformMode`]. Each variant maps to a pure `&str -> String` function
//! plus the description and icon shown in the mode picker.
//!
//! # Example
//!
//! ```
//! use transform_dashboard::transform::TransformMode;
//!
//! let mode: TransformMode = "reverse".parse().unwrap();
//! assert_eq!(mode.apply("abc"), "cba");
//! ```

pub mod encoding;
pub mod text;

pub use encoding::{base64_preview, md5_digest, md5_hash};
pub use text::{count, reverse, uppercase, word_frequency};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A processing mode selectable by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformMode {
    Uppercase,
    Reverse,
    Count,
    Base64Hash,
    Md5Hash,
    WordFrequency,
}

/// Static metadata describing a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformDescriptor {
    pub mode: TransformMode,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl TransformMode {
    /// All modes in the order they are listed in the picker.
    pub const ALL: [TransformMode; 6] = [
        TransformMode::Uppercase,
        TransformMode::Reverse,
        TransformMode::Count,
        TransformMode::Base64Hash,
        TransformMode::Md5Hash,
        TransformMode::WordFrequency,
    ];

    /// Display name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            TransformMode::Uppercase => "Uppercase",
            TransformMode::Reverse => "Reverse",
            TransformMode::Count => "Count",
            TransformMode::Base64Hash => "Base64 Hash",
            TransformMode::Md5Hash => "MD5 Hash",
            TransformMode::WordFrequency => "Word Frequency",
        }
    }

    /// Human readable description shown under the picker.
    pub fn description(&self) -> &'static str {
        match self {
            TransformMode::Uppercase => "Convert text to uppercase letters",
            TransformMode::Reverse => "Reverse the input string character by character",
            TransformMode::Count => "Count characters and words in the input",
            TransformMode::Base64Hash => "Generate base64 encoded representation",
            TransformMode::Md5Hash => "Generate MD5 hash of the input",
            TransformMode::WordFrequency => "Find the most frequent word in text",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TransformMode::Uppercase => "🔤",
            TransformMode::Reverse => "🔄",
            TransformMode::Count => "📊",
            TransformMode::Base64Hash => "🔐",
            TransformMode::Md5Hash => "🔑",
            TransformMode::WordFrequency => "📈",
        }
    }

    pub fn descriptor(&self) -> TransformDescriptor {
        TransformDescriptor {
            mode: *self,
            name: self.name(),
            description: self.description(),
            icon: self.icon(),
        }
    }

    /// Runs the transform on `input`.
    ///
    /// Every transform is total over its input; blank input is rejected
    /// before this point by the executor.
    pub fn apply(&self, input: &str) -> String {
        match self {
            TransformMode::Uppercase => uppercase(input),
            TransformMode::Reverse => reverse(input),
            TransformMode::Count => count(input),
            TransformMode::Base64Hash => base64_preview(input),
            TransformMode::Md5Hash => md5_hash(input),
            TransformMode::WordFrequency => word_frequency(input),
        }
    }

    /// Picker label, e.g. "🔤 Uppercase".
    pub fn label(&self) -> String {
        format!("{} {}", self.icon(), self.name())
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returned when a mode name matches no registered transform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown processing mode: {0}")]
pub struct UnknownModeError(pub String);

impl FromStr for TransformMode {
    type Err = UnknownModeError;

    /// Accepts the display name or a kebab/snake-case alias, case-insensitively.
    /// "base64" and "md5" are accepted as shorthands.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(|c| c.to_lowercase())
            .collect();

        match normalized.as_str() {
            "uppercase" | "upper" => Ok(TransformMode::Uppercase),
            "reverse" => Ok(TransformMode::Reverse),
            "count" => Ok(TransformMode::Count),
            "base64hash" | "base64" => Ok(TransformMode::Base64Hash),
            "md5hash" | "md5" => Ok(TransformMode::Md5Hash),
            "wordfrequency" | "frequency" => Ok(TransformMode::WordFrequency),
            _ => Err(UnknownModeError(s.trim().to_string())),
        }
    }
}
