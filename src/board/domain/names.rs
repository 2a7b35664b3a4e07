//! Validated text values carried by board tasks.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! text_value {
    ($(#[$meta:meta])* $name:ident, $empty:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a validated value.
            ///
            /// The text is stored exactly as given; only whitespace-only
            /// input is rejected.
            ///
            /// # Errors
            ///
            /// Returns an error when the value is empty after trimming.
            pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
                let raw = value.into();
                if raw.trim().is_empty() {
                    return Err($empty);
                }
                Ok(Self(raw))
            }

            /// Returns the value as `str`.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = BoardDomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_value!(
    /// Task description, unique across the board.
    ///
    /// Descriptions order the description index byte-wise.
    TaskDescription,
    BoardDomainError::EmptyDescription
);

text_value!(
    /// Name of a workflow stage ("activity") such as `IN PROGRESS`.
    StageName,
    BoardDomainError::EmptyStageName
);

text_value!(
    /// Name of the user owning a task.
    UserName,
    BoardDomainError::EmptyUserName
);

impl StageName {
    /// Builds a stage name from a non-empty literal known at compile time.
    pub(crate) fn from_literal(value: &'static str) -> Self {
        debug_assert!(!value.trim().is_empty());
        Self(value.to_owned())
    }
}
