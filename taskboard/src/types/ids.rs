//! Identifier newtypes.
//!
//! Fresh ids are a type prefix followed by a ULID, so they sort by creation
//! time. Two ids minted in the same millisecond still differ in their 80
//! random bits; a collision is possible in theory and not guarded against.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

macro_rules! board_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix carried by freshly generated ids
            pub const PREFIX: &'static str = $prefix;

            /// Generate a fresh id
            pub fn new() -> Self {
                Self(format!("{}{}", Self::PREFIX, Ulid::new()))
            }

            /// Wrap an existing id (seed data, persisted state, user input)
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

board_id!(
    /// Identifies a list for the lifetime of the board
    ListId,
    "list"
);

board_id!(
    /// Identifies a card; unique across every list on the board
    CardId,
    "c"
);
