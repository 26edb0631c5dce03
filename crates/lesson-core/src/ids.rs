//! Opaque identifiers for blocks and quiz options.
//!
//! Fresh ids are UUIDv7 (48 bits of millisecond time plus random bits) rendered
//! as 32 lowercase hex chars, so ids minted by independent builders in the same
//! process or across processes do not collide. Ids loaded from a document may be
//! any non-empty string; nothing may rely on their internal structure.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a block within a block list.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

/// Identifier of an option within a quiz block.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(String);

macro_rules! impl_opaque_id {
    ($T:ident) => {
        impl $T {
            /// Mint a fresh, globally unique id.
            pub fn fresh() -> Self {
                Self(uuid::Uuid::now_v7().as_simple().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// First 8 characters, for human display only. Never use as a lookup key.
            pub fn short(&self) -> &str {
                match self.0.char_indices().nth(8) {
                    Some((i, _)) => &self.0[..i],
                    None => &self.0,
                }
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl From<&str> for $T {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $T {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $T {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $T {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $T {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $T {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

impl_opaque_id!(BlockId);
impl_opaque_id!(OptionId);
