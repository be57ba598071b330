//! Identifier newtypes
//!
//! Profiles and their child records are addressed by UUIDv7 identifiers.
//! Child records refer back to their owner by [`ProfileId`] rather than by
//! pointer, so the relationship graph stays acyclic in memory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity of a [`Profile`](super::Profile)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(Uuid);

/// Identity of a child record owned by a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

macro_rules! impl_uuid_id {
    ($name:ident) => {
        impl $name {
            /// Generate a fresh time-ordered identifier
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Wrap an existing UUID
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Underlying UUID
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

impl_uuid_id!(ProfileId);
impl_uuid_id!(RecordId);
