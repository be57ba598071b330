//! Profile completeness indicators

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Binary (0/1) signals telling whether profile sections look complete.
///
/// Serializes as `{"description": 0|1, "image": 0|1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CompletionInformation {
    pub description: u8,
    pub image: u8,
}

impl CompletionInformation {
    pub(crate) fn from_flags(description: bool, image: bool) -> Self {
        Self { description: u8::from(description), image: u8::from(image) }
    }

    /// Whether every indicator is set
    pub const fn is_complete(&self) -> bool {
        self.description == 1 && self.image == 1
    }
}
