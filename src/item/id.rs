use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier of an item, assigned at creation (`1..=N`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Read an id out of an arbitrary JSON value.
    ///
    /// Returns `None` for anything that is not an integer in `u32` range, so
    /// clients sending strings, floats or negatives simply reference no item.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        value
            .as_u64()
            .and_then(|raw| u32::try_from(raw).ok())
            .map(Self)
    }
}

impl From<u32> for ItemId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
