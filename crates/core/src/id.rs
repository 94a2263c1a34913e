//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::Serialize;

use crate::error::DomainError;

/// Inventory number of anything the zoo tracks (animals and things).
///
/// Uniqueness is a convention of whoever assigns numbers; it is not enforced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct InventoryNumber(i32);

impl InventoryNumber {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for InventoryNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for InventoryNumber {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<InventoryNumber> for i32 {
    fn from(value: InventoryNumber) -> Self {
        value.0
    }
}

impl FromStr for InventoryNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i32>()
            .map_err(|e| DomainError::invalid_id(format!("InventoryNumber: {e}")))?;
        Ok(Self(value))
    }
}
