//! Capabilities shared by the things a zoo keeps track of.

use crate::id::InventoryNumber;

/// Anything that appears on the inventory: a display name plus a number.
pub trait Inventoried {
    /// Name shown in inventory listings.
    fn name(&self) -> &str;

    /// Inventory number.
    fn number(&self) -> InventoryNumber;
}

/// Something that eats.
pub trait Alive {
    /// Declared daily food intake in kilograms.
    ///
    /// May be zero or negative; the health check turns such animals away.
    fn food(&self) -> i32;
}
