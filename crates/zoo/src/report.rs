//! Report values built from a [`Zoo`].
//!
//! Each report renders as console text through `Display` and as JSON through
//! `Serialize`; choosing between them is up to the caller.

use core::fmt;

use serde::Serialize;

use menagerie_core::{Inventoried, InventoryNumber};

use crate::animal::Species;
use crate::zoo::{InventoryLine, Zoo};

/// Headcount and daily food bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalReport {
    pub animal_count: usize,
    pub total_food_kg: i64,
}

impl AnimalReport {
    pub fn from_zoo<C>(zoo: &Zoo<C>) -> Self {
        Self {
            animal_count: zoo.animal_count(),
            total_food_kg: zoo.total_food_consumption(),
        }
    }
}

impl fmt::Display for AnimalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total animals: {}", self.animal_count)?;
        write!(f, "Total food per day: {} kg", self.total_food_kg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactZooLine {
    pub name: String,
    pub species: Species,
    pub number: InventoryNumber,
}

/// Animals that may take part in the petting exhibit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactZooReport {
    pub animals: Vec<ContactZooLine>,
}

impl ContactZooReport {
    pub fn from_zoo<C>(zoo: &Zoo<C>) -> Self {
        let animals = zoo
            .eligible_for_contact_zoo()
            .into_iter()
            .map(|a| ContactZooLine {
                name: a.name().to_string(),
                species: a.species(),
                number: a.number(),
            })
            .collect();
        Self { animals }
    }
}

impl fmt::Display for ContactZooReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Animals eligible for the contact zoo:")?;
        if self.animals.is_empty() {
            return write!(f, "\n  (none)");
        }
        for line in &self.animals {
            write!(f, "\n  {} the {} (number: {})", line.name, line.species, line.number)?;
        }
        Ok(())
    }
}

/// Everything on the books, animals and things alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryReport {
    pub items: Vec<InventoryLine>,
}

impl InventoryReport {
    pub fn from_zoo<C>(zoo: &Zoo<C>) -> Self {
        Self {
            items: zoo.list_inventory(),
        }
    }
}

impl fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Inventory (animals and things):")?;
        if self.items.is_empty() {
            return write!(f, "\n  (empty)");
        }
        for line in &self.items {
            write!(f, "\n  Name: {}, Number: {}", line.name, line.number)?;
        }
        Ok(())
    }
}
