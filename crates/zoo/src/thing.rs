use menagerie_core::{DomainError, DomainResult, Inventoried, InventoryNumber};

/// A non-living asset on the inventory (furniture, equipment, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thing {
    name: String,
    number: InventoryNumber,
}

impl Thing {
    pub fn new(name: impl Into<String>, number: InventoryNumber) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self { name, number })
    }

    pub fn table() -> Self {
        Self {
            name: "Table".to_string(),
            number: InventoryNumber::new(3001),
        }
    }

    pub fn computer() -> Self {
        Self {
            name: "Computer".to_string(),
            number: InventoryNumber::new(3002),
        }
    }
}

impl Inventoried for Thing {
    fn name(&self) -> &str {
        &self.name
    }

    fn number(&self) -> InventoryNumber {
        self.number
    }
}
