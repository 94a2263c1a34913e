use core::str::FromStr;

use serde::Serialize;

use menagerie_core::{Alive, DomainError, DomainResult, Inventoried, InventoryNumber, ValueObject};

/// Kindness score of a herbivore (1 to 10).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kindness(u8);

impl Kindness {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Scores strictly above this allow the animal into the contact zoo.
    pub const CONTACT_ZOO_THRESHOLD: u8 = 5;

    pub fn new(value: u8) -> DomainResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::validation(format!(
                "kindness must be between {} and {} (got {value})",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn allows_contact(self) -> bool {
        self.0 > Self::CONTACT_ZOO_THRESHOLD
    }
}

impl ValueObject for Kindness {}

impl TryFrom<u8> for Kindness {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Kindness> for u8 {
    fn from(value: Kindness) -> Self {
        value.0
    }
}

impl FromStr for Kindness {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::validation(format!("kindness: {e}")))?;
        let value = u8::try_from(value).map_err(|_| {
            DomainError::validation(format!(
                "kindness must be between {} and {} (got {value})",
                Self::MIN,
                Self::MAX
            ))
        })?;
        Self::new(value)
    }
}

impl core::fmt::Display for Kindness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Broad diet family; decides contact-zoo rules.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Family {
    Herbivore,
    Predator,
}

/// Species the zoo knows how to house.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Monkey,
    Rabbit,
    Tiger,
    Wolf,
}

impl Species {
    pub const ALL: [Species; 4] = [Species::Monkey, Species::Rabbit, Species::Tiger, Species::Wolf];

    pub fn family(self) -> Family {
        match self {
            Species::Monkey | Species::Rabbit => Family::Herbivore,
            Species::Tiger | Species::Wolf => Family::Predator,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Species::Monkey => "Monkey",
            Species::Rabbit => "Rabbit",
            Species::Tiger => "Tiger",
            Species::Wolf => "Wolf",
        }
    }
}

impl core::fmt::Display for Species {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = DomainError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Species::ALL
            .into_iter()
            .find(|species| species.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::unknown_species(wanted))
    }
}

/// Family-specific attributes of an animal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Diet {
    Herbivore { kindness: Kindness },
    Predator,
}

impl Diet {
    pub fn family(self) -> Family {
        match self {
            Diet::Herbivore { .. } => Family::Herbivore,
            Diet::Predator => Family::Predator,
        }
    }
}

/// An animal kept (or about to be kept) by the zoo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    species: Species,
    name: String,
    food: i32,
    number: InventoryNumber,
    diet: Diet,
}

impl Animal {
    /// Build an animal from user-supplied attributes.
    ///
    /// Herbivores need a kindness score; predators must not have one. Food is
    /// not validated here: that is the clinic's job at admission.
    pub fn new(
        species: Species,
        name: impl Into<String>,
        food: i32,
        number: InventoryNumber,
        kindness: Option<Kindness>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let diet = match (species.family(), kindness) {
            (Family::Herbivore, Some(kindness)) => Diet::Herbivore { kindness },
            (Family::Herbivore, None) => {
                return Err(DomainError::validation(format!(
                    "{species} is a herbivore and needs a kindness score"
                )));
            }
            (Family::Predator, None) => Diet::Predator,
            (Family::Predator, Some(_)) => {
                return Err(DomainError::validation(format!(
                    "{species} is a predator and has no kindness score"
                )));
            }
        };

        Ok(Self {
            species,
            name,
            food,
            number,
            diet,
        })
    }

    /// The stock specimen of a species, with fixed attributes.
    pub fn preset(species: Species) -> Self {
        let (food, number, diet) = match species {
            Species::Monkey => (5, 1001, Diet::Herbivore { kindness: Kindness(7) }),
            Species::Rabbit => (2, 1002, Diet::Herbivore { kindness: Kindness(8) }),
            Species::Tiger => (10, 2001, Diet::Predator),
            Species::Wolf => (8, 2002, Diet::Predator),
        };
        Self {
            species,
            name: species.as_str().to_string(),
            food,
            number: InventoryNumber::new(number),
            diet,
        }
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn diet(&self) -> Diet {
        self.diet
    }

    pub fn family(&self) -> Family {
        self.diet.family()
    }

    pub fn kindness(&self) -> Option<Kindness> {
        match self.diet {
            Diet::Herbivore { kindness } => Some(kindness),
            Diet::Predator => None,
        }
    }

    /// Whether the animal may take part in a petting exhibit.
    ///
    /// Herbivores qualify when kind enough; predators never do.
    pub fn is_eligible_for_contact_zoo(&self) -> bool {
        match self.diet {
            Diet::Herbivore { kindness } => kindness.allows_contact(),
            Diet::Predator => false,
        }
    }
}

impl Inventoried for Animal {
    fn name(&self) -> &str {
        &self.name
    }

    fn number(&self) -> InventoryNumber {
        self.number
    }
}

impl Alive for Animal {
    fn food(&self) -> i32 {
        self.food
    }
}
