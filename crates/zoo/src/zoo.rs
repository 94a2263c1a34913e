use serde::Serialize;

use menagerie_core::{Alive, DomainError, DomainResult, Inventoried, InventoryNumber};

use crate::animal::Animal;
use crate::clinic::{HealthCheck, VeterinaryClinic};
use crate::thing::Thing;

/// Anything on the inventory list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryItem {
    Animal(Animal),
    Thing(Thing),
}

impl Inventoried for InventoryItem {
    fn name(&self) -> &str {
        match self {
            InventoryItem::Animal(a) => a.name(),
            InventoryItem::Thing(t) => t.name(),
        }
    }

    fn number(&self) -> InventoryNumber {
        match self {
            InventoryItem::Animal(a) => a.number(),
            InventoryItem::Thing(t) => t.number(),
        }
    }
}

impl From<Animal> for InventoryItem {
    fn from(value: Animal) -> Self {
        InventoryItem::Animal(value)
    }
}

impl From<Thing> for InventoryItem {
    fn from(value: Thing) -> Self {
        InventoryItem::Thing(value)
    }
}

/// One row of the inventory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryLine {
    pub name: String,
    pub number: InventoryNumber,
}

impl InventoryLine {
    pub fn of(item: &impl Inventoried) -> Self {
        Self {
            name: item.name().to_string(),
            number: item.number(),
        }
    }
}

/// Aggregate root: the zoo.
///
/// Owns the admitted animals and the inventory, both in insertion order.
/// Animals only get in through [`Zoo::admit`], which consults the clinic;
/// inventory items can be added directly.
#[derive(Debug, Clone)]
pub struct Zoo<C = VeterinaryClinic> {
    clinic: C,
    animals: Vec<Animal>,
    inventory: Vec<InventoryItem>,
}

impl Zoo<VeterinaryClinic> {
    /// A zoo checked by the default veterinary clinic.
    pub fn new() -> Self {
        Self::with_clinic(VeterinaryClinic)
    }
}

impl Default for Zoo<VeterinaryClinic> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Zoo<C> {
    pub fn with_clinic(clinic: C) -> Self {
        Self {
            clinic,
            animals: Vec::new(),
            inventory: Vec::new(),
        }
    }

    /// Admitted animals, in admission order.
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn animal_count(&self) -> usize {
        self.animals.len()
    }

    /// Daily food of every admitted animal, in kilograms.
    pub fn total_food_consumption(&self) -> i64 {
        self.animals.iter().map(|a| i64::from(a.food())).sum()
    }

    /// Admitted animals allowed into the petting exhibit, in admission order.
    pub fn eligible_for_contact_zoo(&self) -> Vec<&Animal> {
        self.animals
            .iter()
            .filter(|a| a.is_eligible_for_contact_zoo())
            .collect()
    }

    /// Append an item to the inventory. No health check, no uniqueness check.
    pub fn add_inventory_item(&mut self, item: impl Into<InventoryItem>) {
        self.inventory.push(item.into());
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    /// Name and number of every inventory item, in insertion order.
    pub fn list_inventory(&self) -> Vec<InventoryLine> {
        self.inventory.iter().map(InventoryLine::of).collect()
    }
}

impl<C: HealthCheck> Zoo<C> {
    /// Run the health check and, if it passes, append the animal to the
    /// animal list.
    ///
    /// The inventory is not touched; registering the animal there is a
    /// separate [`Zoo::add_inventory_item`] call. A rejected animal leaves the
    /// zoo untouched.
    pub fn admit(&mut self, animal: Animal) -> DomainResult<()> {
        if !self.clinic.check(&animal) {
            return Err(DomainError::health_check_failed(animal.name()));
        }
        self.animals.push(animal);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::{Kindness, Species};

    fn herbivore(species: Species, name: &str, food: i32, number: i32, kindness: u8) -> Animal {
        Animal::new(
            species,
            name,
            food,
            InventoryNumber::new(number),
            Some(Kindness::new(kindness).unwrap()),
        )
        .unwrap()
    }

    fn predator(species: Species, name: &str, food: i32, number: i32) -> Animal {
        Animal::new(species, name, food, InventoryNumber::new(number), None).unwrap()
    }

    #[test]
    fn new_zoo_is_empty() {
        let zoo = Zoo::new();
        assert_eq!(zoo.animal_count(), 0);
        assert_eq!(zoo.total_food_consumption(), 0);
        assert!(zoo.eligible_for_contact_zoo().is_empty());
        assert!(zoo.list_inventory().is_empty());
    }

    #[test]
    fn admit_healthy_animal_appends_to_animals_only() {
        let mut zoo = Zoo::new();
        zoo.admit(predator(Species::Tiger, "Shere Khan", 10, 2001)).unwrap();

        assert_eq!(zoo.animal_count(), 1);
        assert_eq!(zoo.animals()[0].name(), "Shere Khan");
        assert!(zoo.list_inventory().is_empty());
    }

    #[test]
    fn admit_then_register_lists_each_animal_once() {
        let mut zoo = Zoo::new();
        zoo.admit(Animal::preset(Species::Tiger)).unwrap();
        zoo.admit(Animal::preset(Species::Wolf)).unwrap();

        let monkey = Animal::preset(Species::Monkey);
        zoo.admit(monkey.clone()).unwrap();
        zoo.add_inventory_item(monkey);

        let names: Vec<String> = zoo.list_inventory().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Monkey"]);
        assert_eq!(zoo.animal_count(), 3);
    }

    #[test]
    fn admit_starving_animal_is_rejected_without_side_effects() {
        let mut zoo = Zoo::new();
        zoo.add_inventory_item(Thing::table());

        let err = zoo.admit(predator(Species::Wolf, "Akela", 0, 2002)).unwrap_err();

        assert_eq!(err, DomainError::health_check_failed("Akela"));
        assert_eq!(zoo.animal_count(), 0);
        assert_eq!(zoo.inventory().len(), 1);
    }

    #[test]
    fn total_food_sums_admitted_animals_only() {
        let mut zoo = Zoo::new();
        zoo.admit(Animal::preset(Species::Monkey)).unwrap();
        zoo.admit(Animal::preset(Species::Tiger)).unwrap();
        let _ = zoo.admit(predator(Species::Wolf, "Ghost", -4, 9));

        assert_eq!(zoo.total_food_consumption(), 15);
    }

    #[test]
    fn eligibility_filter_keeps_kind_herbivores_in_order() {
        let mut zoo = Zoo::new();
        zoo.admit(herbivore(Species::Rabbit, "Bun", 1, 1, 6)).unwrap();
        zoo.admit(herbivore(Species::Monkey, "Grumpy", 2, 2, 5)).unwrap();
        zoo.admit(predator(Species::Tiger, "Stripes", 9, 3)).unwrap();
        zoo.admit(herbivore(Species::Monkey, "Kesha", 3, 4, 10)).unwrap();

        let names: Vec<&str> = zoo
            .eligible_for_contact_zoo()
            .into_iter()
            .map(|a| a.name())
            .collect();
        assert_eq!(names, vec!["Bun", "Kesha"]);
    }

    #[test]
    fn inventory_lists_things_and_animals_in_insertion_order() {
        let mut zoo = Zoo::new();
        zoo.add_inventory_item(Thing::table());
        zoo.add_inventory_item(Animal::preset(Species::Rabbit));
        zoo.add_inventory_item(Thing::computer());

        let listing: Vec<(String, i32)> = zoo
            .list_inventory()
            .into_iter()
            .map(|line| (line.name, line.number.get()))
            .collect();
        assert_eq!(
            listing,
            vec![
                ("Table".to_string(), 3001),
                ("Rabbit".to_string(), 1002),
                ("Computer".to_string(), 3002),
            ]
        );
    }

    #[test]
    fn animals_added_as_inventory_skip_the_health_check() {
        let mut zoo = Zoo::new();
        zoo.add_inventory_item(predator(Species::Wolf, "Paperwork", 0, 77));

        assert_eq!(zoo.animal_count(), 0);
        assert_eq!(zoo.inventory().len(), 1);
    }

    #[test]
    fn injected_health_check_is_used() {
        let mut zoo = Zoo::with_clinic(|animal: &Animal| animal.species() != Species::Tiger);

        assert!(zoo.admit(Animal::preset(Species::Tiger)).is_err());
        assert!(zoo.admit(Animal::preset(Species::Wolf)).is_ok());
        assert_eq!(zoo.animal_count(), 1);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_species() -> impl Strategy<Value = Species> {
            prop::sample::select(Species::ALL.to_vec())
        }

        fn any_animal(food: impl Strategy<Value = i32>) -> impl Strategy<Value = Animal> {
            (
                any_species(),
                "[A-Za-z][A-Za-z ]{0,15}",
                food,
                any::<i32>(),
                Kindness::MIN..=Kindness::MAX,
            )
                .prop_map(|(species, name, food, number, kindness)| {
                    let kindness = match species.family() {
                        crate::animal::Family::Herbivore => Some(Kindness::new(kindness).unwrap()),
                        crate::animal::Family::Predator => None,
                    };
                    Animal::new(species, name, food, InventoryNumber::new(number), kindness).unwrap()
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: animals that do not eat are turned away and change nothing.
            #[test]
            fn non_positive_food_is_always_rejected(
                admitted in prop::collection::vec(any_animal(1..100i32), 0..8),
                rejected in any_animal(i32::MIN..=0),
            ) {
                let mut zoo = Zoo::new();
                for animal in admitted {
                    zoo.admit(animal.clone()).unwrap();
                    zoo.add_inventory_item(animal);
                }
                let animals_before = zoo.animals().to_vec();
                let inventory_before = zoo.inventory().to_vec();

                prop_assert!(zoo.admit(rejected).is_err());
                prop_assert_eq!(zoo.animals(), animals_before.as_slice());
                prop_assert_eq!(zoo.inventory(), inventory_before.as_slice());
            }

            /// Property: healthy animals are admitted once each, in order.
            #[test]
            fn positive_food_is_admitted_in_order(
                animals in prop::collection::vec(any_animal(1..=i32::MAX), 0..16),
            ) {
                let mut zoo = Zoo::new();
                for animal in animals.clone() {
                    prop_assert!(zoo.admit(animal).is_ok());
                }
                prop_assert_eq!(zoo.animals(), animals.as_slice());
                prop_assert!(zoo.inventory().is_empty());
            }

            /// Property: total food is the sum over exactly the admitted animals.
            #[test]
            fn total_food_matches_admitted(
                animals in prop::collection::vec(any_animal(any::<i32>()), 0..32),
            ) {
                let mut zoo = Zoo::new();
                let mut expected: i64 = 0;
                for animal in animals {
                    let food = animal.food();
                    if zoo.admit(animal).is_ok() {
                        expected += i64::from(food);
                    }
                }
                prop_assert_eq!(zoo.total_food_consumption(), expected);
            }

            /// Property: predators never show up on the contact-zoo list.
            #[test]
            fn predators_never_eligible(
                animals in prop::collection::vec(any_animal(1..50i32), 0..16),
            ) {
                let mut zoo = Zoo::new();
                for animal in animals {
                    zoo.admit(animal).unwrap();
                }
                for animal in zoo.eligible_for_contact_zoo() {
                    prop_assert_eq!(animal.family(), crate::animal::Family::Herbivore);
                    prop_assert!(animal.kindness().is_some_and(|k| k.get() > 5));
                }
            }

            /// Property: inventory listing preserves insertion order.
            #[test]
            fn inventory_listing_preserves_order(
                entries in prop::collection::vec(
                    prop_oneof![
                        any_animal(1..50i32).prop_map(InventoryItem::from),
                        ("[A-Za-z]{1,10}", any::<i32>()).prop_map(|(name, number)| {
                            InventoryItem::from(Thing::new(name, InventoryNumber::new(number)).unwrap())
                        }),
                    ],
                    0..16,
                ),
            ) {
                let mut zoo = Zoo::new();
                for entry in entries.clone() {
                    zoo.add_inventory_item(entry);
                }
                let expected: Vec<InventoryLine> = entries.iter().map(InventoryLine::of).collect();
                prop_assert_eq!(zoo.list_inventory(), expected);
            }
        }
    }
}
