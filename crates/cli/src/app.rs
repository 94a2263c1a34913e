//! Startup wiring: build the zoo the console will manage.

use menagerie_core::Inventoried;
use menagerie_zoo::{Animal, Species, Thing, Zoo};

use crate::config::Config;

/// Build the zoo, seeded according to `config`.
pub fn build_zoo(config: &Config) -> Zoo {
    let mut zoo = Zoo::new();

    if !config.no_seed {
        zoo.add_inventory_item(Thing::table());
        zoo.add_inventory_item(Thing::computer());
        tracing::debug!(items = zoo.inventory().len(), "seeded inventory");
    }

    if config.with_residents {
        for species in Species::ALL {
            let animal = Animal::preset(species);
            let name = animal.name().to_string();
            match zoo.admit(animal.clone()) {
                Ok(()) => {
                    zoo.add_inventory_item(animal);
                    tracing::debug!(%name, %species, "resident admitted");
                }
                Err(err) => tracing::info!(%name, error = %err, "resident turned away"),
            }
        }
    }

    zoo
}
