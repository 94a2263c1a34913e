//! Zoo domain module.
//!
//! Animals, inventory things, the veterinary health check, and the zoo
//! aggregate that ties them together. Deterministic domain logic only
//! (no IO, no console, no storage).

pub mod animal;
pub mod clinic;
pub mod report;
pub mod thing;
pub mod zoo;

pub use animal::{Animal, Diet, Family, Kindness, Species};
pub use clinic::{HealthCheck, VeterinaryClinic};
pub use report::{AnimalReport, ContactZooLine, ContactZooReport, InventoryReport};
pub use thing::Thing;
pub use zoo::{InventoryItem, InventoryLine, Zoo};
