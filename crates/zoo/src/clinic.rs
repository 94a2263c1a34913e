//! Veterinary health check performed at admission.

use menagerie_core::Alive;

use crate::animal::Animal;

/// Decides whether an animal is healthy enough to be admitted.
///
/// Implemented by [`VeterinaryClinic`] and by any `Fn(&Animal) -> bool`, so
/// callers can inject a plain function instead of a clinic.
pub trait HealthCheck {
    fn check(&self, animal: &Animal) -> bool;
}

/// The default clinic: an animal is healthy iff it eats something.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct VeterinaryClinic;

impl HealthCheck for VeterinaryClinic {
    fn check(&self, animal: &Animal) -> bool {
        animal.food() > 0
    }
}

impl<F> HealthCheck for F
where
    F: Fn(&Animal) -> bool,
{
    fn check(&self, animal: &Animal) -> bool {
        self(animal)
    }
}
