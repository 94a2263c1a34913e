//! `menagerie-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the zoo model
//! (no IO, no console concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::{Alive, Inventoried};
pub use error::{DomainError, DomainResult};
pub use id::InventoryNumber;
pub use value_object::ValueObject;
