//! `salesbook-core` — shared kernel of the sales domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, money, client data and the error model used by the other crates.

pub mod client;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use client::ClientData;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::Id;
pub use money::{Currency, DEFAULT_CURRENCY, Money};
pub use value_object::ValueObject;
