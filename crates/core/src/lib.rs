//! `stockroom-core` — domain building blocks.
//!
//! Pure domain primitives shared by the inventory store and its callers
//! (no IO, no logging).

pub mod error;
pub mod item;
pub mod quantity;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use item::ItemName;
pub use quantity::ToQuantity;
pub use value_object::ValueObject;
