//! Service Layer
//!
//! The remote record store behind an async trait, with an HTTP
//! implementation and an in-process one.

mod memory;
mod rest;
mod traits;

pub use memory::InMemoryPersonService;
pub use rest::RestPersonService;
pub use traits::PersonService;
