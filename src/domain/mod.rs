//! Domain layer: wallet value objects, validation rules and the storage port.

pub mod guard;
pub mod ports;
pub mod validation;
pub mod wallet;
