//! Domain layer: entities, value objects and the ports the application
//! layer is written against.

pub mod catalog;
pub mod customer;
pub mod order;
pub mod ports;
pub mod purchase;
