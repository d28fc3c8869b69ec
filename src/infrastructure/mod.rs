//! Adapters implementing the domain ports: storage backends and payment
//! gateways.

pub mod in_memory;
pub mod offline;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
#[cfg(feature = "gateway-stripe")]
pub mod stripe;
