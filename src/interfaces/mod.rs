//! Inbound/outbound data formats: CSV catalog and confirmations, JSON
//! purchase requests.

pub mod csv;
pub mod json;
