//! Domain Layer
//!
//! Business types, rules and the ports adapters implement. No I/O here.

pub mod departments;
pub mod entities;
pub mod error;
pub mod ports;
pub mod services;
pub mod value_objects;
