//! Domain layer - entities, ports, and pure services

pub mod entities;
pub mod ports;
pub mod services;
