//! Application layer: use cases bridging the HTTP surface and the domain.

pub mod services;
