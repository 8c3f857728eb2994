//! Production register maps built on `regmap-core`.
//!
//! Each module declares one device's telemetry layout as published in the
//! vendor's Modbus register sheet and exposes a constructor that returns the
//! consistency-checked map. Field keys are the stable identifiers used for
//! lookups and in the outbound telemetry document.

pub mod bender;
pub mod goodwe_ht;
