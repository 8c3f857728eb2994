//! Typed register map codec for 16-bit register field buses.
//!
//! A [`RegisterMap`] is a declarative, ordered schema mapping named telemetry
//! fields to fixed-width slots in a device's register address space, plus one
//! current-value cell per field. The codec converts between raw register
//! words read from (or written to) the bus and scaled engineering values,
//! one address window at a time. The map itself performs no I/O; the
//! [`RegisterTransport`] trait is what callers plug a bus client into.

mod codec;
mod error;
mod schema;
mod transport;
mod value;
mod window;

pub use codec::{DecodeOutcome, WordCodec};
pub use error::{CodecError, CodecResult};
pub use schema::{FieldKind, FieldSpec, RegisterMap, RegisterMapBuilder};
pub use transport::{RegisterTransport, TransportError, TransportResult};
pub use value::FieldValue;
pub use window::{RegisterRange, RegisterWindow};
