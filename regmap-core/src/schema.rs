use crate::error::{CodecError, CodecResult};
use crate::value::FieldValue;
use crate::window::RegisterRange;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::collections::HashMap;
use tracing::info;

/// Storage kind of a telemetry field.
///
/// The discriminants match the register type codes used in the device
/// integration sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i16)]
pub enum FieldKind {
    UInt16 = 1,
    Int16 = 2,
    UInt32 = 3,
    Int32 = 4,
    Float32 = 5,
    PackedString = 6,
}

impl FieldKind {
    #[inline]
    pub fn is_numeric(self) -> bool {
        !matches!(self, FieldKind::PackedString)
    }
}

/// Declaration of one field: where it lives in the register address space and
/// how its raw words convert to an engineering value.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Stable snake_case identifier; also the key in the telemetry document.
    pub key: &'static str,
    /// Human readable name used in logs.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Register address (16-bit register units).
    pub address: u16,
    /// Engineering-unit multiplier applied after decode, divided out before
    /// encode. `None` means the raw integer is the value.
    pub scale: Option<f64>,
    /// Width in registers, `PackedString` only.
    pub string_capacity: Option<u16>,
    /// Whether the field appears in the outbound telemetry document.
    pub export: bool,
}

impl FieldSpec {
    fn new(key: &'static str, name: &'static str, kind: FieldKind, address: u16) -> Self {
        Self {
            key,
            name,
            kind,
            address,
            scale: None,
            string_capacity: None,
            export: true,
        }
    }

    pub fn u16(key: &'static str, name: &'static str, address: u16) -> Self {
        Self::new(key, name, FieldKind::UInt16, address)
    }

    pub fn i16(key: &'static str, name: &'static str, address: u16) -> Self {
        Self::new(key, name, FieldKind::Int16, address)
    }

    pub fn u32(key: &'static str, name: &'static str, address: u16) -> Self {
        Self::new(key, name, FieldKind::UInt32, address)
    }

    pub fn i32(key: &'static str, name: &'static str, address: u16) -> Self {
        Self::new(key, name, FieldKind::Int32, address)
    }

    pub fn f32(key: &'static str, name: &'static str, address: u16) -> Self {
        Self::new(key, name, FieldKind::Float32, address)
    }

    pub fn packed_str(key: &'static str, name: &'static str, address: u16, capacity: u16) -> Self {
        let mut spec = Self::new(key, name, FieldKind::PackedString, address);
        spec.string_capacity = Some(capacity);
        spec
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Exclude the field from [`RegisterMap::to_json`] output.
    pub fn no_export(mut self) -> Self {
        self.export = false;
        self
    }

    /// Width of the field's storage in registers.
    #[inline]
    pub fn width(&self) -> u16 {
        match self.kind {
            FieldKind::UInt16 | FieldKind::Int16 => 1,
            FieldKind::UInt32 | FieldKind::Int32 | FieldKind::Float32 => 2,
            FieldKind::PackedString => self.string_capacity.unwrap_or(0),
        }
    }
}

/// Ordered, immutable registry of field specs plus one mutable current-value
/// cell per field.
///
/// Built once at startup through [`RegisterMapBuilder`], which verifies that
/// the declared addresses tile each contiguous block without gaps or
/// overlaps. Each polling session owns its map exclusively; two devices mean
/// two independent instances.
#[derive(Debug)]
pub struct RegisterMap {
    name: &'static str,
    base_address: u16,
    pub(crate) fields: Vec<FieldSpec>,
    index: HashMap<&'static str, usize>,
    pub(crate) values: Vec<FieldValue>,
    total_words: u16,
}

impl RegisterMap {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn base_address(&self) -> u16 {
        self.base_address
    }

    /// Look up a field declaration by key.
    pub fn get(&self, key: &str) -> CodecResult<&FieldSpec> {
        self.index
            .get(key)
            .map(|&i| &self.fields[i])
            .ok_or_else(|| CodecError::UnknownField(key.to_string()))
    }

    /// Current value of a field (last decoded or programmatically set).
    pub fn value(&self, key: &str) -> CodecResult<&FieldValue> {
        let idx = self.field_index(key)?;
        Ok(&self.values[idx])
    }

    /// Numeric view of a field's current value.
    pub fn value_f64(&self, key: &str) -> CodecResult<f64> {
        let idx = self.field_index(key)?;
        self.values[idx]
            .as_f64()
            .ok_or_else(|| CodecError::ValueClass {
                field: key.to_string(),
                reason: "expected numeric value".to_string(),
            })
    }

    /// Overwrite a field's current value, e.g. before encoding a locally
    /// originated register write (device clock update, setpoint).
    pub fn set_value(&mut self, key: &str, value: impl Into<FieldValue>) -> CodecResult<()> {
        let idx = self.field_index(key)?;
        self.values[idx] = value.into();
        Ok(())
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Total width of all declared fields in registers.
    pub fn register_count(&self) -> u16 {
        self.total_words
    }

    /// Address of the last declared field.
    pub fn last_address(&self) -> u16 {
        self.fields.last().map(|f| f.address).unwrap_or(self.base_address)
    }

    /// Resolve the inclusive register window spanning two named fields.
    ///
    /// `count` covers the last field's full width, so the caller can issue a
    /// single transport read/write for the whole span. `key_to` must not
    /// precede `key_from` and the span must fit the 16-bit address space.
    pub fn range(&self, key_from: &str, key_to: &str) -> CodecResult<RegisterRange> {
        let from = self.get(key_from)?;
        let to = self.get(key_to)?;
        if to.address < from.address {
            return Err(CodecError::InvalidRange {
                from: key_from.to_string(),
                to: key_to.to_string(),
                reason: "end field precedes start field".to_string(),
            });
        }
        let count = to.address as u32 + to.width() as u32 - from.address as u32;
        if count > u16::MAX as u32 {
            return Err(CodecError::InvalidRange {
                from: key_from.to_string(),
                to: key_to.to_string(),
                reason: format!("span of {count} words exceeds the address space"),
            });
        }
        Ok(RegisterRange {
            address_from: from.address,
            address_to: to.address,
            count: count as u16,
        })
    }

    /// Telemetry document of all exported fields, keyed by field key.
    pub fn to_json(&self) -> serde_json::Value {
        let mut doc = serde_json::Map::with_capacity(self.fields.len());
        for (field, value) in self.fields.iter().zip(&self.values) {
            if field.export {
                doc.insert(field.key.to_string(), value.to_json_value());
            }
        }
        serde_json::Value::Object(doc)
    }

    /// Dump all current values through tracing, one line per field.
    pub fn log_values(&self) {
        for (field, value) in self.fields.iter().zip(&self.values) {
            info!(
                target: "regmap::values",
                map = self.name,
                field = field.key,
                kind = ?field.kind,
                value = %value,
            );
        }
    }

    #[inline]
    fn field_index(&self, key: &str) -> CodecResult<usize> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| CodecError::UnknownField(key.to_string()))
    }
}

/// Builder for [`RegisterMap`].
///
/// Fields are declared in address order. A map may span several contiguous
/// blocks with deliberate unused gaps between them (the inverter layout does);
/// [`RegisterMapBuilder::block`] starts a new block at the given address and
/// the consistency check is scoped per block.
pub struct RegisterMapBuilder {
    name: &'static str,
    base_address: u16,
    fields: Vec<FieldSpec>,
    /// (index of first field, start address) per contiguous block.
    blocks: Vec<(usize, u16)>,
}

impl RegisterMapBuilder {
    pub fn new(name: &'static str, base_address: u16) -> Self {
        Self {
            name,
            base_address,
            fields: Vec::new(),
            blocks: vec![(0, base_address)],
        }
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Start a new contiguous block at `address`.
    pub fn block(mut self, address: u16) -> Self {
        self.blocks.push((self.fields.len(), address));
        self
    }

    /// Validate the declared layout and freeze the map.
    ///
    /// Within each block every field's address must equal the previous
    /// field's address plus its width; the first field must sit exactly at
    /// the block's start. Any mismatch is fatal to startup.
    pub fn build(self) -> CodecResult<RegisterMap> {
        let mut index = HashMap::with_capacity(self.fields.len());
        for (i, field) in self.fields.iter().enumerate() {
            if field.kind == FieldKind::PackedString && field.width() == 0 {
                return Err(CodecError::InvalidSpec {
                    field: field.key.to_string(),
                    reason: "packed string capacity must be positive".to_string(),
                });
            }
            if index.insert(field.key, i).is_some() {
                return Err(CodecError::InvalidSpec {
                    field: field.key.to_string(),
                    reason: "duplicate field key".to_string(),
                });
            }
        }

        let mut blocks = self.blocks.iter().peekable();
        // Runs one register past the end of the address space for a block
        // ending at 65535, so the running address is kept wider than u16.
        let mut expected = self.base_address as u32;
        for (i, field) in self.fields.iter().enumerate() {
            while let Some(&&(first, start)) = blocks.peek() {
                if first != i {
                    break;
                }
                if i > 0 && (start as u32) < expected {
                    return Err(CodecError::InvalidSpec {
                        field: field.key.to_string(),
                        reason: format!(
                            "block at {start} overlaps previous block ending at {expected}"
                        ),
                    });
                }
                expected = start as u32;
                blocks.next();
            }
            if field.address as u32 != expected {
                return Err(CodecError::Inconsistent {
                    field: field.key.to_string(),
                    expected,
                    actual: field.address,
                });
            }
            expected += field.width() as u32;
        }

        let total_words = self.fields.iter().map(FieldSpec::width).sum();
        let values = self
            .fields
            .iter()
            .map(|f| match f.kind {
                FieldKind::PackedString => FieldValue::Text(String::new()),
                _ => FieldValue::default(),
            })
            .collect();
        info!(
            map = self.name,
            fields = self.fields.len(),
            words = total_words,
            "register map consistency ok"
        );
        Ok(RegisterMap {
            name: self.name,
            base_address: self.base_address,
            fields: self.fields,
            index,
            values,
            total_words,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_widths() {
        assert_eq!(FieldSpec::u16("a", "A", 0).width(), 1);
        assert_eq!(FieldSpec::i16("a", "A", 0).width(), 1);
        assert_eq!(FieldSpec::u32("a", "A", 0).width(), 2);
        assert_eq!(FieldSpec::i32("a", "A", 0).width(), 2);
        assert_eq!(FieldSpec::f32("a", "A", 0).width(), 2);
        assert_eq!(FieldSpec::packed_str("a", "A", 0, 8).width(), 8);
    }

    #[test]
    fn test_field_kind_serializes_as_type_code() {
        assert_eq!(serde_json::to_string(&FieldKind::UInt16).unwrap(), "1");
        assert_eq!(serde_json::to_string(&FieldKind::Float32).unwrap(), "5");
        let kind: FieldKind = serde_json::from_str("6").unwrap();
        assert_eq!(kind, FieldKind::PackedString);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = RegisterMapBuilder::new("dup", 0)
            .field(FieldSpec::u16("a", "A", 0))
            .field(FieldSpec::u16("a", "A again", 1))
            .build()
            .unwrap_err();
        assert!(matches!(err, CodecError::InvalidSpec { .. }));
    }

    #[test]
    fn test_zero_capacity_string_rejected() {
        let err = RegisterMapBuilder::new("bad", 0)
            .field(FieldSpec::packed_str("id", "Identifier", 0, 0))
            .build()
            .unwrap_err();
        assert!(matches!(err, CodecError::InvalidSpec { .. }));
    }
}
