use crate::error::{CodecError, CodecResult};
use crate::schema::{FieldKind, FieldSpec, RegisterMap};
use crate::value::FieldValue;
use crate::window::RegisterWindow;
use tracing::warn;

/// Result of one decode pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Number of fields whose value cells were overwritten.
    pub updated: usize,
    /// Float32 fields whose raw bits decoded to NaN or infinity and were
    /// forced to 0.0 instead of being propagated downstream.
    pub sanitized: Vec<&'static str>,
}

impl RegisterMap {
    /// Decode one raw register window into the map's value cells.
    ///
    /// Fields whose address lies inside the window consume their width from
    /// `window.words` in declared order; every other field keeps its last
    /// known value. The decode is atomic per window: if the word supply runs
    /// out mid-field, no cell is touched and `CodecError::Decode` is
    /// returned. Repeating a decode with the same window is a no-op change.
    pub fn decode(&mut self, window: &RegisterWindow) -> CodecResult<DecodeOutcome> {
        let mut cursor = 0usize;
        let mut staged: Vec<(usize, FieldValue)> = Vec::new();
        let mut sanitized: Vec<&'static str> = Vec::new();

        for (idx, field) in self.fields.iter().enumerate() {
            if !window.covers(field.address) {
                continue;
            }
            let width = field.width() as usize;
            let words = window
                .words
                .get(cursor..cursor + width)
                .ok_or_else(|| {
                    CodecError::Decode(format!(
                        "window {}..={} exhausted at field '{}': need {} words at offset {}, have {}",
                        window.address_from,
                        window.address_to,
                        field.key,
                        width,
                        cursor,
                        window.words.len(),
                    ))
                })?;
            cursor += width;

            let value = match field.kind {
                FieldKind::UInt16 => scaled_integer(words[0] as i64, field),
                FieldKind::Int16 => scaled_integer(words[0] as i16 as i64, field),
                FieldKind::UInt32 => {
                    scaled_integer(WordCodec::u32_from_words(words[0], words[1]) as i64, field)
                }
                FieldKind::Int32 => scaled_integer(
                    WordCodec::u32_from_words(words[0], words[1]) as i32 as i64,
                    field,
                ),
                FieldKind::Float32 => {
                    let raw = f32::from_bits(WordCodec::u32_from_words(words[0], words[1]));
                    let raw = if raw.is_finite() {
                        raw as f64
                    } else {
                        warn!(
                            map = self.name(),
                            field = field.key,
                            raw = %raw,
                            "non-finite float32 register value, forcing 0.0"
                        );
                        sanitized.push(field.key);
                        0.0
                    };
                    FieldValue::Float(raw * field.scale.unwrap_or(1.0))
                }
                FieldKind::PackedString => FieldValue::Text(WordCodec::unpack_string(words)),
            };
            staged.push((idx, value));
        }

        let updated = staged.len();
        for (idx, value) in staged {
            self.values[idx] = value;
        }
        Ok(DecodeOutcome { updated, sanitized })
    }

    /// Encode the current values of all fields inside `[address_from,
    /// address_to]` into raw register words, high word first, ready for a
    /// transport write starting at `address_from`.
    pub fn encode(&self, address_from: u16, address_to: u16) -> CodecResult<Vec<u16>> {
        let mut out: Vec<u16> = Vec::new();
        for (field, value) in self.fields.iter().zip(&self.values) {
            if !(address_from <= field.address && field.address <= address_to) {
                continue;
            }
            match field.kind {
                FieldKind::UInt16 => {
                    let raw = raw_integer(field, value, 0, u16::MAX as i64)?;
                    out.push(raw as u16);
                }
                FieldKind::Int16 => {
                    let raw = raw_integer(field, value, i16::MIN as i64, i16::MAX as i64)?;
                    out.push(raw as i16 as u16);
                }
                FieldKind::UInt32 => {
                    let raw = raw_integer(field, value, 0, u32::MAX as i64)?;
                    out.extend(WordCodec::words_from_u32(raw as u32));
                }
                FieldKind::Int32 => {
                    let raw = raw_integer(field, value, i32::MIN as i64, i32::MAX as i64)?;
                    out.extend(WordCodec::words_from_u32(raw as i32 as u32));
                }
                FieldKind::Float32 => {
                    let scaled = numeric(field, value)? / field.scale.unwrap_or(1.0);
                    let narrowed = scaled as f32;
                    if !narrowed.is_finite() {
                        return Err(CodecError::Encode {
                            field: field.key.to_string(),
                            reason: format!("value {scaled} not representable as float32"),
                        });
                    }
                    out.extend(WordCodec::words_from_u32(narrowed.to_bits()));
                }
                FieldKind::PackedString => {
                    let text = value.as_str().ok_or_else(|| CodecError::Encode {
                        field: field.key.to_string(),
                        reason: format!("expected string value, found {value:?}"),
                    })?;
                    let capacity = field.width() as usize;
                    if text.len() > capacity * 2 {
                        warn!(
                            map = self.name(),
                            field = field.key,
                            capacity,
                            len = text.len(),
                            "string exceeds register capacity, truncating"
                        );
                    }
                    out.extend(WordCodec::pack_string(text, capacity));
                }
            }
        }
        Ok(out)
    }
}

/// Raw integer scaled into its engineering value.
#[inline]
fn scaled_integer(raw: i64, field: &FieldSpec) -> FieldValue {
    match field.scale {
        Some(scale) => FieldValue::Float(raw as f64 * scale),
        None => FieldValue::Integer(raw),
    }
}

#[inline]
fn numeric(field: &FieldSpec, value: &FieldValue) -> CodecResult<f64> {
    value.as_f64().ok_or_else(|| CodecError::Encode {
        field: field.key.to_string(),
        reason: format!("expected numeric value, found {value:?}"),
    })
}

/// Engineering value divided back into the field's raw integer domain,
/// rounded to nearest, range checked.
fn raw_integer(field: &FieldSpec, value: &FieldValue, min: i64, max: i64) -> CodecResult<i64> {
    let raw = (numeric(field, value)? / field.scale.unwrap_or(1.0)).round();
    if !raw.is_finite() || raw < min as f64 || raw > max as f64 {
        return Err(CodecError::Encode {
            field: field.key.to_string(),
            reason: format!("raw value {raw} out of range {min}..={max} for {:?}", field.kind),
        });
    }
    Ok(raw as i64)
}

/// Word-level conversion primitives shared by decode and encode.
///
/// The wire contract is high-word-first for all multi-register kinds,
/// two's-complement for signed integers, IEEE-754 binary32 for floats and
/// big-endian byte packing per word for strings.
pub struct WordCodec;

impl WordCodec {
    /// Combine two registers into a 32-bit value, high word first.
    #[inline(always)]
    pub fn u32_from_words(high: u16, low: u16) -> u32 {
        ((high as u32) << 16) | low as u32
    }

    /// Split a 32-bit value into registers, high word first.
    #[inline(always)]
    pub fn words_from_u32(value: u32) -> [u16; 2] {
        [(value >> 16) as u16, value as u16]
    }

    /// Decode a packed ASCII identifier: per register the high byte
    /// contributes first, then the low byte, zero bytes are dropped rather
    /// than preserved, and trailing NULs are stripped. Embedded-zero dropping
    /// is deliberate for ASCII-only identifiers and must not be "fixed".
    pub fn unpack_string(words: &[u16]) -> String {
        let mut out = String::with_capacity(words.len() * 2);
        for &word in words {
            let high = (word >> 8) as u8;
            let low = (word & 0xff) as u8;
            if high != 0 {
                out.push(high as char);
            }
            if low != 0 {
                out.push(low as char);
            }
        }
        let trimmed = out.trim_end_matches('\0').len();
        out.truncate(trimmed);
        out
    }

    /// Encode a string into exactly `capacity` registers: two characters per
    /// word, first character in the high byte, zero padding for absent
    /// characters and unused trailing words. Excess characters are dropped.
    pub fn pack_string(text: &str, capacity: usize) -> Vec<u16> {
        let mut words: Vec<u16> = Vec::with_capacity(capacity);
        let mut bytes = text.bytes().take(capacity * 2);
        while words.len() < capacity {
            match (bytes.next(), bytes.next()) {
                (Some(high), low) => {
                    words.push(((high as u16) << 8) | low.unwrap_or(0) as u16);
                }
                (None, _) => break,
            }
        }
        words.resize(capacity, 0);
        words
    }
}
