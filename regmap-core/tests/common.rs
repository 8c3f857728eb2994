use regmap_core::{
    CodecResult, FieldSpec, RegisterMap, RegisterMapBuilder, RegisterTransport, TransportResult,
};
use std::collections::HashMap;
use std::sync::Once;
use tracing::Level;

static INIT_TRACING: Once = Once::new();

pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

/// Small mixed-kind map covering every field kind and a gapped block layout,
/// loosely modeled on an inverter telemetry sheet.
pub fn sample_map() -> CodecResult<RegisterMap> {
    RegisterMapBuilder::new("test-inverter", 100)
        .field(FieldSpec::u16("status", "Operation status", 100))
        .field(FieldSpec::i16("pv1_u", "PV1 voltage", 101).scale(0.1))
        .field(FieldSpec::i32("input_power", "Input power", 102).scale(0.001))
        .field(FieldSpec::u16("grid_voltage", "Grid voltage", 104).scale(0.1))
        .field(FieldSpec::u32("energy_day", "Energy today", 105).scale(0.01))
        .block(200)
        .field(FieldSpec::f32("frequency", "Grid frequency", 200))
        .field(FieldSpec::f32("power_factor", "Power factor", 202))
        .block(300)
        .field(FieldSpec::packed_str("serial_number", "Serial number", 300, 8))
        .build()
}

/// In-memory register space standing in for a bus client.
#[derive(Default)]
pub struct MemoryTransport {
    regs: HashMap<u16, u16>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, address_from: u16, words: &[u16]) {
        for (i, &word) in words.iter().enumerate() {
            self.regs.insert(address_from + i as u16, word);
        }
    }

    pub fn word_at(&self, address: u16) -> u16 {
        self.regs.get(&address).copied().unwrap_or(0)
    }
}

impl RegisterTransport for MemoryTransport {
    fn read(&mut self, address_from: u16, count: u16) -> TransportResult<Vec<u16>> {
        Ok((0..count).map(|i| self.word_at(address_from + i)).collect())
    }

    fn write(&mut self, address_from: u16, words: &[u16]) -> TransportResult<()> {
        self.load(address_from, words);
        Ok(())
    }
}
