mod common;

use common::{init_tracing, sample_map, MemoryTransport};
use regmap_core::{RegisterTransport, RegisterWindow, WordCodec};

/// Full polling cycle against an in-memory register space: size each read
/// from the map's range resolver, decode the windows, then push a locally
/// originated write back through encode.
#[test]
fn test_windowed_poll_cycle() {
    init_tracing();
    let mut map = sample_map().unwrap();
    let mut bus = MemoryTransport::new();

    // Device image: telemetry block, float block, serial number block
    bus.load(100, &[1, 2453, 0, 10000, 2301, 0, 50000]);
    let bits = 49.98f32.to_bits();
    bus.load(200, &[(bits >> 16) as u16, bits as u16, 0x3F80, 0x0000]);
    bus.load(300, &WordCodec::pack_string("GW250K-H-0042", 8));

    for (from_key, to_key) in [
        ("status", "energy_day"),
        ("frequency", "power_factor"),
        ("serial_number", "serial_number"),
    ] {
        let range = map.range(from_key, to_key).unwrap();
        let words = bus.read(range.address_from, range.count).unwrap();
        let window = RegisterWindow::new(range.address_from, range.address_to, words);
        map.decode(&window).unwrap();
    }

    assert_eq!(map.value("status").unwrap().as_i64(), Some(1));
    assert!((map.value_f64("pv1_u").unwrap() - 245.3).abs() < 1e-9);
    assert!((map.value_f64("input_power").unwrap() - 10.0).abs() < 1e-9);
    assert!((map.value_f64("energy_day").unwrap() - 500.0).abs() < 1e-9);
    assert!((map.value_f64("frequency").unwrap() - 49.98f32 as f64).abs() < 1e-9);
    assert!((map.value_f64("power_factor").unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(map.value("serial_number").unwrap().as_str(), Some("GW250K-H-0042"));

    // Locally originated write: adjust a setpoint-like field and push it out
    map.set_value("grid_voltage", 231.5f64).unwrap();
    let range = map.range("grid_voltage", "grid_voltage").unwrap();
    let words = map.encode(range.address_from, range.address_to).unwrap();
    bus.write(range.address_from, &words).unwrap();
    assert_eq!(bus.word_at(104), 2315);

    // The telemetry document carries only engineering values
    let doc = map.to_json();
    assert_eq!(doc["status"], serde_json::json!(1));
    assert_eq!(doc["serial_number"], serde_json::json!("GW250K-H-0042"));
    assert_eq!(doc["pv1_u"], serde_json::json!(245.3));

    map.log_values();
}
