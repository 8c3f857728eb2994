//! GoodWe HT series inverter telemetry map.
//!
//! The layout follows the vendor's Modbus sheet: one status register, a
//! contiguous run of PV string voltages/currents and grid measurements, the
//! energy yield counters, the serial number and the device RTC. The gaps
//! between blocks are reserved regions the poller never reads.

use regmap_core::{CodecResult, FieldSpec, RegisterMap, RegisterMapBuilder};

pub const OPERATION_STATUS: &str = "operation_status";

pub const PV1_U: &str = "pv1_u";
pub const PV1_C: &str = "pv1_c";
pub const PV2_U: &str = "pv2_u";
pub const PV2_C: &str = "pv2_c";
pub const PV3_U: &str = "pv3_u";
pub const PV3_C: &str = "pv3_c";
pub const PV4_U: &str = "pv4_u";
pub const PV4_C: &str = "pv4_c";
pub const PV5_U: &str = "pv5_u";
pub const PV5_C: &str = "pv5_c";
pub const PV6_U: &str = "pv6_u";
pub const PV6_C: &str = "pv6_c";
pub const PV7_U: &str = "pv7_u";
pub const PV7_C: &str = "pv7_c";
pub const PV8_U: &str = "pv8_u";
pub const PV8_C: &str = "pv8_c";
pub const PV9_U: &str = "pv9_u";
pub const PV9_C: &str = "pv9_c";
pub const PV10_U: &str = "pv10_u";
pub const PV10_C: &str = "pv10_c";
pub const PV11_U: &str = "pv11_u";
pub const PV11_C: &str = "pv11_c";
pub const PV12_U: &str = "pv12_u";
pub const PV12_C: &str = "pv12_c";
pub const PV13_U: &str = "pv13_u";
pub const PV13_C: &str = "pv13_c";
pub const PV14_U: &str = "pv14_u";
pub const PV14_C: &str = "pv14_c";
pub const PV15_U: &str = "pv15_u";
pub const PV15_C: &str = "pv15_c";
pub const PV16_U: &str = "pv16_u";
pub const PV16_C: &str = "pv16_c";
pub const PV17_U: &str = "pv17_u";
pub const PV17_C: &str = "pv17_c";
pub const PV18_U: &str = "pv18_u";
pub const PV18_C: &str = "pv18_c";
pub const PV19_U: &str = "pv19_u";
pub const PV19_C: &str = "pv19_c";
pub const PV20_U: &str = "pv20_u";
pub const PV20_C: &str = "pv20_c";
pub const PV21_U: &str = "pv21_u";
pub const PV21_C: &str = "pv21_c";
pub const PV22_U: &str = "pv22_u";
pub const PV22_C: &str = "pv22_c";
pub const PV23_U: &str = "pv23_u";
pub const PV23_C: &str = "pv23_c";
pub const PV24_U: &str = "pv24_u";
pub const PV24_C: &str = "pv24_c";

pub const INPUT_POWER: &str = "input_power";
pub const GRID_AB_VOLTAGE: &str = "grid_ab_voltage";
pub const GRID_BC_VOLTAGE: &str = "grid_bc_voltage";
pub const GRID_CA_VOLTAGE: &str = "grid_ca_voltage";
pub const GRID_A_VOLTAGE: &str = "grid_a_voltage";
pub const GRID_B_VOLTAGE: &str = "grid_b_voltage";
pub const GRID_C_VOLTAGE: &str = "grid_c_voltage";
pub const GRID_A_CURRENT: &str = "grid_a_current";
pub const GRID_B_CURRENT: &str = "grid_b_current";
pub const GRID_C_CURRENT: &str = "grid_c_current";
pub const PEAK_ACTIVE_POWER_DAY: &str = "peak_active_power_day";
pub const ACTIVE_POWER: &str = "active_power";
pub const REACTIVE_POWER: &str = "reactive_power";
pub const POWER_FACTOR: &str = "power_factor";
pub const GRID_FREQUENCY: &str = "grid_frequency";
pub const INVERTER_EFFICIENCY: &str = "inverter_efficiency";
pub const INTERNAL_TEMPERATURE: &str = "internal_temperature";

pub const CUMULATIVE_POWER_GENERATION: &str = "cumulative_power_generation";
pub const POWER_GENERATION_DAY: &str = "power_generation_day";
pub const POWER_GENERATION_MONTH: &str = "power_generation_month";
pub const POWER_GENERATION_YEAR: &str = "power_generation_year";
pub const ACTIVE_POWER_CALCULATION: &str = "active_power_calculation";

pub const SERIAL_NUMBER: &str = "serial_number";

pub const RTC_YEAR_MONTH: &str = "rtc_year_month";
pub const RTC_DAY_HOUR: &str = "rtc_day_hour";
pub const RTC_MINUTE_SECOND: &str = "rtc_minute_second";

/// Build the checked inverter telemetry map.
///
/// Fails only when the declared layout drifts from the register sheet, which
/// must abort startup before any polling begins.
pub fn telemetry_map() -> CodecResult<RegisterMap> {
    RegisterMapBuilder::new("goodwe-ht", 32002)
        .field(FieldSpec::u16(OPERATION_STATUS, "Operation status", 32002))
        .block(32016)
        .field(FieldSpec::i16(PV1_U, "PV1 voltage", 32016).scale(0.1))
        .field(FieldSpec::i16(PV1_C, "PV1 current", 32017).scale(0.01))
        .field(FieldSpec::i16(PV2_U, "PV2 voltage", 32018).scale(0.1))
        .field(FieldSpec::i16(PV2_C, "PV2 current", 32019).scale(0.01))
        .field(FieldSpec::i16(PV3_U, "PV3 voltage", 32020).scale(0.1))
        .field(FieldSpec::i16(PV3_C, "PV3 current", 32021).scale(0.01))
        .field(FieldSpec::i16(PV4_U, "PV4 voltage", 32022).scale(0.1))
        .field(FieldSpec::i16(PV4_C, "PV4 current", 32023).scale(0.01))
        .field(FieldSpec::i16(PV5_U, "PV5 voltage", 32024).scale(0.1))
        .field(FieldSpec::i16(PV5_C, "PV5 current", 32025).scale(0.01))
        .field(FieldSpec::i16(PV6_U, "PV6 voltage", 32026).scale(0.1))
        .field(FieldSpec::i16(PV6_C, "PV6 current", 32027).scale(0.01))
        .field(FieldSpec::i16(PV7_U, "PV7 voltage", 32028).scale(0.1))
        .field(FieldSpec::i16(PV7_C, "PV7 current", 32029).scale(0.01))
        .field(FieldSpec::i16(PV8_U, "PV8 voltage", 32030).scale(0.1))
        .field(FieldSpec::i16(PV8_C, "PV8 current", 32031).scale(0.01))
        .field(FieldSpec::i16(PV9_U, "PV9 voltage", 32032).scale(0.1))
        .field(FieldSpec::i16(PV9_C, "PV9 current", 32033).scale(0.01))
        .field(FieldSpec::i16(PV10_U, "PV10 voltage", 32034).scale(0.1))
        .field(FieldSpec::i16(PV10_C, "PV10 current", 32035).scale(0.01))
        .field(FieldSpec::i16(PV11_U, "PV11 voltage", 32036).scale(0.1))
        .field(FieldSpec::i16(PV11_C, "PV11 current", 32037).scale(0.01))
        .field(FieldSpec::i16(PV12_U, "PV12 voltage", 32038).scale(0.1))
        .field(FieldSpec::i16(PV12_C, "PV12 current", 32039).scale(0.01))
        .field(FieldSpec::i16(PV13_U, "PV13 voltage", 32040).scale(0.1))
        .field(FieldSpec::i16(PV13_C, "PV13 current", 32041).scale(0.01))
        .field(FieldSpec::i16(PV14_U, "PV14 voltage", 32042).scale(0.1))
        .field(FieldSpec::i16(PV14_C, "PV14 current", 32043).scale(0.01))
        .field(FieldSpec::i16(PV15_U, "PV15 voltage", 32044).scale(0.1))
        .field(FieldSpec::i16(PV15_C, "PV15 current", 32045).scale(0.01))
        .field(FieldSpec::i16(PV16_U, "PV16 voltage", 32046).scale(0.1))
        .field(FieldSpec::i16(PV16_C, "PV16 current", 32047).scale(0.01))
        .field(FieldSpec::i16(PV17_U, "PV17 voltage", 32048).scale(0.1))
        .field(FieldSpec::i16(PV17_C, "PV17 current", 32049).scale(0.01))
        .field(FieldSpec::i16(PV18_U, "PV18 voltage", 32050).scale(0.1))
        .field(FieldSpec::i16(PV18_C, "PV18 current", 32051).scale(0.01))
        .field(FieldSpec::i16(PV19_U, "PV19 voltage", 32052).scale(0.1))
        .field(FieldSpec::i16(PV19_C, "PV19 current", 32053).scale(0.01))
        .field(FieldSpec::i16(PV20_U, "PV20 voltage", 32054).scale(0.1))
        .field(FieldSpec::i16(PV20_C, "PV20 current", 32055).scale(0.01))
        .field(FieldSpec::i16(PV21_U, "PV21 voltage", 32056).scale(0.1))
        .field(FieldSpec::i16(PV21_C, "PV21 current", 32057).scale(0.01))
        .field(FieldSpec::i16(PV22_U, "PV22 voltage", 32058).scale(0.1))
        .field(FieldSpec::i16(PV22_C, "PV22 current", 32059).scale(0.01))
        .field(FieldSpec::i16(PV23_U, "PV23 voltage", 32060).scale(0.1))
        .field(FieldSpec::i16(PV23_C, "PV23 current", 32061).scale(0.01))
        .field(FieldSpec::i16(PV24_U, "PV24 voltage", 32062).scale(0.1))
        .field(FieldSpec::i16(PV24_C, "PV24 current", 32063).scale(0.01))
        .field(FieldSpec::i32(INPUT_POWER, "Input power", 32064).scale(0.001))
        .field(FieldSpec::u16(GRID_AB_VOLTAGE, "Grid AB voltage", 32066).scale(0.1))
        .field(FieldSpec::u16(GRID_BC_VOLTAGE, "Grid BC voltage", 32067).scale(0.1))
        .field(FieldSpec::u16(GRID_CA_VOLTAGE, "Grid CA voltage", 32068).scale(0.1))
        .field(FieldSpec::u16(GRID_A_VOLTAGE, "Grid A voltage", 32069).scale(0.1))
        .field(FieldSpec::u16(GRID_B_VOLTAGE, "Grid B voltage", 32070).scale(0.1))
        .field(FieldSpec::u16(GRID_C_VOLTAGE, "Grid C voltage", 32071).scale(0.1))
        .field(FieldSpec::i32(GRID_A_CURRENT, "Grid A current", 32072).scale(0.001))
        .field(FieldSpec::i32(GRID_B_CURRENT, "Grid B current", 32074).scale(0.001))
        .field(FieldSpec::i32(GRID_C_CURRENT, "Grid C current", 32076).scale(0.001))
        .field(FieldSpec::i32(PEAK_ACTIVE_POWER_DAY, "Peak active power today", 32078).scale(0.001))
        .field(FieldSpec::i32(ACTIVE_POWER, "Active power", 32080).scale(0.001))
        .field(FieldSpec::i32(REACTIVE_POWER, "Reactive power", 32082).scale(0.001))
        .field(FieldSpec::i16(POWER_FACTOR, "Power factor", 32084).scale(0.001))
        .field(FieldSpec::u16(GRID_FREQUENCY, "Grid frequency", 32085).scale(0.01))
        .field(FieldSpec::u16(INVERTER_EFFICIENCY, "Inverter efficiency", 32086).scale(0.01))
        .field(FieldSpec::i16(INTERNAL_TEMPERATURE, "Internal temperature", 32087).scale(0.1))
        .block(32106)
        .field(
            FieldSpec::u32(CUMULATIVE_POWER_GENERATION, "Cumulative power generation", 32106)
                .scale(0.01),
        )
        .block(32114)
        .field(
            FieldSpec::u32(POWER_GENERATION_DAY, "Power generation today", 32114)
                .scale(0.01)
                .no_export(),
        )
        .field(
            FieldSpec::u32(POWER_GENERATION_MONTH, "Power generation this month", 32116)
                .scale(0.01)
                .no_export(),
        )
        .field(
            FieldSpec::u32(POWER_GENERATION_YEAR, "Power generation this year", 32118)
                .scale(0.01)
                .no_export(),
        )
        .block(32180)
        .field(
            FieldSpec::i32(ACTIVE_POWER_CALCULATION, "Active power calculation", 32180).no_export(),
        )
        .block(35502)
        .field(FieldSpec::packed_str(SERIAL_NUMBER, "Serial number", 35502, 8))
        .block(41313)
        .field(FieldSpec::u16(RTC_YEAR_MONTH, "RTC year/month", 41313).no_export())
        .field(FieldSpec::u16(RTC_DAY_HOUR, "RTC day/hour", 41314).no_export())
        .field(FieldSpec::u16(RTC_MINUTE_SECOND, "RTC minute/second", 41315).no_export())
        .build()
}
