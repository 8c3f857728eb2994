//! Bender power meter telemetry map.
//!
//! Instantaneous measurements are IEEE-754 floats starting at address 0; the
//! energy counters, power quality data, demand blocks, transformer ratios
//! and RTC live in separate register regions, each polled as its own window.
//! The clear-* command registers are write-only controls and are excluded
//! from the telemetry document.

use regmap_core::{CodecResult, FieldSpec, RegisterMap, RegisterMapBuilder};

pub const U1: &str = "u1";
pub const U2: &str = "u2";
pub const U3: &str = "u3";
pub const UAVG_LN: &str = "uln";
pub const UL1L2: &str = "ul1l2";
pub const UL2L3: &str = "ul2l3";
pub const UL3L1: &str = "ul3l1";
pub const UAVG_LL: &str = "ull";
pub const I1: &str = "i1";
pub const I2: &str = "i2";
pub const I3: &str = "i3";
pub const IAVG: &str = "iavg";
pub const P1: &str = "p1";
pub const P2: &str = "p2";
pub const P3: &str = "p3";
pub const PTOT: &str = "ptot";
pub const Q1: &str = "q1";
pub const Q2: &str = "q2";
pub const Q3: &str = "q3";
pub const QTOT: &str = "qtot";
pub const S1: &str = "s1";
pub const S2: &str = "s2";
pub const S3: &str = "s3";
pub const STOT: &str = "stot";
pub const LAM_L1: &str = "laml1";
pub const LAM_L2: &str = "laml2";
pub const LAM_L3: &str = "laml3";
pub const LAM_TOT: &str = "lamtot";
pub const FREQUENCY: &str = "f";

pub const ACT_ENERGY_IN: &str = "l13_active_energy_in";
pub const ACT_ENERGY_OUT: &str = "l13_active_energy_out";
pub const ACT_ENERGY_NET: &str = "l13_active_energy_net";
pub const ACT_ENERGY_TOT: &str = "l13_active_energy_tot";
pub const REACT_ENERGY_IN: &str = "l13_reactive_energy_in";
pub const REACT_ENERGY_OUT: &str = "l13_reactive_energy_out";
pub const REACT_ENERGY_NET: &str = "l13_reactive_energy_net";
pub const REACT_ENERGY_TOT: &str = "l13_reactive_energy_tot";

pub const THD_UL1: &str = "thd_ul1";
pub const THD_UL2: &str = "thd_ul2";

pub const DMD_I1: &str = "dmd_i1";
pub const DMD_I2: &str = "dmd_i2";
pub const DMD_I3: &str = "dmd_i3";
pub const DMD_PTOT: &str = "dmd_ptot";
pub const DMD_QTOT: &str = "dmd_qtot";
pub const DMD_STOT: &str = "dmd_stot";
pub const DMD_PRED_I1: &str = "dmd_pred_i1";
pub const DMD_PRED_I2: &str = "dmd_pred_i2";
pub const DMD_PRED_I3: &str = "dmd_pred_i3";
pub const DMD_PRED_PTOT: &str = "dmd_pred_ptot";
pub const DMD_PRED_QTOT: &str = "dmd_pred_qtot";
pub const DMD_PRED_STOT: &str = "dmd_pred_stot";

pub const PT_PRIM: &str = "pt_prim";
pub const PT_SEC: &str = "pt_sec";
pub const CT_PRIM: &str = "ct_prim";
pub const CT_SEC: &str = "ct_sec";

pub const DMD_PERIOD: &str = "dmd_period";
pub const DMD_WINDOWS: &str = "dmd_windows";
pub const DMD_DYNAMICS: &str = "dmd_dynamics";

pub const UNIX_TS: &str = "unix_ts";

pub const CLEAR_CONCLUDED_LOGS: &str = "clear_concluded_logs";
pub const CLEAR_ENERGY_LOGS: &str = "clear_energy_logs";
pub const CLEAR_ENERGY_MONTH_LOGS: &str = "clear_energy_month_logs";

/// Magic word the meter expects in a clear-* command register.
pub const CLEAR_COMMAND: i64 = 0xFF00;

/// Build the checked meter telemetry map.
pub fn telemetry_map() -> CodecResult<RegisterMap> {
    RegisterMapBuilder::new("bender", 0)
        .field(FieldSpec::f32(U1, "U1", 0))
        .field(FieldSpec::f32(U2, "U2", 2))
        .field(FieldSpec::f32(U3, "U3", 4))
        .field(FieldSpec::f32(UAVG_LN, "U avg L-N", 6))
        .field(FieldSpec::f32(UL1L2, "U L1-L2", 8))
        .field(FieldSpec::f32(UL2L3, "U L2-L3", 10))
        .field(FieldSpec::f32(UL3L1, "U L3-L1", 12))
        .field(FieldSpec::f32(UAVG_LL, "U avg L-L", 14))
        .field(FieldSpec::f32(I1, "I1", 16))
        .field(FieldSpec::f32(I2, "I2", 18))
        .field(FieldSpec::f32(I3, "I3", 20))
        .field(FieldSpec::f32(IAVG, "I avg", 22))
        .field(FieldSpec::f32(P1, "P1", 24))
        .field(FieldSpec::f32(P2, "P2", 26))
        .field(FieldSpec::f32(P3, "P3", 28))
        .field(FieldSpec::f32(PTOT, "P total", 30))
        .field(FieldSpec::f32(Q1, "Q1", 32))
        .field(FieldSpec::f32(Q2, "Q2", 34))
        .field(FieldSpec::f32(Q3, "Q3", 36))
        .field(FieldSpec::f32(QTOT, "Q total", 38))
        .field(FieldSpec::f32(S1, "S L1", 40))
        .field(FieldSpec::f32(S2, "S L2", 42))
        .field(FieldSpec::f32(S3, "S L3", 44))
        .field(FieldSpec::f32(STOT, "S total", 46))
        .field(FieldSpec::f32(LAM_L1, "Lambda L1", 48))
        .field(FieldSpec::f32(LAM_L2, "Lambda L2", 50))
        .field(FieldSpec::f32(LAM_L3, "Lambda L3", 52))
        .field(FieldSpec::f32(LAM_TOT, "Lambda total", 54))
        .field(FieldSpec::f32(FREQUENCY, "Frequency", 56))
        .block(500)
        .field(FieldSpec::i32(ACT_ENERGY_IN, "L1-3 active energy in", 500).scale(0.1))
        .field(FieldSpec::i32(ACT_ENERGY_OUT, "L1-3 active energy out", 502).scale(0.1))
        .field(FieldSpec::i32(ACT_ENERGY_NET, "L1-3 active energy net", 504).scale(0.1))
        .field(FieldSpec::i32(ACT_ENERGY_TOT, "L1-3 active energy total", 506).scale(0.1))
        .field(FieldSpec::i32(REACT_ENERGY_IN, "L1-3 reactive energy in", 508).scale(0.1))
        .field(FieldSpec::i32(REACT_ENERGY_OUT, "L1-3 reactive energy out", 510).scale(0.1))
        .field(FieldSpec::i32(REACT_ENERGY_NET, "L1-3 reactive energy net", 512).scale(0.1))
        .field(FieldSpec::i32(REACT_ENERGY_TOT, "L1-3 reactive energy total", 514).scale(0.1))
        .block(1600)
        .field(FieldSpec::f32(THD_UL1, "THD U L1", 1600))
        .field(FieldSpec::f32(THD_UL2, "THD U L2", 1602))
        .block(3000)
        .field(FieldSpec::f32(DMD_I1, "Demand I1", 3000))
        .field(FieldSpec::f32(DMD_I2, "Demand I2", 3002))
        .field(FieldSpec::f32(DMD_I3, "Demand I3", 3004))
        .field(FieldSpec::f32(DMD_PTOT, "Demand P total", 3006).scale(0.001))
        .field(FieldSpec::f32(DMD_QTOT, "Demand Q total", 3008).scale(0.001))
        .field(FieldSpec::f32(DMD_STOT, "Demand S total", 3010).scale(0.001))
        .block(3200)
        .field(FieldSpec::f32(DMD_PRED_I1, "Predicted demand I1", 3200))
        .field(FieldSpec::f32(DMD_PRED_I2, "Predicted demand I2", 3202))
        .field(FieldSpec::f32(DMD_PRED_I3, "Predicted demand I3", 3204))
        .field(FieldSpec::f32(DMD_PRED_PTOT, "Predicted demand P total", 3206).scale(0.001))
        .field(FieldSpec::f32(DMD_PRED_QTOT, "Predicted demand Q total", 3208).scale(0.001))
        .field(FieldSpec::f32(DMD_PRED_STOT, "Predicted demand S total", 3210).scale(0.001))
        .block(6000)
        .field(FieldSpec::u32(PT_PRIM, "PT primary", 6000))
        .field(FieldSpec::u32(PT_SEC, "PT secondary", 6002))
        .field(FieldSpec::u32(CT_PRIM, "CT primary", 6004))
        .field(FieldSpec::u32(CT_SEC, "CT secondary", 6006))
        .block(6029)
        .field(FieldSpec::u16(DMD_PERIOD, "Demand period", 6029))
        .field(FieldSpec::u16(DMD_WINDOWS, "Demand windows", 6030))
        .field(FieldSpec::u16(DMD_DYNAMICS, "Demand dynamics", 6031))
        .block(9004)
        .field(FieldSpec::u32(UNIX_TS, "Unix timestamp", 9004))
        .block(9600)
        .field(FieldSpec::u16(CLEAR_CONCLUDED_LOGS, "Clear concluded logs", 9600).no_export())
        .field(FieldSpec::u16(CLEAR_ENERGY_LOGS, "Clear energy logs", 9601).no_export())
        .field(FieldSpec::u16(CLEAR_ENERGY_MONTH_LOGS, "Clear energy month logs", 9602).no_export())
        .build()
}
