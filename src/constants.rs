pub const TWO_LEVEL_AXIS_LEN: usize = 2;
pub const EXPECTED_CELL_MIN: f64 = 5.0;
pub const TREND_DOF: u32 = 1;
