// Modules
pub mod axis;
pub mod constants;
pub mod data;
pub mod errors;
pub mod expected;
pub mod pvalue;
pub mod trend;

// Individual structs, and functions
pub use axis::Axis;
pub use data::ContingencyTable;
pub use errors::TrendTestError;
pub use trend::{chisquare_trend_contingency, TrendTest};
