mod panel;
pub use panel::GroupPanel;

mod table;
pub use table::GroupTable;

mod chart;
pub use chart::PressureChart;

mod utils;
pub(crate) use utils::*;

use api::MeasurementRecord;

use crate::core::grouping::{self, MeasurementGroup};

/// Shared state for the measurements view: grouped records or a load error.
#[derive(Debug, Clone, Default)]
pub struct MeasurementsState {
    pub groups: Vec<MeasurementGroup>,
    pub error: Option<String>,
}

impl MeasurementsState {
    /// Build view state from one fetch outcome.
    pub fn from_fetch(result: Result<Vec<MeasurementRecord>, String>) -> Self {
        match result {
            Ok(records) => Self {
                groups: grouping::group_records(&records),
                error: None,
            },
            Err(message) => Self {
                groups: Vec::new(),
                error: Some(message),
            },
        }
    }
}
