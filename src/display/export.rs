//! CSV and JSON export of calculator results

use std::io::Write;

use crate::error::Result;
use crate::projection::{CompoundingResult, TrajectoryPoint};

/// Write `year,value` rows with values to two decimals
pub fn write_trajectory_csv<W: Write>(writer: W, points: &[TrajectoryPoint]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["year", "value"])?;
    for point in points {
        csv.write_record([point.period.to_string(), format!("{:.2}", point.value)])?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn result_to_json(result: &CompoundingResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
