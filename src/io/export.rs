//! CSV export of the component bill.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sizing::result::SystemDesign;

/// Column header for the component bill export.
const HEADER: &str = "component,specification,quantity";

/// Exports a design's component bill to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(design: &SystemDesign, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(design, buf)
}

/// Writes a design's component bill as CSV to any writer.
///
/// One row per physical component; output is deterministic for identical
/// designs.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(design: &SystemDesign, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    wtr.write_record(&[
        "inverter".to_string(),
        format!(
            "{:.0} W hybrid, {} V bus",
            design.inverter_watts, design.system_voltage
        ),
        "1".to_string(),
    ])?;
    wtr.write_record(&[
        "solar panel".to_string(),
        format!("{:.0} W", design.panels.unit_watts),
        design.panels.count.to_string(),
    ])?;
    wtr.write_record(&[
        "battery".to_string(),
        format!(
            "{} {:.0} Ah, {}S{}P",
            design.battery.chemistry,
            design.battery.unit_amp_hours,
            design.battery.series,
            design.battery.parallel
        ),
        design.battery.total_units.to_string(),
    ])?;
    wtr.write_record(&[
        "charge controller".to_string(),
        format!(
            "{} {} A",
            design.charge_controller.kind, design.charge_controller.amps
        ),
        design.charge_controller.count.to_string(),
    ])?;
    wtr.write_record(&[
        "dc cable".to_string(),
        format!("{} mm2", design.cables.dc_mm2),
        "1".to_string(),
    ])?;
    wtr.write_record(&[
        "ac cable".to_string(),
        format!("{} mm2", design.cables.ac_mm2),
        "1".to_string(),
    ])?;
    wtr.write_record(&[
        "dc breaker".to_string(),
        format!("{} A", design.breakers.dc_amps),
        "1".to_string(),
    ])?;
    wtr.write_record(&[
        "ac breaker".to_string(),
        format!("{} A", design.breakers.ac_amps),
        "1".to_string(),
    ])?;
    if design.accessories.surge_protector {
        wtr.write_record(&["surge protector", "DC side", "1"])?;
    }
    if design.accessories.voltage_regulator {
        wtr.write_record(&["voltage regulator", "AC input", "1"])?;
    }

    wtr.flush()?;
    Ok(())
}
