use std::io::{self, Write};

use crate::orbital::maneuvers::{circular_velocity_mu, HohmannTransfer};
use crate::orbital::OrbitState;

/// Report values derived from a Hohmann transfer plan.
#[derive(Debug, Clone)]
pub struct TransferSummary {
    pub r1_km: f64,
    pub r2_km: f64,
    pub v_circ1_km_s: f64,
    pub v_circ2_km_s: f64,
    pub dv1_km_s: f64,
    pub dv2_km_s: f64,
    pub total_dv_km_s: f64,
    pub transfer_sma_km: f64,
    pub time_of_flight_s: f64,
    pub initial_period_s: f64,
    pub final_period_s: f64,
}

impl TransferSummary {
    /// Derive the report values from a transfer result.
    pub fn from_transfer(transfer: &HohmannTransfer, mu: f64) -> Self {
        TransferSummary {
            r1_km: transfer.r1,
            r2_km: transfer.r2,
            v_circ1_km_s: circular_velocity_mu(transfer.r1, mu),
            v_circ2_km_s: circular_velocity_mu(transfer.r2, mu),
            dv1_km_s: transfer.dv1,
            dv2_km_s: transfer.dv2,
            total_dv_km_s: transfer.total_dv,
            transfer_sma_km: transfer.transfer_sma,
            time_of_flight_s: transfer.transfer_time,
            initial_period_s: OrbitState::circular(mu, transfer.r1).period(),
            final_period_s: OrbitState::circular(mu, transfer.r2).period(),
        }
    }
}

/// Write a transfer summary as JSON to a writer.
///
/// The burn timeline places the departure burn at t = 0 and the arrival
/// burn at t = time_of_flight.
pub fn write_summary<W: Write>(
    writer: &mut W,
    mission_name: &str,
    summary: &TransferSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"mission\": \"{}\",", mission_name)?;
    writeln!(writer, "  \"orbits\": {{")?;
    writeln!(writer, "    \"r1_km\": {:.3},", summary.r1_km)?;
    writeln!(writer, "    \"r2_km\": {:.3},", summary.r2_km)?;
    writeln!(writer, "    \"initial_period_s\": {:.1},", summary.initial_period_s)?;
    writeln!(writer, "    \"final_period_s\": {:.1}", summary.final_period_s)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"transfer\": {{")?;
    writeln!(writer, "    \"sma_km\": {:.3},", summary.transfer_sma_km)?;
    writeln!(writer, "    \"dv1_km_s\": {:.4},", summary.dv1_km_s)?;
    writeln!(writer, "    \"dv2_km_s\": {:.4},", summary.dv2_km_s)?;
    writeln!(writer, "    \"total_dv_km_s\": {:.4},", summary.total_dv_km_s)?;
    writeln!(writer, "    \"time_of_flight_s\": {:.1}", summary.time_of_flight_s)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"timeline\": [")?;
    writeln!(
        writer,
        "    {{ \"t_s\": 0.0, \"event\": \"departure burn\", \"dv_km_s\": {:.4} }},",
        summary.dv1_km_s
    )?;
    writeln!(
        writer,
        "    {{ \"t_s\": {:.1}, \"event\": \"arrival burn\", \"dv_km_s\": {:.4} }}",
        summary.time_of_flight_s, summary.dv2_km_s
    )?;
    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write a transfer summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    mission_name: &str,
    summary: &TransferSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, mission_name, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{MU_EARTH, R_GEO};
    use crate::orbital::hohmann_mu;

    #[test]
    fn summary_derives_circular_speeds() {
        let transfer = hohmann_mu(6771.0, R_GEO, MU_EARTH);
        let s = TransferSummary::from_transfer(&transfer, MU_EARTH);

        assert!((s.v_circ1_km_s - 7.6726).abs() < 0.001);
        assert!((s.v_circ2_km_s - 3.0747).abs() < 0.001);
        assert!((s.initial_period_s - 5545.0).abs() < 5.0);
        // GEO period: one sidereal day
        assert!((s.final_period_s - 86_164.0).abs() < 10.0);
    }

    #[test]
    fn json_output_is_valid() {
        let transfer = hohmann_mu(6771.0, R_GEO, MU_EARTH);
        let summary = TransferSummary::from_transfer(&transfer, MU_EARTH);

        let mut buf = Vec::new();
        write_summary(&mut buf, "LEO to GEO", &summary).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"mission\": \"LEO to GEO\""));
        assert!(json.contains("\"total_dv_km_s\""));
        assert!(json.contains("\"departure burn\""));
        assert!(json.contains("\"arrival burn\""));
    }
}
