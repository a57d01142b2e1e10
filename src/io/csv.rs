use std::io::{self, Write};

use crate::orbital::OrbitState;

/// Write a sampled orbit path to CSV format.
///
/// Columns: mean_anomaly_rad, x_km, y_km, radius_km, speed_km_s
///
/// Positions are in the perifocal frame; speed comes from vis-viva at the
/// sampled radius.
pub fn write_orbit_path<W: Write>(writer: &mut W, orbit: &OrbitState, n: usize) -> io::Result<()> {
    writeln!(writer, "mean_anomaly_rad,x_km,y_km,radius_km,speed_km_s")?;

    let step = 2.0 * std::f64::consts::PI / n as f64;
    for i in 0..=n {
        let m = i as f64 * step;
        let pos = orbit.position_from_mean_anomaly(m);
        let r = pos.norm();
        writeln!(
            writer,
            "{:.6},{:.4},{:.4},{:.4},{:.6}",
            m,
            pos.x,
            pos.y,
            r,
            orbit.velocity_at_radius(r),
        )?;
    }

    Ok(())
}

/// Write a sampled orbit path to a CSV file at the given path.
pub fn write_orbit_path_file(path: &str, orbit: &OrbitState, n: usize) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_orbit_path(&mut file, orbit, n)
}
