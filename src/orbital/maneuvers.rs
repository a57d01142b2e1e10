use crate::bodies::MU_EARTH;

/// Result of a Hohmann transfer calculation.
#[derive(Debug, Clone, Copy)]
pub struct HohmannTransfer {
    pub dv1: f64,          // km/s, departure burn at r1
    pub dv2: f64,          // km/s, arrival burn at r2
    pub total_dv: f64,     // km/s, dv1 + dv2
    pub transfer_time: f64, // s, half the transfer ellipse period
    pub transfer_sma: f64, // km, transfer ellipse semi-major axis
    pub r1: f64,           // km, initial circular radius
    pub r2: f64,           // km, final circular radius
}

/// Compute the Hohmann transfer between two circular coplanar orbits
/// around Earth.
///
/// `r1` and `r2` are orbital radii (not altitudes), in km, in either
/// order; the transfer works whether raising or lowering.
pub fn hohmann(r1: f64, r2: f64) -> HohmannTransfer {
    hohmann_mu(r1, r2, MU_EARTH)
}

/// Hohmann transfer with explicit gravitational parameter (km^3/s^2).
///
/// Preconditions `r1, r2, mu > 0` are the caller's responsibility; they
/// are not checked here.
pub fn hohmann_mu(r1: f64, r2: f64, mu: f64) -> HohmannTransfer {
    let a_transfer = (r1 + r2) / 2.0;

    let v_circ1 = (mu / r1).sqrt();
    let v_circ2 = (mu / r2).sqrt();

    // Transfer ellipse speeds at its two apses (vis-viva)
    let v_transfer_1 = (mu * (2.0 / r1 - 1.0 / a_transfer)).sqrt();
    let v_transfer_2 = (mu * (2.0 / r2 - 1.0 / a_transfer)).sqrt();

    let dv1 = (v_transfer_1 - v_circ1).abs();
    let dv2 = (v_circ2 - v_transfer_2).abs();

    let transfer_time = std::f64::consts::PI * (a_transfer.powi(3) / mu).sqrt();

    HohmannTransfer {
        dv1,
        dv2,
        total_dv: dv1 + dv2,
        transfer_time,
        transfer_sma: a_transfer,
        r1,
        r2,
    }
}

/// Circular orbit speed (km/s) at a given radius around Earth.
pub fn circular_velocity(r: f64) -> f64 {
    circular_velocity_mu(r, MU_EARTH)
}

pub fn circular_velocity_mu(r: f64, mu: f64) -> f64 {
    (mu / r).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::R_GEO;

    #[test]
    fn hohmann_leo_to_geo() {
        // ISS-like departure radius to GEO
        let h = hohmann_mu(6771.0, R_GEO, MU_EARTH);

        assert!(
            (h.dv1 - 2.3995).abs() < 0.001,
            "departure burn should be ~2.40 km/s, got {:.4}",
            h.dv1
        );
        assert!(
            (h.dv2 - 1.4572).abs() < 0.001,
            "arrival burn should be ~1.46 km/s, got {:.4}",
            h.dv2
        );
        // Known LEO->GEO total: ~3.9 km/s
        assert!(
            h.total_dv > 3.8 && h.total_dv < 3.95,
            "LEO->GEO dv should be ~3.9 km/s, got {:.3}",
            h.total_dv
        );
        // Transfer time ~5.3 hours
        assert!(
            h.transfer_time > 18_900.0 && h.transfer_time < 19_200.0,
            "transfer time should be ~5.3 hr, got {:.0} s",
            h.transfer_time
        );
        assert!((h.transfer_sma - 24_467.5).abs() < 1e-9);
    }

    #[test]
    fn symmetric_in_total_cost_and_duration() {
        let up = hohmann_mu(6771.0, R_GEO, MU_EARTH);
        let down = hohmann_mu(R_GEO, 6771.0, MU_EARTH);
        assert!((up.total_dv - down.total_dv).abs() < 1e-12);
        assert!((up.transfer_time - down.transfer_time).abs() < 1e-9);
        // The individual burns swap roles
        assert!((up.dv1 - down.dv2).abs() < 1e-12);
        assert!((up.dv2 - down.dv1).abs() < 1e-12);
    }

    #[test]
    fn zero_dv_for_same_orbit() {
        let h = hohmann(7000.0, 7000.0);
        assert!(h.total_dv < 1e-9);
        // Degenerate "transfer" is half the circular period
        let half_period = std::f64::consts::PI * (7000.0_f64.powi(3) / MU_EARTH).sqrt();
        assert!((h.transfer_time - half_period).abs() < 1e-9);
    }

    #[test]
    fn lowering_burns_are_retrograde_magnitudes() {
        // dv magnitudes for a lowering transfer stay positive
        let h = hohmann_mu(R_GEO, 6771.0, MU_EARTH);
        assert!(h.dv1 > 0.0 && h.dv2 > 0.0);
        assert!((h.total_dv - 3.8567).abs() < 0.001);
    }

    #[test]
    fn circular_velocity_leo() {
        // 6771 km radius: ~7.67 km/s
        let v = circular_velocity_mu(6771.0, MU_EARTH);
        assert!((v - 7.6726).abs() < 0.001);
    }
}
