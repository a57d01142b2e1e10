// ---------------------------------------------------------------------------
// Physical constants (km / km/s / km^3/s^2 unit system)
// ---------------------------------------------------------------------------

/// Earth gravitational parameter, km^3/s^2.
pub const MU_EARTH: f64 = 398_600.4418;

/// Earth equatorial radius, km.
pub const R_EARTH: f64 = 6_378.137;

/// Geostationary orbit radius, km (~35,786 km altitude).
pub const R_GEO: f64 = 42_164.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_radius_matches_sidereal_day() {
        // a = (mu * T^2 / 4pi^2)^(1/3) for T = 86164 s should land on R_GEO
        let t_sidereal = 86_164.0_f64;
        let a = (MU_EARTH * t_sidereal.powi(2) / (4.0 * std::f64::consts::PI.powi(2))).powf(1.0 / 3.0);
        assert!((a - R_GEO).abs() < 5.0, "derived GEO radius {:.1} km", a);
    }
}
