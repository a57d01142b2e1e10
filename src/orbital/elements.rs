use nalgebra::Vector2;

use crate::orbital::kepler::solve_eccentric_anomaly;

/// Planar two-body orbit state: gravitational parameter plus classical
/// elements. Immutable; every derived quantity is a pure function of the
/// stored elements.
///
/// Units are km, km/s, km^3/s^2. The orientation angles are kept in
/// degrees for reporting and never enter the planar computations.
///
/// Invariant assumed (not enforced): `mu > 0`, `a > 0`, `0 <= e < 1`.
/// Derived values are unspecified (possibly NaN) outside that envelope;
/// callers validate before construction.
#[derive(Debug, Clone, Copy)]
pub struct OrbitState {
    pub mu: f64,       // gravitational parameter, km^3/s^2
    pub a: f64,        // semi-major axis, km
    pub e: f64,        // eccentricity (0 = circular)
    pub inc_deg: f64,  // inclination, deg (reporting only)
    pub raan_deg: f64, // right ascension of ascending node, deg (reporting only)
    pub argp_deg: f64, // argument of perigee, deg (reporting only)
}

impl OrbitState {
    /// Orbit from gravitational parameter and full element set.
    pub fn new(mu: f64, a: f64, e: f64, inc_deg: f64, raan_deg: f64, argp_deg: f64) -> Self {
        OrbitState {
            mu,
            a,
            e,
            inc_deg,
            raan_deg,
            argp_deg,
        }
    }

    /// Circular orbit of radius `r` around a body with parameter `mu`.
    pub fn circular(mu: f64, r: f64) -> Self {
        OrbitState {
            mu,
            a: r,
            e: 0.0,
            inc_deg: 0.0,
            raan_deg: 0.0,
            argp_deg: 0.0,
        }
    }

    /// Orbital period (s): `2*pi*sqrt(a^3/mu)`.
    pub fn period(&self) -> f64 {
        2.0 * std::f64::consts::PI * (self.a.powi(3) / self.mu).sqrt()
    }

    /// Mean motion (rad/s): `sqrt(mu/a^3)`.
    pub fn mean_motion(&self) -> f64 {
        (self.mu / self.a.powi(3)).sqrt()
    }

    /// Periapsis radius `a*(1 - e)` (km).
    pub fn periapsis(&self) -> f64 {
        self.a * (1.0 - self.e)
    }

    /// Apoapsis radius `a*(1 + e)` (km).
    pub fn apoapsis(&self) -> f64 {
        self.a * (1.0 + self.e)
    }

    /// Position in the perifocal frame (km) for a mean anomaly (rad).
    ///
    /// Solves Kepler's equation for the eccentric anomaly, then recovers
    /// radius and true anomaly. x points toward perigee. The returned
    /// radius always lies in `[a(1-e), a(1+e)]`.
    pub fn position_from_mean_anomaly(&self, mean_anomaly: f64) -> Vector2<f64> {
        let e_anom = solve_eccentric_anomaly(mean_anomaly, self.e);

        let denom = 1.0 - self.e * e_anom.cos();
        let r = self.a * denom;

        let sin_f = (1.0 - self.e * self.e).sqrt() * e_anom.sin() / denom;
        let cos_f = (e_anom.cos() - self.e) / denom;
        let f = sin_f.atan2(cos_f);

        Vector2::new(r * f.cos(), r * f.sin())
    }

    /// Orbital speed (km/s) at radius `r` from the vis-viva equation
    /// `sqrt(mu*(2/r - 1/a))`.
    ///
    /// `r` must come from this orbit (within `[a(1-e), a(1+e)]`); the
    /// radicand goes negative outside the bound-orbit envelope and the
    /// result is then NaN.
    pub fn velocity_at_radius(&self, r: f64) -> f64 {
        (self.mu * (2.0 / r - 1.0 / self.a)).sqrt()
    }

    /// Sample the orbit path at `n` evenly spaced mean anomalies over one
    /// period, plus a closing point back at periapsis (`n + 1` positions).
    pub fn sample_path(&self, n: usize) -> Vec<Vector2<f64>> {
        let step = 2.0 * std::f64::consts::PI / n as f64;
        (0..=n)
            .map(|i| self.position_from_mean_anomaly(i as f64 * step))
            .collect()
    }
}
