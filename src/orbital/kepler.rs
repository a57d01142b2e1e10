use std::f64::consts::PI;

/// Eccentricities below this are treated as circular (E = M exactly).
const CIRCULAR_ECC: f64 = 1e-8;

/// Newton-Raphson solver for Kepler's equation `E - e*sin(E) = M`.
///
/// The solver never fails: if the iteration budget runs out before the
/// step shrinks below `tol`, the last iterate is returned and the
/// [`KeplerSolution::converged`] flag is false. Callers that need strict
/// guarantees can inspect the final residual.
#[derive(Debug, Clone, Copy)]
pub struct KeplerSolver {
    /// Absolute tolerance on the Newton step (rad).
    pub tol: f64,
    /// Iteration budget.
    pub max_iter: usize,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        KeplerSolver {
            tol: 1e-9,
            max_iter: 200,
        }
    }
}

/// Outcome of a Kepler-equation solve.
#[derive(Debug, Clone, Copy)]
pub struct KeplerSolution {
    /// Eccentric anomaly (rad).
    pub ecc_anomaly: f64,
    /// Final residual `E - e*sin(E) - M` (rad).
    pub residual: f64,
    /// Newton iterations performed.
    pub iterations: usize,
    /// Whether the step tolerance was met within the budget.
    pub converged: bool,
}

impl KeplerSolver {
    /// Solve for the eccentric anomaly given mean anomaly (rad, may be
    /// unreduced) and eccentricity.
    ///
    /// Requires `0 <= e < 1`; the derivative `1 - e*cos(E)` is then
    /// bounded away from zero and the division is safe.
    pub fn solve(&self, mean_anomaly: f64, ecc: f64) -> KeplerSolution {
        if ecc < CIRCULAR_ECC {
            return KeplerSolution {
                ecc_anomaly: mean_anomaly,
                residual: 0.0,
                iterations: 0,
                converged: true,
            };
        }

        // Standard starting guess: M itself for moderate eccentricity,
        // pi for high eccentricity (keeps Newton in the convergent basin).
        let mut e_anom = if ecc < 0.8 { mean_anomaly } else { PI };

        let mut converged = false;
        let mut iterations = 0;
        for _ in 0..self.max_iter {
            let f = e_anom - ecc * e_anom.sin() - mean_anomaly;
            let fp = 1.0 - ecc * e_anom.cos();
            let step = f / fp;
            e_anom -= step;
            iterations += 1;
            if step.abs() < self.tol {
                converged = true;
                break;
            }
        }

        KeplerSolution {
            ecc_anomaly: e_anom,
            residual: e_anom - ecc * e_anom.sin() - mean_anomaly,
            iterations,
            converged,
        }
    }
}

/// Solve Kepler's equation with default tolerance and iteration budget.
pub fn solve_eccentric_anomaly(mean_anomaly: f64, ecc: f64) -> f64 {
    KeplerSolver::default().solve(mean_anomaly, ecc).ecc_anomaly
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_orbit_returns_mean_anomaly() {
        let sol = KeplerSolver::default().solve(1.234, 0.0);
        assert_eq!(sol.ecc_anomaly, 1.234);
        assert_eq!(sol.iterations, 0);
        assert!(sol.converged);
    }

    #[test]
    fn round_trip_over_eccentricity_range() {
        let solver = KeplerSolver::default();
        for &ecc in &[0.0, 0.1, 0.3, 0.7, 0.9, 0.99] {
            for i in 0..72 {
                let e_true = i as f64 * 2.0 * PI / 72.0;
                let m = e_true - ecc * e_true.sin();
                let sol = solver.solve(m, ecc);
                assert!(
                    (sol.ecc_anomaly - e_true).abs() < 1e-6,
                    "round-trip failed: e={} E={} got {}",
                    ecc,
                    e_true,
                    sol.ecc_anomaly
                );
            }
        }
    }

    #[test]
    fn accepts_unreduced_mean_anomaly() {
        // 4 full revolutions past periapsis
        let m = 25.13;
        let sol = KeplerSolver::default().solve(m, 0.4);
        assert!(sol.converged);
        assert!(
            sol.residual.abs() < 1e-8,
            "residual {} too large for unreduced M",
            sol.residual
        );
    }

    #[test]
    fn high_eccentricity_converges() {
        // e >= 0.8 takes the E0 = pi starting guess
        let sol = KeplerSolver::default().solve(0.1, 0.97);
        assert!(sol.converged, "did not converge in {} iters", sol.iterations);
        assert!(sol.residual.abs() < 1e-8);
    }

    #[test]
    fn exhausted_budget_still_returns_value() {
        let solver = KeplerSolver {
            tol: 0.0, // unreachable tolerance
            max_iter: 5,
        };
        let sol = solver.solve(2.0, 0.5);
        assert!(!sol.converged);
        assert_eq!(sol.iterations, 5);
        assert!(sol.ecc_anomaly.is_finite());
        // Newton still lands very close in 5 iterations
        assert!(sol.residual.abs() < 1e-6);
    }
}
