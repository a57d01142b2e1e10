pub mod elements;
pub mod kepler;
pub mod maneuvers;

pub use elements::OrbitState;
pub use kepler::{solve_eccentric_anomaly, KeplerSolution, KeplerSolver};
pub use maneuvers::{hohmann, hohmann_mu, HohmannTransfer};
