use orbit_sim::bodies::{MU_EARTH, R_EARTH, R_GEO};
use orbit_sim::io::csv::write_orbit_path_file;
use orbit_sim::io::json::{write_summary_file, TransferSummary};
use orbit_sim::orbital::{hohmann_mu, OrbitState};

fn main() {
    // -----------------------------------------------------------------------
    // Scenario: parking orbit, optionally overridden from the command line
    //   orbit-sim [a_km] [ecc]
    // -----------------------------------------------------------------------
    let args: Vec<String> = std::env::args().collect();
    let a_km = parse_arg(&args, 1, 6_771.0);
    let ecc = parse_arg(&args, 2, 0.0);

    // The engine trusts its inputs; bad elements are rejected here.
    if a_km <= 0.0 {
        eprintln!("error: semi-major axis must be positive (got {a_km})");
        std::process::exit(1);
    }
    if !(0.0..1.0).contains(&ecc) {
        eprintln!("error: eccentricity must lie in [0, 1) (got {ecc})");
        std::process::exit(1);
    }

    let orbit = OrbitState::new(MU_EARTH, a_km, ecc, 51.6, 0.0, 0.0);
    let period = orbit.period();

    // -----------------------------------------------------------------------
    // Print report
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  ORBIT & TRANSFER REPORT");
    println!("====================================================================");
    println!();
    println!("  Orbit Elements");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Semi-major axis: {:>10.1} km    Eccentricity: {:>8.4}",
        orbit.a, orbit.e
    );
    println!(
        "  Inclination:     {:>10.1} deg   RAAN:         {:>8.1} deg",
        orbit.inc_deg, orbit.raan_deg
    );
    println!(
        "  Arg of perigee:  {:>10.1} deg   Altitude:     {:>8.1} km (mean)",
        orbit.argp_deg,
        orbit.a - R_EARTH
    );
    println!();

    println!("  Derived Quantities");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Period:          {:>10.1} s     ({:.1} min)",
        period,
        period / 60.0
    );
    println!(
        "  Mean motion:     {:>10.6} rad/s",
        orbit.mean_motion()
    );
    println!(
        "  Periapsis:       {:>10.1} km    v = {:>7.3} km/s",
        orbit.periapsis(),
        orbit.velocity_at_radius(orbit.periapsis())
    );
    println!(
        "  Apoapsis:        {:>10.1} km    v = {:>7.3} km/s",
        orbit.apoapsis(),
        orbit.velocity_at_radius(orbit.apoapsis())
    );
    println!();

    // -----------------------------------------------------------------------
    // Hohmann transfer from the parking orbit radius up to GEO
    // -----------------------------------------------------------------------
    let transfer = hohmann_mu(orbit.a, R_GEO, MU_EARTH);
    let summary = TransferSummary::from_transfer(&transfer, MU_EARTH);

    println!("  Hohmann Transfer → GEO");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  From radius:     {:>10.1} km    To radius:    {:>10.1} km",
        transfer.r1, transfer.r2
    );
    println!(
        "  Transfer SMA:    {:>10.1} km    Time of flight: {:>7.1} min",
        transfer.transfer_sma,
        transfer.transfer_time / 60.0
    );
    println!(
        "  Delta-v 1:       {:>10.4} km/s  Delta-v 2:    {:>10.4} km/s",
        transfer.dv1, transfer.dv2
    );
    println!("  Total delta-v:   {:>10.4} km/s", transfer.total_dv);
    println!();

    println!("  Mission Timeline");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  DEPART    t={:>8.1}s   burn {:>7.4} km/s  (enter transfer ellipse)",
        0.0, transfer.dv1
    );
    println!(
        "  ARRIVE    t={:>8.1}s   burn {:>7.4} km/s  (circularize at target)",
        transfer.transfer_time, transfer.dv2
    );
    println!();

    // -----------------------------------------------------------------------
    // Sampled orbit path (perifocal frame)
    // -----------------------------------------------------------------------
    println!("  Orbit Path");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>9}  {:>10}  {:>10}  {:>10}  {:>8}",
        "M (rad)", "x (km)", "y (km)", "r (km)", "v (km/s)"
    );
    println!("  {}", "─".repeat(56));

    let n = 12;
    let step = 2.0 * std::f64::consts::PI / n as f64;
    for i in 0..=n {
        let m = i as f64 * step;
        let pos = orbit.position_from_mean_anomaly(m);
        let r = pos.norm();
        println!(
            "  {:>9.4}  {:>10.1}  {:>10.1}  {:>10.1}  {:>8.3}",
            m,
            pos.x,
            pos.y,
            r,
            orbit.velocity_at_radius(r)
        );
    }
    println!();

    // -----------------------------------------------------------------------
    // Export artifacts
    // -----------------------------------------------------------------------
    if let Err(err) = write_orbit_path_file("orbit_path.csv", &orbit, 360) {
        eprintln!("warning: could not write orbit_path.csv: {err}");
    }
    if let Err(err) = write_summary_file("transfer.json", "Parking orbit to GEO", &summary) {
        eprintln!("warning: could not write transfer.json: {err}");
    }
    println!("  Wrote orbit_path.csv and transfer.json");
    println!("====================================================================");
    println!();
}

/// Parse a positional float argument, falling back to a default.
fn parse_arg(args: &[String], idx: usize, default: f64) -> f64 {
    match args.get(idx) {
        Some(raw) => match raw.parse() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("error: could not parse '{raw}' as a number");
                std::process::exit(1);
            }
        },
        None => default,
    }
}
