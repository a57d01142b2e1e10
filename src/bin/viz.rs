use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use orbit_sim::bodies::{MU_EARTH, R_GEO};
use orbit_sim::orbital::{hohmann_mu, HohmannTransfer, OrbitState};

fn main() -> eframe::Result {
    let r1 = 6_771.0;
    let r2 = R_GEO;
    let transfer = hohmann_mu(r1, r2, MU_EARTH);

    let app = TransferViz {
        initial: OrbitState::circular(MU_EARTH, r1),
        target: OrbitState::circular(MU_EARTH, r2),
        transfer,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Hohmann Transfer Planner", options, Box::new(|_| Ok(Box::new(app))))
}

struct TransferViz {
    initial: OrbitState,
    target: OrbitState,
    transfer: HohmannTransfer,
}

/// Sample an orbit into plot points (perifocal frame, km).
fn orbit_points(orbit: &OrbitState, n: usize) -> PlotPoints<'static> {
    orbit.sample_path(n).iter().map(|p| [p.x, p.y]).collect()
}

/// Half of the transfer ellipse: the arc actually flown between the apses.
fn transfer_arc(transfer: &HohmannTransfer, mu: f64) -> PlotPoints<'static> {
    let ecc = (transfer.r1 - transfer.r2).abs() / (transfer.r1 + transfer.r2);
    let ellipse = OrbitState::new(mu, transfer.transfer_sma, ecc, 0.0, 0.0, 0.0);

    let n = 128;
    (0..=n)
        .map(|i| {
            let m = i as f64 * std::f64::consts::PI / n as f64;
            let p = ellipse.position_from_mean_anomaly(m);
            [p.x, p.y]
        })
        .collect()
}

impl eframe::App for TransferViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Hohmann Transfer: LEO → GEO");
            ui.label(format!(
                "Δv1: {:.3} km/s  |  Δv2: {:.3} km/s  |  Total: {:.3} km/s  |  TOF: {:.1} min",
                self.transfer.dv1,
                self.transfer.dv2,
                self.transfer.total_dv,
                self.transfer.transfer_time / 60.0,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("orbital_plane")
                .x_axis_label("x (km)")
                .y_axis_label("y (km)")
                .data_aspect(1.0)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Initial orbit", orbit_points(&self.initial, 256)));
                    plot_ui.line(Line::new("Target orbit", orbit_points(&self.target, 256)));
                    plot_ui.line(Line::new(
                        "Transfer ellipse",
                        transfer_arc(&self.transfer, MU_EARTH),
                    ));
                });
        });
    }
}
