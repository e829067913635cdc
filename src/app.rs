use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PeaceAtlasApp {
    pub state: AppState,
}

impl PeaceAtlasApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PeaceAtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: ledger ----
        egui::TopBottomPanel::bottom("ledger_panel")
            .default_height(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                table::ledger_table(ui, &self.state);
            });

        // ---- Central panel: metrics + map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Projects for Peace");
            panels::metrics_row(ui, &self.state);
            ui.add_space(6.0);
            plot::project_map(ui, &self.state);
        });
    }
}
