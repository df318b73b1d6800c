use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filter controls ----
        egui::SidePanel::left("control_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: payload vs. outcome scatter ----
        egui::TopBottomPanel::bottom("scatter_panel")
            .default_height(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                plot::payload_scatter(ui, &self.state);
            });

        // ---- Central panel: success pie ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::success_pie(ui, &self.state);
        });
    }
}
