use eframe::egui::{self, RichText, Ui};

use crate::data::transform::{PAYLOAD_BOUNDS, PAYLOAD_STEP, PayloadRange, SiteSelection};
use crate::state::AppState;

/// Fixed tick labels under the payload sliders.
const PAYLOAD_MARKS: [u32; 5] = [0, 2500, 5000, 7500, 10_000];

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the left control panel: site dropdown and payload range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Launch-site dropdown ----
    ui.strong("Launch Site");
    let current = state.controls.selection.clone();
    let mut chosen: Option<SiteSelection> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .width(ui.available_width())
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for option in &state.ctx.site_options {
                if ui
                    .selectable_label(current == *option, option.to_string())
                    .clicked()
                {
                    chosen = Some(option.clone());
                }
            }
        });
    if let Some(selection) = chosen {
        state.set_selection(selection);
    }

    ui.add_space(8.0);
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    let (bound_low, bound_high) = PAYLOAD_BOUNDS;
    let mut low = state.controls.range.low;
    let mut high = state.controls.range.high;

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, bound_low..=bound_high)
                .step_by(PAYLOAD_STEP)
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, bound_low..=bound_high)
                .step_by(PAYLOAD_STEP)
                .text("max"),
        )
        .changed();

    if low_changed || high_changed {
        // Dragging one end past the other pushes the other end along.
        if low_changed && low > high {
            high = low;
        }
        if high_changed && high < low {
            low = high;
        }
        state.set_range(PayloadRange::new(low, high));
    }

    ui.horizontal(|ui: &mut Ui| {
        for (i, mark) in PAYLOAD_MARKS.iter().enumerate() {
            if i > 0 {
                ui.weak("·");
            }
            ui.weak(mark.to_string());
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("SpaceX Launch Records Dashboard").strong());
        ui.separator();
        ui.label(format!(
            "{} launches loaded, {} in view",
            state.ctx.dataset.len(),
            state.scatter.indices.len()
        ));
    });
}
