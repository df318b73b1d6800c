use std::collections::BTreeMap;
use std::f64::consts::TAU;

use eframe::egui::{Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points, Polygon};

use crate::color::generate_palette;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Success pie chart (central panel)
// ---------------------------------------------------------------------------

/// Render the success-distribution pie from the cached [`PieSpec`].
///
/// egui_plot has no pie primitive, so each slice is a filled wedge polygon
/// on a unit circle.
///
/// [`PieSpec`]: crate::data::transform::PieSpec
pub fn success_pie(ui: &mut Ui, state: &AppState) {
    let spec = &state.pie;
    ui.strong(&spec.title);

    let total = spec.total();
    let palette = generate_palette(spec.slices.len());

    Plot::new("success_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.3)
        .include_y(1.3)
        .show(ui, |plot_ui| {
            if total == 0 {
                return;
            }
            let mut start = TAU / 4.0; // first slice begins at twelve o'clock
            for ((label, count), color) in spec.slices.iter().zip(palette) {
                let frac = *count as f64 / total as f64;
                let end = start + frac * TAU;

                // Wedge outline: centre plus an arc sampled finely enough
                // to look round at any slice size.
                let steps = ((frac * 96.0).ceil() as usize).max(2);
                let mut outline: Vec<[f64; 2]> = Vec::with_capacity(steps + 2);
                outline.push([0.0, 0.0]);
                for k in 0..=steps {
                    let angle = start + (end - start) * k as f64 / steps as f64;
                    outline.push([angle.cos(), angle.sin()]);
                }

                let pct = 100.0 * frac;
                let wedge = Polygon::new(PlotPoints::from(outline))
                    .name(format!("{label}: {count} ({pct:.1}%)"))
                    .fill_color(color.gamma_multiply(0.85))
                    .stroke(Stroke::new(1.0, color));
                plot_ui.polygon(wedge);

                start = end;
            }
        });
}

// ---------------------------------------------------------------------------
// Payload vs. outcome scatter (bottom panel)
// ---------------------------------------------------------------------------

/// Render the payload-vs-outcome scatter from the cached [`ScatterSpec`].
/// Points are grouped by booster version so each version gets one legend
/// entry and one colour. Zero matching records renders an empty plot.
///
/// [`ScatterSpec`]: crate::data::transform::ScatterSpec
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    let spec = &state.scatter;
    let dataset = &state.ctx.dataset;
    ui.strong(&spec.title);

    let mut by_booster: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &spec.indices {
        let rec = &dataset.records[idx];
        by_booster
            .entry(rec.booster_version.as_str())
            .or_default()
            .push([rec.payload_mass_kg, rec.outcome.as_class() as f64]);
    }

    let axis_labels = spec.axis_labels;

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Launch Outcome")
        .y_axis_formatter(move |mark, _range| {
            axis_labels
                .iter()
                .find(|(value, _)| (mark.value - value).abs() < 1e-6)
                .map(|(_, label)| (*label).to_string())
                .unwrap_or_default()
        })
        .include_y(-0.25)
        .include_y(1.25)
        .show(ui, |plot_ui| {
            for (version, points) in by_booster {
                let scatter = Points::new(PlotPoints::from(points))
                    .name(version)
                    .color(state.booster_colors.color_for(version))
                    .shape(MarkerShape::Circle)
                    .radius(4.0);
                plot_ui.points(scatter);
            }
        });
}
