use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Scatter chart (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter chart for the visible records.
///
/// With a cost metric the chart plots cost (x) against the primary metric
/// (y); without one it falls back to record position on x so single-metric
/// datasets still get a chart.
pub fn scatter_plot(ui: &mut Ui, view: &ViewState, height: f32) {
    let has_cost = view.dataset.has_cost();
    let x_label = view
        .dataset
        .labels
        .cost
        .clone()
        .unwrap_or_else(|| "Record".to_string());

    // Group visible records by category so each gets one legend entry.
    let mut by_category: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for (pos, &idx) in view.visible.iter().enumerate() {
        let rec = &view.dataset.records[idx];
        let x = if has_cost {
            rec.cost.unwrap_or_default()
        } else {
            pos as f64
        };
        by_category
            .entry(rec.category.as_str())
            .or_default()
            .push([x, rec.primary]);
    }

    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label(&view.dataset.labels.primary)
        .height(height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, coords) in by_category {
                let points: PlotPoints = coords.into_iter().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(view.colors.color_for(category))
                        .radius(4.0),
                );
            }
        });
}
