use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::summary::Summary;
use crate::state::{AppState, ViewKind, ViewState};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter panel for the active view.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let view = state.active_view_mut();

    if view.dataset.is_empty() {
        ui.label("No data loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            category_filter(ui, view);
            ui.separator();
            primary_range_filter(ui, view);
            if view.dataset.has_cost() {
                ui.separator();
                cost_ceiling_filter(ui, view);
            }
        });
}

fn category_filter(ui: &mut Ui, view: &mut ViewState) {
    let all_categories = view.dataset.categories.clone();
    let n_selected = view.criteria.categories.len();
    let header_text = format!("Region  ({n_selected}/{})", all_categories.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    view.select_all_categories();
                }
                if ui.small_button("None").clicked() {
                    view.select_no_categories();
                }
            });

            for cat in &all_categories {
                let mut checked = view.criteria.categories.contains(cat);
                let text = RichText::new(cat).color(view.colors.color_for(cat));
                if ui.checkbox(&mut checked, text).changed() {
                    view.toggle_category(cat);
                }
            }
        });
}

fn primary_range_filter(ui: &mut Ui, view: &mut ViewState) {
    // Slider bounds come from the loaded data, never from constants, so a
    // differently-ranged file still starts with everything visible.
    let (lo, hi) = view.dataset.primary_bounds.unwrap_or((0.0, 100.0));
    let (mut min, mut max) = view.criteria.primary_range;

    ui.strong(&view.dataset.labels.primary);
    let mut changed = false;
    changed |= ui.add(Slider::new(&mut min, lo..=hi).text("min")).changed();
    changed |= ui.add(Slider::new(&mut max, lo..=hi).text("max")).changed();
    if changed {
        view.set_primary_range(min, max);
    }

    if let Some(err) = &view.criteria_error {
        ui.label(RichText::new(err).color(Color32::RED));
    }
}

fn cost_ceiling_filter(ui: &mut Ui, view: &mut ViewState) {
    let Some(cost_label) = view.dataset.labels.cost.clone() else {
        return;
    };
    let hi = view.dataset.max_cost.unwrap_or(1.0);
    let mut ceiling = view.criteria.cost_ceiling.unwrap_or(hi);

    ui.strong(format!("Max {cost_label}"));
    if ui.add(Slider::new(&mut ceiling, 0.0..=hi)).changed() {
        view.set_cost_ceiling(ceiling);
    }
}

// ---------------------------------------------------------------------------
// Narrative summary
// ---------------------------------------------------------------------------

/// Render the insight strip above the chart.
pub fn summary_strip(ui: &mut Ui, view: &ViewState) {
    if let Some(err) = &view.criteria_error {
        ui.label(RichText::new(format!("Invalid filter: {err}")).color(Color32::RED));
        return;
    }
    match &view.summary {
        Summary::NoData { total: 0 } => {
            ui.label("No data loaded.");
        }
        Summary::NoData { total } => {
            ui.label(format!(
                "No records match the current filters (out of {total} total)."
            ));
        }
        Summary::Stats(stats) => {
            let primary_label = &view.dataset.labels.primary;
            ui.label(format!(
                "{} of {} records match. Average {primary_label}: {:.2}",
                stats.count, stats.total, stats.mean_primary
            ));
            if let (Some(mean_cost), Some(cost_label)) =
                (stats.mean_cost, view.dataset.labels.cost.as_deref())
            {
                ui.label(format!("Average {cost_label}: {mean_cost:.2}"));
            }
            if let Some(i) = stats.best_value {
                let rec = &view.dataset.records[i];
                ui.label(format!(
                    "Best value: {} ({:.2})",
                    rec.name,
                    rec.cost.unwrap_or_default()
                ));
            }
            let top = &view.dataset.records[stats.best_primary];
            ui.label(format!(
                "Highest {primary_label}: {} ({:.2})",
                top.name, top.primary
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar with the view switcher.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        for kind in [ViewKind::ProteinSources, ViewKind::FoodSecurity] {
            if ui
                .selectable_label(state.active == kind, kind.title())
                .clicked()
            {
                state.active = kind;
            }
        }

        ui.separator();

        let view = state.active_view();
        ui.label(format!(
            "{} records, {} match",
            view.dataset.len(),
            view.visible.len()
        ));

        if let Some(msg) = &view.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Load a file into the active view. On failure the view falls back to an
/// empty dataset with the error in the top bar; the pipeline itself never
/// sees the failure.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open dataset")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        let view = state.active_view_mut();
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records ({} categories) from {}",
                    dataset.len(),
                    dataset.categories.len(),
                    path.display()
                );
                view.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                view.set_load_failure(format!("Error: {e:#}"));
            }
        }
    }
}
