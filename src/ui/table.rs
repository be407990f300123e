use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Record table (below the chart)
// ---------------------------------------------------------------------------

/// Render the visible records as a table, in dataset order.
pub fn record_table(ui: &mut Ui, view: &ViewState) {
    let has_cost = view.dataset.has_cost();

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(100.0));
    if has_cost {
        builder = builder.column(Column::auto().at_least(100.0));
    }

    builder
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Region");
            });
            header.col(|ui| {
                ui.strong(&view.dataset.labels.primary);
            });
            if has_cost {
                header.col(|ui| {
                    ui.strong(view.dataset.labels.cost.as_deref().unwrap_or("Cost"));
                });
            }
        })
        .body(|mut body| {
            for &idx in &view.visible {
                let rec = &view.dataset.records[idx];
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&rec.name);
                    });
                    row.col(|ui| {
                        ui.label(&rec.category);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", rec.primary));
                    });
                    if has_cost {
                        row.col(|ui| {
                            ui.label(
                                rec.cost
                                    .map(|c| format!("{c:.2}"))
                                    .unwrap_or_else(|| "–".to_string()),
                            );
                        });
                    }
                });
            }
        });
}
