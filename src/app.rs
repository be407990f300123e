use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FoodScoutApp {
    pub state: AppState,
}

impl eframe::App for FoodScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and view switcher ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters for the active view ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: summary, chart, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let view = self.state.active_view();

            ui.heading(self.state.active.title());
            panels::summary_strip(ui, view);
            ui.separator();

            plot::scatter_plot(ui, view, ui.available_height() * 0.55);
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    table::record_table(ui, view);
                });
        });
    }
}
