// HookLog - ui/panels/summary.rs
//
// Page summary modal window.
// Counts by status class and by gateway for the records currently shown.

use crate::app::state::BrowserState;
use crate::core::model::StatusClass;
use crate::ui::theme;

/// Render the page summary dialog (if state.show_summary is true).
pub fn render(ctx: &egui::Context, state: &mut BrowserState) {
    if !state.show_summary {
        return;
    }

    let summary = state.page_summary();
    let dark_mode = state.dark_mode;
    let mut close_clicked = false;

    let mut open = true;
    egui::Window::new("Page Summary")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .min_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if summary.total == 0 {
                ui.label("No records on the current page.");
            } else {
                ui.strong(format!("Page {} \u{00b7} {}", state.page(), state.filter().label()));
                egui::Grid::new("summary_overview")
                    .num_columns(2)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Records:");
                        ui.label(summary.total.to_string());
                        ui.end_row();

                        for class in StatusClass::all() {
                            ui.label(format!("{} {}:", class.marker(), class.label()));
                            ui.colored_label(
                                theme::status_colour(*class, dark_mode),
                                summary.count(*class).to_string(),
                            );
                            ui.end_row();
                        }
                    });

                if !summary.by_gateway.is_empty() {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.strong("By gateway");
                    egui::Grid::new("summary_gateways")
                        .num_columns(2)
                        .striped(true)
                        .spacing([16.0, 3.0])
                        .show(ui, |ui| {
                            for (gateway, count) in &summary.by_gateway {
                                ui.label(gateway.to_uppercase());
                                ui.label(count.to_string());
                                ui.end_row();
                            }
                        });
                }
            }

            ui.add_space(8.0);
            ui.separator();
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if !open || close_clicked {
        state.show_summary = false;
    }
}
