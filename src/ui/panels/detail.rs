// HookLog - ui/panels/detail.rs
//
// Record detail window: every field of the selected record plus the
// pretty-printed gateway payload when there is one. Closing it never
// triggers a fetch.

use crate::app::state::BrowserState;
use crate::ui::theme;

/// Render the detail window (if a record is selected).
pub fn render(ctx: &egui::Context, state: &mut BrowserState) {
    let Some(record) = state.selected_record() else {
        return;
    };

    let class = record.status_class();
    let colour = theme::status_colour(class, state.dark_mode);
    let rows = record.detail_rows();
    let payload = record.pretty_payload();
    let status = record.status.clone();

    let mut open = true;
    let mut close_clicked = false;
    let mut copied = false;

    egui::Window::new("Webhook Details")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .min_width(theme::DETAIL_WINDOW_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.strong("Basic Information");
            egui::Grid::new("detail_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for (label, value) in &rows {
                        ui.label(egui::RichText::new(label).weak());
                        if label == "Status" {
                            ui.label(
                                egui::RichText::new(format!("{} {status}", class.marker()))
                                    .color(colour)
                                    .background_color(theme::status_bg_colour(class)),
                            );
                        } else {
                            ui.label(value);
                        }
                        ui.end_row();
                    }
                });

            if let Some(ref text) = payload {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.strong("Gateway Response");
                    if ui.small_button("Copy payload").clicked() {
                        ui.ctx().copy_text(text.clone());
                        copied = true;
                    }
                });
                egui::Frame::group(ui.style())
                    .fill(theme::PAYLOAD_BG)
                    .show(ui, |ui| {
                        egui::ScrollArea::both()
                            .max_height(theme::PAYLOAD_MAX_HEIGHT)
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(text)
                                        .monospace()
                                        .color(theme::PAYLOAD_TEXT),
                                );
                            });
                    });
            }

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(
                    "This data represents the callback received from the payment gateway. \
                     Signatures are validated by the backend before processing.",
                )
                .small()
                .weak(),
            );
            ui.add_space(4.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });
        });

    if copied {
        state.status_message = "Copied payload to clipboard.".to_string();
    }
    if !open || close_clicked {
        state.close_detail();
    }
}
