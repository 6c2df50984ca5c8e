// HookLog - ui/panels/table.rs
//
// Central list area. Shows exactly one of: idle hint, loading spinner,
// failure message, empty-state message, or the record table.
//
// Row clicks are collected and applied after the grid so `state` is not
// mutably borrowed while rows still hold references into it.

use crate::app::state::{BrowserState, LoadState, EMPTY_MESSAGE};
use crate::core::model::{PageRequest, RecordId};
use crate::ui::theme;
use crate::util::constants;

/// Render the list area. Returns the request to dispatch, if any.
pub fn render(ui: &mut egui::Ui, state: &mut BrowserState) -> Option<PageRequest> {
    match state.load_state().clone() {
        LoadState::Idle => {
            ui.centered_and_justified(|ui| {
                ui.label("No data requested yet. Press Refresh to load webhook logs.");
            });
            None
        }
        LoadState::Loading => {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
            None
        }
        LoadState::Failed { message } => render_failure(ui, state, &message),
        LoadState::Empty => {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(EMPTY_MESSAGE).weak());
            });
            None
        }
        LoadState::Loaded => {
            render_rows(ui, state);
            None
        }
    }
}

fn render_failure(ui: &mut egui::Ui, state: &mut BrowserState, message: &str) -> Option<PageRequest> {
    let mut request = None;
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(
            egui::RichText::new(format!("\u{2716} {message}"))
                .color(theme::ERROR_TEXT)
                .size(16.0),
        );
        ui.label(egui::RichText::new("Please try again later.").weak());
        ui.add_space(8.0);
        if ui.button("Refresh").clicked() {
            request = Some(state.refresh());
        }
    });
    request
}

fn render_rows(ui: &mut egui::Ui, state: &mut BrowserState) {
    let dark_mode = state.dark_mode;
    let mut view_clicked: Option<RecordId> = None;

    egui::ScrollArea::both()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("webhook_table")
                .num_columns(7)
                .striped(true)
                .spacing(theme::ROW_SPACING)
                .show(ui, |ui| {
                    for heading in [
                        "Status",
                        "Order Number",
                        "Transaction ID",
                        "Gateway",
                        "Payment Status",
                        "Received At",
                        "Actions",
                    ] {
                        ui.label(egui::RichText::new(heading.to_uppercase()).small().strong());
                    }
                    ui.end_row();

                    for record in state.visible_records() {
                        let class = record.status_class();
                        let colour = theme::status_colour(class, dark_mode);
                        let hook = record.webhook();

                        ui.label(egui::RichText::new(class.marker()).color(colour))
                            .on_hover_text(class.label());
                        ui.label(
                            egui::RichText::new(hook.map(|h| h.order_number.as_str()).unwrap_or("-"))
                                .strong(),
                        );
                        ui.label(
                            hook.and_then(|h| h.transaction_id.as_deref())
                                .unwrap_or(constants::NOT_AVAILABLE),
                        );
                        ui.label(
                            hook.map(|h| h.gateway.to_uppercase())
                                .unwrap_or_default(),
                        );
                        ui.label(
                            egui::RichText::new(&record.status)
                                .small()
                                .color(colour)
                                .background_color(theme::status_bg_colour(class)),
                        );
                        ui.label(record.display_timestamp());
                        if ui.small_button("\u{1f441} View").clicked() {
                            view_clicked = Some(record.id.clone());
                        }
                        ui.end_row();
                    }
                });
        });

    if let Some(id) = view_clicked {
        state.select_record(&id);
    }
}
