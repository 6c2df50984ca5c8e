// HookLog - ui/panels/pagination.rs
//
// Pagination bar: "Showing X to Y of Z results" plus prev/next controls.
// Controls are disabled at the bounds rather than validated afterwards.

use crate::app::state::BrowserState;
use crate::core::model::PageRequest;

/// Render the pagination bar. Returns the request to dispatch, if any.
pub fn render(ui: &mut egui::Ui, state: &mut BrowserState) -> Option<PageRequest> {
    if state.visible_records().is_empty() {
        return None;
    }
    let Some(page_label) = state.page_label() else {
        return None;
    };

    let mut request = None;
    ui.horizontal(|ui| {
        if let Some(range) = state.range_label() {
            ui.label(range);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // right_to_left: widgets are added in reverse visual order.
            if ui
                .add_enabled(state.can_go_next(), egui::Button::new("\u{25b6}"))
                .on_hover_text("Next page")
                .clicked()
            {
                request = state.next_page();
            }
            ui.label(egui::RichText::new(page_label).strong());
            if ui
                .add_enabled(state.can_go_prev(), egui::Button::new("\u{25c0}"))
                .on_hover_text("Previous page")
                .clicked()
            {
                request = state.prev_page();
            }
        });
    });

    request
}
