// HookLog - ui/panels/filters.rs
//
// Filter bar: gateway selector and manual refresh.

use crate::app::state::BrowserState;
use crate::core::model::PageRequest;

/// Render the filter bar. Returns the request to dispatch, if any.
pub fn render(ui: &mut egui::Ui, state: &mut BrowserState) -> Option<PageRequest> {
    let mut request = None;

    ui.horizontal(|ui| {
        ui.label("Gateway:");

        let current = state.filter().gateway().unwrap_or("").to_string();
        let mut selected = current.clone();
        egui::ComboBox::from_id_salt("gateway_filter")
            .selected_text(state.filter().label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, String::new(), "All Gateways");
                for gateway in &state.gateways {
                    ui.selectable_value(&mut selected, gateway.clone(), gateway.to_uppercase());
                }
            });
        if selected != current {
            request = Some(state.set_filter(&selected));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let refresh = ui
                .add_enabled(!state.is_loading(), egui::Button::new("\u{27f3} Refresh"))
                .on_hover_text("Reload the current page");
            if refresh.clicked() {
                request = Some(state.refresh());
            }
        });
    });

    request
}
