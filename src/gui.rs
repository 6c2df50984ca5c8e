// HookLog - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and manages the fetch lifecycle.

use crate::app::fetch::FetchManager;
use crate::app::state::BrowserState;
use crate::core::model::{LogRecord, PageRequest};
use crate::ui;
use crate::util::constants;
use std::path::Path;

/// Export format offered by the File menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Csv,
    Json,
}

/// The HookLog application.
pub struct HookLogApp {
    pub state: BrowserState,
    pub fetch: FetchManager,
    source_url: String,
}

impl HookLogApp {
    /// Create the application and dispatch the initial page load.
    pub fn new(
        ctx: &egui::Context,
        mut state: BrowserState,
        fetch: FetchManager,
        source_url: String,
    ) -> Self {
        ui::theme::apply_visuals(ctx, state.dark_mode);
        let initial = state.load();
        fetch.dispatch(initial);
        Self {
            state,
            fetch,
            source_url,
        }
    }

    fn dispatch(&self, request: Option<PageRequest>) {
        if let Some(request) = request {
            self.fetch.dispatch(request);
        }
    }

    fn export(&mut self, format: ExportFormat) {
        let (name, ext, default_name) = match format {
            ExportFormat::Csv => ("CSV", "csv", "webhooks.csv"),
            ExportFormat::Json => ("JSON", "json", "webhooks.json"),
        };
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(name, &[ext])
            .set_file_name(default_name)
            .save_file()
        else {
            return;
        };

        match export_page(self.state.visible_records(), format, &dest) {
            Ok(n) => {
                tracing::info!(records = n, path = %dest.display(), "Exported page");
                self.state.status_message = format!("Exported {n} records to {name}.");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Export failed");
                self.state.status_message = format!("{name} export failed: {e}");
            }
        }
    }
}

/// Write `records` to `dest` in the chosen format.
fn export_page(
    records: &[LogRecord],
    format: ExportFormat,
    dest: &Path,
) -> crate::util::error::Result<usize> {
    let file = std::fs::File::create(dest).map_err(|e| crate::util::error::ExportError::Io {
        path: dest.to_path_buf(),
        source: e,
    })?;
    let n = match format {
        ExportFormat::Csv => crate::core::export::export_csv(records, file, dest)?,
        ExportFormat::Json => crate::core::export::export_json(records, file, dest)?,
    };
    Ok(n)
}

impl eframe::App for HookLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for fetch outcomes
        let outcomes = self.fetch.poll();
        let had_outcomes = !outcomes.is_empty();
        for outcome in outcomes {
            self.state.apply_response(outcome);
        }
        if had_outcomes {
            ctx.request_repaint();
        }
        // Keep polling while a request is in flight.
        if self.state.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(
                constants::FETCH_POLL_INTERVAL_MS,
            ));
        }

        let mut pending: Option<PageRequest> = None;

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let has_records = !self.state.visible_records().is_empty();
                    ui.add_enabled_ui(has_records, |ui| {
                        ui.menu_button("Export", |ui| {
                            if ui.button("Export CSV...").clicked() {
                                self.export(ExportFormat::Csv);
                                ui.close_menu();
                            }
                            if ui.button("Export JSON...").clicked() {
                                self.export(ExportFormat::Json);
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Page Summary").clicked() {
                        self.state.show_summary = true;
                        ui.close_menu();
                    }
                    if ui.button("Refresh").clicked() {
                        pending = Some(self.state.refresh());
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.checkbox(&mut self.state.dark_mode, "Dark mode").changed() {
                        ui::theme::apply_visuals(ctx, self.state.dark_mode);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.is_loading() {
                    ui.spinner();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.state.debug_mode {
                        ui.label(egui::RichText::new(&self.source_url).small().weak());
                    }
                });
            });
        });

        // Filter bar
        egui::TopBottomPanel::top("filter_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Webhook Logs");
            ui.label(
                egui::RichText::new("Monitor payment gateway callbacks and responses").weak(),
            );
            ui.add_space(4.0);
            if let Some(request) = ui::panels::filters::render(ui, &mut self.state) {
                pending = Some(request);
            }
            ui.add_space(4.0);
        });

        // Pagination bar
        egui::TopBottomPanel::bottom("pagination_bar").show(ctx, |ui| {
            if let Some(request) = ui::panels::pagination::render(ui, &mut self.state) {
                pending = Some(request);
            }
        });

        // Central panel (record table)
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(request) = ui::panels::table::render(ui, &mut self.state) {
                pending = Some(request);
            }
        });

        // Dialogs
        ui::panels::detail::render(ctx, &mut self.state);
        ui::panels::summary::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state, &self.source_url);

        self.dispatch(pending);
    }
}
