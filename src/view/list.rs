// Rendering of the path header, the entry table and the error toast

use crate::selector::FileSelector;
use crate::style;
use eframe::egui;
use std::cell::RefCell;

/// Row interaction collected while the table borrows the entries.
pub(crate) enum RowAction {
    Activate(usize),
    Open(usize),
}

impl FileSelector {
    pub(crate) fn render_header(&self, ui: &mut egui::Ui) {
        ui.add_space(style::HEADER_SPACING);
        ui.horizontal(|ui| {
            if self.is_loading() {
                ui.add(egui::Spinner::new());
            }
            let path = self
                .dir()
                .map(|dir| dir.display().to_string())
                .unwrap_or_default();
            egui::ScrollArea::horizontal()
                .id_salt("selector_path")
                .show(ui, |ui| {
                    ui.add(egui::Label::new(egui::RichText::new(path).strong()).extend());
                });
        });
        ui.add_space(style::HEADER_SPACING);
        ui.separator();
    }

    pub(crate) fn render_entries(&self, ui: &mut egui::Ui, next_action: &RefCell<Option<RowAction>>) {
        if self.entries().is_empty() {
            if self.dir().is_some() && !self.is_loading() {
                ui.centered_and_justified(|ui| {
                    ui.weak("Empty directory");
                });
            }
            return;
        }

        let text_color = ui.visuals().text_color();
        let icon_color = style::icon_color(text_color);
        let timestamp_format = self.display_config().timestamp_format.as_str();
        let cursor = self.cursor();

        egui::ScrollArea::vertical()
            .id_salt("selector_entries")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                use egui_extras::{Column, TableBuilder};
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(false)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::auto().at_least(style::ICON_COL_WIDTH))
                    .column(Column::remainder().clip(true))
                    .column(Column::auto().at_least(style::MODIFIED_COL_WIDTH))
                    .body(|body| {
                        body.rows(style::ROW_HEIGHT, self.entries().len(), |mut row| {
                            let index = row.index();
                            let entry = &self.entries()[index];
                            row.set_selected(cursor == Some(index));

                            row.col(|ui| {
                                ui.label(
                                    egui::RichText::new(entry.icon())
                                        .size(style::ICON_SIZE)
                                        .color(icon_color),
                                );
                            });
                            row.col(|ui| {
                                let response = style::truncated_label_with_sense(
                                    ui,
                                    entry.display_name(),
                                    egui::Sense::click(),
                                );
                                // Rows never keep focus, or the selector would ignore its own keys
                                response.surrender_focus();
                                if response.clicked() {
                                    *next_action.borrow_mut() = Some(RowAction::Activate(index));
                                } else if response.secondary_clicked() && entry.is_dir {
                                    *next_action.borrow_mut() = Some(RowAction::Open(index));
                                }
                            });
                            row.col(|ui| {
                                style::truncated_label(
                                    ui,
                                    egui::RichText::new(entry.modified_label(timestamp_format)).weak(),
                                );
                            });
                        });
                    });
            });
    }

    pub(crate) fn render_toast(&self, ctx: &egui::Context) {
        let Some(message) = self.error_message() else {
            return;
        };
        egui::Area::new(egui::Id::new("selector_toast"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, style::TOAST_OFFSET))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(message);
                });
            });
    }
}
