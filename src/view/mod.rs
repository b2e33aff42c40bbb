mod list;

use crate::selector::{Activation, FileSelector, SelectionListener};
use eframe::egui;
use list::RowAction;
use std::cell::RefCell;
use std::path::PathBuf;
use std::time::Duration;

/// What happened during one frame of [`FileSelector::show`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectorResponse {
    /// Entry handed to the listener this frame.
    pub selected: Option<PathBuf>,
    /// The back key was pressed and the selector did not consume it; the
    /// host should close.
    pub back_unhandled: bool,
}

impl FileSelector {
    /// Draws the selector into `ui` and handles its input.
    pub fn show(&mut self, ui: &mut egui::Ui, listener: &mut dyn SelectionListener) -> SelectorResponse {
        let mut response = SelectorResponse::default();
        self.poll();

        if self.error_message().is_some() {
            ui.ctx().request_repaint_after(Duration::from_millis(500));
        }

        // A text field that just gave up focus (Enter) still owned this frame's keys
        let focused = ui.ctx().memory(|m| m.focused().is_some());
        if !focused && !self.focus_was_elsewhere() {
            self.handle_keys(ui.ctx(), listener, &mut response);
        }

        let next_action = RefCell::new(None);
        self.render_header(ui);
        self.render_entries(ui, &next_action);
        self.render_toast(ui.ctx());

        // Deferred so the table can borrow the entries while drawing
        match next_action.into_inner() {
            Some(RowAction::Activate(index)) => {
                let activation = self.activate(index, listener);
                record(activation, &mut response);
            }
            Some(RowAction::Open(index)) => {
                self.open(index);
            }
            None => {}
        }
        self.set_focus_elsewhere(ui.ctx().memory(|m| m.focused().is_some()));
        response
    }

    fn handle_keys(
        &mut self,
        ctx: &egui::Context,
        listener: &mut dyn SelectionListener,
        response: &mut SelectorResponse,
    ) {
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
            self.move_cursor(1);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
            self.move_cursor(-1);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            let activation = self.activate_cursor(listener);
            record(activation, response);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Backspace)) && !self.handle_back() {
            response.back_unhandled = true;
        }
    }
}

fn record(activation: Activation, response: &mut SelectorResponse) {
    if let Activation::Selected(path) = activation {
        response.selected = Some(path);
    }
}
