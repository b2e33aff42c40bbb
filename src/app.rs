// Stand-alone picker window hosting a FileSelector

use eframe::egui;
use file_selector::{Config, FileSelector, SavedState, SelectionType};
use log::{info, warn};
use std::path::{Path, PathBuf};

pub struct PickerApp {
    selector: FileSelector,
    state_path: Option<PathBuf>,
    title: String,
    finished: bool,
}

impl PickerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, restore: bool) -> Self {
        let state_path = SavedState::state_path();
        let saved = if restore {
            state_path.as_deref().and_then(load_state)
        } else {
            None
        };

        let selector = FileSelector::for_egui(config.selector, config.display, saved, &cc.egui_ctx);
        Self {
            selector,
            state_path,
            title: String::new(),
            finished: false,
        }
    }

    fn title(&self) -> String {
        let what = match self.selector.selection_type() {
            SelectionType::File => "Select a file",
            SelectionType::Dir => "Select a directory",
        };
        match self.selector.dir() {
            Some(dir) => format!("{} - {}", what, dir.display()),
            None => what.to_string(),
        }
    }

    /// Saves the selector state, prints the choice and closes the window.
    fn finish(&mut self, ctx: &egui::Context, chosen: Option<PathBuf>) {
        if self.finished {
            return;
        }
        self.finished = true;

        if let Some(path) = &self.state_path {
            if let Err(e) = self.selector.save_state().save_to(path) {
                warn!("Failed to save selector state: {}", e);
            }
        }
        if let Some(path) = chosen {
            info!("picked {}", path.display());
            println!("{}", path.display());
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut chosen = None;
        let response = egui::CentralPanel::default()
            .show(ctx, |ui| {
                self.selector.show(ui, &mut |_: &FileSelector, path: &Path| {
                    chosen = Some(path.to_path_buf());
                })
            })
            .inner;

        let title = self.title();
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }

        if chosen.is_some()
            || response.back_unhandled
            || ctx.input(|i| i.viewport().close_requested())
        {
            self.finish(ctx, chosen);
        }
    }
}

fn load_state(path: &Path) -> Option<SavedState> {
    if !path.exists() {
        return None;
    }
    match SavedState::load_from(path) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!("Ignoring saved state: {}", e);
            None
        }
    }
}
