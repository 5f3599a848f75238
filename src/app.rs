//! Main application module for SwiftFolder
//!
//! Implements the eframe App trait: the folder list view, the button row,
//! the edit dialog, and toast/modal reporting. All list logic lives in
//! [`AppState`]; this module is dispatch and drawing.

use crate::files::dialogs::pick_folder_dialog;
use crate::launcher;
use crate::state::{AppState, Notice};
use crate::ui::{EditDialogResult, EditPathDialog};
use eframe::egui;
use log::info;
use std::time::Instant;

/// Commands issued by the button row.
///
/// Buttons map to commands through [`BUTTON_ROW`] rather than inline
/// closures, so every mutation path is named and dispatched in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick a folder and append it to the list
    AddFolder,
    /// Remove the selected entries
    RemoveSelected,
    /// Pick a folder and replace the single selected entry
    Replace,
    /// Undo the most recent action
    Undo,
    /// Redo the most recently undone action
    Redo,
    /// Empty the list
    ClearList,
    /// Open every listed folder in the file browser
    OpenFolders,
}

/// Button labels and their commands, in display order.
const BUTTON_ROW: &[(&str, Command)] = &[
    ("Add Folder", Command::AddFolder),
    ("Remove Selected", Command::RemoveSelected),
    ("Replace", Command::Replace),
    ("Undo", Command::Undo),
    ("Redo", Command::Redo),
    ("Clear List", Command::ClearList),
    ("Open Folders", Command::OpenFolders),
];

/// The main application struct.
pub struct SwiftFolderApp {
    /// Central application state
    state: AppState,
    /// Active edit-path dialog (opened by double-clicking a row)
    edit_dialog: Option<EditPathDialog>,
    /// Application start time for timing toast messages
    start_time: Instant,
}

impl SwiftFolderApp {
    /// Create a new app instance with the folder list loaded from the store.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing SwiftFolder");

        Self {
            state: AppState::new(),
            edit_dialog: None,
            start_time: Instant::now(),
        }
    }

    /// Seconds since app start, for toast expiry.
    fn now(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Command dispatch
    // ─────────────────────────────────────────────────────────────────────────

    fn dispatch(&mut self, command: Command) {
        let time = self.now();
        match command {
            Command::AddFolder => {
                // Cancelled picker means no action, matching the dialogs'
                // original behavior.
                if let Some(dir) = pick_folder_dialog("Add Folder", None) {
                    let notice = self.state.add_folder(dir.display().to_string());
                    self.state.report(notice, time);
                }
            }
            Command::RemoveSelected => {
                let notice = self.state.remove_selected();
                self.state.report(notice, time);
            }
            Command::Replace => {
                // Selection is validated before the picker opens, so a
                // cancelled dialog never follows a rejected selection.
                if self.state.selected.len() != 1 {
                    self.state.report(
                        Notice::Info("Select exactly one folder to replace.".to_string()),
                        time,
                    );
                } else if let Some(dir) = pick_folder_dialog("Replace Folder", None) {
                    let notice = self.state.replace_selected(dir.display().to_string());
                    self.state.report(notice, time);
                }
            }
            Command::Undo => {
                let notice = self.state.undo();
                self.state.report(notice, time);
            }
            Command::Redo => {
                let notice = self.state.redo();
                self.state.report(notice, time);
            }
            Command::ClearList => {
                let notice = self.state.clear_all();
                self.state.report(notice, time);
            }
            Command::OpenFolders => self.open_all_folders(time),
        }
    }

    fn open_all_folders(&mut self, time: f64) {
        let report =
            launcher::open_folders(self.state.folders.entries(), self.state.same_window);
        self.state.show_toast(report.summary(), time, 3.0);

        if !report.missing.is_empty() || !report.failed.is_empty() {
            let mut lines: Vec<String> = report
                .missing
                .iter()
                .map(|p| format!("The folder {} does not exist.", p.display()))
                .collect();
            lines.extend(
                report
                    .failed
                    .iter()
                    .map(|(p, e)| format!("Failed to open {}: {}", p.display(), e)),
            );
            self.state.show_error(lines.join("\n"));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // UI sections
    // ─────────────────────────────────────────────────────────────────────────

    /// Draw the folder list and apply row selection / double-click edits.
    fn show_list(&mut self, ui: &mut egui::Ui) {
        let ctrl_held = ui.input(|i| i.modifiers.command || i.modifiers.ctrl);

        let mut clicked_row: Option<usize> = None;
        let mut edited_row: Option<usize> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                if self.state.folders.is_empty() {
                    ui.add_space(12.0);
                    ui.weak("No folders yet. Use \"Add Folder\" to get started.");
                    return;
                }

                for (index, entry) in self.state.folders.entries().iter().enumerate() {
                    let selected = self.state.is_selected(index);
                    let response = ui.selectable_label(selected, entry);

                    if response.double_clicked() {
                        edited_row = Some(index);
                    } else if response.clicked() {
                        clicked_row = Some(index);
                    }
                }
            });

        if let Some(index) = clicked_row {
            if ctrl_held {
                self.state.toggle_selected(index);
            } else {
                self.state.select_single(index);
            }
        }

        if let Some(index) = edited_row {
            if let Some(entry) = self.state.folders.get(index) {
                self.edit_dialog = Some(EditPathDialog::new(entry.to_string()));
            }
        }
    }

    fn show_bottom_panel(&mut self, ctx: &egui::Context) -> Option<Command> {
        let mut command = None;

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.checkbox(
                &mut self.state.same_window,
                "Open folders in the same window",
            )
            .on_hover_text(
                "Placeholder: the OS opens each folder in its own window regardless.",
            );

            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for &(label, cmd) in BUTTON_ROW {
                    let enabled = match cmd {
                        Command::Undo => self.state.history.can_undo(),
                        Command::Redo => self.state.history.can_redo(),
                        _ => true,
                    };
                    if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
                        command = Some(cmd);
                    }
                }
            });

            ui.add_space(4.0);
            if let Some(toast) = &self.state.ui.toast_message {
                ui.weak(toast);
            } else {
                ui.weak(format!("{} folder(s)", self.state.folders.len()));
            }
            ui.add_space(4.0);
        });

        command
    }

    fn show_error_modal(&mut self, ctx: &egui::Context) {
        if !self.state.ui.show_error_modal {
            return;
        }

        let mut dismiss = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(320.0);
                ui.add_space(8.0);
                ui.label(&self.state.ui.error_message);
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter))
                    {
                        dismiss = true;
                    }
                });
                ui.add_space(4.0);
            });

        if dismiss || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.state.dismiss_error();
        }
    }

    fn show_edit_dialog(&mut self, ctx: &egui::Context) {
        let result = match self.edit_dialog.as_mut() {
            Some(dialog) => dialog.show(ctx),
            None => return,
        };

        match result {
            EditDialogResult::None => {}
            EditDialogResult::Cancelled => self.edit_dialog = None,
            EditDialogResult::Confirmed { old, new } => {
                match self.state.edit_entry(&old, new) {
                    Ok(()) => {
                        self.edit_dialog = None;
                        let time = self.now();
                        self.state.show_toast("Path updated", time, 2.5);
                    }
                    // Keep the dialog open with the reason inline.
                    Err(e) => {
                        if let Some(dialog) = self.edit_dialog.as_mut() {
                            dialog.set_error(e.to_string());
                        }
                    }
                }
            }
        }
    }
}

impl eframe::App for SwiftFolderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let time = self.now();
        self.state.update_toast(time);

        self.show_edit_dialog(ctx);
        self.show_error_modal(ctx);

        let command = self.show_bottom_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_list(ui);
        });

        if let Some(command) = command {
            self.dispatch(command);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        self.state.shutdown();
    }
}
