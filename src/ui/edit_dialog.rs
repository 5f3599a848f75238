//! Modal dialog for editing a list entry's path in place.
//!
//! Opened by double-clicking a row. The dialog captures the old path at open
//! time; the actual replacement is re-resolved by value at confirm time in
//! the state layer, so a list that changed underneath reports a stale entry
//! instead of hitting the wrong row.

use eframe::egui::{self, Color32, Key};

/// State for an active edit-path dialog.
#[derive(Debug, Clone)]
pub struct EditPathDialog {
    /// The entry value captured when the dialog was opened.
    original_path: String,
    /// Current contents of the text field.
    path_input: String,
    /// Inline error shown after a rejected confirm.
    error_message: Option<String>,
    /// Whether the text field has been given initial focus.
    focus_requested: bool,
}

/// Result from showing the edit dialog.
#[derive(Debug)]
pub enum EditDialogResult {
    /// No action taken (dialog still open)
    None,
    /// Dialog was cancelled
    Cancelled,
    /// Replace `old` with `new`
    Confirmed { old: String, new: String },
}

impl EditPathDialog {
    pub fn new(original_path: String) -> Self {
        Self {
            path_input: original_path.clone(),
            original_path,
            error_message: None,
            focus_requested: false,
        }
    }

    pub fn original_path(&self) -> &str {
        &self.original_path
    }

    /// Record a rejected confirm so the dialog stays open with the reason.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Show the dialog and return the result.
    pub fn show(&mut self, ctx: &egui::Context) -> EditDialogResult {
        let mut result = EditDialogResult::None;

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            return EditDialogResult::Cancelled;
        }

        egui::Window::new("Edit Path")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(420.0);

                ui.add_space(8.0);
                ui.label("Edit path:");
                ui.add_space(4.0);

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.path_input).desired_width(400.0),
                );

                // Auto-focus on open
                if !self.focus_requested {
                    response.request_focus();
                    self.focus_requested = true;
                }

                if let Some(error) = &self.error_message {
                    ui.add_space(4.0);
                    ui.colored_label(Color32::from_rgb(220, 80, 80), error.as_str());
                }

                ui.add_space(12.0);

                let confirm_pressed = response.lost_focus()
                    && ui.input(|i| i.key_pressed(Key::Enter));

                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let confirm_enabled = !self.path_input.trim().is_empty();
                        if ui
                            .add_enabled(confirm_enabled, egui::Button::new("Confirm"))
                            .clicked()
                            || (confirm_pressed && confirm_enabled)
                        {
                            result = EditDialogResult::Confirmed {
                                old: self.original_path.clone(),
                                new: self.path_input.trim().to_string(),
                            };
                        }

                        if ui.button("Cancel").clicked() {
                            result = EditDialogResult::Cancelled;
                        }
                    });
                });
            });

        result
    }
}
