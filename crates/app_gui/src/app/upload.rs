//! Drop zone and file picker.

use eframe::egui;
use rfd::FileDialog;

use super::UiApp;

const PICKER_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "svg",
];

impl UiApp {
    /// Renders the drop zone. While a cycle is in flight the upload prompt
    /// is replaced by the spinner; drops stay accepted either way and the
    /// generation counter sorts out the overlap.
    pub(super) fn render_upload_zone(&mut self, ui: &mut egui::Ui) {
        let stroke = if self.drag_active {
            egui::Stroke::new(2.0, ui.visuals().selection.stroke.color)
        } else {
            egui::Stroke::new(1.0, egui::Color32::DARK_GRAY)
        };
        egui::Frame::group(ui.style())
            .stroke(stroke)
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    if self.cycle.busy() {
                        ui.add(egui::Spinner::new().size(32.0));
                        ui.label("Identifying...");
                    } else {
                        ui.label("Drag an image here");
                        ui.add_space(4.0);
                        if ui.button("Choose image...").clicked() {
                            let picked = FileDialog::new()
                                .add_filter("Images", PICKER_EXTENSIONS)
                                .pick_file();
                            if let Some(path) = picked {
                                let ctx = ui.ctx().clone();
                                self.submit(&ctx, vec![path], None);
                            }
                        }
                    }
                });
            });
    }
}
