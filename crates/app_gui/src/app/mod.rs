mod markup;
mod results;
mod upload;

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, channel};

use eframe::{App, Frame, egui};
use ident_core::{ApiClient, first_path, validate};

use crate::cycle::{Cycle, CycleAction, CycleEvent};
use crate::worker;

const APP_VERSION: &str = env!("TAXONLENS_VERSION");

pub struct UiApp {
    client: ApiClient,
    cycle: Cycle,
    tx: Sender<CycleEvent>,
    rx: Receiver<CycleEvent>,
    preview: Option<egui::TextureHandle>,
    drag_active: bool,
}

impl UiApp {
    pub fn new(client: ApiClient) -> Self {
        let (tx, rx) = channel();
        Self {
            client,
            cycle: Cycle::default(),
            tx,
            rx,
            preview: None,
            drag_active: false,
        }
    }

    /// Single entry point for the picker and drop paths. Takes the first
    /// file of the collection, validates it, and starts a worker cycle.
    fn submit(
        &mut self,
        ctx: &egui::Context,
        candidates: Vec<PathBuf>,
        mime_hint: Option<String>,
    ) {
        let Some(path) = first_path(&candidates).cloned() else {
            return;
        };
        self.preview = None;
        match validate(&path, mime_hint.as_deref()) {
            Ok(file) => {
                let generation = self.cycle.begin();
                worker::spawn_predict(
                    self.client.clone(),
                    file,
                    generation,
                    self.tx.clone(),
                    ctx.clone(),
                );
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "selection rejected: not an image");
                self.cycle.reject(&err);
            }
        }
    }

    fn drain_worker_events(&mut self, ctx: &egui::Context) {
        let mut actions = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            if let Some(action) = self.cycle.apply(event) {
                actions.push(action);
            }
        }
        for action in actions {
            let CycleAction::Enrich { generation, taxon } = action;
            worker::spawn_enrich(
                self.client.clone(),
                taxon,
                generation,
                self.tx.clone(),
                ctx.clone(),
            );
        }
        if let Some(bytes) = self.cycle.take_pending_preview() {
            self.preview = load_preview_texture(ctx, &bytes);
        }
    }

    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        self.drag_active = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }
        let candidates: Vec<PathBuf> = dropped.iter().filter_map(|f| f.path.clone()).collect();
        let mime_hint = dropped
            .iter()
            .find(|f| f.path.is_some())
            .map(|f| f.mime.clone())
            .filter(|mime| !mime.is_empty());
        self.submit(ctx, candidates, mime_hint);
    }

    fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.cycle.alert() else {
            return;
        };
        let modal = egui::Modal::new(egui::Id::new("cycle-alert")).show(ctx, |ui| {
            ui.set_width(280.0);
            ui.label(message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| ui.button("OK").clicked()).inner
        });
        if modal.inner || modal.should_close() {
            self.cycle.dismiss_alert();
        }
    }
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.drain_worker_events(ctx);
        self.handle_file_drops(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Taxon Lens");
                ui.label(format!("v{APP_VERSION}"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.client.base_url());
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.render_upload_zone(ui);
                    if let Some(texture) = self.preview.clone() {
                        ui.add_space(8.0);
                        ui.add(egui::Image::from_texture(&texture).max_width(360.0));
                    }
                    self.render_results_panel(ui);
                });
        });

        self.render_alert(ctx);
    }
}

/// Decodes the submitted bytes into a texture for the local preview. A
/// decode failure only costs the preview, never the cycle.
fn load_preview_texture(ctx: &egui::Context, bytes: &[u8]) -> Option<egui::TextureHandle> {
    match image::load_from_memory(bytes) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            let pixels = rgba.into_raw();
            let color = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
            Some(ctx.load_texture("preview", color, egui::TextureOptions::LINEAR))
        }
        Err(e) => {
            tracing::warn!("preview decode failed: {e}");
            None
        }
    }
}
