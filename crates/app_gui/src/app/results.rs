//! Result section: primary prediction fields plus taxon enrichment.

use eframe::egui;
use ident_core::{DescriptionView, EnrichmentView, GuessView, PLACEHOLDER};

use super::UiApp;
use super::markup::{MarkupLine, markup_lines};

/// The result section scrolls into view only on narrow windows.
pub(super) fn should_scroll_to_results(viewport_width: f32) -> bool {
    viewport_width <= 768.0
}

impl UiApp {
    /// Renders the result section; hidden until a prediction has landed.
    pub(super) fn render_results_panel(&mut self, ui: &mut egui::Ui) {
        let Some(primary) = self.cycle.primary().cloned() else {
            return;
        };
        let enrichment = self.cycle.enrichment().cloned();

        ui.add_space(12.0);
        let response = ui
            .scope(|ui| {
                ui.heading("Identification");
                ui.add_space(4.0);
                egui::Grid::new("primary-result")
                    .num_columns(2)
                    .spacing([24.0, 4.0])
                    .show(ui, |ui| {
                        guess_rows(ui, "Species", &primary.species);
                        guess_rows(ui, "Genus", &primary.genus);
                    });
                if !primary.notes.is_empty() {
                    ui.add_space(4.0);
                    ui.label(&primary.notes);
                }

                ui.add_space(8.0);
                ui.separator();
                match &enrichment {
                    Some(view) => render_enrichment(ui, view),
                    None => {
                        ui.horizontal(|ui| {
                            ui.add(egui::Spinner::new().size(12.0));
                            ui.weak("Looking up taxon details...");
                        });
                    }
                }

                render_top_list(ui, "Top species", &primary.top_species);
                render_top_list(ui, "Top genera", &primary.top_genus);
            })
            .response;

        if self.cycle.take_reveal() && should_scroll_to_results(ui.ctx().screen_rect().width()) {
            response.scroll_to_me(Some(egui::Align::Min));
        }
    }
}

fn guess_rows(ui: &mut egui::Ui, label: &str, guess: &GuessView) {
    ui.label(label);
    ui.strong(&guess.name);
    ui.end_row();
    ui.label(format!("{label} confidence"));
    if guess.confidence_text.is_empty() {
        ui.monospace(&guess.confidence);
    } else {
        ui.monospace(format!("{} ({})", guess.confidence, guess.confidence_text));
    }
    ui.end_row();
}

fn render_enrichment(ui: &mut egui::Ui, view: &EnrichmentView) {
    egui::Grid::new("taxon-enrichment")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.label("Finnish name");
            ui.strong(&view.localized_name);
            ui.end_row();
            if !view.occurrence_count.is_empty() {
                ui.label("Occurrences in Finland");
                ui.monospace(&view.occurrence_count);
                ui.end_row();
            }
            if !view.scientific_name.is_empty() {
                ui.label("Scientific name");
                ui.label(&view.scientific_name);
                ui.end_row();
            }
            if !view.habitat.is_empty() {
                ui.label("Primary habitat");
                ui.label(&view.habitat);
                ui.end_row();
            }
        });
    if view.invasive {
        ui.colored_label(ui.visuals().warn_fg_color, "Invasive species");
    }
    match &view.description {
        DescriptionView::Blank => {}
        DescriptionView::Placeholder => {
            ui.add_space(4.0);
            ui.label(PLACEHOLDER);
        }
        DescriptionView::Markup(markup) => {
            ui.add_space(4.0);
            for line in markup_lines(markup) {
                match line {
                    MarkupLine::Heading(text) => {
                        ui.add_space(4.0);
                        ui.strong(text);
                    }
                    MarkupLine::Text(text) => {
                        ui.label(text);
                    }
                }
            }
        }
    }
}

fn render_top_list(ui: &mut egui::Ui, title: &str, guesses: &[GuessView]) {
    if guesses.is_empty() {
        return;
    }
    ui.add_space(8.0);
    egui::CollapsingHeader::new(title).show(ui, |ui| {
        egui::Grid::new(title).num_columns(2).spacing([24.0, 2.0]).show(ui, |ui| {
            for guess in guesses {
                ui.label(&guess.name);
                ui.monospace(&guess.confidence);
                ui.end_row();
            }
        });
    });
}
