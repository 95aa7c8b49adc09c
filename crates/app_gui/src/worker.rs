//! Worker threads for the blocking parts of a cycle.

use std::sync::mpsc::Sender;
use std::thread;

use eframe::egui;
use ident_core::{ApiClient, EnrichmentOutcome, SelectedFile, encode_file};

use crate::cycle::CycleEvent;

/// Runs encode + predict off the UI thread. Emits `Encoded` as soon as the
/// file is read (the preview must not wait for the network), then exactly
/// one `Predicted` for every path, so the busy state always ends.
pub fn spawn_predict(
    client: ApiClient,
    file: SelectedFile,
    generation: u64,
    tx: Sender<CycleEvent>,
    ctx: egui::Context,
) {
    thread::spawn(move || {
        let encoded = match encode_file(&file) {
            Ok(encoded) => encoded,
            Err(err) => {
                let _ = tx.send(CycleEvent::Predicted {
                    generation,
                    outcome: Err(err),
                });
                ctx.request_repaint();
                return;
            }
        };
        let _ = tx.send(CycleEvent::Encoded {
            generation,
            bytes: encoded.bytes.clone(),
        });
        ctx.request_repaint();

        let outcome = client.predict(&encoded.base64);
        let _ = tx.send(CycleEvent::Predicted {
            generation,
            outcome,
        });
        ctx.request_repaint();
    });
}

/// Best-effort taxon lookup; failures map to outcomes, never to alerts.
pub fn spawn_enrich(
    client: ApiClient,
    taxon: String,
    generation: u64,
    tx: Sender<CycleEvent>,
    ctx: egui::Context,
) {
    thread::spawn(move || {
        let outcome = match client.taxon(&taxon) {
            Ok(Some(info)) => EnrichmentOutcome::Data(info),
            Ok(None) => EnrichmentOutcome::Empty,
            Err(err) => {
                tracing::warn!(error = %err, %taxon, "taxon lookup failed");
                EnrichmentOutcome::Failed
            }
        };
        let _ = tx.send(CycleEvent::Enriched {
            generation,
            outcome,
        });
        ctx.request_repaint();
    });
}
