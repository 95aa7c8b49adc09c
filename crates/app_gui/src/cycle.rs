//! Per-submission display state with last-submitted-wins semantics.

use ident_core::{
    EnrichmentOutcome, EnrichmentView, IdentError, Prediction, PrimaryView, should_enrich,
};

/// Events a worker cycle delivers back to the UI thread. Each carries the
/// generation it was started under.
#[derive(Debug)]
pub enum CycleEvent {
    /// File read and encoded; raw bytes for the preview.
    Encoded { generation: u64, bytes: Vec<u8> },
    /// Prediction call finished, successfully or not.
    Predicted {
        generation: u64,
        outcome: Result<Prediction, IdentError>,
    },
    /// Enrichment lookup finished.
    Enriched {
        generation: u64,
        outcome: EnrichmentOutcome,
    },
}

/// Follow-up the UI owes after applying an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleAction {
    /// Start the enrichment lookup for this taxon.
    Enrich { generation: u64, taxon: String },
}

/// State machine for one upload/identify cycle.
///
/// Every submission bumps the generation and clears all displayed fields;
/// worker events from an older generation are discarded, so a slow response
/// can never overwrite the output of a later submission.
#[derive(Debug, Default)]
pub struct Cycle {
    generation: u64,
    busy: bool,
    pending_preview: Option<Vec<u8>>,
    primary: Option<PrimaryView>,
    enrichment: Option<EnrichmentView>,
    alert: Option<&'static str>,
    reveal_pending: bool,
}

impl Cycle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn primary(&self) -> Option<&PrimaryView> {
        self.primary.as_ref()
    }

    pub fn enrichment(&self) -> Option<&EnrichmentView> {
        self.enrichment.as_ref()
    }

    pub fn alert(&self) -> Option<&'static str> {
        self.alert
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Preview bytes waiting to be turned into a texture, at most once.
    pub fn take_pending_preview(&mut self) -> Option<Vec<u8>> {
        self.pending_preview.take()
    }

    /// True exactly once, when the primary result first appears.
    pub fn take_reveal(&mut self) -> bool {
        std::mem::take(&mut self.reveal_pending)
    }

    /// Starts a new submission: invalidates the previous cycle and enters
    /// the busy state.
    pub fn begin(&mut self) -> u64 {
        self.invalidate();
        self.busy = true;
        self.generation
    }

    /// A rejected selection still invalidates the previous cycle's output.
    pub fn reject(&mut self, err: &IdentError) {
        self.invalidate();
        self.alert = err.user_message();
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.busy = false;
        self.pending_preview = None;
        self.primary = None;
        self.enrichment = None;
        self.alert = None;
        self.reveal_pending = false;
    }

    pub fn apply(&mut self, event: CycleEvent) -> Option<CycleAction> {
        match event {
            CycleEvent::Encoded { generation, bytes } => {
                if self.is_stale(generation) {
                    return None;
                }
                self.pending_preview = Some(bytes);
                None
            }
            CycleEvent::Predicted {
                generation,
                outcome,
            } => {
                if self.is_stale(generation) {
                    return None;
                }
                // Busy ends here on every path, parse failures included.
                self.busy = false;
                match outcome {
                    Ok(prediction) => {
                        let view = PrimaryView::from_prediction(&prediction);
                        let action = if should_enrich(&view.species.name) {
                            Some(CycleAction::Enrich {
                                generation,
                                taxon: view.species.name.clone(),
                            })
                        } else {
                            self.enrichment =
                                Some(EnrichmentView::from_outcome(&EnrichmentOutcome::Skipped));
                            None
                        };
                        self.primary = Some(view);
                        self.reveal_pending = true;
                        action
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "prediction cycle failed");
                        self.alert = err.user_message();
                        None
                    }
                }
            }
            CycleEvent::Enriched {
                generation,
                outcome,
            } => {
                if self.is_stale(generation) {
                    return None;
                }
                self.enrichment = Some(EnrichmentView::from_outcome(&outcome));
                None
            }
        }
    }

    fn is_stale(&self, generation: u64) -> bool {
        if generation == self.generation {
            return false;
        }
        tracing::warn!(
            event_generation = generation,
            current_generation = self.generation,
            "discarding stale cycle event"
        );
        true
    }
}
