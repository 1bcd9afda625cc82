pub mod extractor;
pub mod progress;

pub use extractor::MentionExtractor;
pub use progress::Progress;

use anyhow::{Context, Result};
use mentions::{Document, DocumentCollection, Mentions};
use tracing::{debug, info};

/// Which mention kinds to extract. Defaults to both.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    pub entity: bool,
    pub event: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            entity: true,
            event: true,
        }
    }
}

/// Drives a [`MentionExtractor`] over a batch of document collections and
/// assembles the results into a single [`Mentions`] aggregate.
pub struct MentionDriver<E> {
    extractor: E,
}

impl<E: MentionExtractor> MentionDriver<E> {
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Extract mentions from every document of every collection, in input
    /// order. The output sequences are the concatenation of the hook
    /// results in visitation order.
    pub fn extract_mentions<C>(
        &self,
        collections: &[C],
        options: &ExtractOptions,
    ) -> Result<Mentions>
    where
        C: DocumentCollection,
    {
        self.extract_mentions_with_progress(collections, options, |_| {})
    }

    /// Same as [`extract_mentions`](Self::extract_mentions), invoking
    /// `on_progress` once after each collection completes.
    ///
    /// An extractor error aborts the batch immediately; no partial
    /// aggregate is returned.
    pub fn extract_mentions_with_progress<C, F>(
        &self,
        collections: &[C],
        options: &ExtractOptions,
        mut on_progress: F,
    ) -> Result<Mentions>
    where
        C: DocumentCollection,
        F: FnMut(&Progress<'_>),
    {
        let mut result = Mentions::new();
        let total = collections.len();

        for (idx, collection) in collections.iter().enumerate() {
            let collection_id = collection.collection_id();

            for doc in collection.documents() {
                if options.entity {
                    let records = self
                        .extractor
                        .extract_entity_mentions(collection_id, doc.doc_id(), doc.text())
                        .with_context(|| {
                            format!(
                                "Entity extraction failed for doc {} in collection {}",
                                doc.doc_id(),
                                collection_id
                            )
                        })?;
                    result.entity_mentions.extend(records);
                }
                if options.event {
                    let records = self
                        .extractor
                        .extract_event_mentions(collection_id, doc.doc_id(), doc.text())
                        .with_context(|| {
                            format!(
                                "Event extraction failed for doc {} in collection {}",
                                doc.doc_id(),
                                collection_id
                            )
                        })?;
                    result.event_mentions.extend(records);
                }
            }

            debug!(
                collection_id,
                completed = idx + 1,
                total,
                "Finished collection"
            );
            on_progress(&Progress {
                collection_id,
                completed: idx + 1,
                total,
            });
        }

        info!(
            collections = total,
            entities = result.entity_mentions.len(),
            events = result.event_mentions.len(),
            "Extraction run complete"
        );
        Ok(result)
    }
}
