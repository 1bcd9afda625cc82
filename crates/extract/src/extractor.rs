use anyhow::Result;
use mentions::MentionRecord;

/// The plugin boundary for mention extraction backends.
///
/// Implementations receive one document at a time and return the mentions
/// found in it, in document order. Both methods must be implemented; there
/// are no default bodies. Returning an error aborts the whole extraction
/// batch with no partial results.
pub trait MentionExtractor {
    /// Extract entity mentions (persons, organizations, ...) from one
    /// document's raw text.
    fn extract_entity_mentions(
        &self,
        collection_id: &str,
        doc_id: &str,
        doc_text: &str,
    ) -> Result<Vec<MentionRecord>>;

    /// Extract event mentions from one document's raw text.
    fn extract_event_mentions(
        &self,
        collection_id: &str,
        doc_id: &str,
        doc_text: &str,
    ) -> Result<Vec<MentionRecord>>;
}
