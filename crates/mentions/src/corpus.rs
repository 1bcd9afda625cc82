use serde::{Deserialize, Serialize};

/// Read-only view of a document. The extraction core never parses or
/// mutates the text; it is handed to extractors verbatim.
pub trait Document {
    fn doc_id(&self) -> &str;
    fn text(&self) -> &str;
}

/// Read-only view of a collection (topic): an id plus its documents in
/// order. Callers with integer ids render them to strings.
pub trait DocumentCollection {
    type Doc: Document;

    fn collection_id(&self) -> &str;
    fn documents(&self) -> &[Self::Doc];
}

/// Minimal owned document for callers without a richer model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleDocument {
    pub doc_id: String,
    pub text: String,
}

impl SimpleDocument {
    pub fn new(doc_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            text: text.into(),
        }
    }
}

impl Document for SimpleDocument {
    fn doc_id(&self) -> &str {
        &self.doc_id
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Minimal owned collection backing the [`DocumentCollection`] contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleCollection {
    pub collection_id: String,
    pub documents: Vec<SimpleDocument>,
}

impl SimpleCollection {
    pub fn new(collection_id: impl Into<String>, documents: Vec<SimpleDocument>) -> Self {
        Self {
            collection_id: collection_id.into(),
            documents,
        }
    }
}

impl DocumentCollection for SimpleCollection {
    type Doc = SimpleDocument;

    fn collection_id(&self) -> &str {
        &self.collection_id
    }

    fn documents(&self) -> &[SimpleDocument] {
        &self.documents
    }
}
