use serde::{Deserialize, Serialize};

/// A single entity or event mention extracted from a document.
///
/// `topic_id`, `doc_id` and `tokens_str` are always present; the lexical
/// metadata fields are filled in only by extractors that compute them and
/// are omitted from the JSON output when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionRecord {
    /// Id of the collection (topic) the mention's document belongs to.
    pub topic_id: String,
    /// Id of the document the mention was found in.
    pub doc_id: String,
    /// Surface text of the mention.
    pub tokens_str: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention_head: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention_head_lemma: Option<String>,
    /// Part of speech of the head token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention_head_pos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention_ner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention_type: Option<String>,
    /// Sentence number of the mention within the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_id: Option<usize>,
    /// Token offsets of the mention within its sentence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_number: Option<Vec<usize>>,
}

impl MentionRecord {
    /// Build a record with the required fields only.
    pub fn new(topic_id: impl Into<String>, doc_id: impl Into<String>, tokens_str: impl Into<String>) -> Self {
        Self {
            topic_id: topic_id.into(),
            doc_id: doc_id.into(),
            tokens_str: tokens_str.into(),
            mention_head: None,
            mention_head_lemma: None,
            mention_head_pos: None,
            mention_ner: None,
            mention_type: None,
            sent_id: None,
            tokens_number: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn minimal_record_serializes_required_keys_only() {
        let record = MentionRecord::new("2_ecb", "1_10.xml", "Josh");
        let value: Value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["topic_id"], "2_ecb");
        assert_eq!(obj["doc_id"], "1_10.xml");
        assert_eq!(obj["tokens_str"], "Josh");
    }

    #[test]
    fn optional_fields_round_trip() {
        let mut record = MentionRecord::new("2_ecb", "1_10.xml", "Josh");
        record.mention_head = Some("Josh".to_string());
        record.mention_head_pos = Some("NOUN".to_string());
        record.sent_id = Some(0);
        record.tokens_number = Some(vec![13]);

        let json = serde_json::to_string(&record).unwrap();
        let parsed: MentionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn deserializes_without_optional_keys() {
        let json = r#"{"topic_id":"2_ecb","doc_id":"1_10.xml","tokens_str":"Josh"}"#;
        let parsed: MentionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, MentionRecord::new("2_ecb", "1_10.xml", "Josh"));
    }
}
