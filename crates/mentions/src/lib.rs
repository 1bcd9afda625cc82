pub mod corpus;
pub mod schema;

pub use corpus::{Document, DocumentCollection, SimpleCollection, SimpleDocument};
pub use schema::MentionRecord;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name used by [`Mentions::save_json`] and [`Mentions::load_json`].
pub const DEFAULT_BASE_NAME: &str = "mentions";

/// All entity and event mentions accumulated over an extraction run.
///
/// Records stay in append order; the container does no deduplication or
/// sorting of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mentions {
    pub entity_mentions: Vec<MentionRecord>,
    pub event_mentions: Vec<MentionRecord>,
}

impl Mentions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across both kinds.
    pub fn len(&self) -> usize {
        self.entity_mentions.len() + self.event_mentions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_mentions.is_empty() && self.event_mentions.is_empty()
    }

    /// Write `entity_mentions.json` and `event_mentions.json` into `out_dir`.
    pub fn save_json(&self, out_dir: &Path) -> Result<()> {
        self.save_json_with_name(out_dir, DEFAULT_BASE_NAME)
    }

    /// Write `entity_<base_name>.json` and `event_<base_name>.json` into
    /// `out_dir`, overwriting existing files. The directory must already
    /// exist; filesystem errors propagate to the caller.
    pub fn save_json_with_name(&self, out_dir: &Path, base_name: &str) -> Result<()> {
        let (entity_path, event_path) = output_paths(out_dir, base_name);
        write_records(&entity_path, &self.entity_mentions)?;
        write_records(&event_path, &self.event_mentions)?;

        info!(
            entities = self.entity_mentions.len(),
            events = self.event_mentions.len(),
            dir = %out_dir.display(),
            "Saved mentions"
        );
        Ok(())
    }

    /// Read back a pair of files written by [`Mentions::save_json`].
    pub fn load_json(out_dir: &Path) -> Result<Self> {
        Self::load_json_with_name(out_dir, DEFAULT_BASE_NAME)
    }

    pub fn load_json_with_name(out_dir: &Path, base_name: &str) -> Result<Self> {
        let (entity_path, event_path) = output_paths(out_dir, base_name);
        Ok(Self {
            entity_mentions: read_records(&entity_path)?,
            event_mentions: read_records(&event_path)?,
        })
    }
}

fn output_paths(out_dir: &Path, base_name: &str) -> (PathBuf, PathBuf) {
    (
        out_dir.join(format!("entity_{}.json", base_name)),
        out_dir.join(format!("event_{}.json", base_name)),
    )
}

fn write_records(path: &Path, records: &[MentionRecord]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, records)
        .with_context(|| format!("Failed to serialize mentions to {:?}", path))?;
    writer.flush().with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

fn read_records(path: &Path) -> Result<Vec<MentionRecord>> {
    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse mentions from {:?}", path))
}
