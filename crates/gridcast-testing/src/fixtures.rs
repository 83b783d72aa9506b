//! Fixtures for sample record generation and loading.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::{Value, json};

/// A collection record referencing media files by bare GUID.
pub fn collection_record(guids: &[&str]) -> Value {
    json!({
        "name": "Test Collection",
        "description": "Fixture collection",
        "media_files": guids,
    })
}

/// A batch record with two finished runs (one failed) and one unstarted
/// media file.
pub fn batch_record() -> Value {
    json!({
        "name": "Test Batch",
        "description": "Fixture batch",
        "media_files": ["cpb-aacip-111", "cpb-aacip-222", "cpb-aacip-333"],
        "runs": [
            {
                "guid": "cpb-aacip-111",
                "pathspec": "IngestFlow/1001",
                "finished": true,
                "successful": true,
                "created_at": 1700000000,
                "finished_at": 1700003600,
            },
            {
                "guid": "cpb-aacip-222",
                "pathspec": "IngestFlow/1002",
                "finished": true,
                "successful": false,
                "created_at": 1700000000,
                "finished_at": null,
            },
        ],
    })
}

/// An asset record carrying a small thumbnail.
pub fn asset_record() -> Value {
    json!({
        "name": "asset-42",
        "size": 1048576,
        "type": "Video",
        "format": "mp4",
        "thumbnails_by_type": {
            "small": {"location": "https://ci.example.com/thumbs/42-small.png"},
            "large": {"location": "https://ci.example.com/thumbs/42-large.png"},
        },
    })
}

/// A run record pointing at the workflow dashboard.
pub fn run_record() -> Value {
    json!({
        "guid": "cpb-aacip-111",
        "pathspec": "IngestFlow/1001",
        "current_step": "transcode",
        "current_task": "77",
        "finished": true,
        "successful": true,
    })
}

/// Sample record manager reading checked-in JSON files.
pub struct SampleRecords {
    samples_dir: PathBuf,
}

impl Default for SampleRecords {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleRecords {
    /// Samples live in `crates/gridcast-testing/samples/`.
    pub fn new() -> Self {
        let samples_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples");
        Self { samples_dir }
    }

    /// Load a sample record by file name.
    pub fn load(&self, name: &str) -> Result<Value> {
        let path = self.samples_dir.join(name);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read sample: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse sample: {}", path.display()))
    }
}
