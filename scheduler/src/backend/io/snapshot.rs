//! # Roster Snapshot Files
//!
//! Reads and writes the JSON roster snapshot the binary works from.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "skills":   [{ "id": "skill::1", "name": "Guitar", "category": "Music" }],
//!   "faculty":  [{ "id": "faculty::1", "name": "Asha", "email": "asha@example.com",
//!                  "availability": [
//!                    { "day_of_week": "Monday", "start_time": "09:00", "end_time": "17:00" }
//!                  ] }],
//!   "batches":  [{ "id": "batch::1", "name": "Guitar 101",
//!                  "start_date": "2025-01-06", "end_date": "2025-03-31",
//!                  "start_time": "10:00", "end_time": "12:00",
//!                  "days_of_week": ["Monday"], "faculty_id": "faculty::1" }],
//!   "students": []
//! }
//! ```
//!
//! Every top-level list may be omitted.

use anyhow::{Context, Result};
use shared::RosterSnapshot;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub fn load_snapshot(path: &Path) -> Result<RosterSnapshot> {
    debug!("Reading roster snapshot from {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster snapshot {}", path.display()))?;
    let snapshot: RosterSnapshot = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse roster snapshot {}", path.display()))?;

    info!(
        "Loaded roster snapshot: {} skills, {} faculty, {} batches, {} students",
        snapshot.skills.len(),
        snapshot.faculty.len(),
        snapshot.batches.len(),
        snapshot.students.len()
    );
    Ok(snapshot)
}

/// Write the snapshot via a temp file next to `path`, then rename it into place
pub fn save_snapshot(path: &Path, snapshot: &RosterSnapshot) -> Result<()> {
    let content =
        serde_json::to_string_pretty(snapshot).context("Failed to serialize roster snapshot")?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write roster snapshot {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to move roster snapshot into {}", path.display()))?;

    info!("Saved roster snapshot to {}", path.display());
    Ok(())
}
