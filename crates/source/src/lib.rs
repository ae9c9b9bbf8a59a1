use std::{io, path::Path};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use thiserror::Error;

use shared::domain::{Announcement, Category};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read records from '{path}'")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode records from '{path}'")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub categories: Vec<Category>,
    pub announcements: Vec<Announcement>,
}

pub fn load_snapshot(
    categories_path: &Path,
    announcements_path: &Path,
) -> Result<Snapshot, SnapshotError> {
    Ok(Snapshot {
        categories: load_records(categories_path)?,
        announcements: load_records(announcements_path)?,
    })
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SnapshotError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SnapshotError::Decode {
        path: path.display().to_string(),
        source,
    })
}

/// Applies the upstream record filtering the pipeline expects to have already
/// happened: inactive categories and announcements are dropped, as are
/// announcements outside their publication window. Absent window bounds are
/// open-ended.
pub fn filter_current(snapshot: Snapshot, now: DateTime<Utc>) -> Snapshot {
    Snapshot {
        categories: snapshot
            .categories
            .into_iter()
            .filter(|category| category.active)
            .collect(),
        announcements: snapshot
            .announcements
            .into_iter()
            .filter(|announcement| announcement_is_current(announcement, now))
            .collect(),
    }
}

pub fn announcement_is_current(announcement: &Announcement, now: DateTime<Utc>) -> bool {
    announcement.active
        && announcement.since.map_or(true, |since| since < now)
        && announcement.until.map_or(true, |until| now < until)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
