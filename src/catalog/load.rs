//! Catalog loading from a JSON track file.

use super::{AudioDescriptor, CatalogSnapshot, Track};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Non-fatal issues found while building a snapshot. Entries with an
/// invalid audio value or a duplicate id are skipped; a missing audio field
/// is only reported, the scorer falls back to the default level.
#[derive(Debug, PartialEq)]
pub enum Problem {
    DuplicateTrackId(String),
    InvalidAudioValue {
        track_id: String,
        field: &'static str,
        value: f64,
    },
    MissingAudioField {
        track_id: String,
        field: &'static str,
    },
}

fn check_audio_fields(track: &Track, problems: &mut Vec<Problem>) -> bool {
    let mut usable = true;
    let audio: &AudioDescriptor = &track.audio;
    for (field, value) in [
        ("valence", audio.valence),
        ("energy", audio.energy),
        ("danceability", audio.danceability),
    ] {
        match value {
            None => problems.push(Problem::MissingAudioField {
                track_id: track.id.clone(),
                field,
            }),
            Some(value) if !value.is_finite() || !(0.0..=1.0).contains(&value) => {
                problems.push(Problem::InvalidAudioValue {
                    track_id: track.id.clone(),
                    field,
                    value,
                });
                usable = false;
            }
            Some(_) => {}
        }
    }
    usable
}

fn build_snapshot(entries: Vec<Track>) -> (CatalogSnapshot, Vec<Problem>) {
    let mut problems = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut tracks = Vec::with_capacity(entries.len());

    for track in entries {
        if !seen_ids.insert(track.id.clone()) {
            problems.push(Problem::DuplicateTrackId(track.id.clone()));
            continue;
        }
        if check_audio_fields(&track, &mut problems) {
            tracks.push(track);
        }
    }

    (CatalogSnapshot::new(tracks), problems)
}

/// Reads the catalog JSON file (an array of tracks) and builds a snapshot.
/// Per-entry problems are non-fatal and logged; only an unreadable or
/// unparseable file fails the load.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogSnapshot> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    let entries: Vec<Track> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;

    let (snapshot, problems) = build_snapshot(entries);

    if !problems.is_empty() {
        info!("Found {} catalog problems:", problems.len());
        for problem in problems.iter() {
            info!("- {:?}", problem);
        }
    }
    info!("Catalog has {} tracks", snapshot.tracks_count());

    Ok(snapshot)
}
