use super::Track;
use std::collections::HashMap;

/// A point-in-time, read-only view of the track catalog. Installed once at
/// startup and replaced wholesale on reload; never mutated in place, so the
/// scoring path needs no locking beyond cloning the reference.
#[derive(Debug, Default)]
pub struct CatalogSnapshot {
    tracks: Vec<Track>,
    by_id: HashMap<String, usize>,
}

impl CatalogSnapshot {
    /// Builds a snapshot from tracks with already-validated, unique ids.
    pub fn new(tracks: Vec<Track>) -> Self {
        let by_id = tracks
            .iter()
            .enumerate()
            .map(|(index, track)| (track.id.clone(), index))
            .collect();
        Self { tracks, by_id }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get_track(&self, id: &str) -> Option<&Track> {
        self.by_id.get(id).map(|&index| &self.tracks[index])
    }

    pub fn tracks_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
