use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Numeric audio features for one track or one analysis request. Only
/// valence, energy and danceability feed the mood mapping; everything else
/// (tempo, spectral fields, MFCCs) is carried opaquely for the external
/// feature extractor.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AudioDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub danceability: Option<f64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, f64>,
}

impl AudioDescriptor {
    /// Default level for absent valence/energy/danceability.
    pub const DEFAULT_LEVEL: f64 = 0.5;

    pub fn valence_or_default(&self) -> f64 {
        self.valence.unwrap_or(Self::DEFAULT_LEVEL)
    }

    pub fn energy_or_default(&self) -> f64 {
        self.energy.unwrap_or(Self::DEFAULT_LEVEL)
    }

    pub fn danceability_or_default(&self) -> f64 {
        self.danceability.unwrap_or(Self::DEFAULT_LEVEL)
    }
}

/// One catalog entry. Immutable once loaded into a snapshot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub genre_tags: BTreeSet<String>,
    #[serde(default)]
    pub mood_tags: BTreeSet<String>,
    #[serde(rename = "audio_features", default)]
    pub audio: AudioDescriptor,
}
