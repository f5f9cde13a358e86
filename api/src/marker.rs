use anyhow::Context;
use serde::{Deserialize, Serialize};

// structs and types

pub type MarkerId = String;

// a single photo pinned on the map
//
// the map side owns these; everything downstream treats them as read-only.
// the field names on the wire follow the javascript map layer, hence camelCase
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoMarker {
    pub id: MarkerId,
    // [longitude, latitude] -- geojson order, not the order we display in
    pub coordinates: [f64; 2],
    pub ipfs_hash: String,
    pub name: String,
    // ISO-8601, parsed only when displayed
    pub timestamp: String,
}

impl PhotoMarker {
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

// decode a json array of markers, as served alongside the map
pub fn parse_markers(doc: &str) -> anyhow::Result<Vec<PhotoMarker>> {
    serde_json::from_str(doc).context("failed to parse photo markers")
}
