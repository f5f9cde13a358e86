pub mod marker;

pub use marker::{PhotoMarker, parse_markers};
