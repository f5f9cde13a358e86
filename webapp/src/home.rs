use dioxus::prelude::*;
use tracing::{debug, error, info};

use api::{PhotoMarker, parse_markers};

use crate::{common::format_location, components::photo_modal::PhotoModal};

// the map layer is not part of this app; this list stands in for it and owns
// the same state the map would: which marker is selected, and whether the
// photo is showing
const MARKERS: &str = include_str!("../data/markers.json");

pub fn load_markers(doc: &str) -> Vec<PhotoMarker> {
    match parse_markers(doc) {
        Ok(markers) => {
            debug!("loaded {} photo markers", markers.len());
            markers
        }
        Err(err) => {
            error!("{err:#}");
            Vec::new()
        }
    }
}

#[component]
pub fn Home() -> Element {
    let markers = use_hook(|| load_markers(MARKERS));

    let mut selected = use_signal(|| None::<PhotoMarker>);
    let mut is_open = use_signal(|| false);

    rsx! {
        div { class: "home-container",
            h1 { class: "home-title", "Sunset photos" }

            if markers.is_empty() {
                p { class: "empty-state", "No photos have been pinned yet." }
            } else {
                ul { class: "marker-list",
                    for marker in markers {
                        li { key: "{marker.id}",
                            button {
                                class: "marker-button",
                                onclick: {
                                    let marker = marker.clone();
                                    move |_| {
                                        info!("showing photo {}", marker.id);
                                        selected.set(Some(marker.clone()));
                                        is_open.set(true);
                                    }
                                },
                                span { class: "marker-name", "{marker.name}" }
                                span { class: "marker-location", {format_location(&marker)} }
                            }
                        }
                    }
                }
            }

            PhotoModal {
                is_open: is_open(),
                photo: selected(),
                on_close: move |_| {
                    debug!("photo closed");
                    is_open.set(false);
                    selected.set(None);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_markers_parse() {
        let markers = load_markers(MARKERS);
        assert!(!markers.is_empty());
        assert!(markers.iter().all(|m| !m.ipfs_hash.is_empty()));
    }

    #[test]
    fn test_bad_markers_fall_back_to_empty() {
        assert!(load_markers("{ not json").is_empty());
        assert!(load_markers(r#"{"id": "not-a-list"}"#).is_empty());
    }

    #[test]
    fn test_home_starts_with_modal_closed() {
        let mut dom = VirtualDom::new(Home);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Sunset over the Spree"));
        assert!(html.contains("52,520008, 13,404954"));
        assert!(!html.contains("role=\"dialog\""));
        assert!(!html.contains("<img"));
    }
}
