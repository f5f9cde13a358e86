use dioxus::prelude::*;

use api::PhotoMarker;

use crate::{
    common::{format_location, format_upload_date, gateway::GatewayConfig},
    components::icons::CloseIcon,
};

// PhotoModal
//
// shows a single photo from the map, together with where and when it was taken.
// the parent owns both the open flag and the selected marker; this component
// keeps no state and only reports back through on_close, which both the corner
// button and the bottom button call identically
#[derive(Clone, PartialEq, Props)]
pub struct PhotoModalProps {
    is_open: bool,
    #[props(!optional)]
    photo: Option<PhotoMarker>,
    on_close: EventHandler,
}

#[component]
pub fn PhotoModal(props: PhotoModalProps) -> Element {
    // hooks have to run on every render, so resolve the gateway before the guard
    let gateway = try_use_context::<GatewayConfig>().unwrap_or_default();

    let photo = match (props.is_open, &props.photo) {
        (true, Some(photo)) => photo,
        _ => return rsx! {},
    };

    let on_close = props.on_close;

    let image_src = gateway.image_link(&photo.ipfs_hash);
    let location = format_location(photo);
    let uploaded = format_upload_date(&photo.timestamp);

    rsx! {
        div {
            class: "photo-modal-overlay",
            role: "dialog",
            aria_modal: "true",
            div { class: "photo-modal",
                button {
                    class: "photo-modal-dismiss",
                    aria_label: "Close photo",
                    onclick: move |_| on_close.call(()),
                    CloseIcon { class: "icon-md" }
                }

                div { class: "photo-modal-body",
                    div { class: "photo-modal-frame",
                        img {
                            class: "photo-modal-image",
                            src: "{image_src}",
                            alt: "{photo.name}",
                        }
                    }

                    div { class: "photo-modal-info",
                        h3 { class: "photo-modal-title", "{photo.name}" }

                        div { class: "photo-modal-details",
                            div { class: "photo-modal-detail",
                                h4 { class: "photo-modal-label", "Location" }
                                div { class: "photo-modal-value mono", "{location}" }
                            }
                            div { class: "photo-modal-detail",
                                h4 { class: "photo-modal-label", "Uploaded on" }
                                div { class: "photo-modal-value", "{uploaded}" }
                            }
                        }

                        div { class: "photo-modal-actions",
                            button {
                                class: "photo-modal-close",
                                onclick: move |_| on_close.call(()),
                                CloseIcon { class: "icon-sm" }
                                "Close"
                            }
                        }
                    }
                }
            }
        }
    }
}
