use dioxus::prelude::*;

// the same cross is used by the corner button and the labelled close button,
// only the size differs
#[derive(Clone, PartialEq, Props)]
pub struct CloseIconProps {
    class: String,
}

#[component]
pub fn CloseIcon(props: CloseIconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M6 18L18 6M6 6l12 12",
            }
        }
    }
}
