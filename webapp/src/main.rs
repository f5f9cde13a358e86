#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::{Level, info};

mod common;
use common::gateway::GatewayConfig;

mod components;

mod home;
use home::Home;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let gateway = GatewayConfig::default();
        info!("using ipfs gateway {}", gateway.base_url());
        gateway
    });

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        Home {}
    }
}
