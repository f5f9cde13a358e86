// ipfs gateway settings
//
// the gateway is provided as a context at the app root so that a different
// pinning service (or a local node) can be swapped in without touching the
// components that build image links
pub const DEFAULT_GATEWAY_URL: &str = "https://tan-mad-gorilla-689.mypinata.cloud";

#[derive(Clone, Debug, PartialEq)]
pub struct GatewayConfig {
    base_url: String,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        GatewayConfig {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // no validation of the hash; a bad one just shows up as a broken image
    pub fn image_link(&self, ipfs_hash: &str) -> String {
        format!("{}/ipfs/{ipfs_hash}", self.base_url)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig::new(option_env!("PHOTOMAP_GATEWAY_URL").unwrap_or(DEFAULT_GATEWAY_URL))
    }
}
