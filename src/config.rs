use std::env;

pub const DEFAULT_SITE_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SITE_ROOT: &str = "target/site";

/// Name of the wasm-bindgen bundle under `<site root>/pkg`.
pub const BUNDLE_NAME: &str = "worklog";

/// Where the server listens and where cargo-leptos put the built site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: String,
    pub site_root: String,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            addr: lookup("SITE_ADDR").unwrap_or_else(|| DEFAULT_SITE_ADDR.to_string()),
            // the dockerfile defines this for production deployments
            site_root: lookup("SITE_ROOT").unwrap_or_else(|| DEFAULT_SITE_ROOT.to_string()),
        }
    }

    pub fn pkg_dir(&self) -> String {
        format!("{}/pkg", self.site_root)
    }

    pub fn avatar_dir(&self) -> String {
        format!("{}/userIcons", self.site_root)
    }
}
