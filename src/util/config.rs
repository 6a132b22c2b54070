//! Inline site configuration.
//!
//! A page may carry a `<script type="application/json" id="folio-config">`
//! block with partial [`SiteConfig`] overrides. No block means defaults; a
//! bad block is logged and also means defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use widgets::config::SiteConfig;

use crate::error::BootError;

/// `id` of the inline config `<script>` element.
pub const CONFIG_SCRIPT_ID: &str = "folio-config";

/// Parse the text of the inline config block. Blank or absent text yields
/// the defaults.
pub fn parse(raw: Option<&str>) -> Result<SiteConfig, BootError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(SiteConfig::default()),
        Some(text) => Ok(SiteConfig::from_json(text)?),
    }
}

/// [`parse`], falling back to the defaults on error.
pub fn resolve(raw: Option<&str>) -> SiteConfig {
    parse(raw).unwrap_or_else(|err| {
        log::warn!("{err}; using default config");
        SiteConfig::default()
    })
}
