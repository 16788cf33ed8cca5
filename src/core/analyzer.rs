use anyhow::Result;
use std::path::Path;

use super::{extractor, loader, IconInventory};

/// Runs the full pipeline for one CSS bundle: load, extract, normalize.
pub struct BundleAnalyzer;

impl BundleAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, css_path: &Path) -> Result<IconInventory> {
        let css_text = loader::load_css(css_path)?;
        let raw_classes = extractor::extract_icon_classes(&css_text);
        Ok(IconInventory::from_raw_classes(&raw_classes))
    }
}

impl Default for BundleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
