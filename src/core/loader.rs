use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Reads the CSS bundle into memory.
///
/// Minified Font Awesome builds occasionally carry stray non-UTF-8 bytes,
/// so the content is converted lossily rather than rejected.
pub fn load_css(css_path: &Path) -> Result<String> {
    if !css_path.exists() {
        bail!("CSS file not found: {}", css_path.display());
    }

    let bytes = fs::read(css_path)
        .with_context(|| format!("Failed to read CSS file: {}", css_path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
