use anyhow::Result;
use std::fs;
use std::path::Path;

/// Plain-text list formatter: one icon class per line, trailing newline.
pub struct ListFormatter;

impl ListFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_file(&self, items: &[String], output_path: &Path) -> Result<()> {
        fs::write(output_path, self.format_list(items))?;
        Ok(())
    }

    fn format_list(&self, items: &[String]) -> String {
        let mut content = items.join("\n");
        content.push('\n');
        content
    }
}

impl Default for ListFormatter {
    fn default() -> Self {
        Self::new()
    }
}
