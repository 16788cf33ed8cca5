use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::IconInventory;

/// CSV formatter: `icon_class,is_brand` header, one row per base icon.
pub struct CsvReportFormatter;

impl CsvReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_file(&self, inventory: &IconInventory, output_path: &Path) -> Result<()> {
        fs::write(output_path, self.format_rows(inventory))?;
        Ok(())
    }

    fn format_rows(&self, inventory: &IconInventory) -> String {
        let mut lines = vec!["icon_class,is_brand".to_string()];
        for icon in &inventory.icons {
            let flag = if inventory.is_brand(icon) { "yes" } else { "no" };
            lines.push(format!("{icon},{flag}"));
        }
        let mut content = lines.join("\n");
        content.push('\n');
        content
    }
}

impl Default for CsvReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
