use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::core::IconInventory;

/// JSON formatter: counts plus the three sorted arrays, pretty-printed.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_file(&self, inventory: &IconInventory, output_path: &Path) -> Result<()> {
        let json_content = self.format_report(inventory)?;
        fs::write(output_path, json_content)?;
        Ok(())
    }

    fn format_report(&self, inventory: &IconInventory) -> Result<String> {
        let report = json!({
            "count_total": inventory.total(),
            "count_brands": inventory.brand_count(),
            "count_non_brands": inventory.non_brand_count(),
            "icons": inventory.icons,
            "brands": inventory.brands,
            "non_brands": inventory.non_brands,
        });

        Ok(serde_json::to_string_pretty(&report)?)
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
