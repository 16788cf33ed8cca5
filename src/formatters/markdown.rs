use anyhow::Result;
use std::fs;
use std::path::Path;

/// Markdown formatter producing a two-column reference table.
///
/// The preview cell needs a live HTML environment to actually render; the
/// table shows the usage snippet inline instead.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_file(&self, icons: &[String], output_path: &Path) -> Result<()> {
        fs::write(output_path, self.format_table(icons))?;
        Ok(())
    }

    fn format_table(&self, icons: &[String]) -> String {
        let mut lines = vec![
            "| Icon Class | Preview |".to_string(),
            "|-----------|---------|".to_string(),
        ];
        for icon in icons {
            lines.push(format!(
                "| `{icon}` | `<span class=\"icon {icon}\"></span>` |"
            ));
        }
        let mut content = lines.join("\n");
        content.push('\n');
        content
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}
