//! HTML Export Module
//! Serializes a dashboard spec into a self-contained interactive page.
//!
//! The page pulls the Vega runtime from CDN script tags and embeds the
//! dashboard spec (data included) inline, so the file opens from disk with
//! no server behind it.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::vega::DashboardSpec;

/// CDN bundles for the in-page chart runtime.
const VEGA_CDN: &str = "https://cdn.jsdelivr.net/npm/vega@5";
const VEGA_LITE_CDN: &str = "https://cdn.jsdelivr.net/npm/vega-lite@5";
const VEGA_EMBED_CDN: &str = "https://cdn.jsdelivr.net/npm/vega-embed@6";

#[derive(Error, Debug)]
pub enum HtmlError {
    #[error("Failed to write HTML: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to serialize dashboard spec: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes dashboard pages.
pub struct HtmlExporter;

impl HtmlExporter {
    /// Render the full page for a dashboard into `writer`.
    pub fn write<W: Write>(writer: &mut W, spec: &DashboardSpec) -> Result<(), HtmlError> {
        let spec_json = serde_json::to_string(spec)?;

        write!(
            writer,
            r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{vega}"></script>
    <script src="{vega_lite}"></script>
    <script src="{vega_embed}"></script>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
            margin: 2rem;
        }}
    </style>
</head>
<body>
    <div id="vis"></div>
    <script>
        const spec = {spec_json};
        vegaEmbed("#vis", spec, {{ mode: "vega-lite" }}).catch(console.error);
    </script>
</body>
</html>
"##,
            title = spec.title,
            vega = VEGA_CDN,
            vega_lite = VEGA_LITE_CDN,
            vega_embed = VEGA_EMBED_CDN,
            spec_json = spec_json,
        )?;

        Ok(())
    }

    /// Save a dashboard to `path`, creating parent directories as needed.
    pub fn save(path: &Path, spec: &DashboardSpec) -> Result<(), HtmlError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write(&mut writer, spec)?;
        writer.flush()?;

        tracing::info!(path = %path.display(), "saved dashboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vega::InlineData;

    fn tiny_spec() -> DashboardSpec {
        DashboardSpec::new(
            "Test Dashboard",
            InlineData { values: Vec::new() },
            Vec::new(),
        )
    }

    #[test]
    fn test_write_page_structure() {
        let mut out = Vec::new();
        HtmlExporter::write(&mut out, &tiny_spec()).unwrap();
        let page = String::from_utf8(out).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Test Dashboard</title>"));
        assert!(page.contains(VEGA_CDN));
        assert!(page.contains(VEGA_LITE_CDN));
        assert!(page.contains(VEGA_EMBED_CDN));
        assert!(page.contains(r##"vegaEmbed("#vis", spec"##));
        assert!(page.contains("vega-lite/v5.json"));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visuals").join("dashboard.html");

        HtmlExporter::save(&path, &tiny_spec()).unwrap();
        assert!(path.exists());
    }
}
