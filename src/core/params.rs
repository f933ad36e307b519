use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ErrorPolicy;

/// Directory the original tool was hardwired to
pub const DEFAULT_SOURCE_DIR: &str = "./public/content/maps";

/// Recognized suffixes, matched case-sensitively against file names
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".png", ".jpg"];

/// Squaring parameters suitable for preset files and the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquareParams {
    pub source_dir: PathBuf,
    /// None writes back into `source_dir`, overwriting the originals
    pub output_dir: Option<PathBuf>,
    pub extensions: Vec<String>,
    pub on_error: ErrorPolicy,
    /// Copy an existing output file to `<name>.bak` before overwriting it
    pub backup: bool,
}

impl Default for SquareParams {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_dir: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            on_error: ErrorPolicy::Continue,
            backup: false,
        }
    }
}

impl SquareParams {
    pub fn resolved_output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.source_dir)
    }

    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(Error::InvalidArgument {
                arg: "extensions",
                value: "[]".to_string(),
            });
        }
        if let Some(ext) = self.extensions.iter().find(|e| e.is_empty()) {
            return Err(Error::InvalidArgument {
                arg: "extensions",
                value: format!("{:?}", ext),
            });
        }
        Ok(())
    }

    pub fn save_preset(&self, path: &Path) -> Result<()> {
        let mut preset_content = String::new();
        preset_content.push_str("// ==========================================\n");
        preset_content.push_str("// squarepad configuration preset\n");
        preset_content.push_str("// ==========================================\n");
        preset_content.push_str(&format!("// Version: {}\n", env!("CARGO_PKG_VERSION")));
        preset_content.push_str(&format!(
            "// Generated: {}\n",
            chrono::Utc::now().to_rfc3339()
        ));
        preset_content.push_str("// ==========================================\n\n");

        let json = serde_json::to_string_pretty(self)?;
        preset_content.push_str(&json);
        preset_content.push('\n');

        fs::write(path, preset_content)?;
        tracing::info!("Preset saved to: {:?}", path);
        Ok(())
    }

    pub fn load_preset(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // The comment header ends where the JSON object starts
        let json_start = content.find('{').ok_or_else(|| Error::InvalidArgument {
            arg: "config",
            value: path.display().to_string(),
        })?;
        let params: SquareParams = serde_json::from_str(&content[json_start..])?;

        tracing::info!("Preset loaded from: {:?}", path);
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dir_defaults_to_source() {
        let params = SquareParams {
            source_dir: PathBuf::from("/maps"),
            ..Default::default()
        };
        assert_eq!(params.resolved_output_dir(), Path::new("/maps"));

        let params = SquareParams {
            output_dir: Some(PathBuf::from("/out")),
            ..params
        };
        assert_eq!(params.resolved_output_dir(), Path::new("/out"));
    }

    #[test]
    fn defaults_match_original_whitelist() {
        let params = SquareParams::default();
        assert_eq!(params.extensions, vec![".png", ".jpg"]);
        assert_eq!(params.on_error, ErrorPolicy::Continue);
        assert!(!params.backup);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_extensions() {
        let params = SquareParams {
            extensions: vec![],
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidArgument { arg: "extensions", .. })
        ));

        let params = SquareParams {
            extensions: vec![".png".into(), String::new()],
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn preset_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.json");
        let params = SquareParams {
            source_dir: PathBuf::from("in"),
            output_dir: Some(PathBuf::from("out")),
            extensions: vec![".png".into()],
            on_error: ErrorPolicy::Abort,
            backup: true,
        };

        params.save_preset(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("// "));

        assert_eq!(SquareParams::load_preset(&path).unwrap(), params);
    }

    #[test]
    fn partial_preset_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.json");
        fs::write(&path, "// header\n{ \"source_dir\": \"maps\" }").unwrap();

        let params = SquareParams::load_preset(&path).unwrap();
        assert_eq!(params.source_dir, PathBuf::from("maps"));
        assert_eq!(params.extensions, vec![".png", ".jpg"]);
        assert_eq!(params.output_dir, None);
    }

    #[test]
    fn preset_without_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.json");
        fs::write(&path, "// nothing here").unwrap();

        assert!(matches!(
            SquareParams::load_preset(&path),
            Err(Error::InvalidArgument { arg: "config", .. })
        ));
    }
}
