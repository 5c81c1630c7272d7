use crate::animation::template::TemplateDef;
use crate::config::group::ConfigDef;
use crate::foundation::error::{AnimTextError, AnimTextResult};
use crate::plan::element::ElementSpec;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// JSON-facing description of one animated group.
///
/// ```json
/// {
///   "elements": [{"animationName": "fadeIn", "offset": 250}],
///   "config": {"repeat": 2},
///   "animations": {"blink": {"positions": {"0": {"opacity": 0}}}}
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupDef {
    /// Element specs, bound by position to the container's children.
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
    /// Partial configuration merged onto the defaults.
    #[serde(default)]
    pub config: ConfigDef,
    /// Caller templates merged into the built-in registry.
    #[serde(default)]
    pub animations: BTreeMap<String, TemplateDef>,
}

impl GroupDef {
    /// Parse a group definition from a JSON string.
    pub fn from_json(s: &str) -> AnimTextResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| AnimTextError::serde(format!("parse group definition JSON: {e}")))
    }

    /// Parse a group definition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> AnimTextResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| AnimTextError::serde(format!("parse group definition JSON: {e}")))
    }

    /// Parse a group definition from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> AnimTextResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open group definition '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize back to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> AnimTextResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AnimTextError::serde(format!("serialize group definition: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/def.rs"]
mod tests;
