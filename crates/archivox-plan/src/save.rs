//! Packaging a CAD script for download.
//!
//! The renderer never touches the filesystem or the DOM. Hosts inject a
//! [`SaveTarget`] — a browser shell offers a blob download, a web backend
//! streams an attachment, and [`DirTarget`] writes plain files.

use std::fs;
use std::path::PathBuf;

/// Filename downstream CAD tooling expects.
pub const SCRIPT_FILENAME: &str = "floorplan.scr";

pub const SCRIPT_MIME: &str = "text/plain";

/// A script packaged for delivery to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptArtifact {
    pub filename: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Package a script string as the downloadable `.scr` artifact.
pub fn script_artifact(script: &str) -> ScriptArtifact {
    ScriptArtifact {
        filename: SCRIPT_FILENAME.to_string(),
        mime_type: SCRIPT_MIME.to_string(),
        data: script.as_bytes().to_vec(),
    }
}

/// Save capability injected by the host: given an artifact, offer a save
/// action.
pub trait SaveTarget {
    fn save(&self, artifact: &ScriptArtifact) -> Result<(), String>;
}

/// Saves artifacts into a directory, creating it if needed.
#[derive(Debug, Clone)]
pub struct DirTarget {
    pub dir: PathBuf,
}

impl SaveTarget for DirTarget {
    fn save(&self, artifact: &ScriptArtifact) -> Result<(), String> {
        fs::create_dir_all(&self.dir).map_err(|e| e.to_string())?;
        fs::write(self.dir.join(&artifact.filename), &artifact.data)
            .map_err(|e| e.to_string())
    }
}
