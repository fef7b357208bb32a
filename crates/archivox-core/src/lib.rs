use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// --- Types (matching the frontend's layout JSON) ---

/// Outer bounding box of a floor plan. Units are whatever the caller drew in
/// (feet or meters) — nothing downstream distinguishes them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub width: f64,
    pub depth: f64,
}

/// One rectangular area within a layout. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Free-text label shown on the plan, e.g. "Bedroom".
    #[serde(rename = "type")]
    pub room_type: String,
}

/// A floor plan as sent by the frontend or extracted from an AI reply.
///
/// Both sections are optional at the type level: presence is a runtime
/// contract checked by the renderer, so a half-built layout deserializes
/// cleanly and fails with one user-visible error instead of a parse failure
/// deep in serde. Room geometry is never validated — rooms may overlap or
/// fall outside `dimensions` and are drawn exactly as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<Vec<Room>>,
}

impl Layout {
    /// True when both required sections are present.
    pub fn is_complete(&self) -> bool {
        self.dimensions.is_some() && self.rooms.is_some()
    }
}

// --- AI Settings ---

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    pub provider: String,
    pub api_key: String,
    pub model: String,
}

/// Resolve the global config directory (~/.archivox/).
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".archivox")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Read settings once at process start. A missing or unreadable file falls
/// back to defaults; the caller decides whether an unconfigured state is an
/// error. The assistant never reads credentials from the environment — the
/// host hands it an `AiSettings` value explicitly.
pub fn read_settings() -> AiSettings {
    let path = settings_path();
    if !path.exists() {
        return AiSettings::default();
    }
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn write_settings(settings: &AiSettings) -> Result<(), String> {
    let dir = config_dir();
    fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    fs::write(settings_path(), json).map_err(|e| e.to_string())
}

/// Ollama runs locally and needs no key; every hosted provider does.
pub fn ai_configured(settings: &AiSettings) -> bool {
    !settings.provider.is_empty()
        && !settings.model.is_empty()
        && (settings.provider == "ollama" || !settings.api_key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_deserializes_with_missing_sections() {
        let layout: Layout = serde_json::from_str("{}").unwrap();
        assert!(layout.dimensions.is_none());
        assert!(layout.rooms.is_none());
        assert!(!layout.is_complete());

        let layout: Layout = serde_json::from_str(r#"{"rooms": []}"#).unwrap();
        assert!(layout.rooms.is_some());
        assert!(!layout.is_complete());
    }

    #[test]
    fn room_uses_type_key_on_the_wire() {
        let room: Room = serde_json::from_str(
            r#"{"x": 0, "y": 1, "width": 4, "height": 3, "type": "Bedroom"}"#,
        )
        .unwrap();
        assert_eq!(room.room_type, "Bedroom");

        let json = serde_json::to_string(&room).unwrap();
        assert!(json.contains(r#""type":"Bedroom""#));
        assert!(!json.contains("room_type"));
    }

    #[test]
    fn complete_layout_round_trips() {
        let src = r#"{"dimensions":{"width":10.0,"depth":8.0},"rooms":[{"x":0.0,"y":0.0,"width":4.0,"height":3.0,"type":"Bedroom"}]}"#;
        let layout: Layout = serde_json::from_str(src).unwrap();
        assert!(layout.is_complete());
        assert_eq!(serde_json::to_string(&layout).unwrap(), src);
    }

    #[test]
    fn unconfigured_settings_are_rejected() {
        assert!(!ai_configured(&AiSettings::default()));
        assert!(!ai_configured(&AiSettings {
            provider: "openai".into(),
            api_key: String::new(),
            model: "gpt-4o-mini".into(),
        }));
    }

    #[test]
    fn ollama_needs_no_key() {
        assert!(ai_configured(&AiSettings {
            provider: "ollama".into(),
            api_key: String::new(),
            model: "llama3".into(),
        }));
    }
}
