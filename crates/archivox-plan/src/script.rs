use archivox_core::Room;
use serde::{Deserialize, Serialize};

/// Drawing command keyword for the generated CAD script. Two dialects exist
/// in downstream tooling; both draw the same corner-to-corner rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandStyle {
    #[default]
    Rectangle,
    Rectang,
}

impl CommandStyle {
    pub fn keyword(self) -> &'static str {
        match self {
            CommandStyle::Rectangle => "RECTANGLE",
            CommandStyle::Rectang => "RECTANG",
        }
    }
}

/// One command per room, input order, raw (unscaled) layout units:
/// `<KEYWORD> x1,y1 x2,y2` from top-left to bottom-right corner.
pub(crate) fn commands(rooms: &[Room], style: CommandStyle) -> String {
    rooms
        .iter()
        .map(|room| {
            format!(
                "{} {},{} {},{}",
                style.keyword(),
                room.x,
                room.y,
                room.x + room.width,
                room.y + room.height,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
