//! Floor-plan rendering: a layout in, an SVG preview and a CAD script out.
//!
//! Pure string building, no I/O. Saving the script somewhere is the host's
//! job — see [`save`].

pub mod save;
mod script;
mod svg;

pub use script::CommandStyle;

use archivox_core::Layout;
use serde::{Deserialize, Serialize};

/// The single user-visible message for a layout missing its required sections.
pub const INVALID_LAYOUT: &str = "Invalid layout data.";

/// Successful render output. Both strings are produced together from one pass
/// over the rooms; there is no partial success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloorPlan {
    pub svg: String,
    pub script: String,
}

/// Wire shape for hosts that serialize the outcome directly: success and
/// failure are mutually exclusive JSON objects, `{"svg":..,"script":..}` or
/// `{"error":..}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum RenderReply {
    Plan(FloorPlan),
    Invalid { error: String },
}

/// Render a floor plan.
///
/// Fails only when `rooms` or `dimensions` is absent. Geometry is drawn
/// exactly as given: overlapping rooms, negative coordinates, and rooms
/// outside the bounding box all render without correction. Output depends
/// only on the input value, so identical layouts yield identical strings.
pub fn render_floor_plan(layout: &Layout, style: CommandStyle) -> Result<FloorPlan, String> {
    let (Some(dimensions), Some(rooms)) = (&layout.dimensions, &layout.rooms) else {
        return Err(INVALID_LAYOUT.to_string());
    };
    Ok(FloorPlan {
        svg: svg::document(dimensions, rooms),
        script: script::commands(rooms, style),
    })
}

/// Render from a raw JSON request body.
///
/// Anything that does not parse as a layout object — `null`, arrays,
/// mistyped fields — collapses into the same invalid-layout reply rather
/// than surfacing a serde error to the user.
pub fn render_floor_plan_raw(data: &str, style: CommandStyle) -> RenderReply {
    let Ok(layout) = serde_json::from_str::<Layout>(data) else {
        return RenderReply::Invalid {
            error: INVALID_LAYOUT.to_string(),
        };
    };
    match render_floor_plan(&layout, style) {
        Ok(plan) => RenderReply::Plan(plan),
        Err(error) => RenderReply::Invalid { error },
    }
}
