use archivox_core::{Dimensions, Room};

/// Linear scale from layout units to SVG pixels. A design constant — never
/// derived from the input.
const SCALE: f64 = 10.0;

// Label offset from the room's top-left corner, in scaled units.
const LABEL_DX: f64 = 4.0;
const LABEL_DY: f64 = 15.0;

/// Build the SVG preview: one `<rect>` + `<text>` pair per room, input order.
pub(crate) fn document(dimensions: &Dimensions, rooms: &[Room]) -> String {
    let width = dimensions.width * SCALE;
    let height = dimensions.depth * SCALE;

    let mut out = String::with_capacity(128 + rooms.len() * 192);
    out.push_str(&format!(
        "<svg width=\"{width}\" height=\"{height}\" xmlns=\"http://www.w3.org/2000/svg\">"
    ));

    for room in rooms {
        let x = room.x * SCALE;
        let y = room.y * SCALE;
        out.push_str(&format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"none\" stroke=\"#444\" stroke-width=\"2\"/>",
            w = room.width * SCALE,
            h = room.height * SCALE,
        ));
        out.push_str(&format!(
            "<text x=\"{lx}\" y=\"{ly}\" font-size=\"12\" fill=\"#333\">{label}</text>",
            lx = x + LABEL_DX,
            ly = y + LABEL_DY,
            label = escape_text(&room.room_type),
        ));
    }

    out.push_str("</svg>");
    out
}

/// Room labels come from the design AI and ultimately the user; escape them
/// so a label can never break out of the markup.
fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
