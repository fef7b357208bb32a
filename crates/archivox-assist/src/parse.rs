use archivox_core::Layout;

/// Pull the floor-plan layout out of a model reply.
///
/// Tries the fenced ```json block first, then falls back to the outermost
/// `{...}` span. Returns `None` unless the parsed layout carries both
/// required sections — a reply without a usable plan still has value as
/// conversation text, so total parse failure degrades gracefully.
pub fn extract_layout(raw: &str) -> Option<Layout> {
    let candidate = fenced_block(raw).or_else(|| outer_object(raw))?;
    let layout: Layout = serde_json::from_str(&candidate).ok()?;
    layout.is_complete().then_some(layout)
}

fn fenced_block(raw: &str) -> Option<String> {
    let start = raw.find("```json")? + "```json".len();
    let rest = &raw[start..];
    let end = rest.find("```")?;
    Some(rest[..end].trim().to_string())
}

fn outer_object(raw: &str) -> Option<String> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(raw[start..=end].to_string())
}
