pub mod engine;
mod parse;
mod prompt;

use archivox_core::{AiSettings, Layout};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use prompt::{missing_fields, REQUIRED_FIELDS};

/// User preferences collected by the intake form. Clients send strings or
/// numbers interchangeably, hence the `Value` fields; a field counts as
/// answered once it holds anything other than null or a blank string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignBrief {
    pub home_type: Option<Value>,
    pub bedrooms: Option<Value>,
    pub bathrooms: Option<Value>,
    pub budget: Option<Value>,
    pub square_feet: Option<Value>,
    pub amenities: Option<Value>,
    pub style_description: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One prior turn of the design conversation, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Reply from the design AI: the conversational text plus the layout parsed
/// out of its fenced JSON block, when one was present and complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignReply {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

/// Run one design-conversation turn via the configured provider.
///
/// A complete brief asks for the design plus its floor-plan JSON; an
/// incomplete one asks the model to pose exactly one follow-up question.
/// Provider and transport failures propagate as `Err` — retry and timeout
/// policy live in the host, not here.
pub async fn generate_design(
    brief: &DesignBrief,
    history: &[ChatTurn],
    settings: &AiSettings,
) -> Result<DesignReply, String> {
    let missing = prompt::missing_fields(brief);
    let system = prompt::system_prompt();
    let user_msg = prompt::user_message(brief, &missing);

    eprintln!(
        "[archivox-assist] sending to {} ({}), {} field(s) missing",
        settings.provider,
        settings.model,
        missing.len()
    );

    let text = engine::generate(settings, &system, history, &user_msg).await?;

    let layout = parse::extract_layout(&text);
    match &layout {
        Some(_) => eprintln!("[archivox-assist] reply contains a complete layout"),
        None => eprintln!("[archivox-assist] reply contains no layout block"),
    }

    Ok(DesignReply { text, layout })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn brief_deserializes_camel_case_keys() {
        let brief: DesignBrief = serde_json::from_str(
            r#"{"homeType": "cottage", "squareFeet": 1200, "bedrooms": "2"}"#,
        )
        .unwrap();
        assert_eq!(brief.home_type, Some(json!("cottage")));
        assert_eq!(brief.square_feet, Some(json!(1200)));
        assert_eq!(brief.bedrooms, Some(json!("2")));
        assert!(brief.budget.is_none());
    }

    #[test]
    fn unknown_form_keys_are_ignored() {
        let brief: DesignBrief =
            serde_json::from_str(r#"{"homeType": "villa", "newsletter": true}"#).unwrap();
        assert_eq!(brief.home_type, Some(json!("villa")));
    }

    #[test]
    fn chat_role_is_lowercase_on_the_wire() {
        let turn: ChatTurn =
            serde_json::from_str(r#"{"role": "assistant", "content": "Hi!"}"#).unwrap();
        assert_eq!(turn.role, ChatRole::Assistant);
        assert_eq!(
            serde_json::to_string(&ChatRole::User).unwrap(),
            "\"user\""
        );
    }

    #[test]
    fn reply_omits_an_absent_layout() {
        let reply = DesignReply {
            text: "Tell me more about the budget.".to_string(),
            layout: None,
        };
        let json = serde_json::to_string(&reply).unwrap();
        assert!(!json.contains("layout"));
    }
}
