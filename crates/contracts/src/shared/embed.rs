//! Messages the embedded widget posts to its host page

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EmbedMessage {
    /// Rendered height in CSS pixels, so the host can size the iframe
    #[serde(rename = "gdp-widget-height")]
    Height { height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_height_message_shape() {
        let message = EmbedMessage::Height { height: 742 };
        assert_eq!(
            serde_json::to_value(message).unwrap(),
            json!({ "type": "gdp-widget-height", "height": 742 })
        );

        let parsed: EmbedMessage =
            serde_json::from_str(r#"{"type":"gdp-widget-height","height":700}"#).unwrap();
        assert_eq!(parsed, EmbedMessage::Height { height: 700 });
        assert!(serde_json::from_str::<EmbedMessage>(r#"{"type":"other","height":1}"#).is_err());
    }
}
