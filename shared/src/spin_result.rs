use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ensure_success, SpinError};
use crate::validation::validate_css_color;

/// One outcome of a spin as served by `GET /api/wheel/spin`.
///
/// The server sends its whole option record; fields we do not render
/// (`id`, `icon`, `weight`, ...) are ignored when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpinResult {
    pub text: String,
    #[validate(custom = "validate_css_color")]
    pub color: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anime_character: Option<String>,
}

impl SpinResult {
    /// Decodes and validates a response body.
    ///
    /// Malformed JSON or a missing required field is a [`SpinError::Decode`];
    /// a colour that would escape its CSS declaration is a [`SpinError::Invalid`].
    pub fn from_json(body: &str) -> Result<Self, SpinError> {
        let result: SpinResult =
            serde_json::from_str(body).map_err(|e| SpinError::Decode(e.to_string()))?;
        result
            .validate()
            .map_err(|e| SpinError::Invalid(e.to_string()))?;
        Ok(result)
    }

    /// Decodes an HTTP reply; error statuses never reach the decoder.
    pub fn from_response(status: u16, body: &str) -> Result<Self, SpinError> {
        ensure_success(status)?;
        Self::from_json(body)
    }

    /// The character name, if the server sent a non-blank one.
    pub fn character(&self) -> Option<&str> {
        self.anime_character
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_without_character() {
        let result = SpinResult::from_json(r##"{"text":"A","color":"#fff","genre":"G"}"##).unwrap();
        assert_eq!(result.text, "A");
        assert_eq!(result.genre, "G");
        assert_eq!(result.character(), None);
    }

    #[test]
    fn decodes_full_server_record() {
        let body = r##"{
            "id": 7,
            "text": "Посмотреть три серии",
            "color": "#FF6B6B",
            "icon": "📺",
            "weight": 2,
            "animeCharacter": "Наруто",
            "genre": "Сёнэн",
            "emoji": "🍥",
            "secret": false,
            "completed": false,
            "displayText": "Посмотреть три серии",
            "displayColor": "#FF6B6B"
        }"##;
        let result = SpinResult::from_json(body).unwrap();
        assert_eq!(result.character(), Some("Наруто"));
        assert_eq!(result.color, "#FF6B6B");
    }

    #[test]
    fn null_or_blank_character_is_absent() {
        let null = SpinResult::from_json(r##"{"text":"A","color":"red","genre":"G","animeCharacter":null}"##).unwrap();
        assert_eq!(null.character(), None);

        let blank = SpinResult::from_json(r##"{"text":"A","color":"red","genre":"G","animeCharacter":"  "}"##).unwrap();
        assert_eq!(blank.character(), None);
    }

    #[test]
    fn missing_genre_is_a_decode_error() {
        let err = SpinResult::from_json(r##"{"text":"A","color":"#fff"}"##).unwrap_err();
        assert!(matches!(err, SpinError::Decode(_)), "{err:?}");
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = SpinResult::from_json("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, SpinError::Decode(_)), "{err:?}");
    }

    #[test]
    fn empty_text_and_unusual_colors_still_decode() {
        let empty = SpinResult::from_json(r##"{"text":"","color":"#fff","genre":"G"}"##).unwrap();
        assert_eq!(empty.text, "");

        for color in ["RGB(255, 0, 0)", "oklch(70% 0.15 200)", "var(--accent)"] {
            let body = format!(r#"{{"text":"A","color":"{color}","genre":"G"}}"#);
            let result = SpinResult::from_json(&body).unwrap();
            assert_eq!(result.color, color);
        }
    }

    #[test]
    fn color_escaping_its_declaration_is_invalid() {
        let injected = SpinResult::from_json(r##"{"text":"A","color":"red;background:url(x)","genre":"G"}"##).unwrap_err();
        assert!(matches!(injected, SpinError::Invalid(_)), "{injected:?}");
    }

    #[test]
    fn response_status_decides_before_body() {
        let ok = SpinResult::from_response(200, r##"{"text":"A","color":"#fff","genre":"G"}"##).unwrap();
        assert_eq!(ok.text, "A");

        // A JSON error body from the server is still a status failure.
        let not_found = SpinResult::from_response(404, r#"{"error":"Not Found"}"#).unwrap_err();
        assert_eq!(not_found, SpinError::Status(404));

        let server_error = SpinResult::from_response(500, r##"{"text":"A","color":"#fff","genre":"G"}"##).unwrap_err();
        assert_eq!(server_error, SpinError::Status(500));
    }

    #[test]
    fn ok_status_with_bad_body_is_a_decode_error() {
        let err = SpinResult::from_response(200, "").unwrap_err();
        assert!(matches!(err, SpinError::Decode(_)), "{err:?}");
    }
}
