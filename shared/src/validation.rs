use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

// Anything that could end the declaration or the surrounding markup.
static VALUE_BREAKOUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[;"'<>{}\\]"#).expect("breakout pattern is valid"));

/// Accepts any colour the browser might understand as long as it stays a
/// single CSS value.
pub fn validate_css_color(color: &str) -> Result<(), ValidationError> {
    if VALUE_BREAKOUT.is_match(color) {
        return Err(ValidationError::new("invalid_css_color"));
    }
    Ok(())
}
