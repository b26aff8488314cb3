use std::fmt;

use crate::constants::*;
use crate::spin_result::SpinResult;

/// What the display region should show.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayContent {
    Progress,
    Card(ResultCard),
    Error,
}

impl DisplayContent {
    /// Fixed text for the status states; cards have none.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            DisplayContent::Progress => Some(IN_PROGRESS_TEXT),
            DisplayContent::Error => Some(ERROR_TEXT),
            DisplayContent::Card(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub accent_color: String,
    pub heading: &'static str,
    pub lines: Vec<CardLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardLine {
    pub label: Option<&'static str>,
    pub value: String,
}

impl CardLine {
    fn plain(value: &str) -> Self {
        Self { label: None, value: value.to_string() }
    }

    fn labelled(label: &'static str, value: &str) -> Self {
        Self { label: Some(label), value: value.to_string() }
    }
}

impl fmt::Display for CardLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Some(label) => write!(f, "{} {}", label, self.value),
            None => f.write_str(&self.value),
        }
    }
}

impl ResultCard {
    /// Text first, then the character (when known), then the genre.
    pub fn from_result(result: &SpinResult) -> Self {
        let mut lines = vec![CardLine::plain(&result.text)];
        if let Some(character) = result.character() {
            lines.push(CardLine::labelled(CHARACTER_LABEL, character));
        }
        lines.push(CardLine::labelled(GENRE_LABEL, &result.genre));

        Self {
            accent_color: result.color.trim().to_string(),
            heading: RESULT_HEADING,
            lines,
        }
    }

    #[cfg(test)]
    pub fn line(&self, label: &str) -> Option<&CardLine> {
        self.lines.iter().find(|line| line.label == Some(label))
    }
}
