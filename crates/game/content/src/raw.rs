//! Raw clue records as served by the daily-clue endpoint.

use serde::Deserialize;

/// One clue exactly as the provider serves it.
///
/// The value may be absent or null, the airdate is a free-form timestamp
/// string, and the category label sits in a nested object. Unknown fields
/// are ignored. Conversion into [`trivia_core::Clue`] happens once, in
/// [`crate::normalize`].
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawClue {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub airdate: Option<String>,
    #[serde(default)]
    pub category: RawCategory,
}

/// Nested category object; only the title is used.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RawCategory {
    #[serde(default)]
    pub title: String,
}

impl RawClue {
    /// Builds a minimal record; in-memory sources and tests fill in the
    /// rest through the `with_*` builders.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            value: None,
            airdate: None,
            category: RawCategory::default(),
        }
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_airdate(mut self, airdate: impl Into<String>) -> Self {
        self.airdate = Some(airdate.into());
        self
    }

    pub fn with_category(mut self, title: impl Into<String>) -> Self {
        self.category = RawCategory {
            title: title.into(),
        };
        self
    }
}
