//! Conversion from raw provider records into typed core entities.

use chrono::Datelike;
use trivia_core::{Clue, ClueDeck};

use crate::raw::RawClue;

/// Year reported when the airdate is absent or unparseable.
const UNKNOWN_AIR_YEAR: i32 = 0;

/// Derives the calendar year from a raw airdate timestamp.
///
/// Accepts RFC 3339 timestamps (the provider's usual shape) and bare
/// `YYYY-MM-DD` dates; anything else maps to the unknown-year sentinel
/// instead of propagating garbage into the clue.
pub fn air_year(airdate: Option<&str>) -> i32 {
    let Some(raw) = airdate else {
        return UNKNOWN_AIR_YEAR;
    };
    if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(raw) {
        return timestamp.year();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.year();
    }
    UNKNOWN_AIR_YEAR
}

/// Normalizes one raw record into a typed clue.
///
/// Absent values default to 0 before clamping; the nested category title is
/// lifted to the clue's display label.
pub fn clue_from_raw(raw: &RawClue) -> Clue {
    Clue::new(
        raw.category.title.clone(),
        raw.question.clone(),
        raw.answer.clone(),
        raw.value.unwrap_or(0),
        air_year(raw.airdate.as_deref()),
    )
}

/// Normalizes a full batch into a deck, preserving provider order.
pub fn deck_from_raw(raws: &[RawClue]) -> ClueDeck {
    ClueDeck::new(raws.iter().map(clue_from_raw).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_comes_from_rfc3339_timestamps() {
        assert_eq!(air_year(Some("1997-11-26T12:00:00.000Z")), 1997);
        assert_eq!(air_year(Some("2004-12-31T05:00:00+00:00")), 2004);
    }

    #[test]
    fn year_accepts_bare_dates_and_defaults_otherwise() {
        assert_eq!(air_year(Some("2004-12-31")), 2004);
        assert_eq!(air_year(Some("not a date")), 0);
        assert_eq!(air_year(None), 0);
    }

    #[test]
    fn oversized_values_are_clamped() {
        let raw = RawClue::new("q", "a").with_value(5000);
        assert_eq!(clue_from_raw(&raw).value, 2000);
    }

    #[test]
    fn absent_values_default_to_zero() {
        let raw = RawClue::new("q", "a");
        assert_eq!(clue_from_raw(&raw).value, 0);
    }

    #[test]
    fn category_title_is_lifted_from_the_nested_object() {
        let raw = RawClue::new("q", "a")
            .with_category("POTENT POTABLES")
            .with_value(400)
            .with_airdate("1997-11-26T12:00:00.000Z");
        let clue = clue_from_raw(&raw);

        assert_eq!(clue.category, "POTENT POTABLES");
        assert_eq!(clue.value, 400);
        assert_eq!(clue.air_year, 1997);
        assert!(!clue.revealed);
    }

    #[test]
    fn deck_preserves_provider_order() {
        let raws = vec![
            RawClue::new("q0", "a0").with_value(200),
            RawClue::new("q1", "a1").with_value(400),
        ];
        let deck = deck_from_raw(&raws);

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(0).unwrap().question, "q0");
        assert_eq!(deck.get(1).unwrap().value, 400);
    }
}
