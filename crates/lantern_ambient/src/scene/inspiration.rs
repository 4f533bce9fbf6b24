//! Daily inspiration quotes

use super::SceneMood;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Inspiration {
    pub quote: &'static str,
    pub author: &'static str,
    pub mood: SceneMood,
}

const fn quote(quote: &'static str, author: &'static str, mood: SceneMood) -> Inspiration {
    Inspiration {
        quote,
        author,
        mood,
    }
}

pub const INSPIRATIONS: [Inspiration; 12] = [
    quote(
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
        SceneMood::Create,
    ),
    quote(
        "In the middle of difficulty lies opportunity.",
        "Albert Einstein",
        SceneMood::Focus,
    ),
    quote(
        "Peace comes from within. Do not seek it without.",
        "Buddha",
        SceneMood::Relax,
    ),
    quote(
        "Energy and persistence conquer all things.",
        "Benjamin Franklin",
        SceneMood::Energize,
    ),
    quote(
        "The mind is everything. What you think you become.",
        "Buddha",
        SceneMood::Focus,
    ),
    quote(
        "Creativity takes courage.",
        "Henri Matisse",
        SceneMood::Create,
    ),
    quote(
        "Almost everything will work again if you unplug it for a few minutes.",
        "Anne Lamott",
        SceneMood::Relax,
    ),
    quote(
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
        SceneMood::Energize,
    ),
    quote(
        "Simplicity is the ultimate sophistication.",
        "Leonardo da Vinci",
        SceneMood::Focus,
    ),
    quote(
        "Every moment is a fresh beginning.",
        "T.S. Eliot",
        SceneMood::Create,
    ),
    quote(
        "Nature does not hurry, yet everything is accomplished.",
        "Lao Tzu",
        SceneMood::Relax,
    ),
    quote(
        "The only limit to our realization of tomorrow is our doubts of today.",
        "Franklin D. Roosevelt",
        SceneMood::Energize,
    ),
];

/// Quote of the day; the same date always yields the same quote
pub fn daily_inspiration(date: NaiveDate) -> &'static Inspiration {
    let day_of_year = date.ordinal() as usize;
    &INSPIRATIONS[day_of_year % INSPIRATIONS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_rotates_by_day_of_year() {
        let jan_1 = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let jan_12 = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let jan_13 = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();

        assert_eq!(daily_inspiration(jan_1).author, "Albert Einstein");
        // Day 12 wraps back to the first quote
        assert_eq!(daily_inspiration(jan_12).author, "Steve Jobs");
        assert_eq!(daily_inspiration(jan_13), daily_inspiration(jan_1));
    }
}
