//! Weather and daylight tone mapping
//!
//! [`tone_for`] classifies a [`WeatherSignal`] into a [`Tone`] and picks a
//! short suggestion list. It is pure in its inputs: the current time is
//! always passed in, and missing weather is an ordinary input rather than an
//! error.

use chrono::{Datelike, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Visual mood derived from the weather
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Cozy,
    Bright,
    #[default]
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherTag {
    RainyDay,
    SnowyDay,
    Sunny,
    Overcast,
    Misty,
    Stormy,
    Indoor,
    Outdoor,
    Cozy,
    Flexible,
}

pub type WeatherTags = SmallVec<[WeatherTag; 4]>;

/// Current conditions as reported by a weather source
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSignal {
    pub is_rainy: bool,
    pub is_clear: bool,
    pub temperature_c: Option<f32>,
    pub tags: WeatherTags,
    /// Local sunset, when the source knows it
    pub sunset: Option<NaiveTime>,
}

impl WeatherSignal {
    /// Classify a WMO weather interpretation code
    pub fn from_wmo_code(code: u8, temperature_c: Option<f32>) -> Self {
        use WeatherTag::*;

        let (is_rainy, is_clear, tags): (bool, bool, &[WeatherTag]) = match code {
            0..=2 => (false, true, &[Sunny, Outdoor]),
            3 => (false, false, &[Overcast, Flexible]),
            45..=48 => (false, false, &[Misty, Indoor, Cozy]),
            51..=57 | 61..=67 | 80..=82 => (true, false, &[RainyDay, Indoor]),
            71..=77 | 85..=86 => (false, false, &[SnowyDay, Indoor, Cozy]),
            95..=99 => (true, false, &[Stormy, RainyDay, Indoor]),
            _ => (false, false, &[Overcast, Flexible]),
        };

        Self {
            is_rainy,
            is_clear,
            temperature_c: temperature_c.filter(|t| t.is_finite()),
            tags: tags.iter().copied().collect(),
            sunset: None,
        }
    }

    pub fn with_sunset(mut self, sunset: NaiveTime) -> Self {
        self.sunset = Some(sunset);
        self
    }

    pub fn has_tag(&self, tag: WeatherTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Thresholds for the tone decision table
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    /// Clear weather at or above this reads as bright
    pub warm_threshold_c: f32,
    /// Anything below this reads as cozy
    pub cold_threshold_c: f32,
    pub sunset_window_minutes: u32,
    pub refresh_interval_secs: u64,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            warm_threshold_c: 20.0,
            cold_threshold_c: 5.0,
            sunset_window_minutes: 60,
            refresh_interval_secs: 1800,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivitySetting {
    Indoor,
    Outdoor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: &'static str,
    pub text: &'static str,
    pub setting: ActivitySetting,
}

const fn indoor(id: &'static str, text: &'static str) -> Suggestion {
    Suggestion {
        id,
        text,
        setting: ActivitySetting::Indoor,
    }
}

const fn outdoor(id: &'static str, text: &'static str) -> Suggestion {
    Suggestion {
        id,
        text,
        setting: ActivitySetting::Outdoor,
    }
}

const INDOOR: [Suggestion; 4] = [
    indoor("library-nook", "Find a cozy study spot in the library"),
    indoor("warm-drink", "Try a warm drink at a campus café"),
    indoor("stretch", "Indoor stretching or yoga session"),
    indoor("tunnels", "Explore the tunnels between buildings"),
];

const OUTDOOR: [Suggestion; 4] = [
    outdoor("ring-road", "Quick walk around the ring road"),
    outdoor("mystic-vale", "Study break at Mystic Vale"),
    outdoor("fountain", "Grab coffee and sit by the fountain"),
    outdoor("cadboro-bay", "Walk to Cadboro Bay if you have time"),
];

const RAINY: [Suggestion; 4] = [
    indoor("rainy-study", "Perfect day for a cozy study session"),
    indoor("hot-chocolate", "Hot chocolate at the SUB"),
    indoor("quiet-corner", "Indoor meditation in a quiet corner"),
    indoor("rainy-playlist", "Rainy day playlist while studying"),
];

const BEFORE_DARK: Suggestion = outdoor("before-dark", "Quick outdoor loop before it gets dark!");

/// Typical local sunset per month, used when the weather source has none
const SUNSET_BY_MONTH: [(u32, u32); 12] = [
    (16, 45),
    (17, 35),
    (19, 15),
    (20, 0),
    (20, 45),
    (21, 15),
    (21, 10),
    (20, 25),
    (19, 25),
    (18, 20),
    (16, 40),
    (16, 20),
];

fn estimated_sunset(month: u32) -> NaiveTime {
    let (hour, minute) = SUNSET_BY_MONTH[(month.clamp(1, 12) - 1) as usize];
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Tone, sunset state and suggestions for one moment
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SeasonalContext {
    pub tone: Tone,
    pub is_rainy: bool,
    pub is_clear: bool,
    pub temperature_c: Option<f32>,
    pub tags: WeatherTags,
    pub sunset_alert: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_to_sunset: Option<u32>,
    pub suggestions: Vec<Suggestion>,
}

/// Map weather and the current local time to a [`SeasonalContext`]
///
/// Rules are checked in order and the first match wins: rain, then warm
/// and clear, then snow or cold. Anything else, including no weather at
/// all, is neutral with no suggestions.
pub fn tone_for(
    weather: Option<&WeatherSignal>,
    now: NaiveDateTime,
    config: &ToneConfig,
) -> SeasonalContext {
    let sunset = weather
        .and_then(|w| w.sunset)
        .unwrap_or_else(|| estimated_sunset(now.month()));
    let minutes_left = (sunset - now.time()).num_minutes();
    let window = i64::from(config.sunset_window_minutes);
    let sunset_alert = minutes_left > 0 && minutes_left <= window;
    let minutes_to_sunset = sunset_alert.then(|| minutes_left as u32);

    let Some(weather) = weather else {
        tracing::trace!(sunset_alert, "no weather, neutral tone");
        return SeasonalContext {
            sunset_alert,
            minutes_to_sunset,
            ..SeasonalContext::default()
        };
    };

    let temperature = weather.temperature_c;
    let (tone, mut suggestions) = if weather.is_rainy {
        let picks: Vec<Suggestion> = RAINY[..2].iter().chain(&INDOOR[..2]).copied().collect();
        (Tone::Neutral, picks)
    } else if weather.is_clear && temperature.is_some_and(|t| t >= config.warm_threshold_c) {
        (Tone::Bright, OUTDOOR[..2].to_vec())
    } else if weather.has_tag(WeatherTag::SnowyDay)
        || temperature.is_some_and(|t| t < config.cold_threshold_c)
    {
        (Tone::Cozy, INDOOR[..2].to_vec())
    } else {
        (Tone::Neutral, Vec::new())
    };

    if sunset_alert {
        suggestions.insert(0, BEFORE_DARK);
    }

    tracing::trace!(?tone, sunset_alert, suggestions = suggestions.len(), "tone mapped");

    SeasonalContext {
        tone,
        is_rainy: weather.is_rainy,
        is_clear: weather.is_clear,
        temperature_c: temperature,
        tags: weather.tags.clone(),
        sunset_alert,
        minutes_to_sunset,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(month: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, month, 10)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn wmo_codes_map_to_tags() {
        let drizzle = WeatherSignal::from_wmo_code(53, Some(9.0));
        assert!(drizzle.is_rainy);
        assert!(drizzle.has_tag(WeatherTag::RainyDay));

        let fog = WeatherSignal::from_wmo_code(45, None);
        assert!(!fog.is_rainy && !fog.is_clear);
        assert!(fog.has_tag(WeatherTag::Misty));

        let clear = WeatherSignal::from_wmo_code(1, Some(f32::NAN));
        assert!(clear.is_clear);
        assert_eq!(clear.temperature_c, None);

        assert!(WeatherSignal::from_wmo_code(86, None).has_tag(WeatherTag::SnowyDay));
        assert!(WeatherSignal::from_wmo_code(200, None).has_tag(WeatherTag::Overcast));
    }

    #[test]
    fn warm_and_clear_is_bright() {
        let weather = WeatherSignal::from_wmo_code(0, Some(24.0));
        let context = tone_for(Some(&weather), at(6, 12, 0), &ToneConfig::default());
        assert_eq!(context.tone, Tone::Bright);
        assert!(context
            .suggestions
            .iter()
            .all(|s| s.setting == ActivitySetting::Outdoor));
    }

    #[test]
    fn cold_clear_day_is_cozy() {
        let weather = WeatherSignal::from_wmo_code(0, Some(2.0));
        let context = tone_for(Some(&weather), at(1, 10, 0), &ToneConfig::default());
        assert_eq!(context.tone, Tone::Cozy);
        assert_eq!(context.suggestions.len(), 2);
    }

    #[test]
    fn mild_overcast_is_neutral_without_suggestions() {
        let weather = WeatherSignal::from_wmo_code(3, Some(14.0));
        let context = tone_for(Some(&weather), at(4, 9, 0), &ToneConfig::default());
        assert_eq!(context.tone, Tone::Neutral);
        assert!(context.suggestions.is_empty());
    }

    #[test]
    fn sunset_alert_inside_window() {
        let sunset = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        let weather = WeatherSignal::from_wmo_code(3, Some(12.0)).with_sunset(sunset);
        let config = ToneConfig::default();

        let context = tone_for(Some(&weather), at(11, 16, 15), &config);
        assert!(context.sunset_alert);
        assert_eq!(context.minutes_to_sunset, Some(45));
        assert_eq!(context.suggestions[0].id, "before-dark");

        let edge = tone_for(Some(&weather), at(11, 16, 0), &config);
        assert!(edge.sunset_alert);
        assert_eq!(edge.minutes_to_sunset, Some(60));

        let outside = tone_for(Some(&weather), at(11, 15, 59), &config);
        assert!(!outside.sunset_alert);

        let at_sunset = tone_for(Some(&weather), at(11, 17, 0), &config);
        assert!(!at_sunset.sunset_alert);
        assert_eq!(at_sunset.minutes_to_sunset, None);

        let after = tone_for(Some(&weather), at(11, 17, 30), &config);
        assert!(!after.sunset_alert);
        assert_eq!(after.minutes_to_sunset, None);
    }

    #[test]
    fn monthly_estimate_used_without_weather() {
        // December estimate is 16:20
        let context = tone_for(None, at(12, 16, 0), &ToneConfig::default());
        assert!(context.sunset_alert);
        assert_eq!(context.minutes_to_sunset, Some(20));
        assert!(context.suggestions.is_empty());
    }
}
