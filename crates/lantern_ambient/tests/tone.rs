//! Tone mapping scenarios

use chrono::{NaiveDate, NaiveDateTime};
use lantern_ambient::tone::ActivitySetting;
use lantern_ambient::{tone_for, Tone, ToneConfig, WeatherSignal, WeatherTag};

fn midday() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(11, 30, 0)
        .unwrap()
}

#[test]
fn rain_is_neutral_with_indoor_suggestions() {
    let weather = WeatherSignal {
        is_rainy: true,
        ..WeatherSignal::default()
    };
    let context = tone_for(Some(&weather), midday(), &ToneConfig::default());

    assert_eq!(context.tone, Tone::Neutral);
    assert!(!context.sunset_alert);
    assert_eq!(context.suggestions.len(), 4);
    assert!(context
        .suggestions
        .iter()
        .all(|s| s.setting == ActivitySetting::Indoor));
}

#[test]
fn rain_wins_over_warm_sunshine() {
    let weather = WeatherSignal {
        is_rainy: true,
        is_clear: true,
        temperature_c: Some(28.0),
        ..WeatherSignal::default()
    };
    let context = tone_for(Some(&weather), midday(), &ToneConfig::default());
    assert_eq!(context.tone, Tone::Neutral);
}

#[test]
fn snow_tag_is_cozy_even_when_mild() {
    let weather = WeatherSignal::from_wmo_code(73, Some(9.0));
    assert!(weather.has_tag(WeatherTag::SnowyDay));
    let context = tone_for(Some(&weather), midday(), &ToneConfig::default());
    assert_eq!(context.tone, Tone::Cozy);
}

#[test]
fn thresholds_come_from_config() {
    let weather = WeatherSignal::from_wmo_code(0, Some(16.0));
    let default = tone_for(Some(&weather), midday(), &ToneConfig::default());
    assert_eq!(default.tone, Tone::Neutral);

    let config = ToneConfig {
        warm_threshold_c: 15.0,
        ..ToneConfig::default()
    };
    let warm = tone_for(Some(&weather), midday(), &config);
    assert_eq!(warm.tone, Tone::Bright);
}

#[test]
fn no_weather_is_neutral_and_empty() {
    let context = tone_for(None, midday(), &ToneConfig::default());
    assert_eq!(context.tone, Tone::Neutral);
    assert!(context.suggestions.is_empty());
    assert!(context.tags.is_empty());
    assert_eq!(context.temperature_c, None);
}

#[test]
fn same_inputs_same_context() {
    let weather = WeatherSignal::from_wmo_code(61, Some(7.5));
    let config = ToneConfig::default();
    assert_eq!(
        tone_for(Some(&weather), midday(), &config),
        tone_for(Some(&weather), midday(), &config)
    );
}
