//! Plain-text rendering of library values for the terminal

use lantern_ambient::{ResolvedPresentation, SeasonalContext};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write;

/// The serialized id of a unit enum variant (`"fireflies"`, `"to-br"`, ...)
pub fn label<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(Value::String(id)) => id,
        Ok(other) => other.to_string(),
        Err(_) => String::from("?"),
    }
}

/// Parse a serialized id back into its enum
pub fn parse_id<T: DeserializeOwned>(kind: &str, id: &str) -> anyhow::Result<T> {
    serde_json::from_value(Value::String(id.to_string()))
        .map_err(|_| anyhow::anyhow!("Unknown {kind} `{id}`"))
}

/// Value side of a `field=value` argument: JSON when it parses, a string
/// otherwise
pub fn field_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

pub fn presentation(resolved: &ResolvedPresentation) -> String {
    let mut out = String::new();
    let particles = &resolved.particles;
    // Writing to a String cannot fail
    let _ = writeln!(out, "theme       {} ({})", resolved.theme_id, label(&resolved.scheme));
    let _ = writeln!(
        out,
        "scene       {}",
        resolved.scene_id.as_deref().unwrap_or("none")
    );
    let _ = writeln!(
        out,
        "motion      {} (x{:.2})",
        resolved.intensity, resolved.motion_scale
    );
    let _ = writeln!(out, "background  {}", label(&resolved.background_style));
    if particles.is_none() {
        let _ = writeln!(out, "particles   none");
    } else {
        let _ = writeln!(
            out,
            "particles   {} x{} {} {} {}",
            label(&particles.variant),
            particles.count,
            label(&particles.speed),
            label(&particles.size),
            particles.base_color.to_css()
        );
    }
    let _ = writeln!(out, "primary     {}", resolved.palette.primary.to_css());
    let _ = writeln!(
        out,
        "glow        {} at {:.2}",
        resolved.glow_color.to_css(),
        resolved.glow_intensity
    );
    let _ = writeln!(out, "wallpaper   {}", resolved.wallpaper.css_background());
    let widgets: Vec<&str> = resolved.widgets.iter().map(|w| w.id.as_str()).collect();
    let _ = writeln!(out, "widgets     {}", widgets.join(", "));
    if resolved.focus_mode {
        let _ = writeln!(out, "focus mode  on");
    }
    out.push_str(&seasonal(&resolved.seasonal));
    out
}

pub fn seasonal(context: &SeasonalContext) -> String {
    let mut out = String::new();
    let _ = write!(out, "tone        {}", label(&context.tone));
    if let Some(temperature) = context.temperature_c {
        let _ = write!(out, ", {temperature:.0}°C");
    }
    out.push('\n');
    if let Some(minutes) = context.minutes_to_sunset {
        let _ = writeln!(out, "sunset      in {minutes} min");
    }
    for suggestion in &context.suggestions {
        let _ = writeln!(out, "  - {} [{}]", suggestion.text, label(&suggestion.setting));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_ambient::{
        AccessibilitySignal, PreferenceResolver, SceneSettings, ThemeSettings, Tone,
    };
    use lantern_theme::{ColorScheme, ParticleVariant};
    use pretty_assertions::assert_eq;

    #[test]
    fn labels_use_serialized_ids() {
        assert_eq!(label(&ParticleVariant::Fireflies), "fireflies");
        assert_eq!(label(&ColorScheme::Dark), "dark");
        assert_eq!(label(&Tone::Cozy), "cozy");
    }

    #[test]
    fn ids_parse_back() {
        let scheme: ColorScheme = parse_id("scheme", "dark").unwrap();
        assert_eq!(scheme, ColorScheme::Dark);
        let err = parse_id::<ColorScheme>("scheme", "sepia").unwrap_err();
        assert_eq!(err.to_string(), "Unknown scheme `sepia`");
    }

    #[test]
    fn field_values_fall_back_to_strings() {
        assert_eq!(field_value("true"), Value::Bool(true));
        assert_eq!(field_value("42"), serde_json::json!(42));
        assert_eq!(field_value("forest"), Value::String("forest".into()));
        assert_eq!(field_value("\"#22c55e\""), Value::String("#22c55e".into()));
    }

    #[test]
    fn reduced_motion_summary_shows_no_particles() {
        let resolved = PreferenceResolver::default().resolve(
            &ThemeSettings::default(),
            &SceneSettings::default(),
            &AccessibilitySignal {
                prefers_reduced_motion: true,
                system_scheme: ColorScheme::Light,
            },
            &SeasonalContext::default(),
        );
        let text = presentation(&resolved);
        assert!(text.starts_with("theme       lantern (light)\n"));
        assert!(text.contains("particles   none\n"));
        assert!(text.contains("motion      none (x0.00)\n"));
        assert!(text.contains("tone        neutral\n"));
    }
}
