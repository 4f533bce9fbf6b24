//! Field-by-field validation of partial updates
//!
//! A patch is a JSON object naming some fields of a settings record. Each
//! field is checked on its own: it must exist on the record, its value must
//! deserialize into the field's type, and it must pass the record's extra
//! rule (for example, a theme id must name a built-in theme). Fields that
//! fail are reported and skipped; the rest still apply.

use lantern_ambient::{AmbientScene, ColorSettings, SceneSettings, ThemeSettings, WidgetConfig};
use lantern_paint::Color;
use lantern_theme::ThemeCatalog;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// One field a patch could not apply
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldRejection {
    pub field: String,
    pub value: Value,
    pub reason: String,
}

/// Result of applying a patch: the record after the update plus whatever
/// was rejected along the way
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateOutcome<T> {
    pub record: T,
    pub rejected: Vec<FieldRejection>,
}

impl<T> UpdateOutcome<T> {
    /// Every field in the patch applied
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn rejected_fields(&self) -> impl Iterator<Item = &str> {
        self.rejected.iter().map(|r| r.field.as_str())
    }
}

/// A settings record that can be patched field by field
pub trait Patchable: Serialize + DeserializeOwned + Clone {
    /// Extra rule for `field` beyond its type; `Err` carries the reason
    fn check_field(&self, _field: &str) -> Result<(), String> {
        Ok(())
    }

    /// Drop unreadable entries from stored list fields so one bad entry
    /// does not discard the whole list
    fn prune_entries(_stored: &mut Map<String, Value>) -> Vec<FieldRejection> {
        Vec::new()
    }
}

impl Patchable for ThemeSettings {
    fn check_field(&self, field: &str) -> Result<(), String> {
        match field {
            "themeId" if !ThemeCatalog::global().contains(&self.theme_id) => {
                Err(format!("unknown theme `{}`", self.theme_id))
            }
            "customAccentColor" => match self.custom_accent_color {
                Some(color) if !color.is_valid() => Err("color out of range".to_string()),
                _ => Ok(()),
            },
            _ => Ok(()),
        }
    }
}

impl Patchable for SceneSettings {
    fn prune_entries(stored: &mut Map<String, Value>) -> Vec<FieldRejection> {
        let mut rejected = prune_list::<AmbientScene>(stored, "customScenes");
        rejected.extend(prune_list::<WidgetConfig>(stored, "widgetLayout"));
        rejected
    }
}

impl Patchable for AmbientScene {}

impl Patchable for WidgetConfig {}

impl Patchable for ColorSettings {
    fn check_field(&self, field: &str) -> Result<(), String> {
        let color: Option<Color> = match field {
            "usernameColor" => Some(self.username_color),
            "highlightColor" => Some(self.highlight_color),
            "logoIconColor" => Some(self.logo_icon_color),
            "logoBgColor" => Some(self.logo_bg_color),
            _ => None,
        };
        match color {
            Some(color) if !color.is_valid() => Err("color out of range".to_string()),
            _ => Ok(()),
        }
    }
}

/// Apply `patch` onto `current`, one field at a time
pub fn apply<T: Patchable>(current: &T, patch: &Map<String, Value>) -> UpdateOutcome<T> {
    let mut record = current.clone();
    let mut fields = match serde_json::to_value(current) {
        Ok(Value::Object(fields)) => fields,
        _ => {
            // Records always serialize to objects; reject the patch whole if not.
            let rejected = patch
                .iter()
                .map(|(field, value)| reject(field, value, "record is not an object"))
                .collect();
            return UpdateOutcome { record, rejected };
        }
    };

    let mut rejected = Vec::new();
    for (field, value) in patch {
        if !fields.contains_key(field) {
            rejected.push(reject(field, value, "unknown field"));
            continue;
        }

        let previous = fields.insert(field.clone(), value.clone());
        let candidate = serde_json::from_value::<T>(Value::Object(fields.clone()))
            .map_err(|err| err.to_string())
            .and_then(|candidate| candidate.check_field(field).map(|()| candidate));

        match candidate {
            Ok(candidate) => record = candidate,
            Err(reason) => {
                tracing::debug!(field = field.as_str(), %reason, "settings field rejected");
                rejected.push(reject(field, value, &reason));
                if let Some(previous) = previous {
                    fields.insert(field.clone(), previous);
                }
            }
        }
    }

    UpdateOutcome { record, rejected }
}

/// Rebuild a record from stored JSON, keeping every field that still
/// validates and defaulting the rest
pub fn sanitize<T: Patchable + Default>(stored: &Map<String, Value>) -> UpdateOutcome<T> {
    let mut stored = stored.clone();
    let mut rejected = T::prune_entries(&mut stored);
    let mut outcome = apply(&T::default(), &stored);
    rejected.append(&mut outcome.rejected);
    outcome.rejected = rejected;
    outcome
}

/// Keep the entries of `stored[field]` that deserialize as `E`
///
/// Anything other than an array is left for [`apply`] to judge.
fn prune_list<E: DeserializeOwned>(
    stored: &mut Map<String, Value>,
    field: &str,
) -> Vec<FieldRejection> {
    let Some(Value::Array(entries)) = stored.get_mut(field) else {
        return Vec::new();
    };

    let mut rejected = Vec::new();
    let mut kept = Vec::with_capacity(entries.len());
    for (index, entry) in entries.drain(..).enumerate() {
        match serde_json::from_value::<E>(entry.clone()) {
            Ok(_) => kept.push(entry),
            Err(err) => {
                let field = format!("{field}[{index}]");
                tracing::debug!(field = field.as_str(), reason = %err, "stored entry dropped");
                rejected.push(reject(&field, &entry, &err.to_string()));
            }
        }
    }
    *entries = kept;
    rejected
}

fn reject(field: &str, value: &Value, reason: &str) -> FieldRejection {
    FieldRejection {
        field: field.to_string(),
        value: value.clone(),
        reason: reason.to_string(),
    }
}
