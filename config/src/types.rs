use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const DEFAULT_LANGUAGE: &str = "nodejs";
pub const DEFAULT_TRACKER: &str = "github";

/// Keys with dedicated handling; anything else is kept as-is.
pub const KNOWN_KEYS: [&str; 4] = ["language", "tracker", "repo", "view"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    List,
    Table,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            View::List => "list",
            View::Table => "table",
        })
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    File,
    Default,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueSource::File => "from config file",
            ValueSource::Default => "default",
        })
    }
}

/// The validated contents of `.sdlc.json`, keys in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    fields: Map<String, Value>,
}

impl RawConfig {
    /// Validates a parsed document.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(fields) = value else {
            return Err(ConfigError::NotAnObject);
        };
        for (key, value) in &fields {
            validate_field(key, value)?;
        }
        Ok(Self { fields })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub(crate) fn set(&mut self, key: &str, value: Value) -> Result<()> {
        validate_field(key, &value)?;
        self.fields.insert(key.to_string(), value);
        Ok(())
    }

    pub(crate) fn remove(&mut self, key: &str) -> bool {
        self.fields.shift_remove(key).is_some()
    }

    pub(crate) fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// Checks one key/value pair. Unknown keys are accepted unchecked.
pub fn validate_field(key: &str, value: &Value) -> Result<()> {
    match key {
        "language" | "tracker" | "repo" if !value.is_string() => {
            Err(ConfigError::invalid_field(key, "must be a string"))
        }
        "view" => serde_json::from_value::<View>(value.clone())
            .map(|_| ())
            .map_err(|_| ConfigError::invalid_field(key, "must be \"list\" or \"table\"")),
        _ => Ok(()),
    }
}

/// A config value together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: ValueSource,
}

/// `.sdlc.json` merged over the built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub language: Resolved<String>,
    pub tracker: Resolved<String>,
    pub repo: Option<String>,
    pub view: Option<View>,
    raw: RawConfig,
}

impl Config {
    pub fn merge(raw: Option<RawConfig>) -> Self {
        let raw = raw.unwrap_or_default();

        let with_default = |key: &str, default: &str| match raw.get_str(key) {
            Some(value) => Resolved {
                value: value.to_string(),
                source: ValueSource::File,
            },
            None => Resolved {
                value: default.to_string(),
                source: ValueSource::Default,
            },
        };

        let language = with_default("language", DEFAULT_LANGUAGE);
        let tracker = with_default("tracker", DEFAULT_TRACKER);
        let repo = raw.get_str("repo").map(str::to_string);
        let view = raw
            .get("view")
            .and_then(|v| serde_json::from_value(v.clone()).ok());

        Self {
            language,
            tracker,
            repo,
            view,
            raw,
        }
    }

    /// Display value and origin for `key`, known or not.
    pub fn get(&self, key: &str) -> Option<(String, ValueSource)> {
        match key {
            "language" => Some((self.language.value.clone(), self.language.source)),
            "tracker" => Some((self.tracker.value.clone(), self.tracker.source)),
            _ => self
                .raw
                .get(key)
                .map(|value| (display_value(value), ValueSource::File)),
        }
    }

    /// Keys in the file that have no dedicated handling, in file order.
    pub fn extras(&self) -> Vec<(String, String)> {
        self.raw
            .fields()
            .iter()
            .filter(|(key, _)| !KNOWN_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), display_value(value)))
            .collect()
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
