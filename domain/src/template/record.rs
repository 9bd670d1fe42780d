//! Template records: named string/list mappings loaded from the template store.

use crate::core::error::TemplateError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A single value inside a template record
///
/// Anything that is not a scalar or a list of strings (nested mappings,
/// mixed lists) lands in `Structured` and is kept but never read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateValue {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
    Structured(serde_json::Value),
}

impl TemplateValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TemplateValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for TemplateValue {
    fn from(s: &str) -> Self {
        TemplateValue::Text(s.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(s: String) -> Self {
        TemplateValue::Text(s)
    }
}

impl From<Vec<String>> for TemplateValue {
    fn from(v: Vec<String>) -> Self {
        TemplateValue::List(v)
    }
}

/// Named mapping of keys to values (agent or task template)
///
/// Records are shared read-only across a run. Substitution always produces a
/// new record, so injecting artifact text never touches the loaded set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemplateRecord {
    fields: BTreeMap<String, TemplateValue>,
}

/// Null entries (`output_file:` with no value) are dropped, so they read as absent.
impl<'de> Deserialize<'de> for TemplateRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Option<TemplateValue>>::deserialize(deserializer)?;
        let fields = raw
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect();
        Ok(Self { fields })
    }
}

impl TemplateRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<TemplateValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&TemplateValue> {
        self.fields.get(key)
    }

    /// Text value for `key`, if present and textual
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(TemplateValue::as_text)
    }

    /// Text value for `key`, failing with `MissingField` when absent or blank
    pub fn require_text(&self, template: &str, key: &str) -> Result<&str, TemplateError> {
        match self.fields.get(key) {
            Some(TemplateValue::Text(s)) if !s.trim().is_empty() => Ok(s),
            Some(TemplateValue::Text(_)) | None => Err(TemplateError::MissingField {
                template: template.to_string(),
                field: key.to_string(),
            }),
            Some(_) => Err(TemplateError::InvalidField {
                template: template.to_string(),
                field: key.to_string(),
                reason: "expected text".to_string(),
            }),
        }
    }

    /// Boolean value for `key`; accepts YAML booleans and "true"/"false" text
    pub fn flag(&self, template: &str, key: &str) -> Result<Option<bool>, TemplateError> {
        match self.fields.get(key) {
            None => Ok(None),
            Some(TemplateValue::Flag(b)) => Ok(Some(*b)),
            Some(TemplateValue::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" => Ok(Some(true)),
                "false" | "no" => Ok(Some(false)),
                other => Err(TemplateError::InvalidField {
                    template: template.to_string(),
                    field: key.to_string(),
                    reason: format!("'{}' is not a boolean", other),
                }),
            },
            Some(_) => Err(TemplateError::InvalidField {
                template: template.to_string(),
                field: key.to_string(),
                reason: "expected a boolean".to_string(),
            }),
        }
    }

    /// Copy of this record with `{placeholder}` in `key` replaced by `value`.
    ///
    /// `{{` and `}}` collapse to literal braces. Any other `{identifier}`
    /// marker left in the text is reported as `UnresolvedPlaceholder`.
    /// The substituted value itself is never rescanned.
    pub fn with_substitution(
        &self,
        template: &str,
        key: &str,
        placeholder: &str,
        value: &str,
    ) -> Result<TemplateRecord, TemplateError> {
        let source = self.require_text(template, key)?;
        let rendered = substitute(source, placeholder, value).map_err(|marker| {
            TemplateError::UnresolvedPlaceholder {
                template: template.to_string(),
                placeholder: marker,
            }
        })?;

        let mut copy = self.clone();
        copy.fields
            .insert(key.to_string(), TemplateValue::Text(rendered));
        Ok(copy)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Single-pass placeholder renderer. Returns the name of the first unknown
/// marker on failure.
fn substitute(source: &str, placeholder: &str, value: &str) -> Result<String, String> {
    let mut out = String::with_capacity(source.len() + value.len());
    let mut rest = source;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
        } else if tail.starts_with('{') {
            match tail[1..].find('}') {
                Some(end) if is_identifier(&tail[1..1 + end]) => {
                    let name = &tail[1..1 + end];
                    if name != placeholder {
                        return Err(name.to_string());
                    }
                    out.push_str(value);
                    rest = &tail[end + 2..];
                }
                _ => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        } else {
            out.push('}');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);

    Ok(out)
}
