//! Run-configuration resolution.
//!
//! [`resolve`] merges a user's INI file against the embedded
//! [`ConfigSchema::default_run`] schema; [`resolve_with_schema`] takes a
//! caller-supplied schema. Resolution never fails on a missing file or
//! missing sections/keys — every option below the schema falls back to its
//! default, and each fallback is recorded as a [`Notice`]. A value that
//! cannot be coerced to its declared kind is fatal for the whole run.

pub mod schema;

use std::io;
use std::path::Path;

use ini::{Ini, Properties};

use crate::error::{ConfigError, ConfigResult};
use crate::types::Notice;

pub use schema::{ConfigSchema, ConfigValue, OptionKind, OptionSpec, SectionSpec};

/// One resolved section: every schema key, with its final value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSection {
    /// Section name (as declared in the schema).
    pub name: String,
    /// `(key, value)` pairs in schema declaration order.
    pub values: Vec<(String, ConfigValue)>,
}

impl ResolvedSection {
    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

/// A fully-populated configuration: same sections and keys as the schema it
/// was resolved against, every value either user-supplied (coerced) or the
/// schema default.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    sections: Vec<ResolvedSection>,
}

impl ResolvedConfig {
    /// Iterate resolved sections in schema order (e.g. for run summaries).
    pub fn sections(&self) -> impl Iterator<Item = &ResolvedSection> {
        self.sections.iter()
    }

    /// Look up a value by section and key.
    pub fn get(&self, section: &str, key: &str) -> Option<&ConfigValue> {
        self.sections
            .iter()
            .find(|s| s.name == section)
            .and_then(|s| s.get(key))
    }

    /// Look up an integer option.
    pub fn integer(&self, section: &str, key: &str) -> Option<i64> {
        self.get(section, key).and_then(ConfigValue::as_integer)
    }

    /// Look up a float option.
    pub fn float(&self, section: &str, key: &str) -> Option<f64> {
        self.get(section, key).and_then(ConfigValue::as_float)
    }

    /// Look up a text option.
    pub fn text(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).and_then(ConfigValue::as_text)
    }

    /// The configured `(time, flux)` input column names.
    ///
    /// Falls back to the canonical names when resolved against a schema
    /// without a `DataColumn` section.
    pub fn data_columns(&self) -> (String, String) {
        let time = self
            .text("DataColumn", "time_col_name")
            .unwrap_or("time")
            .to_string();
        let flux = self
            .text("DataColumn", "flux_col_name")
            .unwrap_or("flux")
            .to_string();
        (time, flux)
    }
}

/// A resolved configuration plus the fallback notices produced on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The fully-populated configuration.
    pub config: ResolvedConfig,
    /// One notice per defaulted section or key, in schema order.
    pub notices: Vec<Notice>,
}

/// Resolve a configuration file against the embedded run schema.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> Result<(), multimodes::ConfigError> {
/// let resolution = multimodes::config::resolve("run.cfg")?;
/// let max_iter = resolution.config.integer("Calculation", "max_iter_n");
/// assert!(max_iter.is_some());
/// # Ok(())
/// # }
/// ```
pub fn resolve(path: impl AsRef<Path>) -> ConfigResult<Resolution> {
    resolve_with_schema(path, &ConfigSchema::default_run())
}

/// Resolve a configuration file against a caller-supplied schema.
///
/// Sections and keys present in the file but absent from the schema are
/// silently ignored.
pub fn resolve_with_schema(
    path: impl AsRef<Path>,
    schema: &ConfigSchema,
) -> ConfigResult<Resolution> {
    let raw = load_raw(path.as_ref())?;

    let mut sections = Vec::with_capacity(schema.sections.len());
    let mut notices = Vec::new();

    for section_spec in &schema.sections {
        let raw_section = raw.section(Some(section_spec.name.as_str()));
        let mut values = Vec::with_capacity(section_spec.options.len());

        match raw_section {
            None => {
                for option in &section_spec.options {
                    values.push((option.key.clone(), option.default.clone()));
                }
                notices.push(Notice::SectionDefaulted {
                    section: section_spec.name.clone(),
                });
            }
            Some(props) => {
                for option in &section_spec.options {
                    match lookup_key(props, &option.key) {
                        Some(raw_value) => {
                            let value =
                                coerce(&section_spec.name, &option.key, option.kind, raw_value)?;
                            values.push((option.key.clone(), value));
                        }
                        None => {
                            values.push((option.key.clone(), option.default.clone()));
                            notices.push(Notice::KeyDefaulted {
                                section: section_spec.name.clone(),
                                key: option.key.clone(),
                            });
                        }
                    }
                }
            }
        }

        sections.push(ResolvedSection {
            name: section_spec.name.clone(),
            values,
        });
    }

    Ok(Resolution {
        config: ResolvedConfig { sections },
        notices,
    })
}

fn load_raw(path: &Path) -> ConfigResult<Ini> {
    match Ini::load_from_file(path) {
        Ok(ini) => Ok(ini),
        // A missing file resolves as empty: every section defaults.
        Err(ini::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(Ini::new()),
        Err(ini::Error::Io(e)) => Err(ConfigError::Io(e)),
        Err(ini::Error::Parse(e)) => Err(ConfigError::Parse(e)),
    }
}

// Keys match case-insensitively, like the INI dialect this format came from.
fn lookup_key<'a>(props: &'a Properties, key: &str) -> Option<&'a str> {
    if let Some(v) = props.get(key) {
        return Some(v);
    }
    props
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v)
}

fn coerce(section: &str, key: &str, kind: OptionKind, raw: &str) -> ConfigResult<ConfigValue> {
    let trimmed = raw.trim();
    let coercion_error = || ConfigError::Coercion {
        section: section.to_string(),
        key: key.to_string(),
        raw: raw.to_string(),
        expected: kind.expected(),
    };

    match kind {
        OptionKind::Integer => trimmed
            .parse::<i64>()
            .map(ConfigValue::Integer)
            .map_err(|_| coercion_error()),
        OptionKind::Float => trimmed
            .parse::<f64>()
            .map(ConfigValue::Float)
            .map_err(|_| coercion_error()),
        OptionKind::Text => Ok(ConfigValue::Text(trimmed.to_string())),
    }
}
