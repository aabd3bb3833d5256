//! Declarative configuration schema.
//!
//! The schema is the single source of truth for which sections/keys exist,
//! what each option defaults to, and — via an explicit [`OptionKind`] tag,
//! rather than inspecting the default's runtime type — how a raw string value
//! is coerced. Resolvers take the schema as a value, so tests can inject
//! smaller ones.

use std::fmt;

/// A typed configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit float.
    Float(f64),
    /// Free-form text.
    Text(String),
}

impl ConfigValue {
    /// The integer payload, if this is an [`ConfigValue::Integer`].
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// The float payload, if this is a [`ConfigValue::Float`].
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The text payload, if this is a [`ConfigValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Integer(v) => write!(f, "{v}"),
            ConfigValue::Float(v) => write!(f, "{v}"),
            ConfigValue::Text(v) => write!(f, "{v}"),
        }
    }
}

/// How a raw string value is coerced for an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Integer,
    Float,
    Text,
}

impl OptionKind {
    /// Human label used in coercion error messages.
    pub fn expected(self) -> &'static str {
        match self {
            OptionKind::Integer => "an integer",
            OptionKind::Float => "a number",
            OptionKind::Text => "a string",
        }
    }
}

/// A single named, typed option with its default value.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    /// Option key within its section.
    pub key: String,
    /// Coercion rule for raw values.
    pub kind: OptionKind,
    /// Fallback value when the key is absent.
    pub default: ConfigValue,
}

impl OptionSpec {
    /// An integer option.
    pub fn integer(key: impl Into<String>, default: i64) -> Self {
        Self {
            key: key.into(),
            kind: OptionKind::Integer,
            default: ConfigValue::Integer(default),
        }
    }

    /// A float option.
    pub fn float(key: impl Into<String>, default: f64) -> Self {
        Self {
            key: key.into(),
            kind: OptionKind::Float,
            default: ConfigValue::Float(default),
        }
    }

    /// A text option.
    pub fn text(key: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: OptionKind::Text,
            default: ConfigValue::Text(default.into()),
        }
    }
}

/// An ordered group of options under one section name.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    /// Section name as it appears in the INI file.
    pub name: String,
    /// Options in declaration order.
    pub options: Vec<OptionSpec>,
}

impl SectionSpec {
    /// Create a section from options.
    pub fn new(name: impl Into<String>, options: Vec<OptionSpec>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

/// An ordered list of sections describing every recognized option.
///
/// Iteration order is declaration order, so resolution (and its fallback
/// notices) is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSchema {
    /// Sections in declaration order.
    pub sections: Vec<SectionSpec>,
}

impl ConfigSchema {
    /// Create a schema from sections.
    pub fn new(sections: Vec<SectionSpec>) -> Self {
        Self { sections }
    }

    /// The embedded schema for a MultiModes run.
    pub fn default_run() -> Self {
        Self::new(vec![
            SectionSpec::new(
                "Calculation",
                vec![
                    // Maximum number of extracted frequencies.
                    OptionSpec::integer("max_iter_n", 100),
                    // Oversampling ratio of the periodogram grid.
                    OptionSpec::integer("os_ratio", 4),
                    OptionSpec::integer("max_freq", 100),
                ],
            ),
            SectionSpec::new(
                "StoppingCriteria",
                vec![
                    // Stop on signal-to-noise ratio or false alarm probability.
                    OptionSpec::text("stop", "SNR"),
                    OptionSpec::float("min_snr", 4.0),
                    OptionSpec::float("max_fap", 0.01),
                ],
            ),
            SectionSpec::new(
                "DataColumn",
                vec![
                    OptionSpec::text("time_col_name", "time"),
                    OptionSpec::text("flux_col_name", "flux"),
                ],
            ),
            SectionSpec::new(
                "Export",
                vec![
                    OptionSpec::text("output_dir", "./output"),
                    // Save the periodogram every n iterations.
                    OptionSpec::integer("save_periodogram_interval", 10),
                ],
            ),
        ])
    }
}
