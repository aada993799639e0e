//! Run configuration for a generation pass.
//!
//! A `NamingConfig` is built exactly once, before the first table is
//! processed, either with the `typed-builder` API or from the flat
//! string-keyed properties handed over by the host. It is immutable
//! afterwards and shared read-only by every rule component.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use log::debug;
use typed_builder::TypedBuilder;

use crate::constants::{
    AUTHOR, BEGINNING_DELIMITER, CASE_SENSITIVE, CREATED_ON_FORMAT, DEFAULT_AUTHOR,
    ENDING_DELIMITER, MAPPERS, MODEL_EXAMPLE_LIKE_ADDITION_ENABLED, SCHEMA,
};
use crate::error::{CodegenError, CodegenResult};

/// Naming and documentation settings shared by all rule components.
///
/// # Examples
///
/// ```
/// use mapper_codegen::config::NamingConfig;
///
/// let config = NamingConfig::builder()
///     .mappers(vec!["tk.mybatis.mapper.common.Mapper".to_string()])
///     .beginning_delimiter("`")
///     .ending_delimiter("`")
///     .build();
///
/// assert!(!config.case_sensitive);
/// assert!(config.example_like_addition_enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
#[builder(doc)]
pub struct NamingConfig {
    /// Fully-qualified generic mapper interfaces the generated interface extends
    pub mappers: Vec<String>,

    /// Compare class and table names case-sensitively
    #[builder(default = false)]
    pub case_sensitive: bool,

    /// Opening identifier delimiter (may be empty)
    #[builder(default, setter(into))]
    pub beginning_delimiter: String,

    /// Closing identifier delimiter (may be empty)
    #[builder(default, setter(into))]
    pub ending_delimiter: String,

    /// Schema prefixed to table identifiers
    #[builder(default, setter(strip_option, into))]
    pub schema: Option<String>,

    /// Author written into documentation blocks
    #[builder(default = DEFAULT_AUTHOR.to_string(), setter(into))]
    pub author: String,

    /// Synthesize fuzzy like methods on example classes
    #[builder(default = true)]
    pub example_like_addition_enabled: bool,

    /// Date stamped into entity and interface documentation
    #[builder(default = Local::now().date_naive())]
    pub generated_on: NaiveDate,
}

impl NamingConfig {
    /// Build the configuration from the host's run properties.
    ///
    /// Blank values count as absent; other values are kept as given, so a
    /// delimiter may carry whitespace. `mappers` is required.
    pub fn from_properties(properties: &HashMap<String, String>) -> CodegenResult<Self> {
        let value = |key: &str| {
            properties
                .get(key)
                .map(String::as_str)
                .filter(|v| !v.trim().is_empty())
        };

        let mappers = match value(MAPPERS) {
            Some(raw) => split_mappers(raw),
            None => Vec::new(),
        };
        if mappers.is_empty() {
            return Err(CodegenError::Configuration(format!(
                "the mapper plugin requires the '{}' property",
                MAPPERS
            )));
        }

        let config = Self {
            mappers,
            case_sensitive: parse_bool(CASE_SENSITIVE, value(CASE_SENSITIVE), false)?,
            beginning_delimiter: value(BEGINNING_DELIMITER).unwrap_or_default().to_string(),
            ending_delimiter: value(ENDING_DELIMITER).unwrap_or_default().to_string(),
            schema: value(SCHEMA).map(str::to_string),
            author: value(AUTHOR).unwrap_or(DEFAULT_AUTHOR).to_string(),
            example_like_addition_enabled: parse_bool(
                MODEL_EXAMPLE_LIKE_ADDITION_ENABLED,
                value(MODEL_EXAMPLE_LIKE_ADDITION_ENABLED),
                true,
            )?,
            generated_on: Local::now().date_naive(),
        };

        debug!(
            "NamingConfig: {} mapper(s), case_sensitive={}, schema={:?}",
            config.mappers.len(),
            config.case_sensitive,
            config.schema
        );
        Ok(config)
    }

    /// Check the invariants the builder cannot enforce.
    pub fn validate(&self) -> CodegenResult<()> {
        if self.mappers.is_empty() {
            return Err(CodegenError::Configuration(format!(
                "the mapper plugin requires the '{}' property",
                MAPPERS
            )));
        }
        if let Some(position) = self.mappers.iter().position(|m| m.trim().is_empty()) {
            return Err(CodegenError::Configuration(format!(
                "'{}' entry {} is blank",
                MAPPERS, position
            )));
        }
        Ok(())
    }

    /// Schema prefix, if one is set and non-blank
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Whether any of schema, beginning or ending delimiter is configured
    pub fn has_qualifiers(&self) -> bool {
        self.schema().is_some()
            || !self.beginning_delimiter.is_empty()
            || !self.ending_delimiter.is_empty()
    }

    /// The "Created on" date as it appears in documentation
    pub fn created_on(&self) -> String {
        self.generated_on.format(CREATED_ON_FORMAT).to_string()
    }
}

fn split_mappers(raw: &str) -> Vec<String> {
    let mut mappers: Vec<String> = Vec::new();
    for mapper in raw.split(',').map(str::trim).filter(|m| !m.is_empty()) {
        if !mappers.iter().any(|m| m == mapper) {
            mappers.push(mapper.to_string());
        }
    }
    mappers
}

fn parse_bool(key: &str, value: Option<&str>, default: bool) -> CodegenResult<bool> {
    match value {
        None => Ok(default),
        Some(v) if v.trim().eq_ignore_ascii_case("true") => Ok(true),
        Some(v) if v.trim().eq_ignore_ascii_case("false") => Ok(false),
        Some(v) => Err(CodegenError::Configuration(format!(
            "property '{}' expects true or false, got '{}'",
            key, v
        ))),
    }
}
