//! Fuzzy like methods for example (filter builder) classes.
//!
//! Every character column of an example class gets six extra condition
//! builders: `like` and `not like`, each with the wildcard on the left, on
//! the right, or on both sides.

use std::str::FromStr;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString, FromRepr, IntoEnumIterator};

use crate::codegen::metadata::{ColumnMetadata, TableMetadata};
use crate::codegen::naming;
use crate::codegen::types::{
    Comparator, Condition, MethodDescriptor, Parameter, Registration, Statement, ValueExpression,
};
use crate::config::NamingConfig;
use crate::error::{CodegenError, CodegenResult};

/// Builder type returned by every condition method
pub const CRITERIA_TYPE: &str = "Criteria";

/// Name of the single parameter of a synthesized method
pub const VALUE_PARAMETER: &str = "value";

/// Where the `%` wildcard goes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, AsRefStr, FromRepr, Serialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[repr(u8)]
pub enum FuzzPosition {
    Left = 0,
    Right = 1,
    All = 2,
}

impl FuzzPosition {
    /// Parse a position by name. Unknown names are a contract violation.
    pub fn parse(name: &str) -> CodegenResult<Self> {
        Self::from_str(name.trim())
            .map_err(|_| CodegenError::InvalidFuzzPosition(name.to_string()))
    }

    /// Resolve a position by ordinal. Unknown ordinals are a contract violation.
    pub fn from_code(code: u8) -> CodegenResult<Self> {
        Self::from_repr(code).ok_or_else(|| CodegenError::InvalidFuzzPosition(code.to_string()))
    }

    fn name_fragment(self) -> &'static str {
        match self {
            FuzzPosition::Left => "LeftLike",
            FuzzPosition::Right => "RightLike",
            FuzzPosition::All => "LeftRightLike",
        }
    }

    pub fn value_expression(self) -> ValueExpression {
        ValueExpression {
            variable: VALUE_PARAMETER.to_string(),
            leading_wildcard: matches!(self, FuzzPosition::Left | FuzzPosition::All),
            trailing_wildcard: matches!(self, FuzzPosition::Right | FuzzPosition::All),
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `and<Property>[Not]<Left|Right|LeftRight>Like`
pub fn method_name(column: &ColumnMetadata, comparator: Comparator, position: FuzzPosition) -> String {
    let negation = match comparator {
        Comparator::Like => "",
        Comparator::NotLike => "Not",
    };
    format!(
        "and{}{}{}",
        capitalize(&column.java_property),
        negation,
        position.name_fragment()
    )
}

/// Column reference used inside conditions: optional table alias, then the
/// column name, delimited if the column requires it.
pub fn aliased_column_name(
    column: &ColumnMetadata,
    table: &TableMetadata,
    config: &NamingConfig,
) -> String {
    let mut name = String::new();
    if let Some(alias) = table.alias() {
        name.push_str(alias);
        name.push('.');
    }
    if naming::is_column_name_delimited(column, table) {
        name.push_str(&escape_for_string_literal(&config.beginning_delimiter));
        name.push_str(&column.actual_column_name);
        name.push_str(&escape_for_string_literal(&config.ending_delimiter));
    } else {
        name.push_str(&column.actual_column_name);
    }
    name
}

fn escape_for_string_literal(s: &str) -> String {
    s.replace('"', "\\\"")
}

fn registration(column: &ColumnMetadata) -> Registration {
    match column.type_handler() {
        Some(_) => Registration::TypeHandler {
            method: format!("add{}Criterion", capitalize(&column.java_property)),
        },
        None => Registration::Default,
    }
}

/// One condition method for a comparator and wildcard position
pub fn predicate_method(
    column: &ColumnMetadata,
    table: &TableMetadata,
    config: &NamingConfig,
    comparator: Comparator,
    position: FuzzPosition,
) -> MethodDescriptor {
    let mut method = MethodDescriptor::new(method_name(column, comparator, position));
    method
        .parameters
        .push(Parameter::new(column.java_type.clone(), VALUE_PARAMETER));
    method.return_type = Some(CRITERIA_TYPE.to_string());

    method.body.push(Statement::Register(Condition {
        registration: registration(column),
        column: aliased_column_name(column, table, config),
        comparator,
        value: position.value_expression(),
        property: column.java_property.clone(),
    }));
    method.body.push(Statement::ReturnSelf {
        builder_type: CRITERIA_TYPE.to_string(),
    });
    method
}

/// The six fuzzy like methods for a column, `like` variants first
pub fn synthesize(
    column: &ColumnMetadata,
    table: &TableMetadata,
    config: &NamingConfig,
) -> Vec<MethodDescriptor> {
    Comparator::iter()
        .flat_map(|comparator| {
            FuzzPosition::iter()
                .map(move |position| predicate_method(column, table, config, comparator, position))
        })
        .collect()
}
