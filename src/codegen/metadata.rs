//! Table and column metadata supplied by the schema introspector.
//!
//! These types are a read-only view: the engine never mutates them. Primary
//! keys reference columns by [`ColumnId`] (their position in the table), so
//! two unrelated columns that happen to share a name can never be confused.
//!
//! The TOML helpers at the bottom load a `TableMetadata` from a fixture file.
//! They exist for hosts and tests; real introspection happens elsewhere.
//! Like the builder, a fixture derives `character` and `large_object` from
//! the type code unless it sets them explicitly.

use std::fs;
use std::path::Path;

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, FromRepr};
use typed_builder::TypedBuilder;

use crate::error::{CodegenError, CodegenResult};

/// Identity of a column inside its table
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    From,
    Into,
)]
#[serde(transparent)]
pub struct ColumnId(pub usize);

/// JDBC type codes with their symbolic names
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    StrumDisplay,
    AsRefStr,
    FromRepr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(i32)]
pub enum JdbcType {
    Array = 2003,
    Bit = -7,
    TinyInt = -6,
    SmallInt = 5,
    Integer = 4,
    BigInt = -5,
    Float = 6,
    Real = 7,
    Double = 8,
    Numeric = 2,
    Decimal = 3,
    Char = 1,
    Varchar = 12,
    LongVarchar = -1,
    Date = 91,
    Time = 92,
    Timestamp = 93,
    Binary = -2,
    VarBinary = -3,
    LongVarBinary = -4,
    Null = 0,
    Other = 1111,
    Blob = 2004,
    Clob = 2005,
    Boolean = 16,
    Cursor = -10,
    Undefined = i32::MIN + 1000,
    NVarchar = -9,
    NChar = -15,
    NClob = 2011,
    Struct = 2002,
    #[strum(serialize = "JAVA_OBJECT")]
    JavaObject = 2000,
    Distinct = 2001,
    Ref = 2006,
    DataLink = 70,
    RowId = -8,
    LongNVarchar = -16,
    SqlXml = 2009,
    DateTimeOffset = -155,
    #[strum(serialize = "TIME_WITH_TIMEZONE")]
    TimeWithTimezone = 2013,
    #[strum(serialize = "TIMESTAMP_WITH_TIMEZONE")]
    TimestampWithTimezone = 2014,
}

impl JdbcType {
    /// Resolve a raw type code reported by the introspector
    pub fn for_code(code: i32) -> Option<Self> {
        Self::from_repr(code)
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Character-class types, the ones fuzzy like methods make sense for
    pub fn is_character(self) -> bool {
        matches!(
            self,
            JdbcType::Char
                | JdbcType::Clob
                | JdbcType::LongVarchar
                | JdbcType::Varchar
                | JdbcType::LongNVarchar
                | JdbcType::NChar
                | JdbcType::NClob
                | JdbcType::NVarchar
        )
    }

    /// Types the introspector reports as BLOB-class columns
    pub fn is_large_object(self) -> bool {
        matches!(
            self,
            JdbcType::Binary
                | JdbcType::Blob
                | JdbcType::Clob
                | JdbcType::LongNVarchar
                | JdbcType::LongVarBinary
                | JdbcType::LongVarchar
                | JdbcType::NClob
                | JdbcType::VarBinary
        )
    }
}

fn is_character_code(code: i32) -> bool {
    JdbcType::for_code(code).is_some_and(JdbcType::is_character)
}

fn is_large_object_code(code: i32) -> bool {
    JdbcType::for_code(code).is_some_and(JdbcType::is_large_object)
}

/// Facts about one column.
///
/// `character` and `large_object` default to what the JDBC type code implies
/// but the introspector may override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(from = "ColumnRecord")]
pub struct ColumnMetadata {
    /// Property name of the generated member, e.g. `userName`
    #[builder(setter(into))]
    pub java_property: String,

    /// Column name as it exists in the database
    #[builder(setter(into))]
    pub actual_column_name: String,

    /// Fully-qualified declared type, e.g. `java.lang.String`
    #[builder(setter(into))]
    pub java_type: String,

    pub jdbc_type: i32,

    #[builder(default = false)]
    pub identity: bool,

    #[builder(default = false)]
    pub sequence: bool,

    #[builder(default = is_large_object_code(jdbc_type))]
    pub large_object: bool,

    #[builder(default = is_character_code(jdbc_type))]
    pub character: bool,

    /// Not persisted
    #[builder(default = false)]
    pub transient: bool,

    /// Whether the column name must always be written delimited
    #[builder(default = false)]
    pub delimited_name: bool,

    #[builder(default, setter(strip_option, into))]
    pub type_handler: Option<String>,

    #[builder(default, setter(strip_option, into))]
    pub remarks: Option<String>,
}

/// Serialized form of a column. Missing type flags are derived from the code.
#[derive(Deserialize)]
struct ColumnRecord {
    java_property: String,
    actual_column_name: String,
    java_type: String,
    jdbc_type: i32,
    #[serde(default)]
    identity: bool,
    #[serde(default)]
    sequence: bool,
    large_object: Option<bool>,
    character: Option<bool>,
    #[serde(default)]
    transient: bool,
    #[serde(default)]
    delimited_name: bool,
    type_handler: Option<String>,
    remarks: Option<String>,
}

impl From<ColumnRecord> for ColumnMetadata {
    fn from(record: ColumnRecord) -> Self {
        let jdbc_type = record.jdbc_type;
        ColumnMetadata {
            java_property: record.java_property,
            actual_column_name: record.actual_column_name,
            java_type: record.java_type,
            jdbc_type,
            identity: record.identity,
            sequence: record.sequence,
            large_object: record
                .large_object
                .unwrap_or_else(|| is_large_object_code(jdbc_type)),
            character: record.character.unwrap_or_else(|| is_character_code(jdbc_type)),
            transient: record.transient,
            delimited_name: record.delimited_name,
            type_handler: record.type_handler,
            remarks: record.remarks,
        }
    }
}

impl ColumnMetadata {
    /// Remarks, if present and non-blank
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref().filter(|r| !r.trim().is_empty())
    }

    /// Custom type handler, if present and non-blank
    pub fn type_handler(&self) -> Option<&str> {
        self.type_handler.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Unqualified declared type, `java.lang.String` -> `String`
    pub fn java_type_short_name(&self) -> &str {
        short_name(&self.java_type)
    }
}

/// Facts about one table and its columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct TableMetadata {
    /// Introspected, possibly schema-qualified, table identifier
    #[builder(setter(into))]
    pub fully_qualified_table: String,

    /// Table name used in SQL at runtime
    #[builder(setter(into))]
    pub runtime_table_name: String,

    /// Fully-qualified entity type, e.g. `com.example.model.User`
    #[builder(setter(into))]
    pub base_record_type: String,

    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    pub remarks: Option<String>,

    /// Alias used when the table appears in generated conditions
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    pub alias: Option<String>,

    #[serde(default)]
    #[builder(default)]
    pub columns: Vec<ColumnMetadata>,

    #[serde(default)]
    #[builder(default)]
    pub primary_key_columns: Vec<ColumnId>,

    /// Generated key statement: `JDBC`, an identity query or a sequence template
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    pub generated_key: Option<String>,

    /// Table configuration forces every column name to be delimited
    #[serde(default)]
    #[builder(default = false)]
    pub all_column_delimiting: bool,

    /// Fully-qualified super class of the entity, if any
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    pub entity_super_class: Option<String>,
}

impl TableMetadata {
    pub fn column(&self, id: ColumnId) -> CodegenResult<&ColumnMetadata> {
        self.columns
            .get(id.0)
            .ok_or_else(|| CodegenError::UnknownColumn {
                table: self.fully_qualified_table.clone(),
                id,
            })
    }

    /// Columns paired with their identity, in table order
    pub fn columns_with_ids(&self) -> impl Iterator<Item = (ColumnId, &ColumnMetadata)> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| (ColumnId(index), column))
    }

    pub fn is_primary_key(&self, id: ColumnId) -> bool {
        self.primary_key_columns.contains(&id)
    }

    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref().filter(|r| !r.trim().is_empty())
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|a| !a.trim().is_empty())
    }

    /// Entity class short name, `com.example.model.User` -> `User`
    pub fn entity_short_name(&self) -> &str {
        short_name(&self.base_record_type)
    }

    /// Check that every primary-key reference points at an owned column
    pub fn validate(&self) -> CodegenResult<()> {
        for id in &self.primary_key_columns {
            self.column(*id)?;
        }
        Ok(())
    }
}

pub(crate) fn short_name(qualified: &str) -> &str {
    let base = qualified.split('<').next().unwrap_or(qualified);
    base.rsplit('.').next().unwrap_or(base)
}

/// Parse a table metadata fixture from a TOML file
pub fn parse_table_metadata<P: AsRef<Path>>(path: P) -> CodegenResult<TableMetadata> {
    let content = fs::read_to_string(&path).map_err(|e| {
        CodegenError::Metadata(format!(
            "Failed to read metadata file '{}': {}",
            path.as_ref().display(),
            e
        ))
    })?;

    parse_table_metadata_from_str(&content)
}

/// Parse a table metadata fixture from a TOML string
pub fn parse_table_metadata_from_str(content: &str) -> CodegenResult<TableMetadata> {
    let table: TableMetadata = toml::from_str(content)
        .map_err(|e| CodegenError::Metadata(format!("Failed to parse TOML metadata: {}", e)))?;
    table.validate()?;
    Ok(table)
}
