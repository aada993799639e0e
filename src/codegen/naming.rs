//! Delimited and schema-qualified identifiers.
//!
//! Names are never escaped: a raw name that already contains delimiter
//! characters comes out delimited twice. Resolving an already-resolved name
//! is therefore only a no-op when both delimiters are empty.

use log::trace;

use crate::codegen::annotation::Annotation;
use crate::codegen::metadata::{ColumnMetadata, TableMetadata};
use crate::config::NamingConfig;

/// Schema-qualify and delimit a table identifier
pub fn resolve(raw_name: &str, config: &NamingConfig) -> String {
    let mut name = String::with_capacity(
        raw_name.len()
            + config.beginning_delimiter.len()
            + config.ending_delimiter.len()
            + config.schema().map_or(0, |s| s.len() + 1),
    );
    if let Some(schema) = config.schema() {
        name.push_str(schema);
        name.push('.');
    }
    name.push_str(&delimit(raw_name, config));
    name
}

/// Wrap a name in the configured delimiters, without any schema prefix
pub fn delimit(raw_name: &str, config: &NamingConfig) -> String {
    format!(
        "{}{}{}",
        config.beginning_delimiter, raw_name, config.ending_delimiter
    )
}

pub(crate) fn contains_whitespace(name: &str) -> bool {
    name.chars().any(char::is_whitespace)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Column name as it must be written in the mapping annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnName {
    pub name: String,
    /// Delimiting was required by configuration rather than by the name itself
    pub forced: bool,
}

/// Whether a column name is written delimited wherever it appears
pub fn is_column_name_delimited(column: &ColumnMetadata, table: &TableMetadata) -> bool {
    table.all_column_delimiting
        || column.delimited_name
        || contains_whitespace(&column.actual_column_name)
}

/// Resolve the mapped name of a column. Columns never get the schema prefix.
pub fn resolve_column(
    column: &ColumnMetadata,
    table: &TableMetadata,
    config: &NamingConfig,
) -> ColumnName {
    let forced = table.all_column_delimiting || column.delimited_name;
    let name = if is_column_name_delimited(column, table) {
        delimit(&column.actual_column_name, config)
    } else {
        column.actual_column_name.clone()
    };
    ColumnName { name, forced }
}

/// Table-naming annotation for an entity class, or `None` when the class
/// name already maps onto the table without help.
pub fn table_annotation(
    class_name: &str,
    table: &TableMetadata,
    config: &NamingConfig,
) -> Option<Annotation> {
    let mut table_name = table.runtime_table_name.clone();
    if contains_whitespace(&table_name) {
        table_name = delimit(&table_name, config);
    }

    let needed = if config.case_sensitive && class_name != table_name {
        true
    } else if !eq_ignore_case(class_name, &table_name) {
        true
    } else {
        config.has_qualifiers()
    };

    trace!(
        "table_annotation: class={} table={} needed={}",
        class_name, table_name, needed
    );

    needed.then(|| Annotation::table(&resolve(&table_name, config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::metadata::JdbcType;

    fn config() -> NamingConfig {
        NamingConfig::builder()
            .mappers(vec!["tk.mybatis.mapper.common.Mapper".to_string()])
            .build()
    }

    fn table(runtime_name: &str) -> TableMetadata {
        TableMetadata::builder()
            .fully_qualified_table(runtime_name)
            .runtime_table_name(runtime_name)
            .base_record_type("com.example.model.User")
            .build()
    }

    fn column(property: &str, actual: &str) -> ColumnMetadata {
        ColumnMetadata::builder()
            .java_property(property)
            .actual_column_name(actual)
            .java_type("java.lang.String")
            .jdbc_type(JdbcType::Varchar.code())
            .build()
    }

    #[test]
    fn test_resolve_plain() {
        assert_eq!(resolve("user", &config()), "user");
    }

    #[test]
    fn test_resolve_with_schema_and_delimiters() {
        let mut config = config();
        config.schema = Some("dbo".to_string());
        config.beginning_delimiter = "[".to_string();
        config.ending_delimiter = "]".to_string();
        assert_eq!(resolve("user", &config), "dbo.[user]");
        assert_eq!(delimit("user", &config), "[user]");
    }

    #[test]
    fn test_resolve_is_not_idempotent_with_delimiters() {
        let mut config = config();
        config.beginning_delimiter = "`".to_string();
        config.ending_delimiter = "`".to_string();
        let once = resolve("user", &config);
        assert_eq!(resolve(&once, &config), "``user``");
    }

    #[test]
    fn test_no_table_annotation_for_matching_names() {
        assert_eq!(table_annotation("User", &table("user"), &config()), None);
    }

    #[test]
    fn test_table_annotation_when_names_differ() {
        let annotation = table_annotation("User", &table("t_user"), &config()).unwrap();
        assert_eq!(annotation.to_string(), "@Table(name = \"t_user\")");
    }

    #[test]
    fn test_table_annotation_case_sensitive() {
        let mut config = config();
        config.case_sensitive = true;
        let annotation = table_annotation("User", &table("user"), &config).unwrap();
        assert_eq!(annotation.params.as_deref(), Some("name = \"user\""));
        assert_eq!(table_annotation("User", &table("User"), &config), None);
    }

    #[test]
    fn test_table_annotation_with_qualifiers() {
        let mut config = config();
        config.schema = Some("shop".to_string());
        let annotation = table_annotation("User", &table("user"), &config).unwrap();
        assert_eq!(annotation.params.as_deref(), Some("name = \"shop.user\""));
    }

    #[test]
    fn test_table_name_with_space_is_delimited() {
        let mut config = config();
        config.beginning_delimiter = "`".to_string();
        config.ending_delimiter = "`".to_string();
        let annotation = table_annotation("UserInfo", &table("user info"), &config).unwrap();
        assert_eq!(annotation.params.as_deref(), Some("name = \"``user info``\""));
    }

    #[test]
    fn test_resolve_column() {
        let config = config();
        let resolved = resolve_column(&column("name", "user_name"), &table("user"), &config);
        assert_eq!(resolved.name, "user_name");
        assert!(!resolved.forced);

        let mut forced_table = table("user");
        forced_table.all_column_delimiting = true;
        let mut config = config;
        config.beginning_delimiter = "\"".to_string();
        config.ending_delimiter = "\"".to_string();
        config.schema = Some("ignored".to_string());
        let resolved = resolve_column(&column("name", "name"), &forced_table, &config);
        assert_eq!(resolved.name, "\"name\"");
        assert!(resolved.forced);
    }
}
