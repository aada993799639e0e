// Shared fixtures for the integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;

use mapper_codegen::codegen::metadata::{
    ColumnMetadata, JdbcType, TableMetadata, parse_table_metadata,
};
use mapper_codegen::config::NamingConfig;
use mapper_codegen::constants::MAPPERS;

pub const MAPPER: &str = "tk.mybatis.mapper.common.Mapper";

/// Default configuration with a single generic mapper
pub fn config() -> NamingConfig {
    NamingConfig::builder().mappers(vec![MAPPER.to_string()]).build()
}

/// Run properties as the host would hand them over
pub fn properties(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    let mut map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    map.entry(MAPPERS.to_string())
        .or_insert_with(|| MAPPER.to_string());
    map
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.toml", name))
}

/// Load a table from `tests/fixtures/<name>.toml`
pub fn fixture(name: &str) -> TableMetadata {
    parse_table_metadata(fixture_path(name)).unwrap()
}

pub fn varchar_column(property: &str, actual: &str) -> ColumnMetadata {
    ColumnMetadata::builder()
        .java_property(property)
        .actual_column_name(actual)
        .java_type("java.lang.String")
        .jdbc_type(JdbcType::Varchar.code())
        .build()
}

pub fn key_column(property: &str, actual: &str) -> ColumnMetadata {
    ColumnMetadata::builder()
        .java_property(property)
        .actual_column_name(actual)
        .java_type("java.lang.Long")
        .jdbc_type(JdbcType::BigInt.code())
        .build()
}
