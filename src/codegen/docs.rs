//! Javadoc blocks for generated members and types.

use crate::codegen::metadata::{short_name, ColumnMetadata, TableMetadata};
use crate::codegen::types::MethodDescriptor;
use crate::config::NamingConfig;

/// Something that may receive documentation
#[derive(Debug, Clone, Copy)]
pub enum DocTarget<'a> {
    Method(&'a MethodDescriptor),
    /// Member backed by a table column
    ColumnField {
        name: &'a str,
        column: &'a ColumnMetadata,
    },
    /// Member with no column behind it
    Field { name: &'a str },
    Entity(&'a TableMetadata),
    Interface(&'a TableMetadata),
    /// Accessors, inner classes, enums, file headers: left to the external layer
    Undocumented,
}

/// Comment lines for `target`, empty when it gets no documentation
pub fn document(target: DocTarget<'_>, config: &NamingConfig) -> Vec<String> {
    match target {
        DocTarget::Method(method) => method_doc(method, config),
        DocTarget::ColumnField { name, column } => {
            let text = column.remarks().unwrap_or(name);
            vec!["/**".to_string(), format!(" * {}", text), " */".to_string()]
        }
        DocTarget::Field { name } => vec![format!("/** {} */", name)],
        DocTarget::Entity(table) => entity_doc(table, config),
        DocTarget::Interface(table) => interface_doc(table, config),
        DocTarget::Undocumented => Vec::new(),
    }
}

fn method_doc(method: &MethodDescriptor, config: &NamingConfig) -> Vec<String> {
    // The supertype owns the contract of an override.
    if method.is_override() {
        return Vec::new();
    }

    let mut lines = vec![
        "/**".to_string(),
        format!(" * Description: {}<br>", method.name),
        " *".to_string(),
        format!(" * @author {} <br>", config.author),
    ];
    for parameter in &method.parameters {
        lines.push(format!(" * @param {} {}", parameter.name, parameter.name));
    }
    if let Some(return_type) = &method.return_type {
        let short = short_name(return_type);
        lines.push(format!(" * @return {} {}<br>", short, short));
    }
    lines.push(" */".to_string());
    lines
}

fn entity_doc(table: &TableMetadata, config: &NamingConfig) -> Vec<String> {
    vec![
        "/**".to_string(),
        " *".to_string(),
        format!(" * {} 实体<br>", table.fully_qualified_table),
        format!(" * {}<br>", table.remarks().unwrap_or_default()),
        " *".to_string(),
        format!(" * Created on {}", config.created_on()),
        format!(" * @author {}", config.author),
        " * @version 2.1".to_string(),
        " * @since v2.1".to_string(),
        " */".to_string(),
    ]
}

fn interface_doc(table: &TableMetadata, config: &NamingConfig) -> Vec<String> {
    vec![
        "/**".to_string(),
        format!(" * {} Mapper 接口<br>", table.fully_qualified_table),
        " *".to_string(),
        format!(" * Created on {}", config.created_on()),
        format!(" * @author {}", config.author),
        " * @version 1.0".to_string(),
        " * @since v1.0".to_string(),
        " */".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::annotation::{Annotation, AnnotationKind};
    use crate::codegen::metadata::JdbcType;
    use crate::codegen::types::Parameter;
    use chrono::NaiveDate;

    fn config() -> NamingConfig {
        NamingConfig::builder()
            .mappers(vec!["tk.mybatis.mapper.common.Mapper".to_string()])
            .author("jinyanan")
            .generated_on(NaiveDate::from_ymd_opt(2019, 11, 25).unwrap())
            .build()
    }

    #[test]
    fn test_method_doc() {
        let mut method = MethodDescriptor::new("selectByName");
        method.parameters.push(Parameter::new("java.lang.String", "name"));
        method.return_type = Some("java.util.List<com.example.User>".to_string());

        assert_eq!(
            document(DocTarget::Method(&method), &config()),
            vec![
                "/**",
                " * Description: selectByName<br>",
                " *",
                " * @author jinyanan <br>",
                " * @param name name",
                " * @return List List<br>",
                " */",
            ]
        );
    }

    #[test]
    fn test_void_method_has_no_return_line() {
        let method = MethodDescriptor::new("refresh");
        let lines = document(DocTarget::Method(&method), &config());
        assert_eq!(lines.len(), 5);
        assert!(!lines.iter().any(|l| l.contains("@return")));
    }

    #[test]
    fn test_override_is_not_documented() {
        let mut method = MethodDescriptor::new("selectAll");
        method
            .annotations
            .insert(Annotation::marker(AnnotationKind::Override));
        assert!(document(DocTarget::Method(&method), &config()).is_empty());
    }

    #[test]
    fn test_field_docs() {
        let mut column = ColumnMetadata::builder()
            .java_property("userName")
            .actual_column_name("user_name")
            .java_type("java.lang.String")
            .jdbc_type(JdbcType::Varchar.code())
            .build();

        let doc = document(
            DocTarget::ColumnField {
                name: "userName",
                column: &column,
            },
            &config(),
        );
        assert_eq!(doc, vec!["/**", " * userName", " */"]);

        column.remarks = Some("用户名".to_string());
        let doc = document(
            DocTarget::ColumnField {
                name: "userName",
                column: &column,
            },
            &config(),
        );
        assert_eq!(doc[1], " * 用户名");

        assert_eq!(
            document(DocTarget::Field { name: "serialVersionUID" }, &config()),
            vec!["/** serialVersionUID */"]
        );
        assert!(document(DocTarget::Undocumented, &config()).is_empty());
    }

    #[test]
    fn test_entity_and_interface_docs() {
        let table = TableMetadata::builder()
            .fully_qualified_table("shop.user")
            .runtime_table_name("user")
            .base_record_type("com.example.model.User")
            .remarks("Registered users")
            .build();

        let entity = document(DocTarget::Entity(&table), &config());
        assert_eq!(entity[2], " * shop.user 实体<br>");
        assert_eq!(entity[3], " * Registered users<br>");
        assert_eq!(entity[5], " * Created on 2019年11月25日");
        assert_eq!(entity[6], " * @author jinyanan");

        let interface = document(DocTarget::Interface(&table), &config());
        assert_eq!(interface[1], " * shop.user Mapper 接口<br>");
        assert_eq!(interface[4], " * @author jinyanan");
    }
}
