//! Column annotation rules.
//!
//! `annotate_column` is a pure function of the column, its table and the run
//! configuration. Rules run in a fixed order: transience, primary key,
//! explicit column mapping, generation strategy, large-object typing.

use log::trace;

use crate::codegen::annotation::{Annotation, AnnotationKind, AnnotationSet};
use crate::codegen::metadata::{ColumnId, ColumnMetadata, JdbcType, TableMetadata};
use crate::codegen::naming;
use crate::config::NamingConfig;
use crate::constants::JDBC_GENERATOR;
use crate::error::{CodegenError, CodegenResult};

/// Annotations for one column of `table`
pub fn annotate_column(
    id: ColumnId,
    table: &TableMetadata,
    config: &NamingConfig,
) -> CodegenResult<AnnotationSet> {
    let column = table.column(id)?;
    let mut annotations = AnnotationSet::new();

    // A transient member is not persisted, so nothing else applies.
    if column.transient {
        annotations.insert(Annotation::marker(AnnotationKind::Transient));
        trace!("{}.{}: transient", table.runtime_table_name, column.java_property);
        return Ok(annotations);
    }

    if table.is_primary_key(id) {
        annotations.insert(Annotation::marker(AnnotationKind::Id));
    }

    let mapped = naming::resolve_column(column, table, config);
    if mapped.forced || mapped.name != column.java_property {
        annotations.insert(Annotation::column(&mapped.name));
    }

    if let Some(generated) = generation_strategy(column, table)? {
        annotations.insert(generated);
    }

    if column.large_object {
        let jdbc_type =
            JdbcType::for_code(column.jdbc_type).ok_or_else(|| CodegenError::UnknownJdbcType {
                column: column.actual_column_name.clone(),
                code: column.jdbc_type,
            })?;
        annotations.insert(Annotation::column_type(jdbc_type));
    }

    trace!(
        "{}.{}: {:?}",
        table.runtime_table_name,
        column.java_property,
        annotations.lines()
    );
    Ok(annotations)
}

/// Identity wins over sequence when a column claims both.
fn generation_strategy(
    column: &ColumnMetadata,
    table: &TableMetadata,
) -> CodegenResult<Option<Annotation>> {
    let statement = table.generated_key.as_deref().map(str::trim);

    if column.identity {
        let annotation = match statement {
            Some(s) if s.eq_ignore_ascii_case(JDBC_GENERATOR) => Annotation::generated_by_jdbc(),
            _ => Annotation::generated_by_identity(),
        };
        return Ok(Some(annotation));
    }

    if column.sequence {
        let template = statement
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CodegenError::MissingGeneratedKey {
                table: table.fully_qualified_table.clone(),
            })?;
        let table_name = &table.runtime_table_name;
        let sql = format_statement(template, &[table_name, &table_name.to_uppercase()]);
        return Ok(Some(Annotation::generated_by_statement(&sql)));
    }

    Ok(None)
}

/// Substitute `{0}`, `{1}`, ... with positional arguments.
///
/// Quoting follows `java.text.MessageFormat`: text between single quotes is
/// copied literally without its quotes, and `''` stands for one quote. A
/// Postgres template therefore reads `select nextval(''seq_{0}'')`.
/// Placeholders without a matching argument and unbalanced braces are copied
/// through unchanged.
pub fn format_statement(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut quoted = false;
    let mut rest = template;

    while let Some(at) = rest.find(|c| c == '\'' || (c == '{' && !quoted)) {
        out.push_str(&rest[..at]);
        let after = &rest[at + 1..];

        if rest[at..].starts_with('\'') {
            match after.strip_prefix('\'') {
                Some(tail) => {
                    out.push('\'');
                    rest = tail;
                }
                None => {
                    quoted = !quoted;
                    rest = after;
                }
            }
            continue;
        }

        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].trim().parse().ok()?;
            args.get(index).map(|arg| (arg, close))
        });
        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
