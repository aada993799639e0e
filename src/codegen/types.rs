//! Descriptors produced by the engine.
//!
//! Nothing in here is source text for a whole artifact; the rendering layer
//! decides how these pieces are laid out. `Display` impls only render the
//! individual statement or annotation a renderer would paste verbatim.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter};

use crate::codegen::annotation::{AnnotationKind, AnnotationSet};
use crate::codegen::suppression::ArtifactKind;

/// Method parameter: declared type and name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub java_type: String,
    pub name: String,
}

impl Parameter {
    pub fn new(java_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            java_type: java_type.into(),
            name: name.into(),
        }
    }
}

/// Pattern comparison used by a registered condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, AsRefStr, Serialize)]
pub enum Comparator {
    #[strum(serialize = "like")]
    Like,
    #[strum(serialize = "not like")]
    NotLike,
}

/// Argument expression handed to the condition: the parameter with wildcards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueExpression {
    pub variable: String,
    pub leading_wildcard: bool,
    pub trailing_wildcard: bool,
}

impl ValueExpression {
    /// The value the expression evaluates to for a concrete argument
    pub fn apply(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        if self.leading_wildcard {
            out.push('%');
        }
        out.push_str(value);
        if self.trailing_wildcard {
            out.push('%');
        }
        out
    }
}

impl fmt::Display for ValueExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.leading_wildcard {
            write!(f, "\"%\" + ")?;
        }
        write!(f, "{}", self.variable)?;
        if self.trailing_wildcard {
            write!(f, " + \"%\"")?;
        }
        Ok(())
    }
}

/// Which registration call a condition goes through
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Registration {
    /// `addCriterion`
    Default,
    /// Type-handler aware call, e.g. `addNameCriterion`
    TypeHandler { method: String },
}

impl Registration {
    pub fn method(&self) -> &str {
        match self {
            Registration::Default => "addCriterion",
            Registration::TypeHandler { method } => method,
        }
    }
}

/// A named comparison registered on the filter builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub registration: Registration,
    /// Aliased actual column name
    pub column: String,
    pub comparator: Comparator,
    pub value: ValueExpression,
    /// Property name identifying the condition
    pub property: String,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(\"{} {}\", {}, \"{}\");",
            self.registration.method(),
            self.column,
            self.comparator,
            self.value,
            self.property
        )
    }
}

/// One statement of a synthesized method body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Statement {
    Register(Condition),
    /// Return `this`, cast to the builder type
    ReturnSelf { builder_type: String },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Register(condition) => write!(f, "{}", condition),
            Statement::ReturnSelf { builder_type } => write!(f, "return ({}) this;", builder_type),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// A synthesized or documented method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub visibility: Visibility,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<String>,
    pub annotations: AnnotationSet,
    pub body: Vec<Statement>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            parameters: Vec::new(),
            return_type: None,
            annotations: AnnotationSet::new(),
            body: Vec::new(),
        }
    }

    /// Overrides a supertype method
    pub fn is_override(&self) -> bool {
        self.annotations.contains_kind(AnnotationKind::Override)
    }

    /// The registered condition, if the body has one
    pub fn condition(&self) -> Option<&Condition> {
        self.body.iter().find_map(|statement| match statement {
            Statement::Register(condition) => Some(condition),
            _ => None,
        })
    }

    pub fn body_lines(&self) -> Vec<String> {
        self.body.iter().map(ToString::to_string).collect()
    }
}

/// Annotations and documentation for one member of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldAugmentation {
    pub name: String,
    pub java_type: String,
    pub annotations: AnnotationSet,
    pub doc_lines: Vec<String>,
}

/// Everything the engine adds to one generated artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AugmentationResult {
    pub artifact: ArtifactKind,
    /// Simple name of the type being augmented
    pub type_name: String,
    pub annotations: AnnotationSet,
    pub imports: BTreeSet<String>,
    pub super_interfaces: Vec<String>,
    pub doc_lines: Vec<String>,
    pub fields: Vec<FieldAugmentation>,
    pub methods: Vec<MethodDescriptor>,
}

impl AugmentationResult {
    pub fn new(artifact: ArtifactKind, type_name: impl Into<String>) -> Self {
        Self {
            artifact,
            type_name: type_name.into(),
            annotations: AnnotationSet::new(),
            imports: BTreeSet::new(),
            super_interfaces: Vec::new(),
            doc_lines: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldAugmentation> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_expression() {
        let left = ValueExpression {
            variable: "value".to_string(),
            leading_wildcard: true,
            trailing_wildcard: false,
        };
        assert_eq!(left.to_string(), "\"%\" + value");
        assert_eq!(left.apply("abc"), "%abc");

        let both = ValueExpression {
            leading_wildcard: true,
            trailing_wildcard: true,
            ..left
        };
        assert_eq!(both.to_string(), "\"%\" + value + \"%\"");
        assert_eq!(both.apply("abc"), "%abc%");
    }

    #[test]
    fn test_statement_render() {
        let condition = Condition {
            registration: Registration::Default,
            column: "user_name".to_string(),
            comparator: Comparator::NotLike,
            value: ValueExpression {
                variable: "value".to_string(),
                leading_wildcard: false,
                trailing_wildcard: true,
            },
            property: "name".to_string(),
        };
        assert_eq!(
            Statement::Register(condition).to_string(),
            "addCriterion(\"user_name not like\", value + \"%\", \"name\");"
        );
        assert_eq!(
            Statement::ReturnSelf {
                builder_type: "Criteria".to_string()
            }
            .to_string(),
            "return (Criteria) this;"
        );
    }
}
