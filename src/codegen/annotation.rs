//! Annotation descriptors and the ordered, duplicate-free set that carries them.

use std::fmt;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter};

use crate::codegen::metadata::JdbcType;
use crate::constants::JDBC_GENERATOR;

/// Every annotation the engine knows how to attach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, AsRefStr, Serialize)]
pub enum AnnotationKind {
    Table,
    Getter,
    Setter,
    EqualsAndHashCode,
    ToString,
    SuperBuilder,
    NoArgsConstructor,
    Transient,
    Id,
    Column,
    GeneratedValue,
    ColumnType,
    Override,
}

impl AnnotationKind {
    /// Import of the annotation type itself
    pub fn import(self) -> Option<&'static str> {
        match self {
            AnnotationKind::Table => Some("javax.persistence.Table"),
            AnnotationKind::Getter => Some("lombok.Getter"),
            AnnotationKind::Setter => Some("lombok.Setter"),
            AnnotationKind::EqualsAndHashCode => Some("lombok.EqualsAndHashCode"),
            AnnotationKind::ToString => Some("lombok.ToString"),
            AnnotationKind::SuperBuilder => Some("lombok.experimental.SuperBuilder"),
            AnnotationKind::NoArgsConstructor => Some("lombok.NoArgsConstructor"),
            AnnotationKind::Transient => Some("javax.persistence.Transient"),
            AnnotationKind::Id => Some("javax.persistence.Id"),
            AnnotationKind::Column => Some("javax.persistence.Column"),
            AnnotationKind::GeneratedValue => Some("javax.persistence.GeneratedValue"),
            AnnotationKind::ColumnType => Some("tk.mybatis.mapper.annotation.ColumnType"),
            AnnotationKind::Override => None,
        }
    }

    /// Extra types referenced from the annotation's parameters
    pub fn auxiliary_imports(self) -> &'static [&'static str] {
        match self {
            AnnotationKind::GeneratedValue => &["javax.persistence.GenerationType"],
            AnnotationKind::ColumnType => &["org.apache.ibatis.type.JdbcType"],
            _ => &[],
        }
    }

    /// Annotations that describe how a member is persisted
    pub fn is_persistence_mapping(self) -> bool {
        matches!(
            self,
            AnnotationKind::Id
                | AnnotationKind::Column
                | AnnotationKind::GeneratedValue
                | AnnotationKind::ColumnType
        )
    }
}

/// One annotation: a kind plus its rendered parameter list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub params: Option<String>,
}

impl Annotation {
    /// Annotation without parameters
    pub fn marker(kind: AnnotationKind) -> Self {
        Self { kind, params: None }
    }

    pub fn with_params(kind: AnnotationKind, params: impl Into<String>) -> Self {
        Self {
            kind,
            params: Some(params.into()),
        }
    }

    pub fn table(name: &str) -> Self {
        Self::with_params(AnnotationKind::Table, format!("name = \"{}\"", name))
    }

    pub fn column(name: &str) -> Self {
        Self::with_params(AnnotationKind::Column, format!("name = \"{}\"", name))
    }

    /// Key assigned through the JDBC generated-keys mechanism
    pub fn generated_by_jdbc() -> Self {
        Self::with_params(
            AnnotationKind::GeneratedValue,
            format!("generator = \"{}\"", JDBC_GENERATOR),
        )
    }

    /// Key assigned by the database identity column
    pub fn generated_by_identity() -> Self {
        Self::with_params(AnnotationKind::GeneratedValue, "strategy = GenerationType.IDENTITY")
    }

    /// Key fetched with a generation statement before insert
    pub fn generated_by_statement(statement: &str) -> Self {
        Self::with_params(
            AnnotationKind::GeneratedValue,
            format!("strategy = GenerationType.IDENTITY, generator = \"{}\"", statement),
        )
    }

    pub fn column_type(jdbc_type: JdbcType) -> Self {
        Self::with_params(
            AnnotationKind::ColumnType,
            format!("jdbcType = JdbcType.{}", jdbc_type),
        )
    }

    /// Generator reference carried by a `GeneratedValue` annotation, if any
    pub fn generator(&self) -> Option<&str> {
        if self.kind != AnnotationKind::GeneratedValue {
            return None;
        }
        let params = self.params.as_deref()?;
        let start = params.find("generator = \"")? + "generator = \"".len();
        let end = params[start..].rfind('"')? + start;
        Some(&params[start..end])
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.params {
            Some(params) => write!(f, "@{}({})", self.kind, params),
            None => write!(f, "@{}", self.kind),
        }
    }
}

/// Ordered annotations attached to one generated member, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnnotationSet {
    annotations: Vec<Annotation>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an annotation; returns false if an equal one is already present
    pub fn insert(&mut self, annotation: Annotation) -> bool {
        if self.annotations.contains(&annotation) {
            return false;
        }
        self.annotations.push(annotation);
        true
    }

    /// Builder-style insert
    pub fn with(mut self, annotation: Annotation) -> Self {
        self.insert(annotation);
        self
    }

    pub fn contains_kind(&self, kind: AnnotationKind) -> bool {
        self.annotations.iter().any(|a| a.kind == kind)
    }

    pub fn count_kind(&self, kind: AnnotationKind) -> usize {
        self.annotations.iter().filter(|a| a.kind == kind).count()
    }

    pub fn get(&self, kind: AnnotationKind) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.kind == kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.annotations.iter()
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Rendered annotation lines, in insertion order
    pub fn lines(&self) -> Vec<String> {
        self.annotations.iter().map(ToString::to_string).collect()
    }
}

impl Extend<Annotation> for AnnotationSet {
    fn extend<T: IntoIterator<Item = Annotation>>(&mut self, iter: T) {
        for annotation in iter {
            self.insert(annotation);
        }
    }
}

impl FromIterator<Annotation> for AnnotationSet {
    fn from_iter<T: IntoIterator<Item = Annotation>>(iter: T) -> Self {
        let mut set = AnnotationSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for AnnotationSet {
    type Item = Annotation;
    type IntoIter = std::vec::IntoIter<Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnnotationSet {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(Annotation::marker(AnnotationKind::Id).to_string(), "@Id");
        assert_eq!(
            Annotation::column("`user_name`").to_string(),
            "@Column(name = \"`user_name`\")"
        );
        assert_eq!(
            Annotation::generated_by_jdbc().to_string(),
            "@GeneratedValue(generator = \"JDBC\")"
        );
        assert_eq!(
            Annotation::generated_by_identity().to_string(),
            "@GeneratedValue(strategy = GenerationType.IDENTITY)"
        );
        assert_eq!(
            Annotation::column_type(JdbcType::LongVarBinary).to_string(),
            "@ColumnType(jdbcType = JdbcType.LONGVARBINARY)"
        );
    }

    #[test]
    fn test_generator_reference() {
        assert_eq!(Annotation::generated_by_jdbc().generator(), Some("JDBC"));
        assert_eq!(Annotation::generated_by_identity().generator(), None);
        assert_eq!(
            Annotation::generated_by_statement("select SEQ_ORDER from dual").generator(),
            Some("select SEQ_ORDER from dual")
        );
        assert_eq!(Annotation::column("id").generator(), None);
    }

    #[test]
    fn test_set_is_duplicate_free_and_ordered() {
        let mut set = AnnotationSet::new();
        assert!(set.insert(Annotation::marker(AnnotationKind::Id)));
        assert!(set.insert(Annotation::column("user_id")));
        assert!(!set.insert(Annotation::marker(AnnotationKind::Id)));

        assert_eq!(set.len(), 2);
        assert_eq!(set.lines(), vec!["@Id", "@Column(name = \"user_id\")"]);
        assert_eq!(set.count_kind(AnnotationKind::Id), 1);
    }

    #[test]
    fn test_imports() {
        assert_eq!(AnnotationKind::Column.import(), Some("javax.persistence.Column"));
        assert_eq!(
            AnnotationKind::GeneratedValue.auxiliary_imports(),
            &["javax.persistence.GenerationType"]
        );
        assert_eq!(AnnotationKind::Override.import(), None);
        assert!(AnnotationKind::Id.is_persistence_mapping());
        assert!(!AnnotationKind::Transient.is_persistence_mapping());
    }
}
