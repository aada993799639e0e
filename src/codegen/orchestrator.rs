//! Sequences the rule components over tables and assembles one
//! `AugmentationResult` per generated artifact.
//!
//! Tables are independent: every call reads the shared `NamingConfig` and the
//! table's metadata and allocates fresh results, so a host may process tables
//! on as many threads as it likes.

use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use log::{debug, warn};

use crate::codegen::annotation::{Annotation, AnnotationKind, AnnotationSet};
use crate::codegen::docs::{self, DocTarget};
use crate::codegen::metadata::{ColumnId, ColumnMetadata, TableMetadata};
use crate::codegen::naming;
use crate::codegen::predicate;
use crate::codegen::rules;
use crate::codegen::suppression::{ArtifactKind, GenericMapperPolicy, SuppressionPolicy};
use crate::codegen::types::{AugmentationResult, FieldAugmentation, MethodDescriptor};
use crate::config::NamingConfig;
use crate::error::{CodegenError, CodegenResult};

/// All augmentations produced for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAugmentation {
    pub table: String,
    pub artifacts: Vec<AugmentationResult>,
}

impl TableAugmentation {
    pub fn artifact(&self, kind: ArtifactKind) -> Option<&AugmentationResult> {
        self.artifacts.iter().find(|a| a.artifact == kind)
    }
}

/// Outcome of a whole generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub tables: Vec<TableAugmentation>,
    /// Tables abandoned after a non-fatal error
    pub skipped: Vec<(String, CodegenError)>,
}

/// Drives the engine for a generation run
#[derive(Debug, Clone)]
pub struct Orchestrator<P: SuppressionPolicy = GenericMapperPolicy> {
    config: NamingConfig,
    policy: P,
}

impl Orchestrator<GenericMapperPolicy> {
    /// Fails when the configuration names no mapper interface
    pub fn new(config: NamingConfig) -> CodegenResult<Self> {
        Self::with_policy(config, GenericMapperPolicy)
    }

    /// Build directly from the host's run properties
    pub fn from_properties(properties: &HashMap<String, String>) -> CodegenResult<Self> {
        Self::new(NamingConfig::from_properties(properties)?)
    }
}

impl<P: SuppressionPolicy> Orchestrator<P> {
    pub fn with_policy(config: NamingConfig, policy: P) -> CodegenResult<Self> {
        config.validate()?;
        Ok(Self { config, policy })
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    pub fn should_generate(&self, kind: ArtifactKind) -> bool {
        self.policy.should_generate(kind)
    }

    /// Documentation for a method the host generated itself
    pub fn document_method(&self, method: &MethodDescriptor) -> Vec<String> {
        docs::document(DocTarget::Method(method), &self.config)
    }

    /// Documentation for an entity member that has no column behind it
    pub fn document_field(&self, name: &str) -> Vec<String> {
        docs::document(DocTarget::Field { name }, &self.config)
    }

    /// Class annotations, field annotations, imports and docs for an entity
    /// class variant.
    pub fn augment_entity(
        &self,
        kind: ArtifactKind,
        table: &TableMetadata,
    ) -> CodegenResult<AugmentationResult> {
        let class_name = table.entity_short_name();
        let mut result = AugmentationResult::new(kind, class_name);

        if let Some(annotation) = naming::table_annotation(class_name, table, &self.config) {
            result.annotations.insert(annotation);
        }
        result.annotations.extend(entity_class_annotations(table));

        for (id, column) in entity_columns(kind, table) {
            let annotations = rules::annotate_column(id, table, &self.config)?;
            let doc_lines = docs::document(
                DocTarget::ColumnField {
                    name: &column.java_property,
                    column,
                },
                &self.config,
            );
            result.fields.push(FieldAugmentation {
                name: column.java_property.clone(),
                java_type: column.java_type.clone(),
                annotations,
                doc_lines,
            });
        }

        result.imports = entity_imports(&result.annotations, &result.fields);
        result.doc_lines = docs::document(DocTarget::Entity(table), &self.config);
        Ok(result)
    }

    /// Super interfaces, imports and docs for the mapper interface
    pub fn augment_interface(&self, table: &TableMetadata) -> CodegenResult<AugmentationResult> {
        let entity = table.entity_short_name();
        let mut result =
            AugmentationResult::new(ArtifactKind::MapperInterface, format!("{}Mapper", entity));

        for mapper in &self.config.mappers {
            result.imports.insert(mapper.clone());
            result.super_interfaces.push(format!("{}<{}>", mapper, entity));
        }
        result.imports.insert(table.base_record_type.clone());
        result.doc_lines = docs::document(DocTarget::Interface(table), &self.config);
        Ok(result)
    }

    /// Fuzzy like methods for the example class's criteria builder
    pub fn augment_example(&self, table: &TableMetadata) -> CodegenResult<AugmentationResult> {
        let mut result = AugmentationResult::new(
            ArtifactKind::ExampleClass,
            format!("{}Example", table.entity_short_name()),
        );
        if !self.config.example_like_addition_enabled {
            return Ok(result);
        }

        for (_, column) in table.columns_with_ids().filter(|(_, c)| c.character) {
            result
                .methods
                .extend(predicate::synthesize(column, table, &self.config));
        }
        Ok(result)
    }

    /// Every artifact of `table` the policy lets through
    pub fn augment_table(&self, table: &TableMetadata) -> CodegenResult<TableAugmentation> {
        let start = Instant::now();
        table.validate()?;

        let mut artifacts = Vec::new();
        for kind in [
            ArtifactKind::BaseRecordClass,
            ArtifactKind::MapperInterface,
            ArtifactKind::ExampleClass,
        ] {
            if !self.should_generate(kind) {
                debug!("Orchestrator: {} suppressed for {}", kind, table.fully_qualified_table);
                continue;
            }
            let artifact = match kind {
                ArtifactKind::MapperInterface => self.augment_interface(table)?,
                ArtifactKind::ExampleClass => self.augment_example(table)?,
                _ => self.augment_entity(kind, table)?,
            };
            artifacts.push(artifact);
        }

        debug!(
            "Orchestrator: augmented {} ({} artifacts) in {:?}",
            table.fully_qualified_table,
            artifacts.len(),
            start.elapsed()
        );
        Ok(TableAugmentation {
            table: table.fully_qualified_table.clone(),
            artifacts,
        })
    }

    /// Process every table. A non-fatal failure skips its table; a fatal one
    /// aborts the run.
    pub fn run(&self, tables: &[TableMetadata]) -> CodegenResult<RunReport> {
        let mut report = RunReport::default();
        for table in tables {
            match self.augment_table(table) {
                Ok(augmentation) => report.tables.push(augmentation),
                Err(error) if error.is_fatal() => return Err(error),
                Err(error) => {
                    warn!(
                        "Orchestrator: skipping table {}: {}",
                        table.fully_qualified_table, error
                    );
                    report
                        .skipped
                        .push((table.fully_qualified_table.clone(), error));
                }
            }
        }
        debug!(
            "Orchestrator: run finished, {} augmented, {} skipped",
            report.tables.len(),
            report.skipped.len()
        );
        Ok(report)
    }
}

fn entity_class_annotations(table: &TableMetadata) -> Vec<Annotation> {
    let mut annotations = vec![
        Annotation::marker(AnnotationKind::Getter),
        Annotation::marker(AnnotationKind::Setter),
    ];
    if table.entity_super_class.is_some() {
        annotations.push(Annotation::with_params(
            AnnotationKind::EqualsAndHashCode,
            "callSuper = true",
        ));
        annotations.push(Annotation::with_params(AnnotationKind::ToString, "callSuper = true"));
    } else {
        annotations.push(Annotation::marker(AnnotationKind::EqualsAndHashCode));
        annotations.push(Annotation::marker(AnnotationKind::ToString));
    }
    annotations.push(Annotation::marker(AnnotationKind::SuperBuilder));
    annotations.push(Annotation::marker(AnnotationKind::NoArgsConstructor));
    annotations
}

/// Columns that become members of the given entity variant
fn entity_columns(
    kind: ArtifactKind,
    table: &TableMetadata,
) -> Vec<(ColumnId, &ColumnMetadata)> {
    table
        .columns_with_ids()
        .filter(|(id, column)| match kind {
            ArtifactKind::PrimaryKeyClass => table.is_primary_key(*id),
            ArtifactKind::RecordWithBlobsClass => column.large_object,
            _ => true,
        })
        .collect()
}

/// Imports for the class annotations plus every annotation kind that
/// appears on at least one field.
fn entity_imports(class: &AnnotationSet, fields: &[FieldAugmentation]) -> BTreeSet<String> {
    let kinds: BTreeSet<AnnotationKind> = class
        .iter()
        .chain(fields.iter().flat_map(|f| f.annotations.iter()))
        .map(|a| a.kind)
        .collect();

    kinds
        .into_iter()
        .flat_map(|kind| kind.import().into_iter().chain(kind.auxiliary_imports().iter().copied()))
        .map(str::to_string)
        .collect()
}
