//! Prelude module for convenient imports.
//!
//! ```
//! use mapper_codegen::prelude::*;
//! ```

pub use crate::codegen::annotation::{Annotation, AnnotationKind, AnnotationSet};
pub use crate::codegen::metadata::{
    ColumnId, ColumnMetadata, JdbcType, TableMetadata, parse_table_metadata,
    parse_table_metadata_from_str,
};
pub use crate::codegen::orchestrator::{Orchestrator, RunReport, TableAugmentation};
pub use crate::codegen::predicate::FuzzPosition;
pub use crate::codegen::suppression::{ArtifactKind, GenericMapperPolicy, SuppressionPolicy};
pub use crate::codegen::types::{AugmentationResult, FieldAugmentation, MethodDescriptor};
pub use crate::config::NamingConfig;
pub use crate::error::{CodegenError, CodegenResult};
pub use crate::pagination::PageParam;
