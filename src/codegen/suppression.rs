//! Which default artifacts are generated and which are left to the generic
//! mapper layer.
//!
//! Every single-row CRUD and by-example operation already exists on the
//! generic mapper interfaces the generated interface extends, so all of them
//! are suppressed in every layer (client method, SQL map element, SQL
//! provider method). Accessors are suppressed too: the entity carries
//! `@Getter`/`@Setter` instead.

use std::fmt;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// Layer a data-access artifact belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, AsRefStr, Serialize)]
pub enum Layer {
    /// Method on the mapper interface
    Client,
    /// Statement element in the XML mapping
    SqlMap,
    /// Method on the SQL provider class
    Provider,
}

/// Default data-access operations the generator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, AsRefStr, Serialize)]
pub enum Operation {
    Insert,
    InsertSelective,
    SelectByPrimaryKey,
    UpdateByPrimaryKeySelective,
    UpdateByPrimaryKeyWithBlobs,
    UpdateByPrimaryKeyWithoutBlobs,
    DeleteByPrimaryKey,
    SelectAll,
    CountByExample,
    SelectByExampleWithBlobs,
    SelectByExampleWithoutBlobs,
    UpdateByExampleSelective,
    UpdateByExampleWithBlobs,
    UpdateByExampleWithoutBlobs,
    DeleteByExample,
    /// Shared where-clause fragment of by-example statements
    ExampleWhereClause,
    /// Provider helper applying the example's conditions
    ApplyWhere,
}

impl Operation {
    /// Operates on one row addressed by key, or on all rows
    pub fn is_single_row_crud(self) -> bool {
        matches!(
            self,
            Operation::Insert
                | Operation::InsertSelective
                | Operation::SelectByPrimaryKey
                | Operation::UpdateByPrimaryKeySelective
                | Operation::UpdateByPrimaryKeyWithBlobs
                | Operation::UpdateByPrimaryKeyWithoutBlobs
                | Operation::DeleteByPrimaryKey
                | Operation::SelectAll
        )
    }

    /// Driven by a dynamic filter (example) object
    pub fn is_by_example(self) -> bool {
        !self.is_single_row_crud()
    }

    /// Whether the default generator produces this operation in `layer`
    pub fn available_in(self, layer: Layer) -> bool {
        match layer {
            Layer::Client => !matches!(self, Operation::ExampleWhereClause | Operation::ApplyWhere),
            Layer::SqlMap => !matches!(self, Operation::ApplyWhere),
            Layer::Provider => matches!(
                self,
                Operation::InsertSelective
                    | Operation::UpdateByPrimaryKeySelective
                    | Operation::CountByExample
                    | Operation::SelectByExampleWithBlobs
                    | Operation::SelectByExampleWithoutBlobs
                    | Operation::UpdateByExampleSelective
                    | Operation::UpdateByExampleWithBlobs
                    | Operation::UpdateByExampleWithoutBlobs
                    | Operation::DeleteByExample
                    | Operation::ApplyWhere
            ),
        }
    }
}

/// Kind of artifact the host is about to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArtifactKind {
    /// Data-access interface
    MapperInterface,
    /// Entity class
    BaseRecordClass,
    /// Separate primary-key class of an entity
    PrimaryKeyClass,
    /// Entity variant carrying the BLOB columns
    RecordWithBlobsClass,
    /// Example (filter builder) class
    ExampleClass,
    /// SQL provider class
    ProviderClass,
    Getter,
    Setter,
    DataAccess { layer: Layer, operation: Operation },
}

impl ArtifactKind {
    /// Every artifact kind, in a stable order
    pub fn all() -> Vec<ArtifactKind> {
        let mut kinds = vec![
            ArtifactKind::MapperInterface,
            ArtifactKind::BaseRecordClass,
            ArtifactKind::PrimaryKeyClass,
            ArtifactKind::RecordWithBlobsClass,
            ArtifactKind::ExampleClass,
            ArtifactKind::ProviderClass,
            ArtifactKind::Getter,
            ArtifactKind::Setter,
        ];
        for layer in Layer::iter() {
            kinds.extend(
                Operation::iter()
                    .filter(|operation| operation.available_in(layer))
                    .map(|operation| ArtifactKind::DataAccess { layer, operation }),
            );
        }
        kinds
    }

    /// Entity class variants that all receive the same entity processing
    pub fn is_entity(self) -> bool {
        matches!(
            self,
            ArtifactKind::BaseRecordClass
                | ArtifactKind::PrimaryKeyClass
                | ArtifactKind::RecordWithBlobsClass
        )
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::DataAccess { layer, operation } => write!(f, "{}::{}", layer, operation),
            ArtifactKind::MapperInterface => write!(f, "MapperInterface"),
            ArtifactKind::BaseRecordClass => write!(f, "BaseRecordClass"),
            ArtifactKind::PrimaryKeyClass => write!(f, "PrimaryKeyClass"),
            ArtifactKind::RecordWithBlobsClass => write!(f, "RecordWithBlobsClass"),
            ArtifactKind::ExampleClass => write!(f, "ExampleClass"),
            ArtifactKind::ProviderClass => write!(f, "ProviderClass"),
            ArtifactKind::Getter => write!(f, "Getter"),
            ArtifactKind::Setter => write!(f, "Setter"),
        }
    }
}

/// Decides whether a default artifact is emitted
pub trait SuppressionPolicy {
    fn should_generate(&self, kind: ArtifactKind) -> bool;
}

/// Policy used when the generated interface extends generic mappers
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericMapperPolicy;

impl SuppressionPolicy for GenericMapperPolicy {
    fn should_generate(&self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::MapperInterface
            | ArtifactKind::ExampleClass
            | ArtifactKind::BaseRecordClass
            | ArtifactKind::PrimaryKeyClass
            | ArtifactKind::RecordWithBlobsClass => true,
            ArtifactKind::ProviderClass
            | ArtifactKind::Getter
            | ArtifactKind::Setter
            | ArtifactKind::DataAccess { .. } => false,
        }
    }
}
