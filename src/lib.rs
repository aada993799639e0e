//! # Mapper Codegen
//!
//! Rule engine behind a MyBatis generator plugin for generic mappers.
//!
//! The host generator introspects a database and hands each table's metadata
//! to this crate. The engine answers with what to add to every generated
//! artifact (entity annotations, mapper super interfaces, imports, javadoc,
//! fuzzy `like` filter methods) and with which default artifacts to skip,
//! because the generic mapper interfaces already provide them.
//!
//! ## Features
//!
//! - **Naming**: table and column names resolved against case sensitivity,
//!   delimiters and schema
//! - **Annotations**: `@Id`, `@Column`, `@GeneratedValue`, `@ColumnType`
//!   and `@Transient` decided per column
//! - **Predicates**: six `like` / `not like` methods per character column
//! - **Suppression**: CRUD and by-example operations left to the generic layer
//!
//! ## Quick Start
//!
//! ```
//! use mapper_codegen::prelude::*;
//!
//! let config = NamingConfig::builder()
//!     .mappers(vec!["tk.mybatis.mapper.common.Mapper".to_string()])
//!     .build();
//! let orchestrator = Orchestrator::new(config)?;
//!
//! let table = parse_table_metadata_from_str(r#"
//!     fully_qualified_table = "user"
//!     runtime_table_name = "user"
//!     base_record_type = "com.example.model.User"
//!     primary_key_columns = [0]
//!
//!     [[columns]]
//!     java_property = "id"
//!     actual_column_name = "id"
//!     java_type = "java.lang.Long"
//!     jdbc_type = -5
//! "#)?;
//!
//! let report = orchestrator.run(&[table])?;
//! let entity = report.tables[0].artifact(ArtifactKind::BaseRecordClass).unwrap();
//! assert_eq!(entity.field("id").unwrap().annotations.lines(), vec!["@Id"]);
//! # Ok::<(), CodegenError>(())
//! ```

pub mod codegen;
pub mod config;
pub mod constants;
pub mod error;
pub mod pagination;
pub mod prelude;

pub use config::NamingConfig;
pub use error::{CodegenError, CodegenResult};
