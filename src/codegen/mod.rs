//! Decision engine for generic-mapper code generation
//!
//! The host generator introspects a database and asks this module, one
//! artifact at a time, what to add: class and field annotations, imports,
//! super interfaces, documentation and extra filter methods. It also asks
//! which default artifacts to skip altogether.

pub mod annotation;
pub mod docs;
pub mod metadata;
pub mod naming;
pub mod orchestrator;
pub mod predicate;
pub mod rules;
pub mod suppression;
pub mod types;

pub use annotation::*;
pub use docs::{DocTarget, document};
pub use metadata::*;
pub use orchestrator::*;
pub use predicate::FuzzPosition;
pub use suppression::*;
pub use types::*;
