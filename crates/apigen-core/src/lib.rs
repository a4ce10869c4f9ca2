//! Enum binding generator
//!
//! Consumes an already-parsed C header namespace and emits C# enum
//! declarations, keeping what the parser only exposes structurally:
//! doc-comment layout, bitflag intent and cross-references between
//! enumerator values.
//!
//! ```no_run
//! use apigen_core::{GeneratorConfig, Generator, Namespace, OverrideTable};
//! use std::path::Path;
//!
//! # fn main() -> apigen_core::ApiGenResult<()> {
//! let overrides = OverrideTable::load("SKOverridesCSharp.txt")?;
//! let namespace = Namespace::from_file("stereokit.json")?;
//! let config = GeneratorConfig::default();
//!
//! Generator::new(&overrides, &config).generate(&namespace, Path::new("Native"))?;
//! # Ok(())
//! # }
//! ```

pub mod ast;
pub mod comment;
pub mod config;
pub mod driver;
pub mod emitter;
pub mod error;
pub mod expression;
pub mod flags;
pub mod naming;
pub mod overrides;
pub mod target;


pub use ast::{Comment, CommentNode, EnumDecl, EnumItem, Expression, Namespace};
pub use comment::CommentFormatter;
pub use config::{ConfigError, GeneratorConfig};
pub use driver::{generate_from_files, GeneratedFile, Generator};
pub use emitter::EnumEmitter;
pub use error::{ApiGenError, ApiGenResult};
pub use expression::ExpressionReconstructor;
pub use flags::is_flags;
pub use naming::{snake_to_camel, NameTransformer};
pub use overrides::OverrideTable;
pub use target::{CSharpPrinter, TargetNode};
