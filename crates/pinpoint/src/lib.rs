//! # pinpoint: C# test name resolution
//!
//! pinpoint maps an editor cursor, or a whole file, in C# source to the
//! fully-qualified names that `dotnet test --filter` understands. It works
//! on tree-sitter syntax trees and never runs the test runner itself.
//!
//! ## Design Philosophy
//!
//! - **Syntax, not semantics** - names come from the tree alone; no build, no
//!   compiler, no project model
//! - **Expected misses are values** - a cursor outside any method is a
//!   [`NotFound`], not an [`Error`]
//! - **Stateless core** - the resolvers borrow a tree for one call and keep
//!   nothing; re-parse after each edit
//! - **Library first, CLI second**
//!
//! ## Quick Start
//!
//! ```no_run
//! use pinpoint::{Config, Cursor, FilterOperator, SourceParser, TestCommand, TestFilter};
//! use std::path::Path;
//!
//! let mut parser = SourceParser::new()?;
//! let file = parser.parse_file(Path::new("tests/CartTests.cs"))?;
//!
//! // Test at the cursor (0-indexed row and byte column)
//! if let Ok(name) = file.method_at(Cursor::new(12, 8)) {
//!     println!("{name}");
//! }
//!
//! // Every test class in the file
//! let filter = TestFilter::from_names(FilterOperator::Contains, file.top_level_types());
//! let command = TestCommand::build(&Config::default(), &filter, false);
//! println!("{command}");
//! # Ok::<(), pinpoint::Error>(())
//! ```

mod command;
mod config;
mod enumerator;
mod error;
mod filter;
mod languages;
mod locator;
mod parser;
mod types;

pub use command::{DEBUG_ENV_VAR, TestCommand};
pub use config::{CONFIG_FILE_NAME, Config};
pub use enumerator::enumerate_top_level_types;
pub use error::{Error, NotFound, Result};
pub use filter::{FilterOperator, TestFilter};
pub use locator::locate_enclosing_method;
pub use parser::{ParsedFile, SourceParser};
pub use types::{Cursor, QualifiedName};
