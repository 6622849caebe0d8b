//! Loader for `compile_commands.json` build descriptions.
//!
//! Turns a cmake-generated compilation database into a list of
//! [`CompilationUnit`]s: the unit's canonical source path, its ordered
//! include-search directories (`-I`, `-isystem`), and any forced-include
//! files (`-include`). This is plain input decoding; all dependency
//! analysis happens in `deplens_engine`.

pub mod command;
pub mod entry;
pub mod error;
pub mod loader;
pub mod unit;

pub use entry::CompileCommandEntry;
pub use error::CompileDbError;
pub use loader::{load_compile_db, units_from_entries};
pub use unit::CompilationUnit;
