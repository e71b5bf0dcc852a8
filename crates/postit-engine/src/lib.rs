pub mod editing;
pub mod io;
pub mod parsing;
pub mod scheduling;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::NoteEditor;
pub use io::*;
pub use parsing::{Block, BlockKind, BlockType, ParseOptions, Span, parse, parse_with};
pub use scheduling::{Generation, ParseResult, ParseScheduler};
