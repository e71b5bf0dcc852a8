//! # Block Kinds
//!
//! Each structural block kind owns its recognising pattern and knows how to
//! turn a match into a [`BlockKind`](super::BlockKind). The segmenter only
//! decides pass order; it never hardcodes `---`, fences or bullet markers.

pub mod bullet;
pub mod code_fence;
pub mod separator;

pub use bullet::Bullet;
pub use code_fence::CodeFence;
pub use separator::Separator;
