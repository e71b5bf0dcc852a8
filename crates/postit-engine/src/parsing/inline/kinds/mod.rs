//! # Inline Kinds
//!
//! The closed tag vocabulary shared with the renderer, and the delimiter
//! constants of the constructs that produce it.
//!
//! - **`Style`**: `<Header1>…</>` through `<Code>…</>`
//! - **`Link`**: `<a id="browser" href="…">…</>`
//! - **`Escape`**: the four backslash-escapable characters

pub mod escape;
pub mod link;
pub mod style;

pub use escape::Escape;
pub use link::Link;
pub use style::Style;
