//! Identifier segmentation and case conversion.

pub mod banner;
pub mod case;
pub mod classify;
pub mod split;

pub use banner::{center_aligned_padded, LINE_LENGTH};
pub use case::{transform, TransformFormat};
pub use classify::{classify, CharClass};
pub use split::{split, split_bytes};
