//! HTML rendering for Questsmith quest graphs.
//!
//! [`render`] turns a [`QuestGraph`](questsmith_core::QuestGraph) into a single
//! self-contained document with navigation, per-node sections and an embedded
//! stylesheet. [`export`] adds the duplicate-id check that must pass before a
//! document is written anywhere.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod assets;
mod document;
mod escape;
mod export;
mod locale;
mod options;

pub use document::render;
pub use escape::escape_html;
pub use export::export;
pub use locale::{Labels, Locale};
pub use options::{RenderOptions, RenderOptionsBuilder, RenderOptionsBuilderError};
