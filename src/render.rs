//! Attribute sets, the node contract and the render engine
//!
//! This module provides access to tagsmith-core, the part of tagsmith that
//! knows nothing about concrete elements.
//!
//! ## Example
//!
//! ```
//! use tagsmith::render::{Container, RenderOptions, Text, render_page};
//!
//! let mut fragment = Container::new();
//! fragment.add(Text::new("<escaped>"));
//!
//! let mut out = Vec::new();
//! let written = render_page(&mut fragment, &mut out, RenderOptions::new().doctype("")).unwrap();
//! assert_eq!(out, b"&lt;escaped&gt;");
//! assert_eq!(written, 15);
//! ```

// Re-export all tagsmith-core functionality
pub use tagsmith_core::*;
