//! # Tagsmith
//!
//! A programmatic builder for HTML documents. Trees of nodes are assembled
//! with fluent calls and serialized to text without a templating language.
//!
//! ## Core Principles
//!
//! - **Composition over Inheritance**: every node embeds an attribute set and
//!   implements the `Node` trait; there is no base element type
//! - **Open node family**: custom nodes plug into the same render engine as
//!   the built-in catalog
//! - **Detectable failure**: a failed write aborts the render and reports
//!   how many bytes reached the sink
//!
//! ## Feature Flags
//!
//! - `elements` (default) - The element catalog and the `Document` aggregate
//!
//! Without `elements` only the [`render`] module is available.
//!
//! ## Quick Example
//!
//! ```
//! use tagsmith::prelude::*;
//!
//! let mut doc = Document::new();
//! doc.set_title("Inventory");
//!
//! let mut list = List::new(ListKind::Unordered);
//! list.add_text("bolts");
//! list.add_text("nuts & washers");
//! doc.body_mut().add(list);
//!
//! let html = doc.render_to_string().unwrap();
//! assert!(html.contains("<li>nuts &amp; washers</li>"));
//! ```
//!
//! ## Module Organization
//!
//! - [`render`]: attribute sets, the node contract, tags, containers, the
//!   render engine and output sinks
//! - `elements`: concrete elements, stylesheets and the document

#![warn(missing_docs)]

pub mod render;

#[cfg(feature = "elements")]
pub mod elements;

pub use tagsmith_core::{
	Attributed, Attributes, Container, Node, RenderEngine, RenderError, RenderOptions, Result,
	Sink, Tag, render_page,
};

#[cfg(feature = "elements")]
pub use tagsmith_elements::Document;

/// Re-export commonly used types.
pub mod prelude {
	pub use tagsmith_core::prelude::*;

	#[cfg(feature = "elements")]
	pub use tagsmith_elements::prelude::*;
}
