//! Tagsmith core: the node contract and the render engine
//!
//! This crate holds everything a markup tree needs in order to be
//! serialized, independent of any concrete element kind:
//!
//! - **Attributes**: canonical key/value storage shared by all nodes
//! - **Node contract**: the [`Attributed`] and [`Node`] traits
//! - **Tags**: literal open/close markup pairs, validated on construction
//! - **Container**: ordered children plus deferred script aggregation
//! - **RenderEngine**: one render pass over a tree, writing to a [`Sink`]
//! - **Streaming**: content pulled from a reader while rendering
//!
//! # Quick Start
//!
//! ```
//! use tagsmith_core::prelude::*;
//!
//! let mut root = Container::new();
//! root.add(Text::new("a < b"));
//! root.add(Raw::new("<br>"));
//!
//! let mut out = Vec::new();
//! render_page(&mut root, &mut out, RenderOptions::default()).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "<!DOCTYPE html>a &lt; b<br>");
//! ```
//!
//! # Writing a Node
//!
//! A node embeds an [`Attributes`] value, names the tag it renders with,
//! and writes its own content. Escaping is the node's responsibility:
//!
//! ```
//! use tagsmith_core::prelude::*;
//!
//! struct Kbd {
//!     attrs: Attributes,
//!     keys: String,
//! }
//!
//! impl Attributed for Kbd {
//!     fn attributes(&self) -> &Attributes {
//!         &self.attrs
//!     }
//!
//!     fn attributes_mut(&mut self) -> &mut Attributes {
//!         &mut self.attrs
//!     }
//! }
//!
//! impl Node for Kbd {
//!     fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
//!         let tag = Tag::new("<kbd>", "</kbd>")?;
//!         engine.render_tag(&tag, self)
//!     }
//!
//!     fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
//!         Text::new(self.keys.clone()).render(engine)
//!     }
//! }
//!
//! let mut kbd = Kbd { attrs: Attributes::new(), keys: "Ctrl+C".into() }.class("key");
//! let mut out = Vec::new();
//! kbd.render(&mut RenderEngine::new(&mut out)).unwrap();
//! assert_eq!(out, b"<kbd class=\"key\">Ctrl+C</kbd>\n");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod attributes;
pub mod config;
pub mod container;
pub mod engine;
pub mod error;
pub mod names;
pub mod node;
pub mod stream;
pub mod tag;
pub mod text;

pub use attributes::{Attributed, Attributes};
pub use config::{DEFAULT_DOCTYPE, RenderOptions};
pub use container::Container;
pub use engine::{Flushing, RenderEngine, Sink, render_page};
pub use error::{ConfigError, RenderError, Result};
pub use names::NameGenerator;
pub use node::Node;
pub use stream::Streaming;
pub use tag::Tag;
pub use text::{Comment, Raw, Script, Text};

/// Re-export commonly used types.
pub mod prelude {
	pub use crate::attributes::{Attributed, Attributes};
	pub use crate::config::RenderOptions;
	pub use crate::container::Container;
	pub use crate::engine::{Flushing, RenderEngine, Sink, render_page};
	pub use crate::error::{RenderError, Result};
	pub use crate::names::NameGenerator;
	pub use crate::node::Node;
	pub use crate::stream::Streaming;
	pub use crate::tag::Tag;
	pub use crate::text::{Comment, Raw, Script, Text};
}
