//! Tagsmith elements: the element catalog and the document aggregate
//!
//! Every element here implements [`tagsmith_core::Node`], so elements nest
//! freely and render through the same engine as custom nodes.
//!
//! # Catalog
//!
//! - **Block and phrasing**: [`Div`], [`Paragraph`], [`Bold`], [`Italic`],
//!   [`Pre`], [`IFrame`], [`Body`]
//! - **Inline**: [`Br`], [`Nbsp`], [`Anchor`]
//! - **Tables**: [`Table`], [`Row`], [`Cell`]
//! - **Lists**: [`List`] with ordered, unordered and description kinds
//! - **Headings**: [`Heading`], levels clamped to `1..=6`
//! - **Forms**: [`Form`], [`Input`], [`Label`]
//! - **Media**: [`Image`], [`Audio`], [`Source`], [`ImageMap`], [`Area`]
//! - **Head**: [`Head`], [`Title`], [`Meta`]
//! - **Styles**: [`StyleRule`], [`StyleDef`], [`Class`], [`StyleSheet`],
//!   [`Css`], [`CssBlock`]
//!
//! Tables, rows, lists, stylesheets and CSS blocks render nothing at all
//! while they are empty.
//!
//! # Example
//!
//! ```
//! use tagsmith_elements::prelude::*;
//!
//! let mut doc = Document::new();
//! doc.set_title("Report");
//!
//! let mut table = Table::new();
//! table.header().cell_text("metric");
//! table.row().cell_text("42");
//! doc.body_mut().add(table);
//!
//! let html = doc.render_to_string().unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("<th>metric</th>"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[macro_use]
mod macros;

pub mod block;
pub mod document;
pub mod form;
pub mod head;
pub mod heading;
pub mod inline;
pub mod list;
pub mod map;
pub mod media;
pub mod style;
pub mod table;

pub use block::{Body, Bold, Div, IFrame, Italic, Paragraph, Pre};
pub use document::Document;
pub use form::{Form, Input, Label};
pub use head::{Head, Meta, Title};
pub use heading::Heading;
pub use inline::{Anchor, Br, Nbsp};
pub use list::{List, ListItem, ListKind, ListStyle, Numbering};
pub use map::{Area, ImageMap, Shape};
pub use media::{Audio, Image, Preload, Source};
pub use style::{Class, Css, CssBlock, StyleDef, StyleRule, StyleSheet};
pub use table::{Cell, Row, RowKind, Table};

/// Re-export commonly used types.
pub mod prelude {
	pub use crate::block::{Body, Bold, Div, IFrame, Italic, Paragraph, Pre};
	pub use crate::document::Document;
	pub use crate::form::{Form, Input, Label};
	pub use crate::head::{Head, Meta, Title};
	pub use crate::heading::Heading;
	pub use crate::inline::{Anchor, Br, Nbsp};
	pub use crate::list::{List, ListKind, ListStyle, Numbering};
	pub use crate::map::{ImageMap, Shape};
	pub use crate::media::{Audio, Image, Preload, Source};
	pub use crate::style::{Class, Css, StyleDef, StyleRule};
	pub use crate::table::{RowKind, Table};

	pub use tagsmith_core::prelude::*;
}
