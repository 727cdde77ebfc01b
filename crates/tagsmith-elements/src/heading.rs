//! Section headings

use std::fmt;
use tagsmith_core::{Attributes, Node, RenderEngine, Result, Tag, Text};

/// `<h1>` through `<h6>`
///
/// Levels outside `1..=6` are clamped to the nearest valid level.
pub struct Heading {
	attrs: Attributes,
	level: u8,
	content: Box<dyn Node>,
}

impl fmt::Debug for Heading {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Heading")
			.field("attrs", &self.attrs)
			.field("level", &self.level)
			.finish()
	}
}

impl Heading {
	/// Creates a heading around `node`.
	pub fn new(level: i32, node: impl Node + 'static) -> Self {
		Self {
			attrs: Attributes::new(),
			level: level.clamp(1, 6) as u8,
			content: Box::new(node),
		}
	}

	/// Creates a heading of escaped text.
	pub fn text(level: i32, text: impl Into<String>) -> Self {
		Self::new(level, Text::new(text.into()))
	}

	/// Returns the effective level, between 1 and 6.
	pub fn level(&self) -> u8 {
		self.level
	}

	fn tag(&self) -> Tag {
		match self.level {
			1 => Tag::H1,
			2 => Tag::H2,
			3 => Tag::H3,
			4 => Tag::H4,
			5 => Tag::H5,
			_ => Tag::H6,
		}
	}
}

impl_attributed!(Heading);

impl Node for Heading {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		let tag = self.tag();
		engine.render_tag(&tag, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		self.content.render(engine)
	}
}
