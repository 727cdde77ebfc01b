//! Line breaks, non-breaking spaces and links

use tagsmith_core::{Attributed, Attributes, Node, RenderEngine, Result, Tag, Text};

/// One or more `<br>` line breaks
///
/// Every break carries the same attributes.
#[derive(Debug, Clone)]
pub struct Br {
	attrs: Attributes,
	count: usize,
}

impl Br {
	/// Creates a single line break.
	pub fn new() -> Self {
		Self::repeat(1)
	}

	/// Creates `count` consecutive line breaks.
	pub fn repeat(count: usize) -> Self {
		Self {
			attrs: Attributes::new(),
			count,
		}
	}
}

impl Default for Br {
	fn default() -> Self {
		Self::new()
	}
}

impl_attributed!(Br);

impl Node for Br {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		for _ in 0..self.count {
			engine.render_tag(&Tag::BR, self)?;
		}
		Ok(())
	}

	fn render_content(&mut self, _engine: &mut RenderEngine<'_>) -> Result<()> {
		Ok(())
	}
}

/// One or more `&nbsp;` entities
///
/// Has no tag, so attributes are ignored.
#[derive(Debug, Clone)]
pub struct Nbsp {
	attrs: Attributes,
	count: usize,
}

impl Nbsp {
	/// Creates a single non-breaking space.
	pub fn new() -> Self {
		Self::repeat(1)
	}

	/// Creates `count` non-breaking spaces.
	pub fn repeat(count: usize) -> Self {
		Self {
			attrs: Attributes::new(),
			count,
		}
	}
}

impl Default for Nbsp {
	fn default() -> Self {
		Self::new()
	}
}

impl_attributed!(Nbsp);

impl Node for Nbsp {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::NONE, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		for _ in 0..self.count {
			engine.write_str("&nbsp;")?;
		}
		Ok(())
	}
}

container_element! {
	/// `<a>` link around text or other nodes
	///
	/// The target is taken as a ready-made string.
	///
	/// ## Example
	///
	/// ```
	/// use tagsmith_elements::Anchor;
	/// use tagsmith_core::{Node, RenderEngine};
	///
	/// let mut link = Anchor::text("/docs?page=2", "Next");
	/// let mut out = Vec::new();
	/// link.render(&mut RenderEngine::new(&mut out)).unwrap();
	/// assert_eq!(out, b"<a href=\"/docs?page=2\">Next</a>\n");
	/// ```
	Anchor => Tag::A
}

impl Anchor {
	/// Creates an empty link to `href`.
	pub fn new(href: &str) -> Self {
		Self::from_container(tagsmith_core::Container::new()).attr("href", href)
	}

	/// Creates a link showing escaped `text`.
	pub fn text(href: &str, text: impl Into<String>) -> Self {
		Self::new(href).child(Text::new(text.into()))
	}

	/// Creates a link around `node`.
	pub fn wrapping(href: &str, node: impl Node + 'static) -> Self {
		Self::new(href).child(node)
	}

	/// Returns the link target.
	pub fn href(&self) -> &str {
		self.get_attr("href")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::media::Image;
	use rstest::rstest;

	fn render(node: &mut dyn Node) -> String {
		let mut out = Vec::new();
		node.render(&mut RenderEngine::new(&mut out)).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[rstest]
	#[case(0, "")]
	#[case(1, "<br>\n")]
	#[case(3, "<br>\n<br>\n<br>\n")]
	fn test_br_repeats(#[case] count: usize, #[case] expected: &str) {
		assert_eq!(render(&mut Br::repeat(count)), expected);
	}

	#[rstest]
	fn test_br_attributes_apply_to_every_break() {
		// Arrange
		let mut br = Br::repeat(2).attr("clear", "all");

		// Act & Assert
		assert_eq!(render(&mut br), "<br clear=\"all\">\n<br clear=\"all\">\n");
	}

	#[rstest]
	fn test_nbsp_has_no_markup() {
		// Arrange
		let mut nbsp = Nbsp::repeat(2).class("ignored");

		// Act & Assert
		assert_eq!(render(&mut nbsp), "&nbsp;&nbsp;");
	}

	#[rstest]
	fn test_anchor_escapes_text() {
		// Arrange
		let mut link = Anchor::text("/q", "a & b");

		// Act & Assert
		assert_eq!(link.href(), "/q");
		assert_eq!(render(&mut link), "<a href=\"/q\">a &amp; b</a>\n");
	}

	#[rstest]
	fn test_anchor_wrapping_image() {
		// Arrange
		let mut link = Anchor::wrapping("/", Image::new("logo.png"));

		// Act & Assert
		assert_eq!(render(&mut link), "<a href=\"/\"><img src=\"logo.png\">\n</a>\n");
	}
}
