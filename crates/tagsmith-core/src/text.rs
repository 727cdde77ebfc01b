//! Leaf nodes for character content: text, raw markup, comments and scripts

use crate::attributes::{Attributed, Attributes};
use crate::engine::RenderEngine;
use crate::error::Result;
use crate::node::Node;
use crate::tag::Tag;
use std::borrow::Cow;

macro_rules! impl_attributed {
	($ty:ty) => {
		impl Attributed for $ty {
			fn attributes(&self) -> &Attributes {
				&self.attrs
			}

			fn attributes_mut(&mut self) -> &mut Attributes {
				&mut self.attrs
			}
		}
	};
}

/// Escaped character content
///
/// `&`, `<`, `>`, `"` and `'` are replaced with entities when rendered.
/// Text carries no tag, so its attributes never render.
///
/// ## Example
///
/// ```
/// use tagsmith_core::{Node, RenderEngine, Text};
///
/// let mut out = Vec::new();
/// Text::new("<b>").render(&mut RenderEngine::new(&mut out)).unwrap();
/// assert_eq!(out, b"&lt;b&gt;");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Text {
	attrs: Attributes,
	text: Cow<'static, str>,
}

impl Text {
	/// Creates a text node.
	pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
		Self {
			attrs: Attributes::new(),
			text: text.into(),
		}
	}

	/// Returns the unescaped text.
	pub fn as_str(&self) -> &str {
		&self.text
	}
}

impl From<&'static str> for Text {
	fn from(text: &'static str) -> Self {
		Self::new(text)
	}
}

impl From<String> for Text {
	fn from(text: String) -> Self {
		Self::new(text)
	}
}

impl_attributed!(Text);

impl Node for Text {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::NONE, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.write_str(&html_escape::encode_quoted_attribute(&self.text))
	}
}

/// Verbatim markup, written without escaping
#[derive(Debug, Clone, Default)]
pub struct Raw {
	attrs: Attributes,
	markup: Cow<'static, str>,
}

impl Raw {
	/// Creates a raw node.
	pub fn new(markup: impl Into<Cow<'static, str>>) -> Self {
		Self {
			attrs: Attributes::new(),
			markup: markup.into(),
		}
	}

	/// Returns the markup.
	pub fn as_str(&self) -> &str {
		&self.markup
	}
}

impl_attributed!(Raw);

impl Node for Raw {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::NONE, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.write_str(&self.markup)
	}
}

/// Markup comment: `<!--text-->`
#[derive(Debug, Clone, Default)]
pub struct Comment {
	attrs: Attributes,
	text: String,
}

impl Comment {
	/// Creates a comment. The text is written as given.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			attrs: Attributes::new(),
			text: text.into(),
		}
	}
}

impl_attributed!(Comment);

impl Node for Comment {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::COMMENT, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.write_str(&self.text)
	}
}

/// `<script>` element with verbatim source
#[derive(Debug, Clone, Default)]
pub struct Script {
	attrs: Attributes,
	source: String,
}

impl Script {
	/// Creates a script from source text.
	pub fn new(source: impl Into<String>) -> Self {
		Self {
			attrs: Attributes::new(),
			source: source.into(),
		}
	}

	/// Creates a script that loads `src` instead of carrying inline source.
	pub fn external(src: &str) -> Self {
		Self::new(String::new()).attr("src", src)
	}

	/// Returns the inline source.
	pub fn source(&self) -> &str {
		&self.source
	}
}

impl_attributed!(Script);

impl Node for Script {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::SCRIPT, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.write_str(&self.source)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn render(node: &mut dyn Node) -> String {
		let mut out = Vec::new();
		node.render(&mut RenderEngine::new(&mut out)).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[rstest]
	#[case("<b>", "&lt;b&gt;")]
	#[case("a & b", "a &amp; b")]
	#[case("plain", "plain")]
	fn test_text_escapes(#[case] input: &'static str, #[case] expected: &str) {
		assert_eq!(render(&mut Text::new(input)), expected);
	}

	#[rstest]
	fn test_text_escapes_quotes() {
		// Act
		let html = render(&mut Text::new("say \"hi\""));

		// Assert
		assert!(!html.contains('"'));
		assert!(html.contains("&quot;hi&quot;"));
	}

	#[rstest]
	fn test_raw_is_verbatim() {
		assert_eq!(render(&mut Raw::new("<b>")), "<b>");
	}

	#[rstest]
	fn test_text_ignores_attributes() {
		// Arrange
		let mut text = Text::new("x").class("ignored");

		// Act & Assert
		assert_eq!(render(&mut text), "x");
	}

	#[rstest]
	fn test_comment() {
		assert_eq!(render(&mut Comment::new(" note ")), "<!-- note -->\n");
	}

	#[rstest]
	fn test_script_is_not_escaped() {
		// Arrange
		let mut script = Script::new("if (a < b) { go(); }");

		// Act & Assert
		assert_eq!(
			render(&mut script),
			"<script>if (a < b) { go(); }</script>\n"
		);
	}

	#[rstest]
	fn test_external_script() {
		assert_eq!(
			render(&mut Script::external("app.js")),
			"<script src=\"app.js\"></script>\n"
		);
	}
}
