//! The document head: title, metadata and styles

use crate::style::{Css, CssBlock, StyleRule, StyleSheet};
use std::fmt;
use tagsmith_core::{Attributed, Attributes, Node, RenderEngine, Result, Tag, Text};

/// `<head>` element
///
/// Renders, in order: the raw CSS block, the stylesheet, the title (when
/// one is set) and any other nodes added to the head. Empty style blocks
/// render nothing.
#[derive(Default)]
pub struct Head {
	attrs: Attributes,
	css: CssBlock,
	styles: StyleSheet,
	title: Option<Title>,
	nodes: Vec<Box<dyn Node>>,
}

impl fmt::Debug for Head {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Head")
			.field("attrs", &self.attrs)
			.field("css", &self.css)
			.field("styles", &self.styles)
			.field("title", &self.title)
			.field("nodes_count", &self.nodes.len())
			.finish()
	}
}

impl Head {
	/// Creates an empty head.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the document title. The last call wins.
	pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
		self.title = Some(Title::new(title));
		self
	}

	/// Returns the current title.
	pub fn title(&self) -> Option<&str> {
		self.title.as_ref().map(Title::as_str)
	}

	/// Adds or replaces a named style rule.
	pub fn add_rule(&mut self, rule: StyleRule) -> &mut Self {
		self.styles.add(rule);
		self
	}

	/// Appends a raw CSS chunk.
	pub fn add_css(&mut self, css: Css) -> &mut Self {
		self.css.add(css);
		self
	}

	/// Appends another head node, such as [`Meta`] or a script.
	pub fn add(&mut self, node: impl Node + 'static) -> &mut Self {
		self.nodes.push(Box::new(node));
		self
	}

	/// Returns the stylesheet.
	pub fn styles(&self) -> &StyleSheet {
		&self.styles
	}
}

impl_attributed!(Head);

impl Node for Head {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::HEAD, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		self.css.render(engine)?;
		self.styles.render(engine)?;
		if let Some(title) = self.title.as_mut() {
			title.render(engine)?;
		}
		for node in &mut self.nodes {
			node.render(engine)?;
		}
		Ok(())
	}
}

/// `<title>` with escaped text
#[derive(Debug, Clone, Default)]
pub struct Title {
	attrs: Attributes,
	text: Text,
}

impl Title {
	/// Creates a title.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			attrs: Attributes::new(),
			text: Text::new(text.into()),
		}
	}

	/// Returns the unescaped title.
	pub fn as_str(&self) -> &str {
		self.text.as_str()
	}
}

impl_attributed!(Title);

impl Node for Title {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::TITLE, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		self.text.render(engine)
	}
}

/// `<meta>` (void)
#[derive(Debug, Clone, Default)]
pub struct Meta {
	attrs: Attributes,
}

impl Meta {
	/// Creates a meta element without attributes.
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares the document character encoding.
	pub fn charset(charset: &str) -> Self {
		Self::new().attr("charset", charset)
	}

	/// Reloads the page after `seconds`, or moves to `link` when it is not
	/// empty.
	///
	/// ```
	/// use tagsmith_elements::Meta;
	/// use tagsmith_core::Attributed;
	///
	/// let meta = Meta::refresh(5, "/next");
	/// assert_eq!(meta.get_attr("content"), "5; URL=/next");
	/// assert_eq!(Meta::refresh(30, "").get_attr("content"), "30");
	/// ```
	pub fn refresh(seconds: u32, link: &str) -> Self {
		let content = if link.is_empty() {
			seconds.to_string()
		} else {
			format!("{seconds}; URL={link}")
		};
		Self::new()
			.attr("http-equiv", "refresh")
			.attr("content", &content)
	}
}

impl_attributed!(Meta);

impl Node for Meta {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::META, self)
	}

	fn render_content(&mut self, _engine: &mut RenderEngine<'_>) -> Result<()> {
		Ok(())
	}
}
