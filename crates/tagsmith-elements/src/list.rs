//! Ordered, unordered and description lists
//!
//! A list without items renders nothing. Items of a description list render
//! as a `<dt>` term followed by a `<dd>` description, both carrying the
//! item's attributes.

use std::fmt;
use tagsmith_core::{Attributed, Attributes, Node, RenderEngine, Result, Tag, Text};

/// The kind of list, which decides the list and item tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
	/// `<dl>` with `<dt>`/`<dd>` pairs
	Description,
	/// `<ol>` with `<li>` items
	Ordered,
	/// `<ul>` with `<li>` items
	Unordered,
}

impl ListKind {
	fn tag(self) -> Tag {
		match self {
			Self::Description => Tag::DL,
			Self::Ordered => Tag::OL,
			Self::Unordered => Tag::UL,
		}
	}
}

/// Marker style, written as the `list-style-type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
	/// Filled circle
	Disc,
	/// Hollow circle
	Circle,
	/// Filled square
	Square,
	/// No marker
	None,
}

impl ListStyle {
	/// Returns the attribute value.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Disc => "disc",
			Self::Circle => "circle",
			Self::Square => "square",
			Self::None => "none",
		}
	}
}

/// Numbering of an ordered list, written as the `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
	/// `1, 2, 3`
	Decimal,
	/// `A, B, C`
	UpperAlpha,
	/// `a, b, c`
	LowerAlpha,
	/// `I, II, III`
	UpperRoman,
	/// `i, ii, iii`
	LowerRoman,
}

impl Numbering {
	/// Returns the attribute value.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Decimal => "1",
			Self::UpperAlpha => "A",
			Self::LowerAlpha => "a",
			Self::UpperRoman => "I",
			Self::LowerRoman => "i",
		}
	}
}

/// `<ol>`, `<ul>` or `<dl>` element
///
/// ## Example
///
/// ```
/// use tagsmith_elements::{List, ListKind};
/// use tagsmith_core::{Node, RenderEngine, Text};
///
/// let mut glossary = List::new(ListKind::Description);
/// glossary.add_item(Text::new("Node")).describe(Text::new("A tree element"));
///
/// let mut out = Vec::new();
/// glossary.render(&mut RenderEngine::new(&mut out)).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "<dl><dt>Node</dt>\n<dd>A tree element</dd>\n</dl>\n"
/// );
/// ```
#[derive(Debug)]
pub struct List {
	attrs: Attributes,
	kind: ListKind,
	items: Vec<ListItem>,
}

impl List {
	/// Creates an empty list.
	pub fn new(kind: ListKind) -> Self {
		Self {
			attrs: Attributes::new(),
			kind,
			items: Vec::new(),
		}
	}

	/// Returns the list kind.
	pub fn kind(&self) -> ListKind {
		self.kind
	}

	/// Appends an item and returns it.
	pub fn add_item(&mut self, node: impl Node + 'static) -> &mut ListItem {
		self.items.push(ListItem {
			attrs: Attributes::new(),
			kind: self.kind,
			term: Box::new(node),
			description: None,
		});
		let last = self.items.len() - 1;
		&mut self.items[last]
	}

	/// Appends an item of escaped text and returns it.
	pub fn add_text(&mut self, text: impl Into<String>) -> &mut ListItem {
		self.add_item(Text::new(text.into()))
	}

	/// Sets the marker style.
	pub fn set_list_style(&mut self, style: ListStyle) -> &mut Self {
		self.set_attr("list-style-type", style.as_str());
		self
	}

	/// Sets the first number and, optionally, the numbering type.
	pub fn set_start(&mut self, start: i64, numbering: Option<Numbering>) -> &mut Self {
		self.attrs.set("start", start.to_string());
		if let Some(numbering) = numbering {
			self.set_attr("type", numbering.as_str());
		}
		self
	}

	/// Returns the number of items.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns whether the list has no items.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl_attributed!(List);

impl Node for List {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		if self.items.is_empty() {
			tracing::trace!(kind = ?self.kind, "Skipping list without items");
			return Ok(());
		}
		engine.render_tag(&self.kind.tag(), self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		for item in &mut self.items {
			item.render(engine)?;
		}
		Ok(())
	}
}

/// One list entry: `<li>`, or a `<dt>`/`<dd>` pair in description lists
pub struct ListItem {
	attrs: Attributes,
	kind: ListKind,
	term: Box<dyn Node>,
	description: Option<Box<dyn Node>>,
}

impl fmt::Debug for ListItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListItem")
			.field("attrs", &self.attrs)
			.field("kind", &self.kind)
			.field("has_description", &self.description.is_some())
			.finish()
	}
}

impl ListItem {
	/// Sets the description shown under the term.
	///
	/// Only description lists render it; other kinds ignore the call.
	pub fn describe(&mut self, node: impl Node + 'static) -> &mut Self {
		if self.kind == ListKind::Description {
			self.description = Some(Box::new(node));
		}
		self
	}

	/// Returns whether a description has been set.
	pub fn has_description(&self) -> bool {
		self.description.is_some()
	}
}

impl_attributed!(ListItem);

impl Node for ListItem {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		match self.kind {
			ListKind::Ordered | ListKind::Unordered => engine.render_tag(&Tag::LI, self),
			ListKind::Description => {
				let mut term = Part {
					attrs: &mut self.attrs,
					content: Some(&mut self.term),
				};
				engine.render_tag(&Tag::DT, &mut term)?;
				let mut description = Part {
					attrs: &mut self.attrs,
					content: self.description.as_mut(),
				};
				engine.render_tag(&Tag::DD, &mut description)
			}
		}
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		self.term.render(engine)
	}
}

/// Borrowed view rendering one half of a description item
struct Part<'a> {
	attrs: &'a mut Attributes,
	content: Option<&'a mut Box<dyn Node>>,
}

impl Attributed for Part<'_> {
	fn attributes(&self) -> &Attributes {
		&*self.attrs
	}

	fn attributes_mut(&mut self) -> &mut Attributes {
		&mut *self.attrs
	}
}

impl Node for Part<'_> {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::NONE, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		match self.content.as_mut() {
			Some(node) => node.render(engine),
			None => Ok(()),
		}
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
	#[case(ListKind::Description)]
	#[case(ListKind::Ordered)]
	#[case(ListKind::Unordered)]
	fn test_empty_list_renders_nothing(#[case] kind: ListKind) {
		assert_eq!(render(&mut List::new(kind)), "");
	}

	#[rstest]
	#[case(ListKind::Ordered, "<ol><li>a</li>\n<li>b</li>\n</ol>\n")]
	#[case(ListKind::Unordered, "<ul><li>a</li>\n<li>b</li>\n</ul>\n")]
	fn test_items_render_as_li(#[case] kind: ListKind, #[case] expected: &str) {
		// Arrange
		let mut list = List::new(kind);
		list.add_text("a");
		list.add_text("b");

		// Act & Assert
		assert_eq!(render(&mut list), expected);
	}

	#[rstest]
	fn test_description_items_share_attributes() {
		// Arrange
		let mut list = List::new(ListKind::Description);
		list.add_text("term")
			.describe(Text::new("meaning"))
			.set_class("entry");

		// Act & Assert
		assert_eq!(
			render(&mut list),
			"<dl><dt class=\"entry\">term</dt>\n<dd class=\"entry\">meaning</dd>\n</dl>\n"
		);
	}

	#[rstest]
	fn test_description_without_detail_renders_empty_dd() {
		// Arrange
		let mut list = List::new(ListKind::Description);
		list.add_text("lonely");

		// Act & Assert
		assert_eq!(render(&mut list), "<dl><dt>lonely</dt>\n<dd></dd>\n</dl>\n");
	}

	#[rstest]
	fn test_describe_is_ignored_outside_description_lists() {
		// Arrange
		let mut list = List::new(ListKind::Unordered);

		// Act
		let item = list.add_text("x").describe(Text::new("ignored"));

		// Assert
		assert!(!item.has_description());
	}

	#[rstest]
	fn test_style_and_numbering_attributes() {
		// Arrange
		let mut list = List::new(ListKind::Ordered);
		list.set_list_style(ListStyle::Square)
			.set_start(3, Some(Numbering::LowerRoman));
		list.add_text("iii");

		// Act & Assert
		assert_eq!(
			render(&mut list),
			"<ol list-style-type=\"square\" start=\"3\" type=\"i\"><li>iii</li>\n</ol>\n"
		);
	}

	#[rstest]
	fn test_repeated_render_is_stable() {
		// Arrange
		let mut list = List::new(ListKind::Description);
		list.add_text("t").describe(Text::new("d"));

		// Act
		let first = render(&mut list);
		let second = render(&mut list);

		// Assert
		assert_eq!(first, second);
	}
}
