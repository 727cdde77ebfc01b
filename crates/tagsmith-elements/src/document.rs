//! The document aggregate and its render entry points

use crate::block::Body;
use crate::head::Head;
use crate::map::ImageMap;
use crate::style::{Css, StyleRule};
use tagsmith_core::{
	Attributes, NameGenerator, Node, RenderEngine, RenderOptions, Result, Sink, Tag, render_page,
};

/// A complete page: `<html>` with a [`Head`] and a [`Body`]
///
/// The document owns the [`NameGenerator`] for names that must be unique
/// within the page (image maps, generated scripts) and the
/// [`RenderOptions`] used by [`Document::render_to`].
///
/// ## Example
///
/// ```
/// use tagsmith_elements::{Document, Paragraph};
///
/// let mut doc = Document::new();
/// doc.set_title("Hello");
/// doc.body_mut().add(Paragraph::text("Hi there"));
///
/// let html = doc.render_to_string().unwrap();
/// assert_eq!(
///     html,
///     "<!DOCTYPE html><html><head><title>Hello</title>\n</head>\n\
///      <body><p>Hi there</p>\n</body>\n</html>\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Document {
	attrs: Attributes,
	head: Head,
	body: Body,
	names: NameGenerator,
	options: RenderOptions,
}

impl Document {
	/// Creates an empty document with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty document rendered with `options`.
	pub fn with_options(options: RenderOptions) -> Self {
		Self {
			options,
			..Self::default()
		}
	}

	/// Returns the render options.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Returns the head.
	pub fn head(&self) -> &Head {
		&self.head
	}

	/// Returns the head for mutation.
	pub fn head_mut(&mut self) -> &mut Head {
		&mut self.head
	}

	/// Returns the body.
	pub fn body(&self) -> &Body {
		&self.body
	}

	/// Returns the body for mutation.
	pub fn body_mut(&mut self) -> &mut Body {
		&mut self.body
	}

	/// Sets the title. The last call wins.
	pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
		self.head.set_title(title);
		self
	}

	/// Adds or replaces a named style rule.
	pub fn add_rule(&mut self, rule: StyleRule) -> &mut Self {
		self.head.add_rule(rule);
		self
	}

	/// Appends a raw CSS chunk to the head.
	pub fn add_css(&mut self, css: Css) -> &mut Self {
		self.head.add_css(css);
		self
	}

	/// Returns `prefix` followed by a number unique within this document.
	pub fn next_name(&mut self, prefix: &str) -> String {
		self.names.next_name(prefix)
	}

	/// Returns the document's name generator.
	pub fn names_mut(&mut self) -> &mut NameGenerator {
		&mut self.names
	}

	/// Creates an image map with a name unique within this document.
	pub fn image_map(&mut self) -> ImageMap {
		ImageMap::generated(&mut self.names)
	}

	/// Adds a deferred body script under a generated name and returns the
	/// function name.
	pub fn add_generated_script(&mut self, fragment: &str) -> String {
		self.body
			.container_mut()
			.add_generated_script(&mut self.names, fragment)
	}

	/// Writes the doctype and the whole document to `sink`.
	///
	/// Returns the number of bytes written.
	///
	/// # Errors
	///
	/// Stops at the first failure. Sink and stream errors carry the number
	/// of bytes written before it.
	pub fn render_to(&mut self, sink: &mut dyn Sink) -> Result<usize> {
		tracing::debug!(title = ?self.head.title(), "Rendering document");
		let options = self.options.clone();
		render_page(self, sink, options)
	}

	/// Renders the document into a byte buffer, exactly as written.
	///
	/// # Errors
	///
	/// Same as [`Document::render_to`].
	pub fn render_to_vec(&mut self) -> Result<Vec<u8>> {
		let mut out = Vec::new();
		self.render_to(&mut out)?;
		Ok(out)
	}

	/// Renders the document into a string.
	///
	/// # Errors
	///
	/// Same as [`Document::render_to`], plus
	/// [`RenderError::Utf8`](tagsmith_core::RenderError::Utf8) when streamed
	/// content is not valid UTF-8. [`Document::render_to_vec`] keeps such
	/// bytes.
	pub fn render_to_string(&mut self) -> Result<String> {
		Ok(String::from_utf8(self.render_to_vec()?)?)
	}
}

impl_attributed!(Document);

impl Node for Document {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::HTML, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		self.head.render(engine)?;
		self.body.render(engine)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::media::Image;
	use rstest::rstest;
	use tagsmith_core::{Attributed, Container, RenderError, Streaming};

	#[rstest]
	fn test_empty_document() {
		// Arrange
		let mut doc = Document::new();

		// Act
		let html = doc.render_to_string().unwrap();

		// Assert
		assert_eq!(
			html,
			"<!DOCTYPE html><html><head></head>\n<body></body>\n</html>\n"
		);
	}

	#[rstest]
	fn test_custom_doctype_and_root_attributes() {
		// Arrange
		let mut doc = Document::with_options(RenderOptions::new().doctype("<!doctype html>\n"))
			.attr("lang", "en");

		// Act
		let html = doc.render_to_string().unwrap();

		// Assert
		assert!(html.starts_with("<!doctype html>\n<html lang=\"en\">"));
	}

	#[rstest]
	fn test_render_reports_bytes_written() {
		// Arrange
		let mut doc = Document::new();
		let mut out = Vec::new();

		// Act
		let written = doc.render_to(&mut out).unwrap();

		// Assert
		assert_eq!(written, out.len());
	}

	#[rstest]
	fn test_names_are_unique_per_document() {
		// Arrange
		let mut doc = Document::new();
		let mut other = Document::new();

		// Act
		let map = doc.image_map();
		let script = doc.add_generated_script("go();");

		// Assert
		assert_eq!(map.name(), "map1");
		assert_eq!(script, "deferred2");
		assert_eq!(other.image_map().name(), "map1");
	}

	#[rstest]
	fn test_generated_script_renders_in_body() {
		// Arrange
		let mut doc = Document::new();
		let name = doc.add_generated_script("init();");
		let map = doc.image_map();
		doc.body_mut().add(Image::new("p.png").use_map(&map));
		doc.body_mut().add(map);

		// Act
		let html = doc.render_to_string().unwrap();

		// Assert
		assert!(html.contains(&format!("<body><script>function {name}() {{ init(); }}</script>")));
		assert!(html.contains("usemap=\"#map2\""));
		assert!(html.contains("<map name=\"map2\"></map>"));
	}

	#[rstest]
	fn test_depth_limit_applies() {
		// Arrange
		let mut doc = Document::with_options(RenderOptions::new().max_depth(1));

		// Act
		let result = doc.render_to_string();

		// Assert
		assert!(matches!(result, Err(RenderError::DepthExceeded { limit: 1 })));
	}

	#[rstest]
	fn test_document_renders_as_node() {
		// Arrange
		let mut doc = Document::new();
		doc.set_title("Inner");
		let mut out = Vec::new();

		// Act
		doc.render(&mut RenderEngine::new(&mut out)).unwrap();

		// Assert
		assert!(out.starts_with(b"<html><head><title>Inner</title>"));
	}

	#[rstest]
	fn test_document_nests_inside_fragment() {
		// Arrange
		let mut fragment = Container::new();
		fragment.add(Document::new());
		let mut out = Vec::new();

		// Act
		fragment.render(&mut RenderEngine::new(&mut out)).unwrap();

		// Assert
		assert_eq!(out, b"<html><head></head>\n<body></body>\n</html>\n");
	}

	#[rstest]
	fn test_invalid_utf8_is_reported_as_text() {
		// Arrange
		let mut doc = Document::new();
		doc.body_mut().add(Streaming::new(b"f\xff\n".as_slice()));

		// Act
		let text = doc.render_to_string();

		// Assert
		assert!(matches!(text, Err(RenderError::Utf8(_))));
	}

	#[rstest]
	fn test_render_to_vec_keeps_streamed_bytes() {
		// Arrange
		let mut doc = Document::new();
		doc.body_mut().add(Streaming::new(b"f\xff\n".as_slice()));

		// Act
		let bytes = doc.render_to_vec().unwrap();

		// Assert
		assert!(bytes.ends_with(b"<body>f\xff\n</body>\n</html>\n"));
	}
}
