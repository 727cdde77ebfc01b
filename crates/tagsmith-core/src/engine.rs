//! The render engine and its output sinks
//!
//! A [`RenderEngine`] lives for exactly one render pass. It wraps an output
//! [`Sink`], writes tag markup, and hands control back to each node for its
//! content. No escaping happens at this layer.

use crate::config::RenderOptions;
use crate::error::{RenderError, Result};
use crate::node::Node;
use crate::tag::Tag;
use crate::text::Comment;
use std::fmt::Display;
use std::io;

const NEWLINE: &[u8] = b"\n";

/// Destination for rendered bytes
///
/// Every [`io::Write`] is a sink without flush capability. Wrap a writer in
/// [`Flushing`] when streamed content should be pushed downstream as soon as
/// it is written.
pub trait Sink {
	/// Writes all of `bytes`, in order.
	fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;

	/// Pushes buffered output downstream.
	///
	/// Returns `None` when the sink has no flush capability.
	fn try_flush(&mut self) -> Option<io::Result<()>> {
		None
	}
}

impl<W: io::Write + ?Sized> Sink for W {
	fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
		self.write_all(bytes)
	}
}

/// Sink adapter that exposes the writer's flush
///
/// ## Example
///
/// ```
/// use tagsmith_core::{Flushing, Sink};
///
/// let mut sink = Flushing::new(Vec::new());
/// sink.write_bytes(b"chunk").unwrap();
/// assert!(sink.try_flush().is_some());
/// assert_eq!(sink.into_inner(), b"chunk");
/// ```
#[derive(Debug)]
pub struct Flushing<W> {
	inner: W,
}

impl<W: io::Write> Flushing<W> {
	/// Wraps a writer.
	pub fn new(inner: W) -> Self {
		Self { inner }
	}

	/// Returns the wrapped writer.
	pub fn get_ref(&self) -> &W {
		&self.inner
	}

	/// Unwraps the writer.
	pub fn into_inner(self) -> W {
		self.inner
	}
}

impl<W: io::Write> Sink for Flushing<W> {
	fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
		self.inner.write_all(bytes)
	}

	fn try_flush(&mut self) -> Option<io::Result<()>> {
		Some(self.inner.flush())
	}
}

/// Traversal-and-serialization driver for one render pass
///
/// The engine carries no state across passes: it counts the bytes it has
/// written (reported in errors) and the current nesting depth.
pub struct RenderEngine<'w> {
	sink: &'w mut dyn Sink,
	options: RenderOptions,
	written: usize,
	depth: usize,
}

impl<'w> RenderEngine<'w> {
	/// Creates an engine with default options.
	pub fn new(sink: &'w mut dyn Sink) -> Self {
		Self::with_options(sink, RenderOptions::default())
	}

	/// Creates an engine with custom options.
	pub fn with_options(sink: &'w mut dyn Sink, options: RenderOptions) -> Self {
		Self {
			sink,
			options,
			written: 0,
			depth: 0,
		}
	}

	/// Returns the options of this pass.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Returns the number of bytes the sink has accepted so far.
	pub fn bytes_written(&self) -> usize {
		self.written
	}

	/// Renders `node` wrapped in `tag`.
	///
	/// Serialized attributes are spliced before the open markup's `>`, the
	/// node's content is rendered, then the close markup and a newline are
	/// written. For [`Tag::NONE`] only the content is rendered.
	///
	/// Every call counts toward the depth limit, tagless or not.
	///
	/// # Errors
	///
	/// Propagates sink failures and failures from the node's content, and
	/// returns [`RenderError::DepthExceeded`] past the configured depth.
	pub fn render_tag(&mut self, tag: &Tag, node: &mut dyn Node) -> Result<()> {
		if let Some(limit) = self.options.max_depth {
			if self.depth >= limit {
				return Err(RenderError::DepthExceeded { limit });
			}
		}

		self.depth += 1;
		let result = self.render_tag_inner(tag, node);
		self.depth -= 1;
		result
	}

	fn render_tag_inner(&mut self, tag: &Tag, node: &mut dyn Node) -> Result<()> {
		if tag.is_none() {
			return node.render_content(self);
		}

		let attrs = node.attributes().to_attr_string();
		self.write_str(&tag.open_with(&attrs))?;
		node.render_content(self)?;
		self.write_str(tag.close())?;
		self.newline()
	}

	/// Writes a string verbatim.
	pub fn write_str(&mut self, s: &str) -> Result<()> {
		self.write_bytes(s.as_bytes())
	}

	/// Writes bytes verbatim.
	///
	/// # Errors
	///
	/// Returns [`RenderError::Write`] with the byte count reached so far.
	pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
		if bytes.is_empty() {
			return Ok(());
		}
		match self.sink.write_bytes(bytes) {
			Ok(()) => {
				self.written += bytes.len();
				Ok(())
			}
			Err(source) => {
				tracing::warn!(
					written = self.written,
					"Output sink write failed: {}",
					source
				);
				Err(RenderError::Write {
					written: self.written,
					source,
				})
			}
		}
	}

	/// Writes a newline.
	pub fn newline(&mut self) -> Result<()> {
		self.write_bytes(NEWLINE)
	}

	/// Flushes the sink if it supports flushing.
	///
	/// Returns whether a flush happened.
	pub fn flush(&mut self) -> Result<bool> {
		match self.sink.try_flush() {
			None => Ok(false),
			Some(Ok(())) => Ok(true),
			Some(Err(source)) => {
				tracing::warn!(written = self.written, "Output sink flush failed: {}", source);
				Err(RenderError::Write {
					written: self.written,
					source,
				})
			}
		}
	}

	/// Renders a markup comment holding the given values.
	///
	/// The content is a leading space followed by each value and a space:
	/// `comment(["Style", "main"])` renders `<!-- Style main -->`.
	pub fn comment<I>(&mut self, values: I) -> Result<()>
	where
		I: IntoIterator,
		I::Item: Display,
	{
		let mut text = String::from(" ");
		for value in values {
			text.push_str(&value.to_string());
			text.push(' ');
		}
		let mut comment = Comment::new(text);
		self.render_tag(&Tag::COMMENT, &mut comment)
	}
}

/// Renders a full page: the doctype literal, then `root`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Any error aborts the pass. Sink and stream errors report how many bytes
/// were written before the failure.
///
/// # Example
///
/// ```
/// use tagsmith_core::{Container, RenderOptions, Text, render_page};
///
/// let mut root = Container::new();
/// root.add(Text::new("hi"));
/// let mut out = Vec::new();
/// let written = render_page(&mut root, &mut out, RenderOptions::default()).unwrap();
///
/// assert_eq!(out, b"<!DOCTYPE html>hi");
/// assert_eq!(written, out.len());
/// ```
pub fn render_page(
	root: &mut dyn Node,
	sink: &mut dyn Sink,
	options: RenderOptions,
) -> Result<usize> {
	let doctype = options.doctype.clone();
	let mut engine = RenderEngine::with_options(sink, options);
	tracing::debug!("Rendering page");
	engine.write_str(&doctype)?;
	root.render(&mut engine)?;
	tracing::debug!(bytes = engine.bytes_written(), "Page rendered");
	Ok(engine.bytes_written())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::attributes::{Attributed, Attributes};
	use crate::container::Container;
	use crate::text::{Raw, Text};
	use rstest::rstest;

	/// Writer that fails once `limit` bytes have been accepted
	struct FailAfter {
		accepted: Vec<u8>,
		limit: usize,
	}

	impl io::Write for FailAfter {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			if self.accepted.len() + buf.len() > self.limit {
				return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
			}
			self.accepted.extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	struct Leaf {
		attrs: Attributes,
		tag: Tag,
		body: &'static str,
	}

	impl Attributed for Leaf {
		fn attributes(&self) -> &Attributes {
			&self.attrs
		}

		fn attributes_mut(&mut self) -> &mut Attributes {
			&mut self.attrs
		}
	}

	impl Node for Leaf {
		fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
			let tag = self.tag.clone();
			engine.render_tag(&tag, self)
		}

		fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
			engine.write_str(self.body)
		}
	}

	fn leaf(tag: Tag, body: &'static str) -> Leaf {
		Leaf {
			attrs: Attributes::new(),
			tag,
			body,
		}
	}

	fn render(node: &mut dyn Node) -> String {
		let mut out = Vec::new();
		let mut engine = RenderEngine::new(&mut out);
		node.render(&mut engine).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[rstest]
	fn test_render_tag_splices_attributes() {
		// Arrange
		let mut node = leaf(Tag::P, "x").attr("id", "a").attr("hidden", "true");

		// Act
		let html = render(&mut node);

		// Assert
		assert_eq!(html, "<p hidden id=\"a\">x</p>\n");
	}

	#[rstest]
	fn test_void_tag_has_no_close() {
		// Arrange
		let mut node = leaf(Tag::IMG, "").attr("src", "a.png");

		// Act
		let html = render(&mut node);

		// Assert
		assert_eq!(html, "<img src=\"a.png\">\n");
		assert!(!html.contains("</img>"));
	}

	#[rstest]
	fn test_none_tag_renders_content_only() {
		// Arrange
		let mut node = leaf(Tag::NONE, "bare").attr("id", "ignored");

		// Act & Assert
		assert_eq!(render(&mut node), "bare");
	}

	#[rstest]
	fn test_comment_joins_values() {
		// Arrange
		let mut out = Vec::new();
		let mut engine = RenderEngine::new(&mut out);

		// Act
		engine.comment(["Style", "main"]).unwrap();
		engine.comment([1, 2, 3]).unwrap();

		// Assert
		assert_eq!(out, b"<!-- Style main -->\n<!-- 1 2 3 -->\n");
	}

	#[rstest]
	fn test_write_failure_aborts_traversal() {
		// Arrange
		let mut root = Container::new();
		root.add(Raw::new("0123456789"));
		root.add(Raw::new("abcdefghij"));
		root.add(Raw::new("never written"));
		let mut sink = FailAfter {
			accepted: Vec::new(),
			limit: 15,
		};

		// Act
		let result = {
			let mut engine = RenderEngine::new(&mut sink);
			root.render(&mut engine)
		};

		// Assert
		match result {
			Err(RenderError::Write { written, .. }) => assert_eq!(written, 10),
			other => panic!("expected write error, got {other:?}"),
		}
		assert_eq!(sink.accepted, b"0123456789");
	}

	#[rstest]
	fn test_depth_limit() {
		// Arrange
		let mut inner = Container::new();
		inner.add(leaf(Tag::B, "deep"));
		let mut outer = leaf(Tag::DIV, "");
		let mut out = Vec::new();
		let mut engine =
			RenderEngine::with_options(&mut out, RenderOptions::new().max_depth(1));

		// Act
		let shallow = outer.render(&mut engine);
		let nested = engine.render_tag(&Tag::DIV, &mut inner);

		// Assert
		assert!(shallow.is_ok());
		assert!(matches!(nested, Err(RenderError::DepthExceeded { limit: 1 })));
	}

	#[rstest]
	fn test_depth_limit_counts_tagless_fragments() {
		// Arrange
		let mut root = Container::new();
		for _ in 0..200 {
			let mut wrapper = Container::new();
			wrapper.add(root);
			root = wrapper;
		}
		let mut out = Vec::new();
		let mut engine =
			RenderEngine::with_options(&mut out, RenderOptions::new().max_depth(4));

		// Act
		let result = root.render(&mut engine);

		// Assert
		assert!(matches!(result, Err(RenderError::DepthExceeded { limit: 4 })));
		assert!(out.is_empty());
	}

	#[rstest]
	fn test_depth_counter_unwinds_after_tagless_render() {
		// Arrange
		let mut fragment = Container::new();
		fragment.add(Text::new("a"));
		let mut sibling = leaf(Tag::B, "b");
		let mut out = Vec::new();
		let mut engine =
			RenderEngine::with_options(&mut out, RenderOptions::new().max_depth(2));

		// Act
		let first = fragment.render(&mut engine);
		let second = sibling.render(&mut engine);

		// Assert
		assert!(first.is_ok());
		assert!(second.is_ok());
		drop(engine);
		assert_eq!(out, b"a<b>b</b>\n");
	}

	#[rstest]
	fn test_flush_probes_capability() {
		// Arrange
		let mut plain = Vec::new();
		let mut flushing = Flushing::new(Vec::new());

		// Act
		let plain_flushed = RenderEngine::new(&mut plain).flush().unwrap();
		let flushing_flushed = RenderEngine::new(&mut flushing).flush().unwrap();

		// Assert
		assert!(!plain_flushed);
		assert!(flushing_flushed);
	}

	#[rstest]
	fn test_render_page_writes_doctype_first() {
		// Arrange
		let mut root = leaf(Tag::HTML, "");
		let mut out = Vec::new();

		// Act
		let written = render_page(&mut root, &mut out, RenderOptions::default()).unwrap();

		// Assert
		assert_eq!(out, b"<!DOCTYPE html><html></html>\n");
		assert_eq!(written, out.len());
	}

	#[rstest]
	fn test_text_is_counted() {
		// Arrange
		let mut out = Vec::new();
		let mut engine = RenderEngine::new(&mut out);

		// Act
		Text::new("a<b").render(&mut engine).unwrap();

		// Assert
		assert_eq!(engine.bytes_written(), "a&lt;b".len());
	}
}
