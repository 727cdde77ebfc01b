//! Content read incrementally from a byte source during rendering
//!
//! Everything else in a tree is known before the render starts. A
//! [`Streaming`] node instead pulls its content from a reader while the
//! render is in progress, one line at a time, flushing the sink after each
//! line when the sink can flush.

use crate::attributes::{Attributed, Attributes};
use crate::engine::RenderEngine;
use crate::error::{RenderError, Result};
use crate::node::Node;
use crate::tag::Tag;
use std::fmt;
use std::io::{BufRead, BufReader, Read};

/// Tagless node whose content comes from a reader
///
/// The source is consumed by the first render and dropped as soon as it is
/// exhausted or a read or write fails, so a closing reader is always
/// closed. Later renders emit nothing. Content is written verbatim; wrap the
/// node in a `<pre>` element for preformatted output.
///
/// ## Example
///
/// ```
/// use tagsmith_core::{Node, RenderEngine, Streaming};
///
/// let mut log = Streaming::new("line 1\nline 2\n".as_bytes());
/// let mut out = Vec::new();
/// log.render(&mut RenderEngine::new(&mut out)).unwrap();
/// assert_eq!(out, b"line 1\nline 2\n");
/// assert!(log.is_exhausted());
/// ```
pub struct Streaming<R> {
	attrs: Attributes,
	source: Option<BufReader<R>>,
}

impl<R> fmt::Debug for Streaming<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Streaming")
			.field("attrs", &self.attrs)
			.field("exhausted", &self.source.is_none())
			.finish()
	}
}

impl<R: Read> Streaming<R> {
	/// Wraps a reader.
	pub fn new(source: R) -> Self {
		Self {
			attrs: Attributes::new(),
			source: Some(BufReader::new(source)),
		}
	}

	/// Returns whether the source has been consumed and released.
	pub fn is_exhausted(&self) -> bool {
		self.source.is_none()
	}
}

impl<R> Attributed for Streaming<R> {
	fn attributes(&self) -> &Attributes {
		&self.attrs
	}

	fn attributes_mut(&mut self) -> &mut Attributes {
		&mut self.attrs
	}
}

impl<R: Read> Node for Streaming<R> {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::NONE, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		// Dropping `source` on every exit path releases the reader.
		let Some(mut source) = self.source.take() else {
			return Ok(());
		};
		let flush = engine.options().flush_streams;
		let mut line = Vec::new();
		loop {
			line.clear();
			match source.read_until(b'\n', &mut line) {
				Ok(0) => return Ok(()),
				Ok(_) => {
					engine.write_bytes(&line)?;
					if flush {
						engine.flush()?;
					}
				}
				Err(source) => {
					tracing::warn!(
						written = engine.bytes_written(),
						"Streaming source read failed: {}",
						source
					);
					return Err(RenderError::StreamRead {
						written: engine.bytes_written(),
						source,
					});
				}
			}
		}
	}
}
