//! The node contract every tree element satisfies

use crate::attributes::Attributed;
use crate::engine::RenderEngine;
use crate::error::Result;

/// A renderable tree element
///
/// The family of nodes is open: element catalogs implement this trait for
/// their own types and the engine only ever sees `dyn Node`. Leaf and
/// container kinds are not distinguished here.
///
/// Most implementations of [`Node::render`] are a single call to
/// [`RenderEngine::render_tag`] with the node's [`Tag`](crate::Tag), which
/// writes the open markup, calls back into [`Node::render_content`] and
/// writes the close markup. Traversal is that mutual recursion.
///
/// ## Example
///
/// ```
/// use tagsmith_core::{Attributed, Attributes, Node, RenderEngine, Result, Tag};
///
/// struct Hr {
///     attrs: Attributes,
/// }
///
/// impl Attributed for Hr {
///     fn attributes(&self) -> &Attributes {
///         &self.attrs
///     }
///     fn attributes_mut(&mut self) -> &mut Attributes {
///         &mut self.attrs
///     }
/// }
///
/// impl Node for Hr {
///     fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
///         engine.render_tag(&Tag::void("<hr>")?, self)
///     }
///     fn render_content(&mut self, _engine: &mut RenderEngine<'_>) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let mut out = Vec::new();
/// let mut engine = RenderEngine::new(&mut out);
/// Hr { attrs: Attributes::new() }.class("thin").render(&mut engine).unwrap();
/// assert_eq!(out, b"<hr class=\"thin\">\n");
/// ```
pub trait Node: Attributed {
	/// Renders the node: its markup and its content.
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()>;

	/// Renders the payload between the open and close markup.
	///
	/// Nodes are responsible for escaping their own content here.
	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()>;
}
