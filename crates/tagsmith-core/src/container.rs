//! Generic ordered container of child nodes

use crate::attributes::{Attributed, Attributes};
use crate::engine::RenderEngine;
use crate::error::Result;
use crate::names::NameGenerator;
use crate::node::Node;
use crate::tag::Tag;
use crate::text::Script;
use std::collections::BTreeMap;
use std::fmt;

/// Ordered, exclusively owned sequence of child nodes
///
/// Concrete elements (divisions, paragraphs, the body, …) embed a
/// `Container` and render it between their own open and close markup. On its
/// own a container renders as a tagless fragment.
///
/// A container also collects *deferred scripts*: named buckets of source
/// that several call sites can append to. Each non-empty bucket is rendered
/// as `<script>function <name>() { <source> }</script>` ahead of the
/// children, in ascending name order. Buckets are kept after rendering, so
/// a second render of the same container emits the same functions again.
///
/// ## Example
///
/// ```
/// use tagsmith_core::{Container, Node, RenderEngine, Text};
///
/// let mut body = Container::new();
/// body.add_deferred_script("init", "a();");
/// body.add(Text::new("hello"));
/// body.add_deferred_script("init", "b();");
///
/// let mut out = Vec::new();
/// body.render(&mut RenderEngine::new(&mut out)).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "<script>function init() { a();b(); }</script>\nhello"
/// );
/// ```
#[derive(Default)]
pub struct Container {
	attrs: Attributes,
	children: Vec<Box<dyn Node>>,
	deferred_scripts: BTreeMap<String, String>,
}

impl fmt::Debug for Container {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Container")
			.field("attrs", &self.attrs)
			.field("children_count", &self.children.len())
			.field("deferred_scripts", &self.deferred_scripts)
			.finish()
	}
}

impl Container {
	/// Creates an empty container.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a child.
	pub fn add(&mut self, node: impl Node + 'static) -> &mut Self {
		self.children.push(Box::new(node));
		self
	}

	/// Appends an already boxed child.
	pub fn add_boxed(&mut self, node: Box<dyn Node>) -> &mut Self {
		self.children.push(node);
		self
	}

	/// Appends several children, preserving their order.
	pub fn extend<I>(&mut self, nodes: I) -> &mut Self
	where
		I: IntoIterator<Item = Box<dyn Node>>,
	{
		self.children.extend(nodes);
		self
	}

	/// Fluent form of [`Container::add`].
	pub fn child(mut self, node: impl Node + 'static) -> Self {
		self.add(node);
		self
	}

	/// Returns the number of children.
	pub fn len(&self) -> usize {
		self.children.len()
	}

	/// Returns whether the container has no children.
	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	/// Appends `fragment` to the deferred script called `name`.
	pub fn add_deferred_script(&mut self, name: &str, fragment: &str) -> &mut Self {
		self.deferred_scripts
			.entry(name.to_string())
			.or_default()
			.push_str(fragment);
		self
	}

	/// Starts a new deferred script under a generated name and returns it.
	pub fn add_generated_script(&mut self, names: &mut NameGenerator, fragment: &str) -> String {
		let name = names.next_name("deferred");
		self.add_deferred_script(&name, fragment);
		name
	}

	/// Returns the accumulated source of a deferred script.
	pub fn deferred_script(&self, name: &str) -> Option<&str> {
		self.deferred_scripts.get(name).map(String::as_str)
	}

	/// Renders deferred scripts, then every child in insertion order.
	pub fn render_children(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		for (name, source) in &self.deferred_scripts {
			if source.is_empty() {
				continue;
			}
			let mut script = Script::new(format!("function {name}() {{ {source} }}"));
			script.render(engine)?;
		}
		for child in &mut self.children {
			child.render(engine)?;
		}
		Ok(())
	}
}

impl Attributed for Container {
	fn attributes(&self) -> &Attributes {
		&self.attrs
	}

	fn attributes_mut(&mut self) -> &mut Attributes {
		&mut self.attrs
	}
}

impl Node for Container {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::NONE, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		self.render_children(engine)
	}
}
