//! Forms, inputs and labels

use tagsmith_core::{Attributed, Attributes, Container, Node, RenderEngine, Result, Tag, Text};

container_element! {
	/// `<form>` submitting to a ready-made action URL
	///
	/// Forms use `GET` unless [`Form::post`] is called.
	///
	/// ## Example
	///
	/// ```
	/// use tagsmith_elements::{Form, Input};
	/// use tagsmith_core::{Node, RenderEngine};
	///
	/// let mut form = Form::new("/search").child(Input::text("q", 20));
	/// let mut out = Vec::new();
	/// form.render(&mut RenderEngine::new(&mut out)).unwrap();
	/// assert_eq!(
	///     String::from_utf8(out).unwrap(),
	///     "<form action=\"/search\" method=\"GET\"><input name=\"q\" size=\"20\" type=\"text\">\n</form>\n"
	/// );
	/// ```
	Form => Tag::FORM
}

impl Form {
	/// Creates a form posting to `action` with the `GET` method.
	pub fn new(action: &str) -> Self {
		Self::from_container(Container::new())
			.attr("action", action)
			.attr("method", "GET")
	}

	/// Switches the form to the `POST` method.
	pub fn post(self) -> Self {
		self.attr("method", "POST")
	}

	/// Returns the submission method.
	pub fn method(&self) -> &str {
		self.get_attr("method")
	}
}

/// `<input>` control (void)
#[derive(Debug, Clone, Default)]
pub struct Input {
	attrs: Attributes,
}

impl Input {
	/// Creates an input of the given `type` and `name`.
	pub fn new(kind: &str, name: &str) -> Self {
		Self::default().attr("type", kind).attr("name", name)
	}

	/// Creates a hidden field carrying `value`.
	pub fn hidden(name: &str, value: &str) -> Self {
		Self::new("hidden", name).attr("value", value)
	}

	/// Creates a submit button labelled `label`.
	pub fn submit(name: &str, label: &str) -> Self {
		Self::new("submit", name).attr("value", label)
	}

	/// Creates a text field `size` characters wide.
	pub fn text(name: &str, size: usize) -> Self {
		Self::new("text", name).attr("size", &size.to_string())
	}

	/// Sets the initial value.
	pub fn with_default(self, value: &str) -> Self {
		self.attr("value", value)
	}
}

impl_attributed!(Input);

impl Node for Input {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::INPUT, self)
	}

	fn render_content(&mut self, _engine: &mut RenderEngine<'_>) -> Result<()> {
		Ok(())
	}
}

/// `<label>` with escaped text
#[derive(Debug, Clone, Default)]
pub struct Label {
	attrs: Attributes,
	text: Text,
}

impl Label {
	/// Creates a label.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			attrs: Attributes::new(),
			text: Text::new(text.into()),
		}
	}

	/// Associates the label with the control whose `id` is `control`.
	pub fn for_control(self, control: &str) -> Self {
		self.attr("for", control)
	}
}

impl_attributed!(Label);

impl Node for Label {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::LABEL, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		self.text.render(engine)
	}
}
