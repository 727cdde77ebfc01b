//! Declarative helpers for container-backed elements

/// Declares an element that embeds a [`Container`](tagsmith_core::Container)
/// and renders its children between the given tag's markup.
///
/// The generated type gets `add`, `child`, `add_deferred_script`,
/// `from_container` and container accessors, and delegates its attributes
/// to the embedded container. With the `default` marker it also gets
/// `new()` and a `Default` impl.
macro_rules! container_element {
	($(#[$meta:meta])* $name:ident => $tag:expr, default) => {
		container_element!($(#[$meta])* $name => $tag);

		impl Default for $name {
			fn default() -> Self {
				Self::from_container(::tagsmith_core::Container::new())
			}
		}

		impl $name {
			/// Creates an empty element.
			pub fn new() -> Self {
				Self::default()
			}
		}
	};
	($(#[$meta:meta])* $name:ident => $tag:expr) => {
		$(#[$meta])*
		#[derive(Debug)]
		pub struct $name {
			container: ::tagsmith_core::Container,
		}

		impl $name {
			/// Wraps an existing container, keeping its children and attributes.
			pub fn from_container(container: ::tagsmith_core::Container) -> Self {
				Self { container }
			}

			/// Appends a child.
			pub fn add(&mut self, node: impl ::tagsmith_core::Node + 'static) -> &mut Self {
				self.container.add(node);
				self
			}

			/// Fluent form of `add`.
			pub fn child(mut self, node: impl ::tagsmith_core::Node + 'static) -> Self {
				self.container.add(node);
				self
			}

			/// Appends `fragment` to the deferred script called `name`.
			pub fn add_deferred_script(&mut self, name: &str, fragment: &str) -> &mut Self {
				self.container.add_deferred_script(name, fragment);
				self
			}

			/// Returns the embedded container.
			pub fn container(&self) -> &::tagsmith_core::Container {
				&self.container
			}

			/// Returns the embedded container for mutation.
			pub fn container_mut(&mut self) -> &mut ::tagsmith_core::Container {
				&mut self.container
			}
		}

		impl ::tagsmith_core::Attributed for $name {
			fn attributes(&self) -> &::tagsmith_core::Attributes {
				::tagsmith_core::Attributed::attributes(&self.container)
			}

			fn attributes_mut(&mut self) -> &mut ::tagsmith_core::Attributes {
				::tagsmith_core::Attributed::attributes_mut(&mut self.container)
			}
		}

		impl ::tagsmith_core::Node for $name {
			fn render(
				&mut self,
				engine: &mut ::tagsmith_core::RenderEngine<'_>,
			) -> ::tagsmith_core::Result<()> {
				engine.render_tag(&$tag, self)
			}

			fn render_content(
				&mut self,
				engine: &mut ::tagsmith_core::RenderEngine<'_>,
			) -> ::tagsmith_core::Result<()> {
				self.container.render_children(engine)
			}
		}
	};
}

/// Implements [`Attributed`](tagsmith_core::Attributed) for a struct with an
/// `attrs: Attributes` field.
macro_rules! impl_attributed {
	($ty:ty) => {
		impl ::tagsmith_core::Attributed for $ty {
			fn attributes(&self) -> &::tagsmith_core::Attributes {
				&self.attrs
			}

			fn attributes_mut(&mut self) -> &mut ::tagsmith_core::Attributes {
				&mut self.attrs
			}
		}
	};
}
