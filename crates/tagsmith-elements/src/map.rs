//! Client-side image maps

use tagsmith_core::{Attributed, Attributes, NameGenerator, Node, RenderEngine, Result, Tag};

/// Clickable region shape of an [`Area`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
	/// `x1,y1,x2,y2`
	Rect,
	/// `x,y,radius`
	Circle,
	/// `x1,y1,x2,y2,…`
	Poly,
}

impl Shape {
	/// Returns the attribute value.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Rect => "rect",
			Self::Circle => "circle",
			Self::Poly => "poly",
		}
	}
}

/// `<map>` holding clickable areas
///
/// Images refer to a map by name, see
/// [`Image::use_map`](crate::Image::use_map).
#[derive(Debug, Clone)]
pub struct ImageMap {
	attrs: Attributes,
	areas: Vec<Area>,
}

impl ImageMap {
	/// Creates a map called `name`.
	pub fn new(name: &str) -> Self {
		let mut attrs = Attributes::new();
		attrs.set("name", name);
		Self {
			attrs,
			areas: Vec::new(),
		}
	}

	/// Creates a map with a name unique within `names`.
	pub fn generated(names: &mut NameGenerator) -> Self {
		Self::new(&names.next_name("map"))
	}

	/// Returns the map name.
	pub fn name(&self) -> &str {
		self.get_attr("name")
	}

	/// Adds a rectangular area.
	pub fn rect(&mut self, href: &str, coords: &str) -> &mut Area {
		self.add_area(Shape::Rect, href, coords)
	}

	/// Adds a circular area.
	pub fn circle(&mut self, href: &str, coords: &str) -> &mut Area {
		self.add_area(Shape::Circle, href, coords)
	}

	/// Adds a polygonal area.
	pub fn poly(&mut self, href: &str, coords: &str) -> &mut Area {
		self.add_area(Shape::Poly, href, coords)
	}

	/// Adds an area of any shape.
	pub fn add_area(&mut self, shape: Shape, href: &str, coords: &str) -> &mut Area {
		let mut area = Area {
			attrs: Attributes::new(),
		};
		area.set_attr("shape", shape.as_str());
		area.set_attr("href", href);
		area.set_attr("coords", coords);
		self.areas.push(area);
		let last = self.areas.len() - 1;
		&mut self.areas[last]
	}

	/// Returns the areas in order.
	pub fn areas(&self) -> &[Area] {
		&self.areas
	}
}

impl_attributed!(ImageMap);

impl Node for ImageMap {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::MAP, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		for area in &mut self.areas {
			area.render(engine)?;
		}
		Ok(())
	}
}

/// `<area>` (void) inside an [`ImageMap`]
#[derive(Debug, Clone)]
pub struct Area {
	attrs: Attributes,
}

impl_attributed!(Area);

impl Node for Area {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::AREA, self)
	}

	fn render_content(&mut self, _engine: &mut RenderEngine<'_>) -> Result<()> {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_generated_names_are_unique() {
		// Arrange
		let mut names = NameGenerator::new();

		// Act
		let first = ImageMap::generated(&mut names);
		let second = ImageMap::generated(&mut names);

		// Assert
		assert_eq!(first.name(), "map1");
		assert_eq!(second.name(), "map2");
	}

	#[rstest]
	fn test_areas_render_in_order() {
		// Arrange
		let mut map = ImageMap::new("plan");
		map.rect("/a", "0,0,10,10");
		map.circle("/b", "5,5,3").set_attr("alt", "B");
		map.poly("/c", "0,0,4,0,2,3");
		let mut out = Vec::new();

		// Act
		map.render(&mut RenderEngine::new(&mut out)).unwrap();

		// Assert
		assert_eq!(
			String::from_utf8(out).unwrap(),
			concat!(
				"<map name=\"plan\">",
				"<area coords=\"0,0,10,10\" href=\"/a\" shape=\"rect\">\n",
				"<area alt=\"B\" coords=\"5,5,3\" href=\"/b\" shape=\"circle\">\n",
				"<area coords=\"0,0,4,0,2,3\" href=\"/c\" shape=\"poly\">\n",
				"</map>\n"
			)
		);
		assert_eq!(map.areas().len(), 3);
	}
}
