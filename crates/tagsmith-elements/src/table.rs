//! Tables, rows and cells
//!
//! A table with no rows and a row with no cells render nothing at all, not
//! even their own tags. Cells take their tag from the row they belong to:
//! `th` in header rows, `td` in data rows.

use std::fmt;
use tagsmith_core::{Attributes, Node, RenderEngine, Result, Tag, Text};

/// Whether a row holds header or data cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
	/// Cells render as `<th>`
	Header,
	/// Cells render as `<td>`
	Data,
}

impl RowKind {
	fn cell_tag(self) -> Tag {
		match self {
			Self::Header => Tag::TH,
			Self::Data => Tag::TD,
		}
	}
}

/// `<table>` element
///
/// ## Example
///
/// ```
/// use tagsmith_elements::Table;
/// use tagsmith_core::{Node, RenderEngine};
///
/// let mut table = Table::new();
/// table.header().cell_text("name");
/// table.row().cell_text("tagsmith");
///
/// let mut out = Vec::new();
/// table.render(&mut RenderEngine::new(&mut out)).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "<table><tr><th>name</th>\n</tr>\n<tr><td>tagsmith</td>\n</tr>\n</table>\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Table {
	attrs: Attributes,
	rows: Vec<Row>,
}

impl Table {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a header row and returns it.
	pub fn header(&mut self) -> &mut Row {
		self.push_row(RowKind::Header)
	}

	/// Appends a data row and returns it.
	pub fn row(&mut self) -> &mut Row {
		self.push_row(RowKind::Data)
	}

	/// Returns the rows in order.
	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	/// Returns whether the table has no rows.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	fn push_row(&mut self, kind: RowKind) -> &mut Row {
		self.rows.push(Row::new(kind));
		let last = self.rows.len() - 1;
		&mut self.rows[last]
	}
}

impl_attributed!(Table);

impl Node for Table {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		if self.rows.is_empty() {
			tracing::trace!("Skipping table without rows");
			return Ok(());
		}
		engine.render_tag(&Tag::TABLE, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		for row in &mut self.rows {
			row.render(engine)?;
		}
		Ok(())
	}
}

/// `<tr>` element
#[derive(Debug)]
pub struct Row {
	attrs: Attributes,
	kind: RowKind,
	cells: Vec<Cell>,
}

impl Row {
	/// Creates a detached row. Rows are normally created through
	/// [`Table::header`] and [`Table::row`].
	pub fn new(kind: RowKind) -> Self {
		Self {
			attrs: Attributes::new(),
			kind,
			cells: Vec::new(),
		}
	}

	/// Returns the row kind.
	pub fn kind(&self) -> RowKind {
		self.kind
	}

	/// Appends a cell holding `node` and returns it.
	pub fn cell(&mut self, node: impl Node + 'static) -> &mut Cell {
		self.cells.push(Cell {
			attrs: Attributes::new(),
			content: Some(Box::new(node)),
		});
		let last = self.cells.len() - 1;
		&mut self.cells[last]
	}

	/// Appends a cell holding escaped text and returns it.
	pub fn cell_text(&mut self, text: impl Into<String>) -> &mut Cell {
		self.cell(Text::new(text.into()))
	}

	/// Appends an empty cell and returns it.
	pub fn empty_cell(&mut self) -> &mut Cell {
		self.cells.push(Cell {
			attrs: Attributes::new(),
			content: None,
		});
		let last = self.cells.len() - 1;
		&mut self.cells[last]
	}

	/// Returns the number of cells.
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	/// Returns whether the row has no cells.
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}
}

impl_attributed!(Row);

impl Node for Row {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		if self.cells.is_empty() {
			tracing::trace!("Skipping table row without cells");
			return Ok(());
		}
		engine.render_tag(&Tag::TR, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		let tag = self.kind.cell_tag();
		for cell in &mut self.cells {
			engine.render_tag(&tag, cell)?;
		}
		Ok(())
	}
}

/// `<th>` or `<td>` element, depending on its row
///
/// A cell only renders as part of its row; rendering one on its own emits
/// its content without markup.
pub struct Cell {
	attrs: Attributes,
	content: Option<Box<dyn Node>>,
}

impl fmt::Debug for Cell {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Cell")
			.field("attrs", &self.attrs)
			.field("has_content", &self.content.is_some())
			.finish()
	}
}

impl Cell {
	/// Sets how many columns the cell spans.
	pub fn colspan(&mut self, columns: usize) -> &mut Self {
		self.attrs.set("colspan", columns.to_string());
		self
	}

	/// Sets how many rows the cell spans.
	pub fn rowspan(&mut self, rows: usize) -> &mut Self {
		self.attrs.set("rowspan", rows.to_string());
		self
	}
}

impl_attributed!(Cell);

impl Node for Cell {
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
