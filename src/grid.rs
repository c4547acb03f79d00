use serde::Serialize;

use crate::color::Pixel;
use crate::error::GridError;

/// Address of a single grid cell. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Largest accepted width or height.
pub const MAX_DIMENSION: u32 = 256;

/// A fixed-size matrix of pixels.
///
/// `cells` always holds exactly `height` rows of `width` pixels; every
/// constructor and mutator preserves that. Grids are never resized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    #[serde(rename = "pixels")]
    cells: Vec<Vec<Pixel>>,
}

impl PixelGrid {
    /// Create a fully transparent grid.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![vec![Pixel::Transparent; width as usize]; height as usize],
        })
    }

    /// Build a grid from existing rows, rejecting anything that is not
    /// exactly `height` rows of `width` pixels.
    pub fn from_rows(rows: Vec<Vec<Pixel>>, width: u32, height: u32) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        let shaped = rows.len() == height as usize
            && rows.iter().all(|row| row.len() == width as usize);
        if !shaped {
            return Err(GridError::InvalidShape { width, height });
        }
        Ok(Self { width, height, cells: rows })
    }

    /// Schema-check-and-repair for persisted pixel data.
    ///
    /// Anything that is not `height` rows of `width` cells is replaced by
    /// an empty grid of the declared size. Within a well-shaped grid, a
    /// cell that is not a readable color becomes transparent on its own.
    /// Only invalid declared dimensions are an error.
    pub fn validate(candidate: serde_json::Value, width: u32, height: u32) -> Result<Self, GridError> {
        check_dimensions(width, height)?;

        let shaped_rows = candidate.as_array().filter(|rows| {
            rows.len() == height as usize
                && rows
                    .iter()
                    .all(|row| row.as_array().is_some_and(|cells| cells.len() == width as usize))
        });
        let Some(rows) = shaped_rows else {
            log::warn!("Replacing mis-shaped pixel data with an empty {width}x{height} grid");
            return Self::new(width, height);
        };

        let mut unreadable = 0usize;
        let mut cells = Vec::with_capacity(rows.len());
        for row in rows.iter().filter_map(serde_json::Value::as_array) {
            let mut pixels = Vec::with_capacity(row.len());
            for cell in row {
                match cell.as_str().map(str::parse::<Pixel>) {
                    Some(Ok(pixel)) => pixels.push(pixel),
                    _ => {
                        unreadable += 1;
                        pixels.push(Pixel::Transparent);
                    }
                }
            }
            cells.push(pixels);
        }
        if unreadable > 0 {
            log::warn!("Cleared {unreadable} unreadable cells in a {width}x{height} grid");
        }

        Self::from_rows(cells, width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.cells
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.height as usize && pos.col < self.width as usize
    }

    pub fn get(&self, pos: CellPos) -> Option<Pixel> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Paint one cell in place. The grid is untouched on error.
    pub fn set_cell(&mut self, pos: CellPos, pixel: Pixel) -> Result<(), GridError> {
        let (width, height) = (self.width, self.height);
        let cell = self
            .cells
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
            .ok_or(GridError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                width,
                height,
            })?;
        *cell = pixel;
        Ok(())
    }

    /// Copy of this grid with one cell changed.
    pub fn with_cell(&self, pos: CellPos, pixel: Pixel) -> Result<Self, GridError> {
        let mut next = self.clone();
        next.set_cell(pos, pixel)?;
        Ok(next)
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Pixel::Transparent);
        }
    }

    pub fn cleared(&self) -> Self {
        let mut next = self.clone();
        next.clear();
        next
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(Pixel::is_transparent)
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, Pixel)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, pixel)| (CellPos::new(row, col), *pixel))
        })
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), GridError> {
    let valid = 1..=MAX_DIMENSION;
    if valid.contains(&width) && valid.contains(&height) {
        Ok(())
    } else {
        Err(GridError::InvalidDimension { width, height })
    }
}
