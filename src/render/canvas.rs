//! Fixed-size character grid the renderer draws into.

use std::fmt;

/// Blank cell.
pub(crate) const BLANK: char = ' ';

/// A `height` x `width` grid of characters.
///
/// Writes outside the grid are dropped silently, so callers can walk rays
/// past the edge without bounds checks of their own.
///
/// # Examples
///
/// ```
/// use ascii_dfs::render::canvas::Canvas;
///
/// let mut canvas = Canvas::new(2, 4);
/// canvas.put_str(0, 1, "ab");
/// canvas.put(1, 9, 'x'); // clipped
///
/// assert_eq!(canvas.to_string(), " ab \n    \n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    height: usize,
    width: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Create a blank canvas.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![BLANK; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Reset every cell to blank, keeping the allocation.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Set one cell; out-of-range coordinates are ignored.
    pub fn put(&mut self, row: isize, col: isize, ch: char) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = ch;
        }
    }

    /// Write `text` left to right starting at `(row, col)`, clipping at the
    /// right edge.
    pub fn put_str(&mut self, row: isize, col: isize, text: &str) {
        for (offset, ch) in (0..).zip(text.chars()) {
            self.put(row, col + offset, ch);
        }
    }

    pub fn get(&self, row: isize, col: isize) -> Option<char> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Each row as an owned string of exactly `width` characters.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().collect())
    }
}

impl fmt::Display for Canvas {
    /// One line per row, each terminated by `\n`. Trailing blanks are kept.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
