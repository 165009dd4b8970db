/// Character-cell canvas for wireframe rendering in the terminal
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

/// Side length of the logical drawing surface the projection targets.
/// Projected coordinates are mapped from this square onto the cell grid.
pub const SURFACE_SIZE: f64 = 350.0;

/// Disc radius at the projected vertices, in surface units.
pub const VERTEX_RADIUS: f64 = 5.0;

/// Gradient background stops, upper-left to lower-right.
const BACKGROUND_TOP: (u8, u8, u8) = (0xf5, 0xf7, 0xfa);
const BACKGROUND_BOTTOM: (u8, u8, u8) = (0xc3, 0xcf, 0xe2);

/// Edge stroke and vertex fill colors.
const EDGE_COLOR: Color = Color::Rgb {
    r: 0x66,
    g: 0x7e,
    b: 0xea,
};
const VERTEX_COLOR: Color = Color::Rgb {
    r: 0x76,
    g: 0x4b,
    b: 0xa2,
};

const EDGE_CHAR: char = '#';
const VERTEX_CHAR: char = '@';

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

/// Cell-buffer renderer that rasterizes projected line segments and
/// vertex discs, then flushes the whole grid in one pass.
pub struct CharCanvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CharCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        let blank = Cell {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        };
        Self {
            width,
            height,
            cells: vec![blank; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Horizontal cells per surface unit. Terminal cells are roughly
    /// twice as tall as wide, so x gets up to double the y density.
    fn scale_x(&self) -> f64 {
        (self.width as f64 / SURFACE_SIZE).min(2.0 * self.scale_y())
    }

    /// Vertical cells per surface unit.
    fn scale_y(&self) -> f64 {
        self.height as f64 / SURFACE_SIZE
    }

    /// Map an origin-centered projected point to a cell position.
    pub fn to_cell(&self, x: f64, y: f64) -> (i32, i32) {
        let col = self.width as f64 / 2.0 + x * self.scale_x();
        let row = self.height as f64 / 2.0 + y * self.scale_y();
        (col.round() as i32, row.round() as i32)
    }

    /// Repaint every cell with the diagonal two-stop gradient and drop
    /// any glyphs from the previous frame.
    pub fn clear(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                // Corner-to-corner blend: 0 at upper-left, 1 at lower-right.
                let tx = col as f64 / (self.width.max(2) - 1) as f64;
                let ty = row as f64 / (self.height.max(2) - 1) as f64;
                let t = (tx + ty) / 2.0;
                self.cells[row * self.width + col] = Cell {
                    ch: ' ',
                    fg: Color::Reset,
                    bg: gradient_at(t),
                };
            }
        }
    }

    fn plot(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return;
        }
        let cell = &mut self.cells[row as usize * self.width + col as usize];
        cell.ch = ch;
        cell.fg = fg;
    }

    /// Bresenham segment between two cell positions in the edge color.
    pub fn edge(&mut self, from: (i32, i32), to: (i32, i32)) {
        let (mut x, mut y) = from;
        let (x1, y1) = to;
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, EDGE_CHAR, EDGE_COLOR);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Filled disc at a projected vertex, sized from the surface-unit
    /// radius but never smaller than a single cell.
    pub fn vertex(&mut self, at: (i32, i32)) {
        let ry = (VERTEX_RADIUS * self.scale_y()).round() as i32;
        let rx = (VERTEX_RADIUS * self.scale_x()).round() as i32;
        let (rx, ry) = (rx.max(0), ry.max(0));
        for dy in -ry..=ry {
            for dx in -rx..=rx {
                // Ellipse test in cell space, covering the r = 0 point.
                let inside = if rx == 0 || ry == 0 {
                    dx == 0 && dy == 0
                } else {
                    dx * dx * ry * ry + dy * dy * rx * rx <= rx * rx * ry * ry
                };
                if inside {
                    self.plot(at.0 + dx, at.1 + dy, VERTEX_CHAR, VERTEX_COLOR);
                }
            }
        }
    }

    /// Character at a cell position, for inspection.
    #[cfg(test)]
    fn char_at(&self, col: usize, row: usize) -> char {
        self.cells[row * self.width + col].ch
    }

    /// Flush the grid to the terminal. Rows are addressed explicitly;
    /// raw mode does not return the carriage on a bare newline.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in 0..self.height {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            for col in 0..self.width {
                let cell = self.cells[row * self.width + col];
                writer.queue(SetBackgroundColor(cell.bg))?;
                writer.queue(SetForegroundColor(cell.fg))?;
                writer.queue(Print(cell.ch))?;
            }
            writer.queue(ResetColor)?;
        }
        Ok(())
    }
}

/// Interpolate the two background stops at position t in [0, 1].
fn gradient_at(t: f64) -> Color {
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Color::Rgb {
        r: lerp(BACKGROUND_TOP.0, BACKGROUND_BOTTOM.0),
        g: lerp(BACKGROUND_TOP.1, BACKGROUND_BOTTOM.1),
        b: lerp(BACKGROUND_TOP.2, BACKGROUND_BOTTOM.2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_erases_glyphs() {
        let mut canvas = CharCanvas::new(20, 10);
        canvas.edge((0, 0), (19, 9));
        canvas.clear();
        for row in 0..10 {
            for col in 0..20 {
                assert_eq!(canvas.char_at(col, row), ' ');
            }
        }
    }

    #[test]
    fn test_horizontal_edge_covers_every_column() {
        let mut canvas = CharCanvas::new(20, 10);
        canvas.clear();
        canvas.edge((2, 5), (17, 5));
        for col in 2..=17 {
            assert_eq!(canvas.char_at(col, 5), EDGE_CHAR);
        }
        assert_eq!(canvas.char_at(1, 5), ' ');
        assert_eq!(canvas.char_at(18, 5), ' ');
    }

    #[test]
    fn test_diagonal_edge_hits_both_endpoints() {
        let mut canvas = CharCanvas::new(20, 10);
        canvas.clear();
        canvas.edge((3, 2), (15, 8));
        assert_eq!(canvas.char_at(3, 2), EDGE_CHAR);
        assert_eq!(canvas.char_at(15, 8), EDGE_CHAR);
    }

    #[test]
    fn test_edge_clips_offscreen_points() {
        let mut canvas = CharCanvas::new(10, 5);
        canvas.clear();
        // Endpoints outside the grid must not panic or wrap.
        canvas.edge((-5, 2), (14, 2));
        for col in 0..10 {
            assert_eq!(canvas.char_at(col, 2), EDGE_CHAR);
        }
    }

    #[test]
    fn test_vertex_marks_at_least_its_center() {
        let mut canvas = CharCanvas::new(20, 10);
        canvas.clear();
        canvas.vertex((10, 5));
        assert_eq!(canvas.char_at(10, 5), VERTEX_CHAR);
    }

    #[test]
    fn test_origin_maps_to_grid_center() {
        let canvas = CharCanvas::new(40, 20);
        assert_eq!(canvas.to_cell(0.0, 0.0), (20, 10));
    }

    #[test]
    fn test_gradient_endpoints_match_stops() {
        assert_eq!(
            gradient_at(0.0),
            Color::Rgb {
                r: 0xf5,
                g: 0xf7,
                b: 0xfa
            }
        );
        assert_eq!(
            gradient_at(1.0),
            Color::Rgb {
                r: 0xc3,
                g: 0xcf,
                b: 0xe2
            }
        );
    }
}
