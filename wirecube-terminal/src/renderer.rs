/// Character-cell line rasterizer for terminal rendering
use crossterm::{
    cursor::MoveTo,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wirecube_core::Edge;

/// Side length of the square logical canvas edges are expressed in
pub const LOGICAL_SIZE: f64 = 1000.0;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;

const EDGE_COLOR: Color = Color::Grey;

/// Letterboxed mapping from the logical canvas to terminal cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale_x: f64,
    scale_y: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Viewport {
    /// Largest centered square (in visual terms) that fits `cols` x `rows`
    pub fn fit(cols: usize, rows: usize) -> Self {
        let scale_y = (rows as f64 / LOGICAL_SIZE).min(cols as f64 / CELL_ASPECT / LOGICAL_SIZE);
        let scale_x = scale_y * CELL_ASPECT;

        Self {
            scale_x,
            scale_y,
            offset_x: (cols as f64 - LOGICAL_SIZE * scale_x) / 2.0,
            offset_y: (rows as f64 - LOGICAL_SIZE * scale_y) / 2.0,
        }
    }

    /// Cell containing logical point (x, y); may lie outside the screen
    pub fn to_cell(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (x * self.scale_x + self.offset_x).floor() as i64,
            (y * self.scale_y + self.offset_y).floor() as i64,
        )
    }
}

/// Draws wireframe edges into a character buffer, using x/y and ignoring depth
pub struct LineRenderer {
    width: usize,
    height: usize,
    viewport: Viewport,
    char_buffer: Vec<char>,
}

impl LineRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            viewport: Viewport::fit(width, height),
            char_buffer: vec![' '; width * height],
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Character at a cell, `None` outside the buffer
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.char_buffer[y * self.width + x])
        } else {
            None
        }
    }

    pub fn render_edges(&mut self, edges: &[Edge]) {
        for edge in edges {
            self.draw_edge(edge);
        }
    }

    pub fn draw_edge(&mut self, edge: &Edge) {
        let from = self.viewport.to_cell(edge.start.x, edge.start.y);
        let to = self.viewport.to_cell(edge.end.x, edge.end.y);
        self.draw_line(from, to);
    }

    /// Bresenham line between two cells, clipped to the buffer
    pub fn draw_line(&mut self, from: (i64, i64), to: (i64, i64)) {
        let glyph = line_glyph(to.0 - from.0, to.1 - from.1);

        let (mut x, mut y) = from;
        let dx = (to.0 - from.0).abs();
        let dy = -(to.1 - from.1).abs();
        let step_x = if from.0 < to.0 { 1 } else { -1 };
        let step_y = if from.1 < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, glyph);
            if (x, y) == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += step_x;
            }
            if e2 <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    fn plot(&mut self, x: i64, y: i64, glyph: char) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.char_buffer[y as usize * self.width + x as usize] = glyph;
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(EDGE_COLOR))?;
        for (y, row) in self.char_buffer.chunks(self.width.max(1)).enumerate() {
            let line: String = row.iter().collect();
            writer.queue(MoveTo(0, y as u16))?;
            writer.queue(Print(line))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Pick a glyph that follows the on-screen slope of a line
fn line_glyph(dx: i64, dy: i64) -> char {
    let run = dx.abs() as f64;
    let rise = dy.abs() as f64 * CELL_ASPECT;

    if rise < run * 0.4 {
        '-'
    } else if rise > run * 2.5 {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn row(renderer: &LineRenderer, y: usize) -> String {
        (0..renderer.width())
            .map(|x| renderer.cell(x, y).unwrap())
            .collect()
    }

    #[test]
    fn test_viewport_letterboxes_wide_terminal() {
        let viewport = Viewport::fit(200, 50);
        assert_eq!(viewport.to_cell(0.0, 0.0), (50, 0));
        assert_eq!(viewport.to_cell(500.0, 500.0), (100, 25));
        assert_eq!(viewport.to_cell(999.0, 999.0), (149, 49));
    }

    #[test]
    fn test_viewport_letterboxes_tall_terminal() {
        let viewport = Viewport::fit(40, 100);
        assert_eq!(viewport.to_cell(0.0, 0.0), (0, 40));
        assert_eq!(viewport.to_cell(999.0, 999.0), (39, 59));
    }

    #[test]
    fn test_horizontal_line() {
        let mut renderer = LineRenderer::new(10, 3);
        renderer.draw_line((2, 1), (7, 1));
        assert_eq!(row(&renderer, 1), "  ------  ");
        assert_eq!(row(&renderer, 0), " ".repeat(10));
    }

    #[test]
    fn test_vertical_line() {
        let mut renderer = LineRenderer::new(5, 5);
        renderer.draw_line((2, 4), (2, 0));
        for y in 0..5 {
            assert_eq!(renderer.cell(2, y), Some('|'));
            assert_eq!(renderer.cell(1, y), Some(' '));
        }
    }

    #[test]
    fn test_diagonal_line_glyphs() {
        let mut renderer = LineRenderer::new(8, 4);
        renderer.draw_line((0, 0), (6, 3));
        assert_eq!(renderer.cell(0, 0), Some('\\'));
        assert_eq!(renderer.cell(6, 3), Some('\\'));

        renderer.clear();
        renderer.draw_line((0, 3), (6, 0));
        assert_eq!(renderer.cell(0, 3), Some('/'));
        assert_eq!(renderer.cell(6, 0), Some('/'));
    }

    #[test]
    fn test_lines_clipped_to_buffer() {
        let mut renderer = LineRenderer::new(6, 3);
        renderer.draw_line((-5, 1), (20, 1));
        assert_eq!(row(&renderer, 1), "------");
        assert_eq!(renderer.cell(6, 1), None);
    }

    #[test]
    fn test_edges_drawn_through_viewport() {
        let mut renderer = LineRenderer::new(200, 50);
        let edge = Edge::new(
            Point3::new(200.0, 500.0, 200.0),
            Point3::new(800.0, 500.0, 800.0),
        );
        renderer.render_edges(&[edge]);

        // 200..800 maps to columns 70..130 on row 25
        assert_eq!(renderer.cell(70, 25), Some('-'));
        assert_eq!(renderer.cell(130, 25), Some('-'));
        assert_eq!(renderer.cell(69, 25), Some(' '));
        assert_eq!(renderer.cell(131, 25), Some(' '));
    }

    #[test]
    fn test_clear_and_resize() {
        let mut renderer = LineRenderer::new(4, 2);
        renderer.draw_line((0, 0), (3, 0));
        renderer.clear();
        assert_eq!(row(&renderer, 0), "    ");

        renderer.resize(9, 6);
        assert_eq!(renderer.width(), 9);
        assert_eq!(renderer.height(), 6);
        assert_eq!(renderer.cell(8, 5), Some(' '));
    }

    #[test]
    fn test_draw_writes_buffer() {
        let mut renderer = LineRenderer::new(4, 2);
        renderer.draw_line((0, 1), (3, 1));
        let mut out = Vec::new();
        renderer.draw(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("----"));
    }
}
