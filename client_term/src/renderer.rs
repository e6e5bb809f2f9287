//! Drawing snapshots onto a 2D surface

use game_core::{Config, Side, Snapshot};

/// Minimal canvas-like drawing target. Coordinates are board pixels.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

/// Draw one frame: scores, ball, then both paddles
pub fn draw_snapshot<S: Surface>(surface: &mut S, snapshot: &Snapshot, config: &Config) {
    surface.clear();

    for side in [Side::Left, Side::Right] {
        let player = snapshot.player(side);
        surface.fill_text(&player.score.to_string(), config.board_x(side), config.score_y);
    }

    surface.fill_circle(snapshot.ball.x, snapshot.ball.y, config.ball_radius);

    for side in [Side::Left, Side::Right] {
        surface.fill_rect(
            config.paddle_x(side),
            snapshot.player(side).paddle_y,
            config.paddle_width,
            config.paddle_height,
        );
    }
}

/// Draw a one-line message along the bottom of the board, clear of the paddles
pub fn draw_status_line<S: Surface>(surface: &mut S, text: &str, config: &Config) {
    let x = config.paddle_left_x + config.paddle_width + config.ball_radius;
    surface.fill_text(text, x, config.board_height - config.score_y);
}

const EMPTY: char = ' ';
const PADDLE: char = '█';
const BALL: char = 'O';

/// Character grid that rasterises board coordinates onto terminal cells
#[derive(Debug, Clone)]
pub struct CellSurface {
    cols: u16,
    rows: u16,
    scale_x: f32,
    scale_y: f32,
    cells: Vec<char>,
}

impl CellSurface {
    pub fn new(cols: u16, rows: u16, config: &Config) -> Self {
        Self {
            cols,
            rows,
            scale_x: cols as f32 / config.board_width,
            scale_y: rows as f32 / config.board_height,
            cells: vec![EMPTY; cols as usize * rows as usize],
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.cells[self.index(col, row)])
        } else {
            None
        }
    }

    /// Rows top to bottom as printable lines
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.cols.max(1) as usize)
            .map(|row| row.iter().collect())
    }

    fn index(&self, col: u16, row: u16) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    fn put(&mut self, col: i64, row: i64, ch: char) {
        if col >= 0 && row >= 0 && col < self.cols as i64 && row < self.rows as i64 {
            let index = self.index(col as u16, row as u16);
            self.cells[index] = ch;
        }
    }

    fn to_col(&self, x: f32) -> i64 {
        (x * self.scale_x).floor() as i64
    }

    fn to_row(&self, y: f32) -> i64 {
        (y * self.scale_y).floor() as i64
    }
}

impl Surface for CellSurface {
    fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        // Thin shapes still cover at least one cell
        let col0 = self.to_col(x);
        let col1 = ((x + width) * self.scale_x).ceil() as i64 - 1;
        let row0 = self.to_row(y);
        let row1 = ((y + height) * self.scale_y).ceil() as i64 - 1;
        for row in row0..=row1.max(row0) {
            for col in col0..=col1.max(col0) {
                self.put(col, row, PADDLE);
            }
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        let (col0, col1) = (self.to_col(x - radius), self.to_col(x + radius));
        let (row0, row1) = (self.to_row(y - radius), self.to_row(y + radius));
        for row in row0..=row1 {
            for col in col0..=col1 {
                let cx = (col as f32 + 0.5) / self.scale_x;
                let cy = (row as f32 + 0.5) / self.scale_y;
                let (dx, dy) = (cx - x, cy - y);
                if dx * dx + dy * dy <= radius * radius {
                    self.put(col, row, BALL);
                }
            }
        }
        self.put(self.to_col(x), self.to_row(y), BALL);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let row = self.to_row(y);
        for (offset, ch) in text.chars().enumerate() {
            self.put(self.to_col(x) + offset as i64, row, ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Match;

    // 80x30 cells over an 800x600 board: 10 px per column, 20 px per row
    fn surface() -> CellSurface {
        CellSurface::new(80, 30, &Config::new())
    }

    #[test]
    fn test_fill_rect_covers_paddle_cells() {
        let mut surface = surface();
        surface.fill_rect(10.0, 250.0, 20.0, 100.0);

        assert_eq!(surface.cell(1, 12), Some(PADDLE));
        assert_eq!(surface.cell(2, 17), Some(PADDLE));
        assert_eq!(surface.cell(0, 12), Some(EMPTY));
        assert_eq!(surface.cell(3, 12), Some(EMPTY));
        assert_eq!(surface.cell(1, 18), Some(EMPTY));
    }

    #[test]
    fn test_fill_rect_thin_shape_gets_one_cell() {
        let mut surface = surface();
        surface.fill_rect(401.0, 301.0, 1.0, 1.0);
        assert_eq!(surface.cell(40, 15), Some(PADDLE));
    }

    #[test]
    fn test_fill_circle_marks_centre() {
        let mut surface = surface();
        surface.fill_circle(400.0, 300.0, 15.0);
        assert_eq!(surface.cell(40, 15), Some(BALL));
        assert_eq!(surface.cell(45, 15), Some(EMPTY));
    }

    #[test]
    fn test_shapes_off_board_are_clipped() {
        let mut surface = surface();
        surface.fill_circle(-30.0, 300.0, 15.0);
        surface.fill_rect(790.0, 590.0, 100.0, 100.0);
        surface.fill_text("123", 795.0, 10.0);
        assert_eq!(surface.cell(79, 29), Some(PADDLE));
        assert_eq!(surface.cell(79, 0), Some('1'));
        assert_eq!(surface.cell(80, 0), None);
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut surface = surface();
        surface.fill_text("7", 300.0, 50.0);
        surface.clear();
        assert!(surface.lines().all(|line| line.trim().is_empty()));
    }

    #[test]
    fn test_draw_snapshot_places_everything() {
        let game = Match::default();
        let mut surface = surface();

        draw_snapshot(&mut surface, &game.snapshot(), game.config());

        assert_eq!(surface.cell(30, 2), Some('0'), "Left score label");
        assert_eq!(surface.cell(50, 2), Some('0'), "Right score label");
        assert_eq!(surface.cell(40, 15), Some(BALL));
        assert_eq!(surface.cell(1, 14), Some(PADDLE), "Left paddle");
        assert_eq!(surface.cell(77, 14), Some(PADDLE), "Right paddle");
        assert_eq!(surface.lines().count(), 30);
    }

    #[test]
    fn test_status_line_sits_below_the_paddles() {
        let game = Match::default();
        let mut surface = surface();

        draw_snapshot(&mut surface, &game.snapshot(), game.config());
        draw_status_line(&mut surface, "paused", game.config());

        // x=45, y=550 lands on column 4, row 27
        let line = surface.lines().nth(27).expect("row 27");
        assert_eq!(&line[4..10], "paused");
        assert_eq!(surface.cell(1, 27), Some(EMPTY), "Left of the text stays clear");
    }

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.0.push("clear".into());
        }
        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.0.push(format!("rect {x} {y} {w} {h}"));
        }
        fn fill_circle(&mut self, x: f32, y: f32, r: f32) {
            self.0.push(format!("circle {x} {y} {r}"));
        }
        fn fill_text(&mut self, text: &str, x: f32, y: f32) {
            self.0.push(format!("text {text} {x} {y}"));
        }
    }

    #[test]
    fn test_draw_snapshot_call_order() {
        let game = Match::default();
        let mut recorder = Recorder::default();

        draw_snapshot(&mut recorder, &game.snapshot(), game.config());

        assert_eq!(
            recorder.0,
            vec![
                "clear",
                "text 0 300 50",
                "text 0 500 50",
                "circle 400 300 15",
                "rect 10 250 20 100",
                "rect 770 250 20 100",
            ]
        );
    }
}
