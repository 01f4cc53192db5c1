//! GameView: maps `core::GameState` into a character grid.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, GapRng};
use crate::fb::{decimal_len, CellStyle, FrameBuffer, Rgb};
use crate::types::{Glyphs, Theme, BIRD_X, SCREEN_HEIGHT, SCREEN_WIDTH};

const SCORE_LABEL: &str = "Score: ";
const HIGH_SCORE_LABEL: &str = "High Score: ";
const FINAL_SCORE_LABEL: &str = "Final Score: ";
const START_HINT: &str = "Press SPACE to start";
const GAME_OVER: &str = "GAME OVER";
const RESTART_HINT: &str = "Press 'r' to restart";

/// Row the idle instructions are drawn on.
const START_HINT_ROW: u16 = 2;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// A viewport exactly the size of the playfield.
    pub fn grid() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub sky: CellStyle,
    pub bird: CellStyle,
    pub pipe: CellStyle,
    pub ground: CellStyle,
    pub text: CellStyle,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => {
                let bg = Rgb::new(245, 245, 240);
                Self {
                    sky: CellStyle::new(Rgb::new(40, 40, 40), bg),
                    bird: CellStyle::new(Rgb::new(200, 120, 0), bg).bold(),
                    pipe: CellStyle::new(Rgb::new(40, 130, 40), bg),
                    ground: CellStyle::new(Rgb::new(120, 90, 40), bg),
                    text: CellStyle::new(Rgb::new(20, 20, 20), bg).bold(),
                }
            }
            Theme::Dark => {
                let bg = Rgb::new(20, 20, 28);
                Self {
                    sky: CellStyle::new(Rgb::new(200, 200, 200), bg),
                    bird: CellStyle::new(Rgb::new(245, 200, 66), bg).bold(),
                    pipe: CellStyle::new(Rgb::new(100, 200, 90), bg),
                    ground: CellStyle::new(Rgb::new(190, 160, 90), bg),
                    text: CellStyle::new(Rgb::new(235, 235, 235), bg).bold(),
                }
            }
        }
    }
}

/// Renders the playfield (or the game-over screen) for a game.
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// The fixed-size grid is centered horizontally in the viewport; parts of
    /// it that do not fit are clipped.
    pub fn render_into<R: GapRng>(
        &self,
        game: &GameState<R>,
        theme: Theme,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let origin_x = viewport.width.saturating_sub(SCREEN_WIDTH) / 2;
        let origin_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(SCREEN_HEIGHT) / 2,
            AnchorY::Top => 0,
        };

        let mut grid = Grid {
            fb,
            origin_x,
            origin_y,
            glyphs: theme.glyphs(),
            palette: Palette::for_theme(theme),
        };

        if game.running() {
            draw_playfield(&mut grid, game);
        } else {
            draw_game_over(&mut grid, game.score(), game.high_score());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R: GapRng>(
        &self,
        game: &GameState<R>,
        theme: Theme,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, theme, viewport, &mut fb);
        fb
    }

    /// The grid as `SCREEN_HEIGHT` lines of `SCREEN_WIDTH` characters.
    pub fn render_lines<R: GapRng>(&self, game: &GameState<R>, theme: Theme) -> Vec<String> {
        self.render(game, theme, Viewport::grid()).lines()
    }
}

/// Grid-coordinate writer over a framebuffer region.
struct Grid<'a> {
    fb: &'a mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
    glyphs: Glyphs,
    palette: Palette,
}

impl Grid<'_> {
    fn put(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        if x < 0 || y < 0 || x >= SCREEN_WIDTH as i32 || y >= SCREEN_HEIGHT as i32 {
            return;
        }
        self.fb.put_char(
            self.origin_x.saturating_add(x as u16),
            self.origin_y.saturating_add(y as u16),
            ch,
            style,
        );
    }

    fn fill(&mut self, ch: char, style: CellStyle) {
        self.fb.fill_rect(
            self.origin_x,
            self.origin_y,
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            ch,
            style,
        );
    }

    fn right_edge(&self) -> u16 {
        self.origin_x.saturating_add(SCREEN_WIDTH)
    }

    /// Write `label` followed by `n` at grid column `x`, clipped to the grid.
    fn put_labeled_number(&mut self, x: u16, y: u16, label: &str, n: u32) {
        let style = self.palette.text;
        let max_x = self.right_edge();
        let fx = self.origin_x.saturating_add(x);
        let fy = self.origin_y.saturating_add(y);
        self.fb.put_str_clipped(fx, fy, max_x, label, style);
        let nx = fx.saturating_add(label.chars().count() as u16);
        self.fb.put_u32_clipped(nx, fy, max_x, n, style);
    }

    fn put_centered(&mut self, y: u16, text: &str) {
        let x = centered_x(text.chars().count() as u16);
        let style = self.palette.text;
        let max_x = self.right_edge();
        self.fb.put_str_clipped(
            self.origin_x.saturating_add(x),
            self.origin_y.saturating_add(y),
            max_x,
            text,
            style,
        );
    }

    fn put_centered_number(&mut self, y: u16, label: &str, n: u32) {
        let x = centered_x(labeled_len(label, n));
        self.put_labeled_number(x, y, label, n);
    }
}

fn draw_playfield<R: GapRng>(grid: &mut Grid<'_>, game: &GameState<R>) {
    let glyphs = grid.glyphs;
    let palette = grid.palette;
    let ground_row = SCREEN_HEIGHT as i32 - 1;

    grid.fill(glyphs.empty, palette.sky);

    grid.put(BIRD_X, game.bird().row(), glyphs.bird, palette.bird);

    for pipe in game.pipes() {
        let column = pipe.column();
        if column < 0 || column >= SCREEN_WIDTH as i32 {
            continue;
        }
        for y in 0..ground_row {
            if pipe.blocks_row(y) {
                grid.put(column, y, glyphs.pipe, palette.pipe);
            }
        }
    }

    for x in 0..SCREEN_WIDTH as i32 {
        grid.put(x, ground_row, glyphs.ground, palette.ground);
    }

    grid.put_labeled_number(0, 0, SCORE_LABEL, game.score());

    let high_len = labeled_len(HIGH_SCORE_LABEL, game.high_score());
    let high_x = SCREEN_WIDTH.saturating_sub(high_len);
    grid.put_labeled_number(high_x, 0, HIGH_SCORE_LABEL, game.high_score());

    if !game.started() {
        grid.put_centered(START_HINT_ROW, START_HINT);
    }
}

fn draw_game_over(grid: &mut Grid<'_>, score: u32, high_score: u32) {
    let glyphs = grid.glyphs;
    let palette = grid.palette;
    grid.fill(glyphs.empty, palette.sky);

    let top = (SCREEN_HEIGHT / 2).saturating_sub(3);
    grid.put_centered(top, GAME_OVER);
    grid.put_centered_number(top + 1, FINAL_SCORE_LABEL, score);
    grid.put_centered_number(top + 2, HIGH_SCORE_LABEL, high_score);
    grid.put_centered(top + 3, RESTART_HINT);
}

fn labeled_len(label: &str, n: u32) -> u16 {
    label.chars().count() as u16 + decimal_len(n)
}

fn centered_x(len: u16) -> u16 {
    SCREEN_WIDTH.saturating_sub(len) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Bird, Pipe, RunState, SequenceRng};

    fn game_with(run: RunState, high_score: u32) -> GameState<SequenceRng> {
        GameState::from_parts(run, high_score, SequenceRng::constant(14))
    }

    #[test]
    fn playfield_grid_dimensions() {
        let lines = GameView::default().render_lines(&GameState::new(1), Theme::Light);
        assert_eq!(lines.len(), SCREEN_HEIGHT as usize);
        assert!(lines.iter().all(|l| l.chars().count() == SCREEN_WIDTH as usize));
    }

    #[test]
    fn header_and_instructions() {
        let lines = GameView::default().render_lines(&game_with(RunState::new(), 7), Theme::Light);
        assert!(lines[0].starts_with("Score: 0"));
        assert!(lines[0].ends_with("High Score: 7"));
        assert_eq!(lines[2].trim(), "Press SPACE to start");
        assert_eq!(lines[2].find('P'), Some(35));
    }

    #[test]
    fn no_instructions_once_started() {
        let mut run = RunState::new();
        run.started = true;
        let lines = GameView::default().render_lines(&game_with(run, 0), Theme::Light);
        assert!(!lines[2].contains("Press SPACE"));
    }

    #[test]
    fn pipe_column_skips_gap_rows() {
        let mut run = RunState::new();
        run.started = true;
        run.bird = Bird::new(3.0);
        run.pipes.push(Pipe::with_gap(40.0, 14));
        let lines = GameView::default().render_lines(&game_with(run, 0), Theme::Light);

        let column: Vec<char> = lines.iter().map(|l| l.chars().nth(40).unwrap()).collect();
        for y in 1..12 {
            assert_eq!(column[y], '|', "row {y}");
        }
        for y in 12..=16 {
            assert_eq!(column[y], ' ', "row {y}");
        }
        for y in 17..27 {
            assert_eq!(column[y], '|', "row {y}");
        }
        assert_eq!(column[27], '_');
    }

    #[test]
    fn offscreen_pipe_is_skipped() {
        let mut run = RunState::new();
        run.pipes.push(Pipe::with_gap(-1.0, 14));
        run.pipes.push(Pipe::with_gap(95.0, 14));
        let lines = GameView::default().render_lines(&game_with(run, 0), Theme::Light);
        assert!(lines[5].chars().all(|c| c == ' '));
    }

    #[test]
    fn dark_theme_glyphs() {
        let mut run = RunState::new();
        run.bird = Bird::new(10.0);
        run.pipes.push(Pipe::with_gap(60.0, 14));
        let lines = GameView::default().render_lines(&game_with(run, 0), Theme::Dark);
        assert_eq!(lines[10].chars().nth(20), Some('■'));
        assert_eq!(lines[5].chars().nth(60), Some('║'));
        assert!(lines[27].chars().all(|c| c == '═'));
    }

    #[test]
    fn long_high_score_truncates_inside_grid() {
        let lines =
            GameView::default().render_lines(&game_with(RunState::new(), u32::MAX), Theme::Light);
        assert!(lines[0].ends_with("High Score: 4294967295"));
        assert_eq!(lines[0].chars().count(), SCREEN_WIDTH as usize);
    }

    #[test]
    fn game_over_layout() {
        let mut run = RunState::new();
        run.running = false;
        run.score = 15;
        let lines = GameView::default().render_lines(&game_with(run, 20), Theme::Light);
        assert_eq!(lines[11].trim(), "GAME OVER");
        assert_eq!(lines[12].trim(), "Final Score: 15");
        assert_eq!(lines[13].trim(), "High Score: 20");
        assert_eq!(lines[14].trim(), "Press 'r' to restart");
        assert!(lines[27].trim().is_empty());
        assert_eq!(lines[11].find('G'), Some(40));
    }

    #[test]
    fn grid_is_centered_in_larger_viewport() {
        let fb = GameView::default().render(&GameState::new(1), Theme::Light, Viewport::new(100, 30));
        // origin = (5, 1); ground at grid row 27.
        assert_eq!(fb.get(5, 28).unwrap().ch, '_');
        assert_eq!(fb.get(4, 28).unwrap().ch, ' ');
        assert_eq!(fb.get(5, 1).unwrap().ch, 'S');
    }

    #[test]
    fn top_anchor_starts_at_row_zero() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&GameState::new(1), Theme::Light, Viewport::new(90, 40));
        assert_eq!(fb.get(0, 0).unwrap().ch, 'S');
        assert_eq!(fb.get(0, 27).unwrap().ch, '_');
    }
}
