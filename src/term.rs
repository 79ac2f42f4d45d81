use crate::error::{Error, Result};
use crate::frontend::{AudioPlayer, Effect, InputEvent, InputSource, Renderer, Sprite, Track};
use crate::geometry::{Board, Position};
use crate::input::map_key;
use std::{convert::TryFrom, io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, read, poll};
use log::debug;

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

/// Terminal columns used by one board cell, to keep cells roughly square.
const CELL_COLS: TermInt = 2;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
struct Glyph {
    ch: char,
    color: Color,
}

impl Glyph {
    const BLANK: Glyph = Glyph { ch: ' ', color: Color::Reset };
}

/// Draws the board into a back buffer and writes it out on `present`.
/// The buffer is sized on the first `fill_background`, after `setup` has
/// checked that the terminal can hold the frame.
pub struct TermRenderer {
    board: Board,
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    screen: Vec<Glyph>,
}

impl TermRenderer {
    pub fn new(board: Board) -> Self {
        let (width, height) = frame_size(&board);
        TermRenderer { board, width, height, stdout: stdout(), screen: Vec::new() }
    }

    pub fn setup(&mut self) -> Result<()> {
        let (have_cols, have_rows) = terminal::size()?;
        if have_cols < self.width || have_rows < self.height {
            return Err(Error::TerminalTooSmall {
                need_cols: self.width, need_rows: self.height, have_cols, have_rows,
            });
        }

        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn put(&mut self, pos: Coords, glyph: Glyph) {
        if pos.0 < self.width && pos.1 < self.height {
            if let Some(slot) = self.screen.get_mut(self.width as usize * pos.1 as usize + pos.0 as usize) {
                *slot = glyph;
            }
        }
    }

    fn draw_borders(&mut self) {
        let end_x = self.width - 1;
        let end_y = self.height - 1;

        for x in 0..self.width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.put((x, 0), Glyph { ch, color: Color::Reset });
            self.put((x, end_y), Glyph { ch, color: Color::Reset });
        }

        for y in 1..end_y {
            self.put((0, y), Glyph { ch: '|', color: Color::Reset });
            self.put((end_x, y), Glyph { ch: '|', color: Color::Reset });
        }
    }
}

impl Renderer for TermRenderer {
    fn fill_background(&mut self, sprite: Sprite, size: (i32, i32)) -> Result<()> {
        debug_assert_eq!(size, self.board.size());
        let fill = sprite_glyphs(sprite)[0];
        self.screen.clear();
        self.screen.resize(self.width as usize * self.height as usize, fill);
        self.draw_borders();
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: Sprite, pos: Position) -> Result<()> {
        // Freshly grown segments sit off the board until their first move.
        if let Some((x, y)) = cell_origin(&self.board, pos) {
            for (i, glyph) in sprite_glyphs(sprite).iter().enumerate() {
                self.put((x + i as TermInt, y), *glyph);
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, pos: Position, color: Color) -> Result<()> {
        if let Some((x, y)) = cell_origin(&self.board, pos) {
            let last_col = self.width - 1;
            for (ch, col) in text.chars().zip(x..last_col) {
                self.put((col, y), Glyph { ch, color });
            }
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let TermRenderer { stdout, screen, width, .. } = self;

        for (y, row) in screen.chunks(*width as usize).enumerate() {
            queue!(*stdout, cursor::MoveTo(0, y as TermInt))?;
            let mut current: Option<Color> = None;

            for glyph in row {
                if current != Some(glyph.color) {
                    queue!(*stdout, style::SetForegroundColor(glyph.color))?;
                    current = Some(glyph.color);
                }
                queue!(*stdout, style::Print(glyph.ch))?;
            }
        }

        queue!(*stdout, style::ResetColor)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Undoes `TermRenderer::setup`.
pub fn restore() -> Result<()> {
    terminal::disable_raw_mode()?;
    execute!(stdout(), style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
    Ok(())
}

/// Keyboard input from crossterm's event queue.
pub struct TermInput;

impl InputSource for TermInput {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.extend(map_key(ev));
            }
        }

        Ok(events)
    }
}

/// A terminal can't play music; effects ring the bell and the background
/// track is only tracked so pause/resume stay consistent.
pub struct TermAudio {
    stdout: Stdout,
    track: Option<Track>,
    paused: bool,
}

impl TermAudio {
    pub fn new() -> Self {
        TermAudio { stdout: stdout(), track: None, paused: false }
    }
}

impl AudioPlayer for TermAudio {
    fn play_loop(&mut self, track: Track) -> Result<()> {
        debug!("looping {:?}", track);
        self.track = Some(track);
        self.paused = false;
        Ok(())
    }

    fn play_once(&mut self, effect: Effect) -> Result<()> {
        debug!("effect {:?}", effect);
        execute!(self.stdout, style::Print('\u{7}'))?;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        if let Some(track) = self.track {
            debug!("pausing {:?}", track);
            self.paused = true;
        }
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        if self.paused {
            debug!("resuming {:?}", self.track);
            self.paused = false;
        }
        Ok(())
    }
}

/// Terminal size needed for `board` including its border.
fn frame_size(board: &Board) -> Coords {
    let (cols, rows) = board.span();
    let to_term = |n: i32| TermInt::try_from(n).unwrap_or(TermInt::MAX);
    (to_term(cols).saturating_mul(CELL_COLS).saturating_add(2), to_term(rows).saturating_add(2))
}

/// Terminal position of the first column of the cell containing `pos`.
fn cell_origin(board: &Board, pos: Position) -> Option<Coords> {
    if !board.contains(pos) {
        return None;
    }

    let cell = board.cell_size();
    let x = TermInt::try_from(pos.x / cell).ok()?;
    let y = TermInt::try_from(pos.y / cell).ok()?;
    Some((1 + x * CELL_COLS, 1 + y))
}

fn sprite_glyphs(sprite: Sprite) -> [Glyph; 2] {
    let glyph = |ch, color| Glyph { ch, color };
    match sprite {
        Sprite::Background => [Glyph::BLANK; 2],
        Sprite::Block => [glyph('█', Color::Green); 2],
        Sprite::Apple => [glyph('(', Color::Red), glyph(')', Color::Red)],
    }
}
