//! Capabilities the game consumes but does not implement: drawing, sound and
//! input. The terminal versions live in `term`.

use crossterm::style::Color;

use crate::error::Result;
use crate::geometry::Position;
use crate::snake::Heading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    Block,
    Apple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Ding,
    Crash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Direction(Heading),
    Confirm,
    Quit,
}

pub trait Renderer {
    /// Covers the whole board of `size` pixels with `sprite`.
    fn fill_background(&mut self, sprite: Sprite, size: (i32, i32)) -> Result<()>;

    fn draw_sprite(&mut self, sprite: Sprite, pos: Position) -> Result<()>;

    fn draw_text(&mut self, text: &str, pos: Position, color: Color) -> Result<()>;

    /// Makes everything drawn since the last call visible.
    fn present(&mut self) -> Result<()>;
}

pub trait AudioPlayer {
    fn play_loop(&mut self, track: Track) -> Result<()>;
    fn play_once(&mut self, effect: Effect) -> Result<()>;
    fn pause(&mut self) -> Result<()>;
    fn resume(&mut self) -> Result<()>;
}

pub trait InputSource {
    /// Drains every event that arrived since the last call, oldest first.
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;
}
