//! Pointer input to commands.
//!
//! The host lays out buttons and cards and reports their rectangles as
//! [`Hitbox`]es each frame, in the same virtual coordinates as the pointer.
//! [`resolve`] turns one frame of input into at most one [`Command`], so a
//! single click can never act on two overlapping cards.

use serde::{Deserialize, Serialize};

use crate::core::{Command, Scenario};

/// A pointer position in virtual screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left and top edges are inside, right and bottom edges are not.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// What a hitbox stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitTarget {
    LevelButton(usize),
    ScenarioButton(Scenario),
    ResetButton,
    PlayerCard(usize),
    TableCard(usize),
}

impl HitTarget {
    /// The command a click on this target issues.
    #[must_use]
    pub fn command(self) -> Command {
        match self {
            HitTarget::LevelButton(i) => Command::StartLevel(i),
            HitTarget::ScenarioButton(s) => Command::StartScenario(s),
            HitTarget::ResetButton => Command::Reset,
            HitTarget::PlayerCard(i) => Command::SelectPlayerCard(i),
            HitTarget::TableCard(i) => Command::AttemptMatch(i),
        }
    }
}

/// A clickable region.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub rect: Rect,
    pub target: HitTarget,
}

impl Hitbox {
    #[must_use]
    pub const fn new(rect: Rect, target: HitTarget) -> Self {
        Self { rect, target }
    }
}

/// One frame of pointer input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Pointer position in virtual coordinates.
    pub pointer: Point,
    /// The primary button went down this frame.
    pub primary_pressed: bool,
}

/// The first hitbox under the pointer, for hover highlighting.
#[must_use]
pub fn hovered(pointer: Point, hitboxes: &[Hitbox]) -> Option<HitTarget> {
    hitboxes
        .iter()
        .find(|h| h.rect.contains(pointer))
        .map(|h| h.target)
}

/// The command for this frame: the first hitbox under the pointer, only on
/// the frame the button is pressed.
#[must_use]
pub fn resolve(input: &FrameInput, hitboxes: &[Hitbox]) -> Option<Command> {
    if !input.primary_pressed {
        return None;
    }
    hovered(input.pointer, hitboxes).map(HitTarget::command)
}
