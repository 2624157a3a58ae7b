//! Immediate-mode draw commands emitted by an animation field.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::chart::value_objects::{Color, PixelPoint};

use super::field::BackingResolution;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StrokeStyle {
    Solid(Color),
    /// Linear gradient along the x axis from `x0` to `x1`.
    HorizontalGradient { x0: f64, x1: f64, stops: Vec<GradientStop> },
}

/// Coordinates are CSS pixels; the surface applies the backing scale.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    StrokePolyline { points: Vec<PixelPoint>, style: StrokeStyle, width: f64, round_cap: bool },
    FillCircle { center: PixelPoint, radius: f64, color: Color },
}

/// Something an [`AnimationField`](super::AnimationField) frame can be drawn on.
pub trait DrawSurface {
    fn resize_backing(&mut self, backing: BackingResolution);

    fn draw(&mut self, commands: &[DrawCommand]);
}

impl<S: DrawSurface + ?Sized> DrawSurface for Box<S> {
    fn resize_backing(&mut self, backing: BackingResolution) {
        (**self).resize_backing(backing)
    }

    fn draw(&mut self, commands: &[DrawCommand]) {
        (**self).draw(commands)
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for Rc<RefCell<S>> {
    fn resize_backing(&mut self, backing: BackingResolution) {
        self.borrow_mut().resize_backing(backing)
    }

    fn draw(&mut self, commands: &[DrawCommand]) {
        self.borrow_mut().draw(commands)
    }
}

/// Surface used when no drawing context could be acquired.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn resize_backing(&mut self, _backing: BackingResolution) {}

    fn draw(&mut self, _commands: &[DrawCommand]) {}
}

/// Counts what reaches it. Used to observe frame output without a canvas.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub frames: usize,
    pub commands: usize,
    pub last_backing: Option<BackingResolution>,
    pub last_frame: Vec<DrawCommand>,
}

impl DrawSurface for RecordingSurface {
    fn resize_backing(&mut self, backing: BackingResolution) {
        self.last_backing = Some(backing);
    }

    fn draw(&mut self, commands: &[DrawCommand]) {
        self.frames += 1;
        self.commands += commands.len();
        self.last_frame.clear();
        self.last_frame.extend_from_slice(commands);
    }
}
