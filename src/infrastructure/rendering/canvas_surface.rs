use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::animation::{BackingResolution, DrawCommand, DrawSurface, StrokeStyle};
use crate::domain::chart::PixelPoint;
use crate::domain::errors::{MotionError, SurfaceResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Canvas 2D implementation of [`DrawSurface`].
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    scale: f64,
}

impl CanvasSurface {
    /// Obtain the 2D context of `canvas`.
    pub fn acquire(canvas: HtmlCanvasElement) -> SurfaceResult<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(|err| MotionError::SurfaceUnavailable(format!("{err:?}")))?
            .ok_or_else(|| MotionError::SurfaceUnavailable("2d context not supported".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MotionError::SurfaceUnavailable("context is not CanvasRenderingContext2d".into()))?;
        Ok(Self { canvas, context, scale: 1.0 })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn trace_polyline(&self, points: &[PixelPoint]) {
        self.context.begin_path();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                self.context.move_to(p.x, p.y);
            } else {
                self.context.line_to(p.x, p.y);
            }
        }
    }

    fn apply_stroke_style(&self, style: &StrokeStyle) {
        match style {
            StrokeStyle::Solid(color) => self.context.set_stroke_style_str(&color.to_css()),
            StrokeStyle::HorizontalGradient { x0, x1, stops } => {
                let gradient = self.context.create_linear_gradient(*x0, 0.0, *x1, 0.0);
                for stop in stops {
                    let _ = gradient.add_color_stop(stop.offset.clamp(0.0, 1.0) as f32, &stop.color.to_css());
                }
                self.context.set_stroke_style_canvas_gradient(&gradient);
            }
        }
    }

    fn draw_command(&self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear { width, height } => {
                let _ = self.context.set_transform(self.scale, 0.0, 0.0, self.scale, 0.0, 0.0);
                self.context.clear_rect(0.0, 0.0, *width, *height);
            }
            DrawCommand::StrokePolyline { points, style, width, round_cap } => {
                if points.len() < 2 {
                    return;
                }
                self.apply_stroke_style(style);
                self.context.set_line_width(*width);
                self.context.set_line_cap(if *round_cap { "round" } else { "butt" });
                self.trace_polyline(points);
                self.context.stroke();
            }
            DrawCommand::FillCircle { center, radius, color } => {
                self.context.set_fill_style_str(&color.to_css());
                self.context.begin_path();
                let _ = self.context.arc(center.x, center.y, radius.max(0.0), 0.0, std::f64::consts::TAU);
                self.context.fill();
            }
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn resize_backing(&mut self, backing: BackingResolution) {
        self.canvas.set_width(backing.width);
        self.canvas.set_height(backing.height);
        self.scale = backing.scale;
        log_debug!(
            LogComponent::Infrastructure("CanvasSurface"),
            "backing store {}x{} @{}",
            backing.width,
            backing.height,
            backing.scale
        );
    }

    fn draw(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.draw_command(command);
        }
    }
}
