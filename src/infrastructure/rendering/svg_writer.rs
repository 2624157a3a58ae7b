//! Serialises a chart [`Scene`] into standalone SVG markup.

use std::fmt::Write;

use crate::domain::chart::{PathCommand, PathData, Scene, Shape, Stroke, TextAnchor};

/// `d` attribute for `data`, coordinates rounded to two decimals.
pub fn path_d(data: &PathData) -> String {
    let mut out = String::new();
    for command in data.commands() {
        if !out.is_empty() {
            out.push(' ');
        }
        match *command {
            PathCommand::MoveTo(p) => {
                let _ = write!(out, "M{:.2},{:.2}", p.x, p.y);
            }
            PathCommand::LineTo(p) => {
                let _ = write!(out, "L{:.2},{:.2}", p.x, p.y);
            }
            PathCommand::ArcTo { radius, large_arc, clockwise, to } => {
                let _ = write!(
                    out,
                    "A{r:.2},{r:.2} 0 {} {} {:.2},{:.2}",
                    u8::from(large_arc),
                    u8::from(clockwise),
                    to.x,
                    to.y,
                    r = radius
                );
            }
            PathCommand::Close => out.push('Z'),
        }
    }
    out
}

fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn stroke_attrs(out: &mut String, stroke: &Stroke, with_dash: bool) {
    let _ = write!(out, r#" stroke="{}" stroke-width="{:.2}""#, stroke.color.to_css(), stroke.width);
    if let Some((dash, gap)) = stroke.dash.filter(|_| with_dash) {
        let _ = write!(out, r#" stroke-dasharray="{:.2} {:.2}""#, dash, gap);
    }
    if stroke.round {
        out.push_str(r#" stroke-linecap="round" stroke-linejoin="round""#);
    }
}

fn opacity_attr(out: &mut String, opacity: f64) {
    if opacity < 1.0 {
        let _ = write!(out, r#" opacity="{:.2}""#, opacity.clamp(0.0, 1.0));
    }
}

fn write_shape(out: &mut String, shape: &Shape) {
    match shape {
        Shape::Line { from, to, stroke } => {
            let _ = write!(out, r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}""#, from.x, from.y, to.x, to.y);
            stroke_attrs(out, stroke, true);
            out.push_str("/>");
        }
        Shape::Path { data, fill, stroke, opacity, reveal } => {
            if data.is_empty() {
                return;
            }
            // A patterned stroke keeps its own dasharray; the reveal trims the geometry instead.
            let patterned = stroke.is_some_and(|s| s.dash.is_some());
            let (d, reveal) = match reveal {
                Some(r) if patterned => (path_d(&data.truncated(r.length - r.offset)), None),
                other => (path_d(data), *other),
            };
            let _ = write!(out, r#"<path d="{d}""#);
            match fill {
                Some(color) => {
                    let _ = write!(out, r#" fill="{}""#, color.to_css());
                }
                None => out.push_str(r#" fill="none""#),
            }
            if let Some(stroke) = stroke {
                stroke_attrs(out, stroke, reveal.is_none());
            }
            if let Some(reveal) = reveal {
                let _ = write!(
                    out,
                    r#" stroke-dasharray="{len:.2} {len:.2}" stroke-dashoffset="{:.2}""#,
                    reveal.offset,
                    len = reveal.length
                );
            }
            opacity_attr(out, *opacity);
            out.push_str("/>");
        }
        Shape::Rect { origin, width, height, corner_radius, fill, stroke, opacity } => {
            let _ = write!(
                out,
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}""#,
                origin.x,
                origin.y,
                width.max(0.0),
                height.max(0.0),
                fill.to_css()
            );
            if *corner_radius > 0.0 {
                let _ = write!(out, r#" rx="{:.2}""#, corner_radius);
            }
            if let Some(stroke) = stroke {
                stroke_attrs(out, stroke, true);
            }
            opacity_attr(out, *opacity);
            out.push_str("/>");
        }
        Shape::Circle { center, radius, fill, opacity } => {
            let _ = write!(
                out,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}""#,
                center.x,
                center.y,
                radius.max(0.0),
                fill.to_css()
            );
            opacity_attr(out, *opacity);
            out.push_str("/>");
        }
        Shape::Text { at, content, anchor, size, fill } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let _ = write!(
                out,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="{}" font-size="{:.0}" fill="{}">{}</text>"#,
                at.x,
                at.y,
                anchor,
                size,
                fill.to_css(),
                escape_text(content)
            );
        }
    }
}

/// Full `<svg>` element scaled to its container through `viewBox`.
pub fn render_svg(scene: &Scene) -> String {
    let mut out = String::with_capacity(scene.len() * 96 + 128);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.0} {:.0}" preserveAspectRatio="xMidYMid meet" width="100%" height="100%">"#,
        scene.pixel_box.width,
        scene.pixel_box.height
    );
    for shape in scene.shapes() {
        write_shape(&mut out, shape);
    }
    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{Color, DashReveal, PixelBox, PixelPoint};

    #[test]
    fn path_commands_use_svg_syntax() {
        let mut data = PathData::new();
        data.move_to(PixelPoint::new(0.0, 1.0))
            .line_to(PixelPoint::new(2.5, 3.0))
            .arc_to(4.0, true, false, PixelPoint::new(5.0, 6.0))
            .close();
        assert_eq!(path_d(&data), "M0.00,1.00 L2.50,3.00 A4.00,4.00 0 1 0 5.00,6.00 Z");
    }

    #[test]
    fn reveal_dash_is_written_on_paths() {
        let mut scene = Scene::new(PixelBox::new(100.0, 50.0));
        scene.push(Shape::Path {
            data: PathData::polyline(&[PixelPoint::new(0.0, 0.0), PixelPoint::new(10.0, 0.0)]),
            fill: None,
            stroke: Some(Stroke::rounded(Color::ACCENT, 2.0)),
            opacity: 1.0,
            reveal: Some(DashReveal { length: 10.0, offset: 4.0 }),
        });
        let svg = render_svg(&scene);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 100 50""#));
        assert!(svg.contains(r#"stroke-dasharray="10.00 10.00" stroke-dashoffset="4.00""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn patterned_stroke_keeps_its_dash_while_revealing() {
        let mut scene = Scene::new(PixelBox::new(100.0, 50.0));
        scene.push(Shape::Path {
            data: PathData::polyline(&[PixelPoint::new(0.0, 0.0), PixelPoint::new(40.0, 0.0)]),
            fill: None,
            stroke: Some(Stroke::solid(Color::ACCENT, 1.0).dashed(4.0, 4.0)),
            opacity: 1.0,
            reveal: Some(DashReveal { length: 40.0, offset: 30.0 }),
        });
        let svg = render_svg(&scene);
        assert!(svg.contains(r#"d="M0.00,0.00 L10.00,0.00""#));
        assert!(svg.contains(r#"stroke-dasharray="4.00 4.00""#));
        assert!(!svg.contains("stroke-dashoffset"));
    }

    #[test]
    fn text_is_escaped() {
        let mut scene = Scene::new(PixelBox::new(10.0, 10.0));
        scene.push(Shape::Text {
            at: PixelPoint::new(1.0, 2.0),
            content: "A<B & C".into(),
            anchor: TextAnchor::Middle,
            size: 10.0,
            fill: Color::WHITE,
        });
        assert!(render_svg(&scene).contains(">A&lt;B &amp; C</text>"));
    }

    #[test]
    fn empty_paths_are_skipped() {
        let mut scene = Scene::new(PixelBox::new(10.0, 10.0));
        scene.push(Shape::Path { data: PathData::new(), fill: Some(Color::ACCENT), stroke: None, opacity: 1.0, reveal: None });
        assert!(!render_svg(&scene).contains("<path"));
    }
}
