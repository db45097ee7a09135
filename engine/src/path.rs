//! Path command lists produced by the geometry builders.
//!
//! Commands keep SVG semantics (absolute coordinates, elliptical arcs with
//! zero x-rotation) so the `d` string a renderer receives matches what it
//! would have drawn from the record directly.

use kurbo::{Arc, BezPath, Point, Rect, Shape, SvgArc, Vec2};
use serde::{Deserialize, Serialize};

/// Tolerance used when arcs are approximated by cubic beziers.
const ARC_TOLERANCE: f64 = 0.1;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: Point },
    LineTo { to: Point },
    QuadTo { ctrl: Point, to: Point },
    ArcTo { radii: Vec2, large_arc: bool, sweep: bool, to: Point },
    Close,
}

impl PathCommand {
    fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo { to }
            | PathCommand::LineTo { to }
            | PathCommand::QuadTo { to, .. }
            | PathCommand::ArcTo { to, .. } => Some(to),
            PathCommand::Close => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(transparent)]
pub struct OutlinePath {
    commands: Vec<PathCommand>,
}

impl OutlinePath {
    pub fn new() -> Self {
        OutlinePath::default()
    }

    pub fn move_to(&mut self, to: Point) {
        self.commands.push(PathCommand::MoveTo { to });
    }

    pub fn line_to(&mut self, to: Point) {
        self.commands.push(PathCommand::LineTo { to });
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
    }

    pub fn arc_to(&mut self, radii: Vec2, large_arc: bool, sweep: bool, to: Point) {
        self.commands.push(PathCommand::ArcTo { radii, large_arc, sweep, to });
    }

    pub fn close_path(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn start(&self) -> Option<Point> {
        self.commands.first().and_then(PathCommand::end_point)
    }

    /// Last explicit point, ignoring a trailing close.
    pub fn end(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(PathCommand::end_point)
    }

    pub fn is_closed(&self) -> bool {
        match self.commands.last() {
            Some(PathCommand::Close) => true,
            Some(_) => self.start() == self.end(),
            None => false,
        }
    }

    pub fn line_segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo { .. }))
            .count()
    }

    /// SVG path data (`d` attribute).
    pub fn to_svg(&self) -> String {
        let parts: Vec<String> = self
            .commands
            .iter()
            .map(|c| match *c {
                PathCommand::MoveTo { to } => format!("M {} {}", to.x, to.y),
                PathCommand::LineTo { to } => format!("L {} {}", to.x, to.y),
                PathCommand::QuadTo { ctrl, to } => {
                    format!("Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)
                }
                PathCommand::ArcTo { radii, large_arc, sweep, to } => format!(
                    "A {} {} 0 {} {} {} {}",
                    radii.x,
                    radii.y,
                    large_arc as u8,
                    sweep as u8,
                    to.x,
                    to.y
                ),
                PathCommand::Close => "Z".to_string(),
            })
            .collect();
        parts.join(" ")
    }

    /// Converts to a kurbo path, approximating arcs with cubics.
    pub fn to_bez_path(&self) -> BezPath {
        let mut bez = BezPath::new();
        let mut current = Point::ZERO;
        let mut subpath_start = Point::ZERO;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { to } => {
                    bez.move_to(to);
                    subpath_start = to;
                    current = to;
                }
                PathCommand::LineTo { to } => {
                    bez.line_to(to);
                    current = to;
                }
                PathCommand::QuadTo { ctrl, to } => {
                    bez.quad_to(ctrl, to);
                    current = to;
                }
                PathCommand::ArcTo { radii, large_arc, sweep, to } => {
                    let svg_arc = SvgArc {
                        from: current,
                        to,
                        radii,
                        x_rotation: 0.0,
                        large_arc,
                        sweep,
                    };
                    // Zero radii or coincident endpoints degrade to a straight line.
                    match Arc::from_svg_arc(&svg_arc) {
                        Some(arc) => arc.to_cubic_beziers(ARC_TOLERANCE, |p1, p2, p| {
                            bez.curve_to(p1, p2, p)
                        }),
                        None => bez.line_to(to),
                    }
                    current = to;
                }
                PathCommand::Close => {
                    bez.close_path();
                    current = subpath_start;
                }
            }
        }
        bez
    }

    pub fn bounding_box(&self) -> Rect {
        self.to_bez_path().bounding_box()
    }

    /// Nonzero-winding hit test against the filled outline.
    pub fn contains(&self, pt: Point) -> bool {
        self.to_bez_path().contains(pt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> OutlinePath {
        let mut path = OutlinePath::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(100.0, 0.0));
        path.line_to(Point::new(0.0, 100.0));
        path
    }

    #[test]
    fn test_svg_output() {
        let mut path = triangle();
        path.close_path();
        assert_eq!(path.to_svg(), "M 0 0 L 100 0 L 0 100 Z");
    }

    #[test]
    fn test_closed_detection() {
        let mut open = triangle();
        assert!(!open.is_closed());
        assert_eq!(open.line_segment_count(), 2);

        open.line_to(Point::new(0.0, 0.0));
        assert!(open.is_closed());
        assert!(!OutlinePath::new().is_closed());
    }

    #[test]
    fn test_arc_converts_to_curves() {
        let mut path = OutlinePath::new();
        path.move_to(Point::new(0.0, 50.0));
        path.arc_to(Vec2::new(50.0, 50.0), true, false, Point::new(100.0, 50.0));
        path.arc_to(Vec2::new(50.0, 50.0), true, false, Point::new(0.0, 50.0));
        path.close_path();
        assert_eq!(path.to_svg(), "M 0 50 A 50 50 0 1 0 100 50 A 50 50 0 1 0 0 50 Z");

        let bbox = path.bounding_box();
        assert!((bbox.x0 - 0.0).abs() < 0.5 && (bbox.x1 - 100.0).abs() < 0.5);
        assert!((bbox.y0 - 0.0).abs() < 0.5 && (bbox.y1 - 100.0).abs() < 0.5);
        assert!(path.contains(Point::new(50.0, 50.0)));
        assert!(!path.contains(Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_zero_radius_arc_is_a_line() {
        let mut path = OutlinePath::new();
        path.move_to(Point::new(0.0, 0.0));
        path.arc_to(Vec2::ZERO, false, true, Point::new(10.0, 10.0));
        let bez = path.to_bez_path();
        assert_eq!(bez.elements().len(), 2);
    }
}
