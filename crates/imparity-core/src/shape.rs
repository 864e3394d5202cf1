//! Filled-shape snapshots (rectangles and wedges)
//!
//! Shapes are an explicitly tagged sum type: the kind discriminant is
//! checked before any field access, so attribute names shared across kinds
//! (`width`, say) never compare unrelated fields.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::order::CanonicalOrder;

/// An axis-aligned filled rectangle (one bar of a bar chart, say)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub height: f64,
    pub width: f64,

    /// Position of the anchor corner
    pub x: f64,
    pub y: f64,
}

impl Rectangle {
    pub const ATTRIBUTES: &'static [&'static str] = &["height", "width", "x", "y"];

    pub fn new(height: f64, width: f64, x: f64, y: f64) -> Self {
        Self {
            height,
            width,
            x,
            y,
        }
    }
}

/// A filled circular wedge (one slice of a pie chart, say)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub radius: f64,
    pub theta1: f64,
    pub theta2: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl Wedge {
    pub const ATTRIBUTES: &'static [&'static str] = &[
        "radius", "theta1", "theta2", "center_x", "center_y", "span",
    ];

    pub fn new(radius: f64, theta1: f64, theta2: f64, center_x: f64, center_y: f64) -> Self {
        Self {
            radius,
            theta1,
            theta2,
            center_x,
            center_y,
        }
    }

    /// Angular extent of the wedge
    pub fn span(&self) -> f64 {
        (self.theta1 - self.theta2).abs()
    }
}

/// A filled geometric primitive drawn on a subplot
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(Rectangle),
    Wedge(Wedge),
}

impl Shape {
    /// Kind name used in diagnostics and the literal form
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => "rectangle",
            Shape::Wedge(_) => "wedge",
        }
    }

    /// Attribute names this shape kind defines, for the attribute filter
    pub fn attributes(&self) -> &'static [&'static str] {
        match self {
            Shape::Rectangle(_) => Rectangle::ATTRIBUTES,
            Shape::Wedge(_) => Wedge::ATTRIBUTES,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Shape::Rectangle(_) => 0,
            Shape::Wedge(_) => 1,
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Wedge> for Shape {
    fn from(wedge: Wedge) -> Self {
        Shape::Wedge(wedge)
    }
}

impl CanonicalOrder for Shape {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Shape::Rectangle(a), Shape::Rectangle(b)) => a
                .height
                .total_cmp(&b.height)
                .then_with(|| a.width.total_cmp(&b.width))
                .then_with(|| a.x.total_cmp(&b.x))
                .then_with(|| a.y.total_cmp(&b.y)),
            (Shape::Wedge(a), Shape::Wedge(b)) => a
                .span()
                .total_cmp(&b.span())
                .then_with(|| a.radius.total_cmp(&b.radius))
                .then_with(|| a.theta1.total_cmp(&b.theta1))
                .then_with(|| a.theta2.total_cmp(&b.theta2))
                .then_with(|| a.center_x.total_cmp(&b.center_x))
                .then_with(|| a.center_y.total_cmp(&b.center_y)),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wedge_span_is_absolute() {
        let wedge = Wedge::new(1.0, 270.0, 90.0, 0.0, 0.0);
        assert_eq!(wedge.span(), 180.0);
        let reversed = Wedge::new(1.0, 90.0, 270.0, 0.0, 0.0);
        assert_eq!(reversed.span(), 180.0);
    }

    #[test]
    fn test_rectangles_order_before_wedges() {
        let rect: Shape = Rectangle::new(1.0, 1.0, 0.0, 0.0).into();
        let wedge: Shape = Wedge::new(1.0, 0.0, 90.0, 0.0, 0.0).into();
        assert_eq!(rect.canonical_cmp(&wedge), Ordering::Less);
        assert_eq!(wedge.canonical_cmp(&rect), Ordering::Greater);
    }

    #[test]
    fn test_rectangle_order_height_first() {
        let short: Shape = Rectangle::new(1.0, 9.0, 9.0, 9.0).into();
        let tall: Shape = Rectangle::new(2.0, 0.0, 0.0, 0.0).into();
        assert_eq!(short.canonical_cmp(&tall), Ordering::Less);
    }

    #[test]
    fn test_literal_form_carries_kind_tag() {
        let shape: Shape = Rectangle::new(2.0, 0.8, 1.0, 0.0).into();
        let value = serde_json::to_value(shape).unwrap();
        assert_eq!(value["kind"], "rectangle");
        assert_eq!(value["height"], 2.0);

        let back: Shape = serde_json::from_value(value).unwrap();
        assert_eq!(back, shape);
    }
}
