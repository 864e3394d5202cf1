//! Attribute-selective, tolerance-aware similarity engine
//!
//! Walks figure, then axis, then element, and returns the first mismatch it
//! finds. Element collections are compared positionally: both sides were
//! sorted into canonical order at construction, which is what makes the
//! outcome independent of draw order. Check order within a subplot: lines,
//! then point clouds, then shapes, then the remaining scalar axis
//! attributes.

use std::collections::HashSet;

use crate::axis::AxisSnapshot;
use crate::cloud::PointCloud;
use crate::error::{ImparityError, ImparityResult, SimilarityMismatch, SimilarityResult};
use crate::figure::FigureSnapshot;
use crate::line::Line;
use crate::shape::Shape;
use crate::types::TextLabel;

/// Relative + absolute tolerance for floating-point comparison.
///
/// `|actual - expected| <= abs + rel * |expected|`; NaN never compares
/// close. Defaults absorb layout rounding without hiding real differences.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub rel: f64,
    pub abs: f64,
}

impl Tolerance {
    pub fn new(rel: f64, abs: f64) -> Self {
        Self { rel, abs }
    }

    /// Approximate scalar equality
    pub fn close(&self, expected: f64, actual: f64) -> bool {
        if expected.is_nan() || actual.is_nan() {
            return false;
        }
        (actual - expected).abs() <= self.abs + self.rel * expected.abs()
    }

    /// Element-wise approximate equality. A length mismatch is simply
    /// "not close"; the caller converts it into a value mismatch rather
    /// than an out-of-bounds failure.
    pub fn all_close(&self, expected: &[f64], actual: &[f64]) -> bool {
        expected.len() == actual.len()
            && expected
                .iter()
                .zip(actual.iter())
                .all(|(e, a)| self.close(*e, *a))
    }

    pub(crate) fn vertices_close(&self, expected: &[(f64, f64)], actual: &[(f64, f64)]) -> bool {
        expected.len() == actual.len()
            && expected
                .iter()
                .zip(actual.iter())
                .all(|((ex, ey), (ax, ay))| self.close(*ex, *ax) && self.close(*ey, *ay))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rel: 1e-5,
            abs: 1e-8,
        }
    }
}

/// Caller-supplied restriction on which attributes are checked.
///
/// `all()` checks every attribute an entity defines. A named set restricts
/// the check to its intersection with each entity's attributes; unknown
/// names are silently ignored, so one superset set can span heterogeneous
/// element kinds.
#[derive(Clone, Debug, Default)]
pub struct AttributeFilter {
    selected: Option<HashSet<String>>,
}

impl AttributeFilter {
    /// Check every attribute (the `None` filter)
    pub fn all() -> Self {
        Self { selected: None }
    }

    /// Check only the named attributes
    pub fn only<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: Some(attributes.into_iter().map(Into::into).collect()),
        }
    }

    pub fn from_names(attributes: Option<&[&str]>) -> Self {
        match attributes {
            Some(names) => Self::only(names.iter().copied()),
            None => Self::all(),
        }
    }

    pub fn includes(&self, attribute: &str) -> bool {
        match &self.selected {
            Some(selected) => selected.contains(attribute),
            None => true,
        }
    }
}

/// The comparison engine: an attribute filter plus a numeric tolerance
#[derive(Clone, Debug, Default)]
pub struct Comparator {
    filter: AttributeFilter,
    tolerance: Tolerance,
}

impl Comparator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_attributes(attributes: Option<&[&str]>) -> Self {
        Self::new().with_filter(AttributeFilter::from_names(attributes))
    }

    pub fn with_filter(mut self, filter: AttributeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Compare a candidate figure against a reference. Returns the first
    /// mismatch found; comparison never mutates either side.
    pub fn compare(
        &self,
        reference: &FigureSnapshot,
        candidate: &FigureSnapshot,
    ) -> SimilarityResult<()> {
        if reference.axes.len() != candidate.axes.len() {
            return Err(SimilarityMismatch::SubplotCount {
                expected: reference.axes.len(),
                found: candidate.axes.len(),
            });
        }

        if self.filter.includes("super_title") && reference.super_title != candidate.super_title {
            return Err(self.attribute_mismatch(
                "figure",
                "super_title",
                quoted(&reference.super_title),
                quoted(&candidate.super_title),
            ));
        }
        if self.filter.includes("has_super_title")
            && reference.has_super_title != candidate.has_super_title
        {
            return Err(self.attribute_mismatch(
                "figure",
                "has_super_title",
                reference.has_super_title.to_string(),
                candidate.has_super_title.to_string(),
            ));
        }

        // Subplot order is caller-significant: compare in sequence position
        for (subplot, (reference, candidate)) in
            reference.axes.iter().zip(candidate.axes.iter()).enumerate()
        {
            self.compare_axis(subplot, reference, candidate)?;
        }
        Ok(())
    }

    /// Non-propagating variant returning `(similar, message)`
    pub fn check(
        &self,
        reference: &FigureSnapshot,
        candidate: &FigureSnapshot,
    ) -> (bool, Option<String>) {
        match self.compare(reference, candidate) {
            Ok(()) => (true, None),
            Err(mismatch) => (false, Some(mismatch.to_string())),
        }
    }

    fn compare_axis(
        &self,
        subplot: usize,
        reference: &AxisSnapshot,
        candidate: &AxisSnapshot,
    ) -> SimilarityResult<()> {
        // Structural pre-check: counts must match before any attribute is
        // inspected in this subplot
        self.check_count(subplot, "lines", reference.lines.len(), candidate.lines.len())?;
        self.check_count(
            subplot,
            "point clouds",
            reference.point_clouds.len(),
            candidate.point_clouds.len(),
        )?;
        self.check_count(
            subplot,
            "shapes",
            reference.shapes.len(),
            candidate.shapes.len(),
        )?;

        for (index, (r, c)) in reference.lines.iter().zip(candidate.lines.iter()).enumerate() {
            self.compare_line(subplot, index, r, c)?;
        }
        for (index, (r, c)) in reference
            .point_clouds
            .iter()
            .zip(candidate.point_clouds.iter())
            .enumerate()
        {
            self.compare_cloud(subplot, index, r, c)?;
        }
        for (index, (r, c)) in reference
            .shapes
            .iter()
            .zip(candidate.shapes.iter())
            .enumerate()
        {
            self.compare_shape(subplot, index, r, c)?;
        }

        self.compare_axis_attributes(subplot, reference, candidate)
    }

    fn check_count(
        &self,
        subplot: usize,
        element: &'static str,
        expected: usize,
        found: usize,
    ) -> SimilarityResult<()> {
        if expected != found {
            return Err(SimilarityMismatch::ElementCount {
                subplot,
                element,
                expected,
                found,
            });
        }
        Ok(())
    }

    fn compare_line(
        &self,
        subplot: usize,
        index: usize,
        reference: &Line,
        candidate: &Line,
    ) -> SimilarityResult<()> {
        let context = format!("subplot {subplot}, line {index}");

        for &attribute in Line::ATTRIBUTES {
            if !self.filter.includes(attribute) {
                continue;
            }
            match attribute {
                "x" => self.check_series(&context, "x", &reference.x, &candidate.x)?,
                "y" => self.check_series(&context, "y", &reference.y, &candidate.y)?,
                "width" => {
                    if !self.tolerance.close(reference.width, candidate.width) {
                        return Err(self.attribute_mismatch(
                            &context,
                            "width",
                            reference.width.to_string(),
                            candidate.width.to_string(),
                        ));
                    }
                }
                "style" => {
                    if reference.style != candidate.style {
                        return Err(self.attribute_mismatch(
                            &context,
                            "style",
                            reference.style.to_string(),
                            candidate.style.to_string(),
                        ));
                    }
                }
                "marker" => {
                    if reference.marker != candidate.marker {
                        return Err(self.attribute_mismatch(
                            &context,
                            "marker",
                            marker_name(&reference.marker),
                            marker_name(&candidate.marker),
                        ));
                    }
                }
                "colour" => {
                    if reference.colour != candidate.colour {
                        return Err(self.attribute_mismatch(
                            &context,
                            "colour",
                            quoted(&reference.colour),
                            quoted(&candidate.colour),
                        ));
                    }
                }
                "label" => {
                    if reference.label != candidate.label {
                        return Err(self.attribute_mismatch(
                            &context,
                            "label",
                            quoted(&reference.label),
                            quoted(&candidate.label),
                        ));
                    }
                }
                _ => unreachable!("unknown line attribute"),
            }
        }
        Ok(())
    }

    fn compare_cloud(
        &self,
        subplot: usize,
        index: usize,
        reference: &PointCloud,
        candidate: &PointCloud,
    ) -> SimilarityResult<()> {
        let context = format!("subplot {subplot}, point cloud {index}");

        if self.filter.includes("x") {
            self.check_series(&context, "x", &reference.x, &candidate.x)?;
        }
        if self.filter.includes("y") {
            self.check_series(&context, "y", &reference.y, &candidate.y)?;
        }
        if self.filter.includes("marker")
            && !self
                .tolerance
                .vertices_close(&reference.marker.vertices, &candidate.marker.vertices)
        {
            return Err(SimilarityMismatch::MarkerOutline { context });
        }
        Ok(())
    }

    fn compare_shape(
        &self,
        subplot: usize,
        index: usize,
        reference: &Shape,
        candidate: &Shape,
    ) -> SimilarityResult<()> {
        // Kind discriminant is structural: checked before any field access,
        // regardless of the attribute filter
        match (reference, candidate) {
            (Shape::Rectangle(r), Shape::Rectangle(c)) => {
                let context = format!("subplot {subplot}, shape {index} (rectangle)");
                let fields = [
                    ("height", r.height, c.height),
                    ("width", r.width, c.width),
                    ("x", r.x, c.x),
                    ("y", r.y, c.y),
                ];
                self.check_shape_fields(&context, &fields)
            }
            (Shape::Wedge(r), Shape::Wedge(c)) => {
                let context = format!("subplot {subplot}, shape {index} (wedge)");
                let fields = [
                    ("radius", r.radius, c.radius),
                    ("theta1", r.theta1, c.theta1),
                    ("theta2", r.theta2, c.theta2),
                    ("center_x", r.center_x, c.center_x),
                    ("center_y", r.center_y, c.center_y),
                    ("span", r.span(), c.span()),
                ];
                self.check_shape_fields(&context, &fields)
            }
            _ => Err(self.attribute_mismatch(
                &format!("subplot {subplot}, shape {index}"),
                "kind",
                reference.kind().to_string(),
                candidate.kind().to_string(),
            )),
        }
    }

    fn check_shape_fields(
        &self,
        context: &str,
        fields: &[(&'static str, f64, f64)],
    ) -> SimilarityResult<()> {
        for &(attribute, expected, actual) in fields {
            if !self.filter.includes(attribute) {
                continue;
            }
            if !self.tolerance.close(expected, actual) {
                return Err(self.attribute_mismatch(
                    context,
                    attribute,
                    expected.to_string(),
                    actual.to_string(),
                ));
            }
        }
        Ok(())
    }

    fn compare_axis_attributes(
        &self,
        subplot: usize,
        reference: &AxisSnapshot,
        candidate: &AxisSnapshot,
    ) -> SimilarityResult<()> {
        let context = format!("subplot {subplot}");

        for &attribute in AxisSnapshot::ATTRIBUTES {
            if !self.filter.includes(attribute) {
                continue;
            }
            match attribute {
                "title" => self.check_string(&context, "title", &reference.title, &candidate.title)?,
                "has_title" => self.check_flag(
                    &context,
                    "has_title",
                    reference.has_title,
                    candidate.has_title,
                )?,
                "x_label" => {
                    self.check_string(&context, "x_label", &reference.x_label, &candidate.x_label)?
                }
                "has_x_label" => self.check_flag(
                    &context,
                    "has_x_label",
                    reference.has_x_label,
                    candidate.has_x_label,
                )?,
                "y_label" => {
                    self.check_string(&context, "y_label", &reference.y_label, &candidate.y_label)?
                }
                "has_y_label" => self.check_flag(
                    &context,
                    "has_y_label",
                    reference.has_y_label,
                    candidate.has_y_label,
                )?,
                "x_scale" => {
                    if reference.x_scale != candidate.x_scale {
                        return Err(self.attribute_mismatch(
                            &context,
                            "x_scale",
                            reference.x_scale.to_string(),
                            candidate.x_scale.to_string(),
                        ));
                    }
                }
                "y_scale" => {
                    if reference.y_scale != candidate.y_scale {
                        return Err(self.attribute_mismatch(
                            &context,
                            "y_scale",
                            reference.y_scale.to_string(),
                            candidate.y_scale.to_string(),
                        ));
                    }
                }
                "x_tick_labels" => self.check_text_sequence(
                    &context,
                    "x_tick_labels",
                    &reference.x_tick_labels,
                    &candidate.x_tick_labels,
                )?,
                "y_tick_labels" => self.check_text_sequence(
                    &context,
                    "y_tick_labels",
                    &reference.y_tick_labels,
                    &candidate.y_tick_labels,
                )?,
                "legend_entries" => self.check_text_sequence(
                    &context,
                    "legend_entries",
                    &reference.legend_entries,
                    &candidate.legend_entries,
                )?,
                "legend_count" => {
                    if reference.legend_count != candidate.legend_count {
                        return Err(self.attribute_mismatch(
                            &context,
                            "legend_count",
                            reference.legend_count.to_string(),
                            candidate.legend_count.to_string(),
                        ));
                    }
                }
                "grid_layout" => {
                    if reference.grid_layout != candidate.grid_layout {
                        return Err(self.attribute_mismatch(
                            &context,
                            "grid_layout",
                            reference.grid_layout.to_string(),
                            candidate.grid_layout.to_string(),
                        ));
                    }
                }
                _ => unreachable!("unknown axis attribute"),
            }
        }
        Ok(())
    }

    fn check_series(
        &self,
        context: &str,
        attribute: &'static str,
        expected: &[f64],
        actual: &[f64],
    ) -> SimilarityResult<()> {
        if !self.tolerance.all_close(expected, actual) {
            return Err(SimilarityMismatch::Series {
                context: context.to_string(),
                attribute,
                expected: expected.to_vec(),
                actual: actual.to_vec(),
            });
        }
        Ok(())
    }

    fn check_text_sequence(
        &self,
        context: &str,
        attribute: &'static str,
        reference: &[Option<TextLabel>],
        candidate: &[Option<TextLabel>],
    ) -> SimilarityResult<()> {
        let len = reference.len().max(candidate.len());
        for index in 0..len {
            let expected = reference.get(index).and_then(|entry| entry.as_ref());
            let actual = candidate.get(index).and_then(|entry| entry.as_ref());
            match (expected, actual) {
                (None, None) => {}
                (Some(e), Some(a)) if e == a => {}
                _ => {
                    return Err(SimilarityMismatch::TextEntry {
                        context: context.to_string(),
                        attribute,
                        index,
                        expected: text_entry_name(expected),
                        actual: text_entry_name(actual),
                    })
                }
            }
        }
        Ok(())
    }

    fn check_string(
        &self,
        context: &str,
        attribute: &'static str,
        expected: &str,
        actual: &str,
    ) -> SimilarityResult<()> {
        if expected != actual {
            return Err(self.attribute_mismatch(context, attribute, quoted(expected), quoted(actual)));
        }
        Ok(())
    }

    fn check_flag(
        &self,
        context: &str,
        attribute: &'static str,
        expected: bool,
        actual: bool,
    ) -> SimilarityResult<()> {
        if expected != actual {
            return Err(self.attribute_mismatch(
                context,
                attribute,
                expected.to_string(),
                actual.to_string(),
            ));
        }
        Ok(())
    }

    fn attribute_mismatch(
        &self,
        context: &str,
        attribute: &'static str,
        expected: String,
        actual: String,
    ) -> SimilarityMismatch {
        SimilarityMismatch::Attribute {
            context: context.to_string(),
            attribute,
            expected,
            actual,
        }
    }
}

fn quoted(text: &str) -> String {
    format!("'{text}'")
}

fn marker_name(marker: &Option<String>) -> String {
    match marker {
        Some(symbol) => quoted(symbol),
        None => "none".to_string(),
    }
}

fn text_entry_name(entry: Option<&TextLabel>) -> String {
    match entry {
        Some(label) => label.to_string(),
        None => "absent".to_string(),
    }
}

/// Assert two figure snapshots are similar under the given attribute subset.
///
/// `attributes = None` checks every attribute each entity defines. Returns
/// nothing on success; the error carries the first mismatch found.
pub fn assert_similar_figures(
    reference: &FigureSnapshot,
    candidate: &FigureSnapshot,
    attributes: Option<&[&str]>,
) -> ImparityResult<()> {
    Comparator::for_attributes(attributes)
        .compare(reference, candidate)
        .map_err(ImparityError::from)
}

/// Non-propagating variant of [`assert_similar_figures`]
pub fn check_similar_figures(
    reference: &FigureSnapshot,
    candidate: &FigureSnapshot,
    attributes: Option<&[&str]>,
) -> (bool, Option<String>) {
    Comparator::for_attributes(attributes).check(reference, candidate)
}
