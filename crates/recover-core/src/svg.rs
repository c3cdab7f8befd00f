// File: crates/recover-core/src/svg.rs
// Summary: Vector image parser; pulls the series vertices, axis labels and group offset out of an SVG chart.

use std::collections::HashSet;

use roxmltree::{Document, Node};
use tracing::debug;

use crate::error::{ChartError, StructureError};
use crate::layout::{class_matches, ChartLayout};
use crate::path::{parse_path_vertices, parse_translate};
use crate::types::{AxisLabel, Offset, Vertex};

/// Parsed SVG document handed to [`VectorImage::parse`]. Read-only.
pub struct VectorImage<'a> {
    doc: Document<'a>,
}

impl<'a> VectorImage<'a> {
    /// Parse markup. Malformed XML is a structure error for the chart.
    pub fn read(markup: &'a str) -> Result<Self, ChartError> {
        let doc = Document::parse(markup)?;
        Ok(Self { doc })
    }

    /// Extract the drawing primitives the calibrator and reconstructor need.
    pub fn parse(&self, layout: &ChartLayout) -> Result<ParsedChart, ChartError> {
        let group = find_by_class(self.doc.root(), "g", &layout.series_group)
            .ok_or_else(|| StructureError::MissingSeriesGroup(layout.series_group.clone()))?;

        let offset = parse_translate(group.attribute("transform").unwrap_or(""));

        let path = find_by_class(group, "path", &layout.series_path)
            .or_else(|| find_by_class(self.doc.root(), "path", &layout.series_path))
            .ok_or_else(|| StructureError::MissingSeriesPath(layout.series_path.clone()))?;
        let d = path.attribute("d").ok_or(StructureError::MissingPathData)?;
        let vertices = parse_path_vertices(d)?;

        let y_labels = self.value_labels(&layout.y_labels);
        let x_labels = self.category_labels(&layout.x_labels);

        debug!(
            vertices = vertices.len(),
            x_labels = x_labels.len(),
            y_labels = y_labels.len(),
            offset_x = offset.x,
            offset_y = offset.y,
            "parsed chart primitives"
        );

        Ok(ParsedChart { vertices, x_labels, y_labels, offset })
    }

    fn label_texts<'s>(&'s self, group_class: &'s str) -> impl Iterator<Item = Node<'s, 'a>> + 's {
        self.doc
            .descendants()
            .filter(move |n| is_element_with_class(n, "g", group_class))
            .flat_map(|g| g.children().filter(|c| c.is_element() && c.has_tag_name("text")))
    }

    fn value_labels(&self, group_class: &str) -> Vec<AxisLabel> {
        let mut labels = Vec::new();
        let mut claimed: HashSet<u64> = HashSet::new();

        for text in self.label_texts(group_class) {
            let Some(y) = numeric_attr(&text, "y") else {
                debug!("value label without usable 'y' skipped");
                continue;
            };
            if claimed.contains(&y.to_bits()) {
                continue;
            }
            let Some(raw) = label_text(&text) else { continue };
            // a bare "0" tick sits on the origin and is not a calibration point
            if raw == "0" {
                continue;
            }
            match raw.replace(',', "").parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    labels.push(AxisLabel::new(y, value));
                    claimed.insert(y.to_bits());
                }
                _ => debug!(text = raw, "unparseable value label skipped"),
            }
        }
        sort_by_pixel(&mut labels);
        labels
    }

    fn category_labels(&self, group_class: &str) -> Vec<AxisLabel> {
        let mut labels = Vec::new();
        for text in self.label_texts(group_class) {
            let Some(x) = numeric_attr(&text, "x") else {
                debug!("category label without usable 'x' skipped");
                continue;
            };
            let Some(raw) = label_text(&text) else { continue };
            match raw.parse::<i32>() {
                Ok(year) => labels.push(AxisLabel::new(x, f64::from(year))),
                Err(_) => debug!(text = raw, "non-year category label skipped"),
            }
        }
        sort_by_pixel(&mut labels);
        labels
    }
}

/// Output of [`VectorImage::parse`]. Label sets are sorted by pixel position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedChart {
    pub vertices: Vec<Vertex>,
    pub x_labels: Vec<AxisLabel>,
    pub y_labels: Vec<AxisLabel>,
    pub offset: Offset,
}

fn is_element_with_class(node: &Node<'_, '_>, tag: &str, class: &str) -> bool {
    node.is_element()
        && node.has_tag_name(tag)
        && node.attribute("class").is_some_and(|c| class_matches(c, class))
}

fn find_by_class<'a, 'input>(root: Node<'a, 'input>, tag: &str, class: &str) -> Option<Node<'a, 'input>> {
    root.descendants().find(|n| is_element_with_class(n, tag, class))
}

fn numeric_attr(node: &Node<'_, '_>, name: &str) -> Option<f64> {
    node.attribute(name)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Text of a nested `tspan` when present, else the element's own text.
fn label_text<'a>(node: &Node<'a, '_>) -> Option<&'a str> {
    let raw = match node.children().find(|c| c.is_element() && c.has_tag_name("tspan")) {
        Some(tspan) => tspan.text(),
        None => node.text(),
    }?;
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Stable, so labels sharing a pixel keep document order.
fn sort_by_pixel(labels: &mut [AxisLabel]) {
    labels.sort_by(|a, b| a.pixel.total_cmp(&b.pixel));
}
