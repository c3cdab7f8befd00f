// File: crates/recover-core/src/path.rs
// Summary: Series group `transform` (nom) and path `d` data (svg) parsing.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{anychar, char, multispace0, multispace1},
    combinator::{opt, value},
    multi::many_till,
    number::complete::double,
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};
use ::svg::node::element::path::{Command, Data, Position};
use tracing::debug;

use crate::error::StructureError;
use crate::types::{Offset, Vertex};

fn comma_or_space(input: &str) -> IResult<&str, ()> {
    alt((
        value((), tuple((multispace0, char(','), multispace0))),
        value((), multispace1),
    ))(input)
}

fn translate_args(input: &str) -> IResult<&str, (f64, Option<f64>)> {
    pair(double, opt(preceded(comma_or_space, double)))(input)
}

fn translate(input: &str) -> IResult<&str, (f64, Option<f64>)> {
    preceded(
        pair(tag("translate"), multispace0),
        delimited(
            char('('),
            delimited(multispace0, translate_args, multispace0),
            char(')'),
        ),
    )(input)
}

/// Offset from the first `translate(..)` in a transform list.
/// Missing, malformed or non-finite translations yield `(0, 0)`.
pub fn parse_translate(transform: &str) -> Offset {
    match many_till(anychar, translate)(transform) {
        Ok((_, (_, (x, y)))) => {
            let y = y.unwrap_or(0.0);
            if x.is_finite() && y.is_finite() {
                Offset::new(x, y)
            } else {
                Offset::default()
            }
        }
        Err(_) => {
            if !transform.trim().is_empty() {
                debug!(transform, "no translate() in transform; using zero offset");
            }
            Offset::default()
        }
    }
}

fn resolve(position: Position, base: f64, v: f32) -> f64 {
    match position {
        Position::Absolute => f64::from(v),
        Position::Relative => base + f64::from(v),
    }
}

fn step(pen: Vertex, position: Position, dx: f32, dy: f32) -> Vertex {
    Vertex::new(resolve(position, pen.x, dx), resolve(position, pen.y, dy))
}

/// Pen position after a curve or arc: the last coordinate pair of its final segment.
fn curve_end(pen: Vertex, position: Position, params: &[f32], arity: usize) -> Vertex {
    params
        .chunks_exact(arity)
        .fold(pen, |p, seg| step(p, position, seg[arity - 2], seg[arity - 1]))
}

/// Every move-to / line-to vertex of a path, in draw order.
///
/// Relative `m`/`l` are resolved against the current point and implicit
/// coordinate pairs after a move-to count as line-tos. Curves, arcs and
/// `H`/`V` only move the current point; they contribute no vertices.
pub fn parse_path_vertices(d: &str) -> Result<Vec<Vertex>, StructureError> {
    let data = Data::parse(d).map_err(|e| StructureError::PathData(e.to_string()))?;

    let mut out = Vec::new();
    let mut pen = Vertex::new(0.0, 0.0);
    let mut subpath_start = pen;

    for command in data.iter() {
        match command {
            Command::Move(position, params) => {
                for (i, pair) in params.chunks_exact(2).enumerate() {
                    pen = step(pen, *position, pair[0], pair[1]);
                    if i == 0 {
                        subpath_start = pen;
                    }
                    out.push(pen);
                }
            }
            Command::Line(position, params) => {
                for pair in params.chunks_exact(2) {
                    pen = step(pen, *position, pair[0], pair[1]);
                    out.push(pen);
                }
            }
            Command::HorizontalLine(position, params) => {
                for &x in params.iter() {
                    pen.x = resolve(*position, pen.x, x);
                }
            }
            Command::VerticalLine(position, params) => {
                for &y in params.iter() {
                    pen.y = resolve(*position, pen.y, y);
                }
            }
            Command::QuadraticCurve(position, params) => pen = curve_end(pen, *position, params, 4),
            Command::SmoothQuadraticCurve(position, params) => pen = curve_end(pen, *position, params, 2),
            Command::CubicCurve(position, params) => pen = curve_end(pen, *position, params, 6),
            Command::SmoothCubicCurve(position, params) => pen = curve_end(pen, *position, params, 4),
            Command::EllipticalArc(position, params) => pen = curve_end(pen, *position, params, 7),
            Command::Close => pen = subpath_start,
        }
    }
    if out.is_empty() && !d.trim().is_empty() {
        debug!(d, "path data has no move-to or line-to vertices");
    }
    Ok(out)
}
