//! Clock geometry model.
//!
//! A [`Model`] holds two contiguous attribute arrays (2-component positions,
//! 4-component colors) plus four sub-ranges, one per [`ClockPart`]. Each part
//! becomes a single draw call over its range. The model is immutable once
//! built.

mod clock;

pub use clock::clock_model;

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

use crate::gfx::DrawMode;

/// One vertex position, tightly packed for GPU upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// One RGBA vertex color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// A (first, count) slice of the uploaded vertex buffer consumed by one draw
/// call. Counts are in vertices, not bytes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawRange {
    pub first: i32,
    pub count: i32,
}

/// The four drawable pieces of the clock, in draw order.
///
/// `Marker` is the experimental fourth shape; it has no settled clock-hand
/// meaning and is drawn with a time-drifting transform.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClockPart {
    Face,
    BigHand,
    SmallHand,
    Marker,
}

impl ClockPart {
    pub const ALL: [ClockPart; 4] = [
        ClockPart::Face,
        ClockPart::BigHand,
        ClockPart::SmallHand,
        ClockPart::Marker,
    ];

    pub fn index(self) -> usize {
        match self {
            ClockPart::Face => 0,
            ClockPart::BigHand => 1,
            ClockPart::SmallHand => 2,
            ClockPart::Marker => 3,
        }
    }

    /// The face outline closes on itself; everything else is loose segments.
    pub fn draw_mode(self) -> DrawMode {
        match self {
            ClockPart::Face => DrawMode::LineLoop,
            _ => DrawMode::Lines,
        }
    }
}

/// Model construction failures.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("expected one color per vertex, got {positions} positions and {colors} colors")]
    ColorCountMismatch { positions: usize, colors: usize },

    #[error("range {index} ({first}+{count}) exceeds the {vertex_count} uploaded vertices")]
    RangeOutOfBounds {
        index: usize,
        first: i32,
        count: i32,
        vertex_count: usize,
    },
}

/// Immutable clock geometry: attribute arrays plus one range per part.
#[derive(Debug, Clone)]
pub struct Model {
    positions: Vec<Position>,
    colors: Vec<Color>,
    ranges: [DrawRange; 4],
}

impl Model {
    /// Validates and assembles a model.
    pub fn new(
        positions: Vec<Position>,
        colors: Vec<Color>,
        ranges: [DrawRange; 4],
    ) -> Result<Self, ModelError> {
        if positions.len() != colors.len() {
            return Err(ModelError::ColorCountMismatch {
                positions: positions.len(),
                colors: colors.len(),
            });
        }

        let vertex_count = positions.len();
        for (index, range) in ranges.iter().enumerate() {
            let valid = range.first >= 0
                && range.count >= 0
                && (range.first as usize + range.count as usize) <= vertex_count;
            if !valid {
                return Err(ModelError::RangeOutOfBounds {
                    index,
                    first: range.first,
                    count: range.count,
                    vertex_count,
                });
            }
        }

        Ok(Self {
            positions,
            colors,
            ranges,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Position data as raw bytes for buffer upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Color data as raw bytes for buffer upload.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    pub fn part_range(&self, part: ClockPart) -> DrawRange {
        self.ranges[part.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Position {
        Position { x, y }
    }

    fn white(n: usize) -> Vec<Color> {
        vec![Color::rgb(1.0, 1.0, 1.0); n]
    }

    fn r(first: i32, count: i32) -> DrawRange {
        DrawRange { first, count }
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn accepts_matching_arrays_and_ranges() {
        let positions = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)];
        let model = Model::new(
            positions,
            white(4),
            [r(0, 1), r(1, 1), r(2, 1), r(3, 1)],
        )
        .unwrap();

        assert_eq!(model.vertex_count(), 4);
        assert_eq!(model.part_range(ClockPart::Marker), r(3, 1));
    }

    #[test]
    fn rejects_color_count_mismatch() {
        let err = Model::new(
            vec![p(0.0, 0.0), p(1.0, 0.0)],
            white(3),
            [r(0, 1); 4],
        )
        .unwrap_err();

        assert!(matches!(err, ModelError::ColorCountMismatch { positions: 2, colors: 3 }));
    }

    #[test]
    fn rejects_range_past_the_end() {
        let err = Model::new(
            vec![p(0.0, 0.0), p(1.0, 0.0)],
            white(2),
            [r(0, 2), r(0, 2), r(0, 2), r(1, 2)],
        )
        .unwrap_err();

        assert!(matches!(err, ModelError::RangeOutOfBounds { index: 3, .. }));
    }

    #[test]
    fn rejects_negative_range_fields() {
        let err = Model::new(
            vec![p(0.0, 0.0)],
            white(1),
            [r(-1, 1), r(0, 1), r(0, 1), r(0, 1)],
        )
        .unwrap_err();

        assert!(matches!(err, ModelError::RangeOutOfBounds { index: 0, .. }));
    }

    // ── byte views ────────────────────────────────────────────────────────

    #[test]
    fn byte_views_cover_the_full_arrays() {
        let model = Model::new(
            vec![p(0.0, 0.0), p(1.0, 0.0)],
            white(2),
            [r(0, 2), r(0, 0), r(0, 0), r(0, 0)],
        )
        .unwrap();

        assert_eq!(model.position_bytes().len(), 2 * 2 * 4);
        assert_eq!(model.color_bytes().len(), 2 * 4 * 4);
    }

    // ── parts ─────────────────────────────────────────────────────────────

    #[test]
    fn parts_are_ordered_face_big_small_marker() {
        let indices: Vec<usize> = ClockPart::ALL.iter().map(|part| part.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn only_the_face_draws_as_a_loop() {
        assert_eq!(ClockPart::Face.draw_mode(), DrawMode::LineLoop);
        for part in [ClockPart::BigHand, ClockPart::SmallHand, ClockPart::Marker] {
            assert_eq!(part.draw_mode(), DrawMode::Lines);
        }
    }
}
