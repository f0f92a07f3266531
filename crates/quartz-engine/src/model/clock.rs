//! Built-in clock geometry.

use std::f32::consts::TAU;

use super::{Color, DrawRange, Model, Position};

/// Segments in the face outline. 60 puts one vertex on every minute mark.
const FACE_SEGMENTS: usize = 60;

const FACE_RADIUS: f32 = 0.9;
const BIG_HAND_LENGTH: f32 = 0.75;
const SMALL_HAND_LENGTH: f32 = 0.45;

/// Builds the default clock model: face outline, big hand, small hand, and
/// the experimental marker segment, in part order.
///
/// Hand geometry points at twelve o'clock; orientation comes from the
/// per-part transforms at draw time.
pub fn clock_model() -> Model {
    let mut builder = PartBuilder::default();

    builder.part(
        Color::rgb(0.9, 0.9, 0.9),
        (0..FACE_SEGMENTS).map(|i| {
            let angle = i as f32 / FACE_SEGMENTS as f32 * TAU;
            Position {
                x: FACE_RADIUS * angle.cos(),
                y: FACE_RADIUS * angle.sin(),
            }
        }),
    );

    builder.part(
        Color::rgb(0.9, 0.2, 0.2),
        [
            Position { x: 0.0, y: 0.0 },
            Position { x: 0.0, y: BIG_HAND_LENGTH },
        ],
    );

    builder.part(
        Color::rgb(0.2, 0.6, 0.9),
        [
            Position { x: 0.0, y: 0.0 },
            Position { x: 0.0, y: SMALL_HAND_LENGTH },
        ],
    );

    builder.part(
        Color::rgb(0.9, 0.8, 0.2),
        [
            Position { x: 0.0, y: 0.0 },
            Position { x: 0.12, y: 0.12 },
        ],
    );

    builder.build()
}

/// Accumulates per-part geometry into contiguous attribute arrays.
#[derive(Default)]
struct PartBuilder {
    positions: Vec<Position>,
    colors: Vec<Color>,
    ranges: Vec<DrawRange>,
}

impl PartBuilder {
    fn part(&mut self, color: Color, points: impl IntoIterator<Item = Position>) {
        let first = self.positions.len() as i32;
        for point in points {
            self.positions.push(point);
            self.colors.push(color);
        }
        let count = self.positions.len() as i32 - first;
        self.ranges.push(DrawRange { first, count });
    }

    fn build(self) -> Model {
        let ranges: [DrawRange; 4] = self
            .ranges
            .try_into()
            .expect("clock geometry has exactly four parts by construction");

        Model::new(self.positions, self.colors, ranges)
            .expect("clock geometry is contiguous by construction")
    }
}
