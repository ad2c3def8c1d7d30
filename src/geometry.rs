use crate::{BoardCell, CellStatus, Tile};
use std::ops::{Add, Sub};

/// A position in window pixels with the origin at the bottom left.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    /// Horizontal component, growing to the right.
    pub x: f32,
    /// Vertical component, growing upwards.
    pub y: f32,
}

impl Point {
    /// A new [point](Point).
    #[inline]
    pub const fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    /// This point moved by `dx` and `dy`.
    #[inline]
    pub fn translate(self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of an image in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// A new [size](Size).
    #[inline]
    pub const fn new(width: f32, height: f32) -> Size {
        Size { width, height }
    }

    /// This size multiplied by `scale` in both directions.
    #[inline]
    pub fn scaled(self, scale: f32) -> Size {
        Size::new(self.width * scale, self.height * scale)
    }
}

/// Whether `point` lies inside the polygon described by `vertices` in order.
///
/// Casts a ray from `point` towards positive x and counts crossed edges. Points exactly on an
/// edge may land on either side. Fewer than `3` vertices or self-intersecting polygons are
/// not supported.
pub fn contains(point: Point, vertices: &[Point]) -> bool {
    let mut inside = false;
    let Some(&last) = vertices.last() else {
        return false;
    };

    let mut previous = last;
    for &current in vertices {
        if (current.y > point.y) != (previous.y > point.y) {
            let crossing_x = current.x
                + (point.y - current.y) * (previous.x - current.x) / (previous.y - current.y);
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        previous = current;
    }

    inside
}

/// # Returns
///
/// The average of `vertices`, or [None] when there are none.
pub fn centroid(vertices: &[Point]) -> Option<Point> {
    if vertices.is_empty() {
        return None;
    }
    let sum = vertices
        .iter()
        .fold(Point::default(), |sum, &vertex| sum + vertex);
    let len = vertices.len() as f32;
    Some(Point::new(sum.x / len, sum.y / len))
}

/// # Returns
///
/// [CellStatus::Selected] when `cell` is not occupied and contains `pointer`,
/// otherwise [CellStatus::Free]. Occupied cells are never reported as hit.
pub fn cell_hit_test(pointer: Point, cell: &BoardCell) -> CellStatus {
    if cell.status() != CellStatus::Occupied && contains(pointer, cell.vertices()) {
        CellStatus::Selected
    } else {
        CellStatus::Free
    }
}

/// Whether `pointer` lies strictly inside the bounding box of the block of `tile`.
///
/// The block is anchored at its bottom center, so the box spans half the scaled block width
/// on either side of the anchor and the full scaled block height above it. The gem is ignored.
pub fn tile_hit_test(pointer: Point, tile: &Tile) -> bool {
    let sprite = tile.sprite();
    let Size { width, height } = sprite.scaled_block_size();
    let anchor = sprite.position();

    let x_bounds = (anchor.x - width / 2.0, anchor.x + width / 2.0);
    let y_bounds = (anchor.y, anchor.y + height);

    (x_bounds.0 < pointer.x && pointer.x < x_bounds.1)
        && (y_bounds.0 < pointer.y && pointer.y < y_bounds.1)
}
