use crate::error::BoundsError;
use crate::grid::{round_down, round_up, GRID_RESOLUTION, MAX_X, MAX_Y, MIN_X, MIN_Y};
use crate::tile::Tile;

/// A validated bounding box in the archive's projected coordinate system.
///
/// # Example
/// ```rust
/// # use aerial_tile_downloader::BoundingBox;
/// let bbox = BoundingBox::new(880_000, 1_650_000, 890_000, 1_655_000).unwrap();
/// assert_eq!(bbox.tile_count(), 2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    left: i64,
    bottom: i64,
    right: i64,
    top: i64,
}

impl BoundingBox {
    /// Creates a bounding box, checking that it is well-ordered and lies
    /// within the area covered by the archive.
    pub fn new(left: i64, bottom: i64, right: i64, top: i64) -> Result<Self, BoundsError> {
        if left > right {
            return Err(BoundsError::LeftGreaterThanRight { left, right });
        }
        if bottom > top {
            return Err(BoundsError::BottomGreaterThanTop { bottom, top });
        }
        if left < MIN_X {
            return Err(BoundsError::LeftOutOfArea(left));
        }
        if right > MAX_X {
            return Err(BoundsError::RightOutOfArea(right));
        }
        if bottom < MIN_Y {
            return Err(BoundsError::BottomOutOfArea(bottom));
        }
        if top > MAX_Y {
            return Err(BoundsError::TopOutOfArea(top));
        }

        Ok(BoundingBox {
            left,
            bottom,
            right,
            top,
        })
    }

    pub fn left(&self) -> i64 {
        self.left
    }

    pub fn bottom(&self) -> i64 {
        self.bottom
    }

    pub fn right(&self) -> i64 {
        self.right
    }

    pub fn top(&self) -> i64 {
        self.top
    }

    /// Expands the box outwards onto the tile grid.
    ///
    /// The valid area is grid aligned, so the result still lies within it.
    pub fn normalized(&self) -> Self {
        BoundingBox {
            left: round_down(self.left),
            bottom: round_down(self.bottom),
            right: round_up(self.right),
            top: round_up(self.top),
        }
    }

    /// The x-coordinates of the tile columns covering the box.
    ///
    /// The easternmost column is left out unless the box is a single column
    /// wide.
    pub fn columns(&self) -> Vec<i64> {
        let bbox = self.normalized();
        axis(bbox.left, bbox.right, bbox.left)
    }

    /// The y-coordinates of the tile rows covering the box.
    ///
    /// The northernmost row is left out unless the box is a single row high.
    pub fn rows(&self) -> Vec<i64> {
        let bbox = self.normalized();
        axis(bbox.bottom, bbox.top, bbox.top)
    }

    /// Creates an iterator over all tiles in the box, column by column.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> {
        let rows = self.rows();

        self.columns()
            .into_iter()
            .flat_map(move |x| rows.clone().into_iter().map(move |y| Tile::new(x, y)))
    }

    pub fn tile_count(&self) -> usize {
        self.columns().len() * self.rows().len()
    }
}

fn axis(start: i64, end: i64, degenerate: i64) -> Vec<i64> {
    if start == end {
        vec![degenerate]
    } else {
        (start..end).step_by(GRID_RESOLUTION as usize).collect()
    }
}
