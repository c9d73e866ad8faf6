//! Tile collision projection against an external occupancy query.

use crate::float::Float;
use crate::vec::Vec2;
use crate::chain::Chain;
use crate::observer::{StepObserver, NoOpStepObserver};

/// Clearance as a fraction of the cell size. An approximation tuned for
/// visual plausibility, not a derived contact response: it places the
/// particle just outside the half-extent of the cell along the push
/// direction.
const CLEARANCE_FACTOR: f32 = 0.75;

/// Push direction used when a particle sits exactly on a solid cell's
/// center. Points up (negative y), out of typical ground tiles.
const PUSH_FALLBACK: (f32, f32) = (0.0, -1.0);

/// Fixed-size grid mapping world positions to tile cells.
///
/// The actual occupancy data lives with the caller; collision queries
/// take an `is_solid` predicate over cell coordinates.
pub struct TileGrid<F: Float> {
    cell_size: F,
}

impl<F: Float> TileGrid<F> {
    pub fn new(cell_size: F) -> Self {
        TileGrid { cell_size }
    }

    pub fn cell_size(&self) -> F {
        self.cell_size
    }

    /// Cell coordinates containing `pos`.
    pub fn cell_of(&self, pos: Vec2<F>) -> (i32, i32) {
        (
            (pos.x / self.cell_size).floor().to_i32(),
            (pos.y / self.cell_size).floor().to_i32(),
        )
    }

    /// World-space center of a cell.
    pub fn cell_center(&self, cell_x: i32, cell_y: i32) -> Vec2<F> {
        Vec2::new(
            (F::from_f32(cell_x as f32) + F::half()) * self.cell_size,
            (F::from_f32(cell_y as f32) + F::half()) * self.cell_size,
        )
    }
}

impl<F: Float> Chain<F> {
    /// Push unanchored particles out of solid tiles.
    ///
    /// A particle inside a solid cell is moved to the cell center plus a
    /// fixed clearance along the outward direction. This is a
    /// position-only correction: previous positions are untouched, so it
    /// does not conserve momentum. Intentionally approximate, and never
    /// automatic; call it after [`update`](Chain::update) when the chain
    /// should respect the world.
    pub fn apply_tile_collision<Q>(&mut self, grid: &TileGrid<F>, is_solid: Q)
    where
        Q: FnMut(i32, i32) -> bool,
    {
        self.apply_tile_collision_observed(grid, is_solid, &mut NoOpStepObserver);
    }

    /// Same as [`apply_tile_collision`](Chain::apply_tile_collision),
    /// reporting each projected particle to `observer`.
    pub fn apply_tile_collision_observed<Q, O>(
        &mut self,
        grid: &TileGrid<F>,
        mut is_solid: Q,
        observer: &mut O,
    ) where
        Q: FnMut(i32, i32) -> bool,
        O: StepObserver,
    {
        let clearance = grid.cell_size() * F::from_f32(CLEARANCE_FACTOR);
        let fallback = Vec2::new(F::from_f32(PUSH_FALLBACK.0), F::from_f32(PUSH_FALLBACK.1));

        for i in 0..self.positions.len() {
            if self.is_anchored(i) {
                continue;
            }
            let pos = self.positions[i];
            let (cell_x, cell_y) = grid.cell_of(pos);
            if !is_solid(cell_x, cell_y) {
                continue;
            }
            let center = grid.cell_center(cell_x, cell_y);
            let push = (pos - center).normalize_or(fallback);
            self.positions[i] = center + push.scale(clearance);
            observer.on_collision_projected(i);
        }
    }
}
