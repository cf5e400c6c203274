//! Rule variants hooked into move application.
//!
//! The executor calls [`MoveVariant::after_vacate`] once the mover's old
//! cell has been blocked and before the destination is occupied. The
//! destination is still blank at that point, so a variant can never
//! block it.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::game::{Coord, Grid};

/// Extra side effect of a move, applied between vacate and occupy.
pub trait MoveVariant: fmt::Debug + Send + Sync {
    /// Short name for logs and output.
    fn name(&self) -> &'static str;

    /// Apply the side effect of a move from `from` to `to`.
    ///
    /// Only called for queens that had a previous position.
    fn after_vacate(&self, grid: &mut Grid, from: Coord, to: Coord);
}

/// Plain isolation: vacated cells are blocked and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classic;

impl MoveVariant for Classic {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn after_vacate(&self, _grid: &mut Grid, _from: Coord, _to: Coord) {}
}

/// Impact-crater isolation.
///
/// A move covering more than one cell along either axis blocks every blank
/// orthogonal neighbour of the landing cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImpactCrater;

impl ImpactCrater {
    /// Check if a move is long enough to leave a crater.
    #[must_use]
    pub fn triggers(from: Coord, to: Coord) -> bool {
        from.axis_distance(to) > 1
    }
}

impl MoveVariant for ImpactCrater {
    fn name(&self) -> &'static str {
        "impact-crater"
    }

    fn after_vacate(&self, grid: &mut Grid, from: Coord, to: Coord) {
        if !Self::triggers(from, to) {
            return;
        }
        let (neighbours, count) = to.adjacent(grid.width(), grid.height());
        for coord in &neighbours[..count as usize] {
            grid.block_if_blank(*coord);
        }
    }
}

/// Configuration-level choice of variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Variant {
    /// No side effect beyond blocking the vacated cell.
    Classic,
    /// Long moves crater the landing cell's orthogonal neighbours.
    #[default]
    ImpactCrater,
}

impl Variant {
    /// Build the rule object for this variant.
    #[must_use]
    pub fn rule(self) -> Arc<dyn MoveVariant> {
        match self {
            Variant::Classic => Arc::new(Classic),
            Variant::ImpactCrater => Arc::new(ImpactCrater),
        }
    }
}
