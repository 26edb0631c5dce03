//! Drag-to-reorder state machine.
//!
//! `Idle` -> `Pending` on pointer-down over a drag handle. `Pending` becomes
//! `Dragging` only once the pointer has travelled past the activation
//! distance, so a click into a field inside the block never starts a drag.
//! While dragging, the drop target is the droppable whose center is closest
//! to the dragged block's center. Release commits a stable move; release over
//! the origin, over nothing, or a cancel leaves the list unchanged.

use lesson_core::{BlockId, BlockList};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    fn distance_sq(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn translated(&self, by: Point) -> Rect {
        Rect::new(self.x + by.x, self.y + by.y, self.width, self.height)
    }
}

/// Measured on-screen rect of one block, as supplied by the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Droppable {
    pub id: BlockId,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Pointer travel (px) required before a press turns into a drag.
    pub activation_distance: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: 5.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Pressed on a handle but not yet past the activation distance.
    Pending { id: BlockId, origin: Point },
    Dragging {
        id: BlockId,
        origin: Point,
        delta: Point,
        over: Option<BlockId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// The block moved from `from` to `to`.
    Moved { id: BlockId, from: usize, to: usize },
    /// A drag ended without changing the list.
    Cancelled,
    /// No drag was in progress.
    Ignored,
}

/// Droppable whose center is nearest `target`. Ties go to the earlier droppable.
pub fn closest_center(target: Point, layout: &[Droppable]) -> Option<&BlockId> {
    layout
        .iter()
        .map(|d| (d.rect.center().distance_sq(target), &d.id))
        .fold(None, |best: Option<(f32, &BlockId)>, (dist, id)| match best {
            Some((best_dist, _)) if best_dist <= dist => best,
            _ => Some((dist, id)),
        })
        .map(|(_, id)| id)
}

/// Turn "`active` was dropped over `over`" into an outcome against `blocks`.
///
/// Both ids must be present and distinct; otherwise the drop is cancelled.
pub fn resolve_drop(blocks: &BlockList, active: &BlockId, over: Option<&BlockId>) -> DragOutcome {
    let Some(over) = over else {
        return DragOutcome::Cancelled;
    };
    if over == active {
        return DragOutcome::Cancelled;
    }
    match (blocks.position(active), blocks.position(over)) {
        (Some(from), Some(to)) if from != to => DragOutcome::Moved {
            id: active.clone(),
            from,
            to,
        },
        _ => DragOutcome::Cancelled,
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReorderController {
    config: DragConfig,
    state: DragState,
}

impl ReorderController {
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            state: DragState::Idle,
        }
    }

    pub fn config(&self) -> DragConfig {
        self.config
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Block currently being dragged.
    pub fn active(&self) -> Option<&BlockId> {
        match &self.state {
            DragState::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Current drop target.
    pub fn over(&self) -> Option<&BlockId> {
        match &self.state {
            DragState::Dragging { over, .. } => over.as_ref(),
            _ => None,
        }
    }

    /// Pointer pressed on the drag handle of `id`. Ignored unless idle.
    pub fn press(&mut self, id: BlockId, at: Point) {
        if matches!(self.state, DragState::Idle) {
            tracing::debug!(block = %id, "drag pending");
            self.state = DragState::Pending { id, origin: at };
        }
    }

    /// Pointer moved to `at`.
    pub fn move_to(&mut self, at: Point, layout: &[Droppable]) {
        match &mut self.state {
            DragState::Idle => {}
            DragState::Pending { id, origin } => {
                let threshold = self.config.activation_distance;
                if at.distance_sq(*origin) <= threshold * threshold {
                    return;
                }
                let id = id.clone();
                let origin = *origin;
                let delta = at.offset_from(origin);
                let over = resolve_over(&id, delta, layout);
                tracing::debug!(block = %id, "drag started");
                self.state = DragState::Dragging {
                    id,
                    origin,
                    delta,
                    over,
                };
            }
            DragState::Dragging {
                id,
                origin,
                delta,
                over,
            } => {
                *delta = at.offset_from(*origin);
                *over = resolve_over(id, *delta, layout);
            }
        }
    }

    /// Pointer released at `at`. Always returns to `Idle`.
    ///
    /// Only an active drag can commit; a release while still `Pending` is a
    /// click, however far the pointer is from the press.
    pub fn release(&mut self, at: Point, layout: &[Droppable], blocks: &BlockList) -> DragOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { id, origin, .. } => {
                let over = resolve_over(&id, at.offset_from(origin), layout);
                let outcome = resolve_drop(blocks, &id, over.as_ref());
                tracing::debug!(block = %id, ?outcome, "drag ended");
                outcome
            }
            DragState::Idle | DragState::Pending { .. } => DragOutcome::Ignored,
        }
    }

    /// Abort any press or drag (pointer capture lost, block unmounted, escape).
    pub fn cancel(&mut self) -> DragOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { id, .. } => {
                tracing::debug!(block = %id, "drag cancelled");
                DragOutcome::Cancelled
            }
            DragState::Idle | DragState::Pending { .. } => DragOutcome::Ignored,
        }
    }
}

fn resolve_over(active: &BlockId, delta: Point, layout: &[Droppable]) -> Option<BlockId> {
    let start = layout.iter().find(|d| &d.id == active)?;
    let center = start.rect.translated(delta).center();
    closest_center(center, layout).cloned()
}
