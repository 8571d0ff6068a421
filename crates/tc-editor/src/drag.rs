//! Drag gesture tracking.
//!
//! A drag grabs one element at pointer-down, follows the pointer while
//! keeping the grab offset, and reports the final resting position at
//! pointer-up. Nothing is written to the store until the gesture ends;
//! in between, `preview()` tells the painter where to draw the element.

use crate::input::InputEvent;
use tc_core::model::Position;

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    index: usize,
    /// Pointer position minus element origin at grab time.
    grab_dx: f64,
    grab_dy: f64,
    current: Position,
}

/// What a pointer event did to the drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// No drag involved (background click, stray move/up).
    Idle,
    Started { index: usize },
    Moved { index: usize, position: Position },
    /// Gesture over: reposition `index` to `position`.
    Finished { index: usize, position: Position },
}

#[derive(Debug, Default)]
pub struct DragTracker {
    active: Option<DragState>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Element being dragged and where it currently sits.
    pub fn preview(&self) -> Option<(usize, Position)> {
        self.active.map(|state| (state.index, state.current))
    }

    /// Abandon the gesture without reporting a final position.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Feed a pointer event. `hit` is the index and origin of the topmost
    /// element under the pointer, used only on pointer-down.
    pub fn handle(&mut self, event: &InputEvent, hit: Option<(usize, Position)>) -> DragOutcome {
        match event {
            InputEvent::PointerDown { x, y, .. } => {
                let Some((index, origin)) = hit else {
                    self.active = None;
                    return DragOutcome::Idle;
                };
                self.active = Some(DragState {
                    index,
                    grab_dx: x - origin.x,
                    grab_dy: y - origin.y,
                    current: origin,
                });
                log::debug!("drag start on element {index}");
                DragOutcome::Started { index }
            }
            InputEvent::PointerMove { x, y, .. } => match self.active.as_mut() {
                Some(state) => {
                    state.current = Position::new(x - state.grab_dx, y - state.grab_dy);
                    DragOutcome::Moved {
                        index: state.index,
                        position: state.current,
                    }
                }
                None => DragOutcome::Idle,
            },
            InputEvent::PointerUp { x, y, .. } => match self.active.take() {
                Some(state) => {
                    let position = Position::new(x - state.grab_dx, y - state.grab_dy);
                    log::debug!(
                        "drag end on element {} at ({}, {})",
                        state.index,
                        position.x,
                        position.y
                    );
                    DragOutcome::Finished {
                        index: state.index,
                        position,
                    }
                }
                None => DragOutcome::Idle,
            },
            InputEvent::Key { .. } => DragOutcome::Idle,
        }
    }
}
