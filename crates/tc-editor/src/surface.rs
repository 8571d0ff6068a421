//! Canvas surface: the single state object behind the widget.
//!
//! Owns the pending text buffer, the style controller, the element store,
//! the undo/redo history, and the drag tracker. Hosts drive it through
//! the operations below and read it back for rendering; nothing else
//! mutates canvas state.

use crate::drag::{DragOutcome, DragTracker};
use crate::history::HistoryTracker;
use crate::input::{InputEvent, Modifiers};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use tc_core::config::CanvasConfig;
use tc_core::error::StoreError;
use tc_core::model::{Element, Position, Style};
use tc_core::store::ElementStore;
use tc_core::style::StyleController;
use tc_render::hit::hit_test;
use tc_render::layout::{LayoutParams, TextBlock, TextMeasure, layout_elements};

/// Result of a key press in the text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    pub action: Option<ShortcutAction>,
    /// Canvas state changed; re-render.
    pub changed: bool,
    /// The host must suppress the key's default behavior.
    pub prevent_default: bool,
}

pub struct CanvasSurface {
    config: CanvasConfig,
    pending: String,
    container_height: f64,
    styles: StyleController,
    store: ElementStore,
    history: HistoryTracker,
    drag: DragTracker,
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl CanvasSurface {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            container_height: config.height,
            pending: String::new(),
            styles: StyleController::new(),
            store: ElementStore::new(config.ids),
            history: HistoryTracker::new(config.history, config.max_depth),
            drag: DragTracker::new(),
            config,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn elements(&self) -> &[Element] {
        self.store.elements()
    }

    pub fn style(&self) -> Style {
        self.styles.current()
    }

    pub fn styles_mut(&mut self) -> &mut StyleController {
        &mut self.styles
    }

    pub fn pending_text(&self) -> &str {
        &self.pending
    }

    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Element being dragged and its live position.
    pub fn drag_preview(&self) -> Option<(usize, Position)> {
        self.drag.preview()
    }

    // ─── Text entry ──────────────────────────────────────────────────────

    pub fn set_pending_text(&mut self, text: &str) {
        self.pending.clear();
        self.pending.push_str(text);
    }

    /// Commit the pending text as a new element in the current style.
    ///
    /// Blank (empty or whitespace-only) text is ignored and nothing
    /// changes. Returns whether an element was added.
    pub fn submit(&mut self) -> bool {
        if self.pending.trim().is_empty() {
            return false;
        }
        let text = std::mem::take(&mut self.pending);
        let before = self.store.snapshot();
        self.store.commit(
            text,
            self.styles.current(),
            self.container_height,
            self.config.spawn_offset,
        );
        self.history.record_commit(before, self.store.elements());
        true
    }

    /// Handle a key pressed in the text field.
    pub fn handle_key(&mut self, key: &str, modifiers: Modifiers) -> KeyOutcome {
        let Some(action) = ShortcutMap::resolve(key, modifiers) else {
            return KeyOutcome {
                action: None,
                changed: false,
                prevent_default: false,
            };
        };
        let changed = match action {
            ShortcutAction::Submit => self.submit(),
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
            ShortcutAction::ToggleBold => {
                self.styles.toggle_bold();
                true
            }
            ShortcutAction::ToggleItalic => {
                self.styles.toggle_italic();
                true
            }
            ShortcutAction::ToggleUnderline => {
                self.styles.toggle_underlined();
                true
            }
        };
        KeyOutcome {
            action: Some(action),
            changed,
            prevent_default: true,
        }
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Returns whether the element list changed.
    pub fn undo(&mut self) -> bool {
        self.drag.cancel();
        match self.history.undo(self.store.elements()) {
            Some(previous) => {
                self.store.restore(previous);
                true
            }
            None => false,
        }
    }

    /// Returns whether the element list changed.
    pub fn redo(&mut self) -> bool {
        self.drag.cancel();
        match self.history.redo(self.store.elements()) {
            Some(next) => {
                self.store.restore(next);
                true
            }
            None => false,
        }
    }

    // ─── Dragging ────────────────────────────────────────────────────────

    /// Lay out every element, with the dragged one at its live position.
    pub fn layout(&self, measure: &dyn TextMeasure) -> Vec<TextBlock> {
        let params = LayoutParams {
            padding: self.config.padding,
            placeholder: &self.config.placeholder,
        };
        layout_elements(self.store.elements(), self.drag.preview(), params, measure)
    }

    /// Feed a pointer event. `blocks` is the layout the user is looking at,
    /// used to find the element under the pointer. Returns whether the
    /// canvas needs re-rendering.
    pub fn handle_pointer(&mut self, event: &InputEvent, blocks: &[TextBlock]) -> bool {
        let hit = match event {
            InputEvent::PointerDown { x, y, .. } => hit_test(blocks, *x, *y).and_then(|index| {
                self.store
                    .get(index)
                    .map(|element| (index, element.position()))
            }),
            _ => None,
        };
        match self.drag.handle(event, hit) {
            DragOutcome::Idle => false,
            DragOutcome::Started { .. } | DragOutcome::Moved { .. } => true,
            DragOutcome::Finished { index, position } => {
                if let Err(e) = self.drag_end(index, position.x, position.y) {
                    log::warn!("drag dropped: {e}");
                }
                true
            }
        }
    }

    /// Finish a drag of element `index` at `(x, y)`. Not recorded in history.
    ///
    /// # Errors
    /// `StoreError::IndexOutOfBounds` if the element no longer exists.
    pub fn drag_end(&mut self, index: usize, x: f64, y: f64) -> Result<(), StoreError> {
        self.store.reposition(index, x, y)
    }

    // ─── Container ───────────────────────────────────────────────────────

    /// Track the rendered height of the surface. Only affects where
    /// future commits spawn.
    pub fn resize(&mut self, height: f64) {
        self.container_height = height;
    }
}
