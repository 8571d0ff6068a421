//! WASM bridge for the text canvas: exposes the Rust surface to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host page owns the DOM
//! controls (toolbar, text field, buttons) and forwards their events here;
//! the canvas itself is painted through `render`.

mod render2d;
mod shell;

use serde_json::json;
use tc_core::config::CanvasConfig;
use tc_core::model::{Alignment, FontFamily, FontSize};
use tc_editor::CanvasSurface;
use tc_editor::input::{InputEvent, Modifiers};
use tc_render::font::inline_css;
use tc_render::layout::{ApproxMeasure, TextBlock};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing canvas controller.
///
/// Holds the canvas surface plus the layout last painted, which pointer
/// events hit test against.
#[wasm_bindgen]
pub struct TextCanvas {
    surface: CanvasSurface,
    width: f64,
    height: f64,
    /// Blocks from the last `render`; `None` once the canvas changed.
    painted: Option<Vec<TextBlock>>,
    dark_mode: bool,
}

#[wasm_bindgen]
impl TextCanvas {
    /// Create a canvas controller with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();
        Self::from_config(width, height, CanvasConfig::default())
    }

    /// Create a canvas controller from a JSON config object
    /// (see `CanvasConfig` for fields).
    ///
    /// # Errors
    /// Returns the config error message if the JSON is malformed or invalid.
    pub fn with_config(
        width: f64,
        height: f64,
        config_json: &str,
    ) -> Result<TextCanvas, JsValue> {
        console_error_panic_hook_setup();
        let config = CanvasConfig::from_json(config_json).map_err(|e| {
            log::warn!("rejected canvas config: {e}");
            JsValue::from_str(&e.to_string())
        })?;
        Ok(Self::from_config(width, height, config))
    }

    // ─── Text entry ──────────────────────────────────────────────────────

    pub fn set_pending_text(&mut self, text: &str) {
        self.surface.set_pending_text(text);
    }

    pub fn pending_text(&self) -> String {
        self.surface.pending_text().to_string()
    }

    /// "Add Text" button. Returns `true` if an element was added.
    pub fn submit(&mut self) -> bool {
        let changed = self.surface.submit();
        self.touch(changed)
    }

    /// Handle a keydown in the text field. Returns a JSON string:
    /// `{"action":"<name>"|null, "changed":bool, "preventDefault":bool}`
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let modifiers = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        let outcome = self.surface.handle_key(key, modifiers);
        self.touch(outcome.changed);
        json!({
            "action": outcome.action.map(|a| a.name()),
            "changed": outcome.changed,
            "preventDefault": outcome.prevent_default,
        })
        .to_string()
    }

    // ─── Toolbar ─────────────────────────────────────────────────────────

    /// Returns the new bold state.
    pub fn toggle_bold(&mut self) -> bool {
        self.surface.styles_mut().toggle_bold()
    }

    pub fn toggle_italic(&mut self) -> bool {
        self.surface.styles_mut().toggle_italic()
    }

    pub fn toggle_underlined(&mut self) -> bool {
        self.surface.styles_mut().toggle_underlined()
    }

    /// Returns `false` if `px` is not one of the offered sizes.
    pub fn set_font_size(&mut self, px: u32) -> bool {
        match FontSize::try_from(px) {
            Ok(size) => {
                self.surface.styles_mut().set_font_size(size);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// Returns `false` if `name` is not one of the offered families.
    pub fn set_font_family(&mut self, name: &str) -> bool {
        match name.parse::<FontFamily>() {
            Ok(family) => {
                self.surface.styles_mut().set_font_family(family);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// `"left"`, `"center"`, or `"right"`.
    pub fn set_alignment(&mut self, alignment: &str) -> bool {
        match alignment.parse::<Alignment>() {
            Ok(alignment) => {
                self.surface.styles_mut().set_alignment(alignment);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// Current toolbar style as JSON, for highlighting active buttons.
    pub fn get_style_json(&self) -> String {
        serde_json::to_string(&self.surface.style()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Choices for the toolbar dropdowns and alignment buttons.
    pub fn get_toolbar_options_json(&self) -> String {
        let sizes: Vec<u32> = FontSize::ALL.into_iter().map(u32::from).collect();
        let families: Vec<&str> = FontFamily::ALL.into_iter().map(FontFamily::name).collect();
        let alignments: Vec<&str> = Alignment::ALL.into_iter().map(Alignment::as_str).collect();
        json!({
            "fontSizes": sizes,
            "fontFamilies": families,
            "alignments": alignments,
        })
        .to_string()
    }

    // ─── History ─────────────────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        let changed = self.surface.undo();
        self.touch(changed)
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.surface.redo();
        self.touch(changed)
    }

    pub fn can_undo(&self) -> bool {
        self.surface.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.surface.can_redo()
    }

    // ─── Elements ────────────────────────────────────────────────────────

    /// Placed elements in paint order, with inline CSS for DOM hosts.
    pub fn get_elements_json(&self) -> String {
        let config = self.surface.config();
        let elements: Vec<serde_json::Value> = self
            .surface
            .elements()
            .iter()
            .map(|el| {
                let pos = el.position();
                json!({
                    "id": el.id(),
                    "text": el.text(),
                    "displayText": el.display_text(&config.placeholder),
                    "style": el.style(),
                    "position": pos,
                    "css": inline_css(el.style(), pos.x, pos.y, config.padding),
                })
            })
            .collect();
        serde_json::Value::Array(elements).to_string()
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    /// Returns true if the canvas needs re-rendering.
    pub fn handle_pointer_down(
        &mut self,
        x: f64,
        y: f64,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> bool {
        let event = InputEvent::from_pointer_down(x, y, modifiers(shift, ctrl, alt, meta));
        self.pointer(&event)
    }

    pub fn handle_pointer_move(
        &mut self,
        x: f64,
        y: f64,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> bool {
        let event = InputEvent::from_pointer_move(x, y, modifiers(shift, ctrl, alt, meta));
        self.pointer(&event)
    }

    pub fn handle_pointer_up(
        &mut self,
        x: f64,
        y: f64,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> bool {
        let event = InputEvent::from_pointer_up(x, y, modifiers(shift, ctrl, alt, meta));
        self.pointer(&event)
    }

    /// Drag completion reported by a host that runs the gesture itself.
    pub fn drag_end(&mut self, index: usize, x: f64, y: f64) -> bool {
        match self.surface.drag_end(index, x, y) {
            Ok(()) => self.touch(true),
            Err(e) => {
                log::warn!("drag_end: {e}");
                false
            }
        }
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Resize the canvas. The height also moves where new elements spawn.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.surface.resize(height);
        self.painted = None;
    }

    pub fn set_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
    }

    /// Render the canvas to a Canvas2D context.
    pub fn render(&mut self, ctx: &CanvasRenderingContext2d) {
        let blocks = self.surface.layout(&render2d::Canvas2dMeasure { ctx });
        let theme = if self.dark_mode {
            render2d::CanvasTheme::dark()
        } else {
            render2d::CanvasTheme::light()
        };
        let dragging = self.surface.drag_preview().map(|(index, _)| index);
        render2d::render_blocks(ctx, &blocks, self.width, self.height, &theme, dragging);
        self.painted = Some(blocks);
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

impl TextCanvas {
    fn from_config(width: f64, height: f64, config: CanvasConfig) -> Self {
        let mut surface = CanvasSurface::new(config);
        surface.resize(height);
        Self {
            surface,
            width,
            height,
            painted: None,
            dark_mode: false,
        }
    }

    fn pointer(&mut self, event: &InputEvent) -> bool {
        let approx;
        let blocks: &[TextBlock] = match &self.painted {
            Some(blocks) => blocks,
            None => {
                approx = self.surface.layout(&ApproxMeasure);
                &approx
            }
        };
        let changed = self.surface.handle_pointer(event, blocks);
        self.touch(changed)
    }

    /// Drop the painted layout when canvas state changed.
    fn touch(&mut self, changed: bool) -> bool {
        if changed {
            self.painted = None;
        }
        changed
    }
}

fn modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers {
        shift,
        ctrl,
        alt,
        meta,
    }
}

/// Insert the static header and footer around the element with `root_id`.
#[wasm_bindgen]
pub fn mount_shell(root_id: &str) -> Result<(), JsValue> {
    shell::mount(root_id, &shell::ShellConfig::default())
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("TC WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
