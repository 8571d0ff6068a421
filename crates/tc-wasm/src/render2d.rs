//! Canvas2D renderer.
//!
//! Paints laid-out text blocks to an HTML `<canvas>` via
//! `CanvasRenderingContext2d`, and measures text with the same context
//! so layout matches what ends up on screen.

use tc_core::model::Style;
use tc_render::font::css_font;
use tc_render::layout::{ApproxMeasure, TextBlock, TextMeasure};
use web_sys::CanvasRenderingContext2d;

/// Theme-dependent colors for the canvas renderer.
pub struct CanvasTheme {
    pub bg: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub drag_outline: &'static str,
}

impl CanvasTheme {
    pub fn light() -> Self {
        Self {
            bg: "#FFFFFF",
            border: "#000000",
            text: "#000000",
            drag_outline: "rgba(0, 122, 255, 0.6)",
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: "#1C1C1E",
            border: "#8E8E93",
            text: "#F2F2F7",
            drag_outline: "rgba(10, 132, 255, 0.7)",
        }
    }
}

/// Measures lines with `ctx.measureText`, falling back to the average-advance
/// approximation if the browser refuses.
pub struct Canvas2dMeasure<'a> {
    pub ctx: &'a CanvasRenderingContext2d,
}

impl TextMeasure for Canvas2dMeasure<'_> {
    fn line_width(&self, line: &str, style: &Style) -> f64 {
        self.ctx.set_font(&css_font(style));
        match self.ctx.measure_text(line) {
            Ok(metrics) => metrics.width(),
            Err(_) => ApproxMeasure.line_width(line, style),
        }
    }
}

/// Render every block in paint order onto a `width` × `height` surface.
pub fn render_blocks(
    ctx: &CanvasRenderingContext2d,
    blocks: &[TextBlock],
    width: f64,
    height: f64,
    theme: &CanvasTheme,
    dragging: Option<usize>,
) {
    ctx.set_fill_style_str(theme.bg);
    ctx.fill_rect(0.0, 0.0, width, height);

    for block in blocks {
        draw_block(ctx, block, theme);
        if dragging == Some(block.index) {
            draw_drag_outline(ctx, block, theme);
        }
    }

    // 1px border around the surface
    ctx.set_stroke_style_str(theme.border);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(0.5, 0.5, width - 1.0, height - 1.0);
}

fn draw_block(ctx: &CanvasRenderingContext2d, block: &TextBlock, theme: &CanvasTheme) {
    let size = f64::from(block.style.font_size.px());
    log::trace!(
        "PAINT element {} at ({}, {})",
        block.index,
        block.bounds.x0,
        block.bounds.y0
    );

    ctx.save();
    ctx.set_font(&css_font(&block.style));
    ctx.set_fill_style_str(theme.text);
    ctx.set_text_baseline("top");
    ctx.set_text_align("left");

    for line in &block.lines {
        let _ = ctx.fill_text(&line.text, line.x, line.top);
        if block.style.underlined && line.width > 0.0 {
            let y = line.underline_y(size);
            ctx.set_stroke_style_str(theme.text);
            ctx.set_line_width((size / 15.0).max(1.0));
            ctx.begin_path();
            ctx.move_to(line.x, y);
            ctx.line_to(line.x + line.width, y);
            ctx.stroke();
        }
    }

    ctx.restore();
}

fn draw_drag_outline(ctx: &CanvasRenderingContext2d, block: &TextBlock, theme: &CanvasTheme) {
    let b = block.bounds;
    ctx.save();
    ctx.set_stroke_style_str(theme.drag_outline);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(b.x0, b.y0, b.width(), b.height());
    ctx.restore();
}
