//! Text block layout.
//!
//! Each element becomes a padded block at its position. Text is split on
//! `\n` only (pre-wrap, no automatic wrapping); the block is as wide as
//! its longest line and every line is aligned inside it.
//!
//! Measurement sits behind `TextMeasure` so the browser can supply real
//! glyph metrics while tests and pre-render hit testing use the
//! approximation in `ApproxMeasure`.

use kurbo::Rect;
use smallvec::SmallVec;
use tc_core::model::{Alignment, Element, Position, Style};

/// Line height as a multiple of font size.
pub const LINE_HEIGHT: f64 = 1.2;

/// Width of a single line of text in a given style.
pub trait TextMeasure {
    fn line_width(&self, line: &str, style: &Style) -> f64;
}

/// Average-advance approximation: no font files needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxMeasure;

impl TextMeasure for ApproxMeasure {
    fn line_width(&self, line: &str, style: &Style) -> f64 {
        let size = f64::from(style.font_size.px());
        let mut advance = if style.font_family.is_monospace() {
            0.6
        } else {
            0.52
        };
        if style.bold {
            advance *= 1.1;
        }
        line.chars().count() as f64 * size * advance
    }
}

/// Parameters shared by every block in one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams<'a> {
    pub padding: f64,
    pub placeholder: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub text: String,
    /// Absolute x of the line's left edge.
    pub x: f64,
    /// Absolute y of the line's top edge (draw with `textBaseline = top`).
    pub top: f64,
    pub width: f64,
}

impl LineLayout {
    /// Y of the underline stroke for a line set in `font_size`.
    pub fn underline_y(&self, font_size: f64) -> f64 {
        self.top + font_size * 1.05
    }
}

/// A laid-out element, ready to paint or hit test.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Index of the element in the store.
    pub index: usize,
    pub bounds: Rect,
    pub style: Style,
    pub lines: SmallVec<[LineLayout; 2]>,
}

/// Lay out one element at `position`.
pub fn layout_element(
    index: usize,
    element: &Element,
    position: Position,
    params: LayoutParams<'_>,
    measure: &dyn TextMeasure,
) -> TextBlock {
    let style = *element.style();
    let size = f64::from(style.font_size.px());
    let line_height = size * LINE_HEIGHT;
    let text = element.display_text(params.placeholder);

    let widths: SmallVec<[(&str, f64); 2]> = text
        .split('\n')
        .map(|line| (line, measure.line_width(line, &style)))
        .collect();
    let content_width = widths.iter().map(|(_, w)| *w).fold(0.0, f64::max);

    let content_x = position.x + params.padding;
    let content_y = position.y + params.padding;
    let half_leading = (line_height - size) / 2.0;

    let lines: SmallVec<[LineLayout; 2]> = widths
        .iter()
        .enumerate()
        .map(|(i, (line, width))| {
            let offset = match style.alignment {
                Alignment::Left => 0.0,
                Alignment::Center => (content_width - width) / 2.0,
                Alignment::Right => content_width - width,
            };
            LineLayout {
                text: (*line).to_string(),
                x: content_x + offset,
                top: content_y + i as f64 * line_height + half_leading,
                width: *width,
            }
        })
        .collect();

    let height = lines.len() as f64 * line_height + 2.0 * params.padding;
    let width = content_width + 2.0 * params.padding;

    TextBlock {
        index,
        bounds: Rect::new(position.x, position.y, position.x + width, position.y + height),
        style,
        lines,
    }
}

/// Lay out every element in store order.
///
/// `preview` overrides one element's position while it is being dragged.
pub fn layout_elements(
    elements: &[Element],
    preview: Option<(usize, Position)>,
    params: LayoutParams<'_>,
    measure: &dyn TextMeasure,
) -> Vec<TextBlock> {
    elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let position = match preview {
                Some((dragged, at)) if dragged == i => at,
                _ => element.position(),
            };
            layout_element(i, element, position, params, measure)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tc_core::id::ElementId;
    use tc_core::model::FontFamily;

    const PARAMS: LayoutParams<'static> = LayoutParams {
        padding: 5.0,
        placeholder: "New Text",
    };

    /// Every character is exactly 10 units wide.
    struct FixedMeasure;

    impl TextMeasure for FixedMeasure {
        fn line_width(&self, line: &str, _style: &Style) -> f64 {
            line.chars().count() as f64 * 10.0
        }
    }

    fn element(text: &str, style: Style, x: f64, y: f64) -> Element {
        Element::new(ElementId::new(0), text, style, Position::new(x, y))
    }

    #[test]
    fn single_line_bounds_include_padding() {
        let el = element("abcd", Style::default(), 10.0, 200.0);
        let block = layout_element(0, &el, el.position(), PARAMS, &FixedMeasure);
        // 4 chars * 10 + 2 * 5 padding; 16 * 1.2 + 2 * 5
        assert_eq!(block.bounds, Rect::new(10.0, 200.0, 60.0, 200.0 + (19.2 + 10.0)));
        assert_eq!(block.lines.len(), 1);
        assert_eq!(block.lines[0].x, 15.0);
    }

    #[test]
    fn multiline_lines_are_aligned_in_block() {
        let right = Style {
            alignment: Alignment::Right,
            ..Style::default()
        };
        let el = element("abcd\nab", right, 0.0, 0.0);
        let block = layout_element(0, &el, el.position(), PARAMS, &FixedMeasure);
        let xs: Vec<f64> = block.lines.iter().map(|l| l.x).collect();
        assert_eq!(xs, vec![5.0, 25.0]);

        let center = Style {
            alignment: Alignment::Center,
            ..Style::default()
        };
        let el = element("abcd\nab", center, 0.0, 0.0);
        let block = layout_element(0, &el, el.position(), PARAMS, &FixedMeasure);
        assert_eq!(block.lines[1].x, 15.0);
        assert!(block.lines[1].top > block.lines[0].top);
    }

    #[test]
    fn empty_text_lays_out_placeholder() {
        let el = element("", Style::default(), 0.0, 0.0);
        let block = layout_element(0, &el, el.position(), PARAMS, &FixedMeasure);
        assert_eq!(block.lines[0].text, "New Text");
        assert_eq!(block.lines[0].width, 80.0);
    }

    #[test]
    fn preview_overrides_one_position() {
        let els = vec![
            element("a", Style::default(), 0.0, 0.0),
            element("b", Style::default(), 0.0, 0.0),
        ];
        let blocks = layout_elements(
            &els,
            Some((1, Position::new(50.0, 60.0))),
            PARAMS,
            &FixedMeasure,
        );
        assert_eq!(blocks[0].bounds.origin(), kurbo::Point::new(0.0, 0.0));
        assert_eq!(blocks[1].bounds.origin(), kurbo::Point::new(50.0, 60.0));
        assert_eq!(blocks[1].index, 1);
    }

    #[test]
    fn approx_measure_scales_with_size_and_weight() {
        let regular = Style::default();
        let bold = Style {
            bold: true,
            ..regular
        };
        let mono = Style {
            font_family: FontFamily::CourierNew,
            ..regular
        };
        let m = ApproxMeasure;
        assert!(m.line_width("hello", &bold) > m.line_width("hello", &regular));
        assert_eq!(m.line_width("hello", &mono), 5.0 * 16.0 * 0.6);
        assert_eq!(m.line_width("", &regular), 0.0);
    }
}
