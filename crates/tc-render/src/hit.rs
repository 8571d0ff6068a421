//! Hit testing: point → element lookup.
//!
//! Walks laid-out blocks back to front (last painted = topmost).

use crate::layout::TextBlock;
use kurbo::Point;

/// Store index of the topmost block containing `(px, py)`, if any.
pub fn hit_test(blocks: &[TextBlock], px: f64, py: f64) -> Option<usize> {
    let point = Point::new(px, py);
    blocks
        .iter()
        .rev()
        .find(|block| block.bounds.contains(point))
        .map(|block| block.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ApproxMeasure, LayoutParams, layout_elements};
    use tc_core::id::ElementId;
    use tc_core::model::{Element, Position, Style};

    fn blocks(positions: &[(f64, f64)]) -> Vec<TextBlock> {
        let elements: Vec<Element> = positions
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| {
                let id = ElementId::new(i as u64);
                Element::new(id, "Hello", Style::default(), Position::new(x, y))
            })
            .collect();
        let params = LayoutParams {
            padding: 5.0,
            placeholder: "New Text",
        };
        layout_elements(&elements, None, params, &ApproxMeasure)
    }

    #[test]
    fn hits_element_under_point() {
        let blocks = blocks(&[(0.0, 0.0), (200.0, 200.0)]);
        assert_eq!(hit_test(&blocks, 10.0, 10.0), Some(0));
        assert_eq!(hit_test(&blocks, 210.0, 210.0), Some(1));
    }

    #[test]
    fn misses_background() {
        let blocks = blocks(&[(0.0, 0.0)]);
        assert_eq!(hit_test(&blocks, 500.0, 500.0), None);
        assert_eq!(hit_test(&[], 0.0, 0.0), None);
    }

    #[test]
    fn overlapping_picks_topmost() {
        let blocks = blocks(&[(0.0, 0.0), (5.0, 5.0)]);
        assert_eq!(hit_test(&blocks, 10.0, 10.0), Some(1));
        // Only the first block covers its own top-left corner.
        assert_eq!(hit_test(&blocks, 1.0, 1.0), Some(0));
    }
}
