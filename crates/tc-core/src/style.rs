//! Style controller: the style applied to the next committed element.
//!
//! Changing the controller never touches elements already on the canvas;
//! they keep the copy of `Style` taken when they were committed.

use crate::model::{Alignment, FontFamily, FontSize, Style};

#[derive(Debug, Clone, Default)]
pub struct StyleController {
    current: Style,
}

impl StyleController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current style, ready to freeze into an element.
    pub fn current(&self) -> Style {
        self.current
    }

    pub fn toggle_bold(&mut self) -> bool {
        self.current.bold = !self.current.bold;
        self.current.bold
    }

    pub fn toggle_italic(&mut self) -> bool {
        self.current.italic = !self.current.italic;
        self.current.italic
    }

    pub fn toggle_underlined(&mut self) -> bool {
        self.current.underlined = !self.current.underlined;
        self.current.underlined
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.current.font_size = size;
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.current.font_family = family;
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.current.alignment = alignment;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_toolbar() {
        let style = StyleController::new().current();
        assert_eq!(style.font_size.px(), 16);
        assert_eq!(style.font_family, FontFamily::Arial);
        assert!(!style.bold && !style.italic && !style.underlined);
        assert_eq!(style.alignment, Alignment::Left);
    }

    #[test]
    fn toggles_flip_and_report() {
        let mut ctl = StyleController::new();
        assert!(ctl.toggle_bold());
        assert!(ctl.toggle_italic());
        assert!(ctl.toggle_underlined());
        assert!(!ctl.toggle_bold());
        let style = ctl.current();
        assert!(!style.bold);
        assert!(style.italic && style.underlined);
    }

    #[test]
    fn setters_replace_values() {
        let mut ctl = StyleController::new();
        ctl.set_font_size(FontSize::ALL[9]);
        ctl.set_font_family(FontFamily::Verdana);
        ctl.set_alignment(Alignment::Center);
        let style = ctl.current();
        assert_eq!(style.font_size.px(), 36);
        assert_eq!(style.font_family, FontFamily::Verdana);
        assert_eq!(style.alignment, Alignment::Center);
    }

    #[test]
    fn current_is_a_detached_copy() {
        let mut ctl = StyleController::new();
        let frozen = ctl.current();
        ctl.toggle_bold();
        assert!(!frozen.bold);
    }
}
