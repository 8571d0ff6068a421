//! `Style` → CSS strings.
//!
//! Shared by the Canvas2D painter (`ctx.font = ...`) and by DOM hosts
//! that render elements as absolutely-positioned blocks.

use tc_core::model::{FontFamily, Style};

pub fn font_weight(style: &Style) -> &'static str {
    if style.bold { "bold" } else { "normal" }
}

pub fn font_style(style: &Style) -> &'static str {
    if style.italic { "italic" } else { "normal" }
}

pub fn text_decoration(style: &Style) -> &'static str {
    if style.underlined { "underline" } else { "none" }
}

/// Generic family used when the named face is missing.
pub fn generic_family(family: FontFamily) -> &'static str {
    match family {
        FontFamily::Arial | FontFamily::Verdana => "sans-serif",
        FontFamily::Georgia | FontFamily::TimesNewRoman => "serif",
        FontFamily::CourierNew => "monospace",
    }
}

/// Quoted family list, e.g. `"Courier New", monospace`.
pub fn font_family_list(family: FontFamily) -> String {
    format!("\"{}\", {}", family.name(), generic_family(family))
}

/// CSS `font` shorthand, e.g. `italic bold 16px "Arial", sans-serif`.
pub fn css_font(style: &Style) -> String {
    format!(
        "{} {} {}px {}",
        font_style(style),
        font_weight(style),
        style.font_size.px(),
        font_family_list(style.font_family)
    )
}

/// Inline declarations for a DOM text block at `(x, y)`.
pub fn inline_css(style: &Style, x: f64, y: f64, padding: f64) -> String {
    format!(
        "position:absolute;left:0;top:0;transform:translate({x}px,{y}px);\
         font-size:{}px;font-family:{};font-weight:{};font-style:{};\
         text-decoration:{};text-align:{};padding:{padding}px;\
         display:inline-block;white-space:pre-wrap;word-wrap:break-word;cursor:move",
        style.font_size.px(),
        font_family_list(style.font_family),
        font_weight(style),
        font_style(style),
        text_decoration(style),
        style.alignment.as_str(),
    )
}
