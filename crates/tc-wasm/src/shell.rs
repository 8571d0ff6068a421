//! Static page chrome: a header above the canvas and a footer below it.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub title: String,
    pub footer: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Canvas Application".to_string(),
            footer: "\u{a9} 2024 Canvas Application made with \u{2764}".to_string(),
        }
    }
}

/// Wrap the element with id `root_id` in a header and footer.
///
/// # Errors
/// Fails if there is no document, no such element, or it has no parent.
pub fn mount(root_id: &str, config: &ShellConfig) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {root_id:?}")))?;
    let parent = root
        .parent_node()
        .ok_or_else(|| JsValue::from_str("canvas root has no parent"))?;

    let header = chrome(&document, "header", "header", "h1", &config.title)?;
    let footer = chrome(&document, "footer", "footer", "p", &config.footer)?;

    parent.insert_before(&header, Some(&*root))?;
    let after = root.next_sibling();
    parent.insert_before(&footer, after.as_ref())?;
    log::debug!("shell mounted around #{root_id}");
    Ok(())
}

fn chrome(
    document: &Document,
    tag: &str,
    class: &str,
    inner_tag: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let outer = document.create_element(tag)?;
    outer.set_class_name(class);
    let inner = document.create_element(inner_tag)?;
    inner.set_text_content(Some(text));
    outer.append_child(&inner)?;
    Ok(outer)
}
