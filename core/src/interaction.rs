//! Interactive-target detection shared by clicks, drags and keys.
//!
//! A page click or swipe must not fire when it starts on a nested control
//! (pocket flap, envelope, button, form field). The rule is the same as the
//! CSS selector returned by [`interactive_target_selector`]: the target or any
//! ancestor matches.

pub const PAGE_INTERACTIVE_ATTR: &str = "data-page-interactive";
pub const NO_PAGE_FLIP_ATTR: &str = "data-no-page-flip";

const MARKER_ATTRS: &[&str] = &[PAGE_INTERACTIVE_ATTR, NO_PAGE_FLIP_ATTR];
const INTERACTIVE_TAGS: &[&str] = &["button", "a", "input", "textarea", "select", "label"];
const INTERACTIVE_ROLES: &[&str] = &["button", "link", "switch", "checkbox", "menuitem"];
const TEXT_ENTRY_TAGS: &[&str] = &["input", "textarea", "select"];

/// Minimal view of a DOM element, implemented over `web_sys::Element` in the
/// app and over plain structs in tests.
pub trait InteractiveNode: Sized {
    fn tag_name(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    fn parent(&self) -> Option<Self>;
}

pub fn interactive_target_selector() -> String {
    let mut parts: Vec<String> = MARKER_ATTRS.iter().map(|attr| format!("[{attr}]")).collect();
    parts.extend(INTERACTIVE_TAGS.iter().map(|tag| tag.to_string()));
    parts.extend(
        INTERACTIVE_ROLES
            .iter()
            .map(|role| format!("[role=\"{role}\"]")),
    );
    parts.push("[contenteditable=\"true\"]".to_string());
    parts.join(",")
}

pub fn is_interactive_element<N: InteractiveNode>(node: &N) -> bool {
    if MARKER_ATTRS
        .iter()
        .any(|attr| node.attribute(attr).is_some())
    {
        return true;
    }
    let tag = node.tag_name().to_ascii_lowercase();
    if INTERACTIVE_TAGS.contains(&tag.as_str()) {
        return true;
    }
    if let Some(role) = node.attribute("role") {
        if INTERACTIVE_ROLES.contains(&role.as_str()) {
            return true;
        }
    }
    is_content_editable(node)
}

/// True when `target` or one of its ancestors is an interactive control.
pub fn is_interactive_target<N: InteractiveNode>(target: Option<N>) -> bool {
    let mut current = target;
    while let Some(node) = current {
        if is_interactive_element(&node) {
            return true;
        }
        current = node.parent();
    }
    false
}

/// Keys typed into these must reach the control, not the page stack.
pub fn is_text_entry_target<N: InteractiveNode>(target: Option<N>) -> bool {
    let mut current = target;
    while let Some(node) = current {
        let tag = node.tag_name().to_ascii_lowercase();
        if TEXT_ENTRY_TAGS.contains(&tag.as_str()) || is_content_editable(&node) {
            return true;
        }
        current = node.parent();
    }
    false
}

/// Short label for the debug HUD: aria-label, `[role]`, or tag, plus the page
/// state when the element is a page.
pub fn describe_node<N: InteractiveNode>(node: Option<&N>) -> String {
    let Some(node) = node else {
        return "(none)".to_string();
    };
    let mut label = if let Some(aria) = node.attribute("aria-label") {
        aria
    } else if let Some(role) = node.attribute("role") {
        format!("[{role}]")
    } else {
        node.tag_name().to_ascii_lowercase()
    };
    if let Some(page_state) = node.attribute("data-page-state") {
        label.push_str(&format!(" ({page_state})"));
    }
    label
}

fn is_content_editable<N: InteractiveNode>(node: &N) -> bool {
    node.attribute("contenteditable")
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
