use hand_ledger_core::{
    describe_node, is_interactive_target, is_text_entry_target, InteractiveNode, JournalInput,
    KeyPress, NavKey,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, Node, PointerEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PointerKind {
    Mouse,
    Touch,
    Pen,
    Unknown,
}

impl PointerKind {
    pub(crate) fn from_pointer_type(value: &str) -> Self {
        match value {
            "mouse" => PointerKind::Mouse,
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Unknown,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            PointerKind::Mouse => "mouse",
            PointerKind::Touch => "touch",
            PointerKind::Pen => "pen",
            PointerKind::Unknown => "pointer",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ElementNode(pub(crate) Element);

impl InteractiveNode for ElementNode {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(ElementNode)
    }
}

/// Element the event was dispatched to. Text-node targets resolve to their
/// parent element.
pub(crate) fn event_element(event: &Event) -> Option<ElementNode> {
    let target = event.target()?;
    if let Some(element) = target.dyn_ref::<Element>() {
        return Some(ElementNode(element.clone()));
    }
    target
        .dyn_ref::<Node>()
        .and_then(|node| node.parent_element())
        .map(ElementNode)
}

pub(crate) fn target_is_interactive(event: &Event) -> bool {
    is_interactive_target(event_element(event))
}

pub(crate) fn describe_target(event: &Event) -> String {
    describe_node(event_element(event).as_ref())
}

/// Descriptions of the target's ancestors, nearest first.
pub(crate) fn describe_path(event: &Event, limit: usize) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = event_element(event).and_then(|node| node.parent());
    while let Some(node) = current {
        if path.len() == limit {
            break;
        }
        path.push(describe_node(Some(&node)));
        current = node.parent();
    }
    path
}

pub(crate) fn key_press(event: &KeyboardEvent) -> KeyPress {
    KeyPress {
        key: NavKey::from_key(&event.key()),
        modified: event.ctrl_key() || event.alt_key() || event.meta_key(),
        text_entry: is_text_entry_target(event_element(event)),
    }
}

pub(crate) fn pointer_point(event: &PointerEvent) -> (f32, f32, f64) {
    (
        event.client_x() as f32,
        event.client_y() as f32,
        event.time_stamp(),
    )
}

pub(crate) fn drag_start(event: &PointerEvent) -> JournalInput {
    let (x, y, time_ms) = pointer_point(event);
    JournalInput::DragStart {
        x,
        y,
        time_ms,
        interactive: target_is_interactive(event),
    }
}

pub(crate) fn drag_move(event: &PointerEvent) -> JournalInput {
    let (x, y, time_ms) = pointer_point(event);
    JournalInput::DragMove { x, y, time_ms }
}

pub(crate) fn drag_end(event: &PointerEvent) -> JournalInput {
    let (x, y, time_ms) = pointer_point(event);
    JournalInput::DragEnd { x, y, time_ms }
}

/// Routes the rest of this pointer's events to `element`, so a keepsake drag
/// survives the pointer leaving it.
pub(crate) fn capture_pointer(element: Option<Element>, event: &PointerEvent) {
    if let Some(element) = element {
        let _ = element.set_pointer_capture(event.pointer_id());
    }
}

/// Only the primary button of the primary pointer starts a drag.
pub(crate) fn is_primary_press(event: &PointerEvent) -> bool {
    event.is_primary() && event.button() == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use hand_ledger_core::interactive_target_selector;
    use wasm_bindgen_test::*;
    use web_sys::{Document, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window()
            .and_then(|window| window.document())
            .expect("document available")
    }

    fn build(markup: &str) -> Element {
        let document = document();
        let root = document.create_element("div").expect("create test root");
        root.set_inner_html(markup);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        root
    }

    fn find(root: &Element, selector: &str) -> Element {
        root.query_selector(selector)
            .expect("valid selector")
            .expect("element present")
    }

    #[wasm_bindgen_test]
    fn walker_agrees_with_closest() {
        set_panic_hook();
        let root = build(
            r#"<div class="page" data-page-state="active">
                <p id="plain">text <em id="em">here</em></p>
                <div data-page-interactive id="pocket"><span id="flap">flap</span></div>
                <div role="switch" id="switch"><i id="knob"></i></div>
                <div role="presentation" id="deco"></div>
                <label id="label"><span id="caption">c</span></label>
                <div contenteditable="true" id="edit"><b id="bold">b</b></div>
                <div contenteditable="false" id="frozen"></div>
                <a href="" id="link"><img id="img"></a>
            </div>"#,
        );
        let selector = interactive_target_selector();
        for id in [
            "plain", "em", "pocket", "flap", "switch", "knob", "deco", "label", "caption", "edit",
            "bold", "frozen", "link", "img",
        ] {
            let element = find(&root, &format!("#{id}"));
            let expected = element.closest(&selector).expect("valid selector").is_some();
            let actual = is_interactive_target(Some(ElementNode(element)));
            assert_eq!(actual, expected, "#{id}");
        }
        root.remove();
    }

    #[wasm_bindgen_test]
    fn describes_pages_with_their_state() {
        let root = build(r#"<div aria-label="Page 2" data-page-state="flipped" id="page"></div>"#);
        let page = ElementNode(find(&root, "#page"));
        assert_eq!(describe_node(Some(&page)), "Page 2 (flipped)");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn key_press_reads_modifiers_and_focus() {
        let root = build(r#"<input id="field"><div id="plain"></div>"#);
        let init = KeyboardEventInit::new();
        init.set_key("ArrowRight");
        init.set_bubbles(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keyboard event");
        find(&root, "#plain")
            .dispatch_event(&event)
            .expect("dispatch");
        assert_eq!(
            key_press(&event),
            KeyPress {
                key: Some(NavKey::Next),
                modified: false,
                text_entry: false,
            }
        );

        let init = KeyboardEventInit::new();
        init.set_key("ArrowLeft");
        init.set_ctrl_key(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keyboard event");
        find(&root, "#field")
            .dispatch_event(&event)
            .expect("dispatch");
        let press = key_press(&event);
        assert_eq!(press.key, Some(NavKey::Previous));
        assert!(press.modified);
        assert!(press.text_entry);
        root.remove();
    }
}
