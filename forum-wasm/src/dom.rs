//! Помощники для делегирования событий по атрибутам `data-*`.
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlOptionElement, HtmlSelectElement, HtmlTextAreaElement};

/// Ближайший к цели события элемент с атрибутом `attr`.
pub(crate) fn closest_with(ev: &Event, attr: &str) -> Option<Element> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    target.closest(&format!("[{attr}]")).ok().flatten()
}

pub(crate) fn data_id(element: &Element, attr: &str) -> Option<i64> {
    element.get_attribute(attr)?.parse().ok()
}

/// Значение textarea внутри `root`, найденной по CSS-селектору.
pub(crate) fn textarea_value(root: &Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlTextAreaElement>()
        .ok()
        .map(|area| area.value())
}

pub(crate) fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|index| options.item(index))
        .filter_map(|item| item.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}

/// Снимает выбор со всех пунктов списка.
pub(crate) fn clear_selection(select: &HtmlSelectElement) {
    select.set_selected_index(-1);
}
