pub(crate) mod auth_panel;
pub(crate) mod nav;
pub(crate) mod post_form;
pub(crate) mod posts_panel;

/// Подпись категории для выпадающих списков: `general` → `General`.
pub(crate) fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
