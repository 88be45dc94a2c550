//! Search Box Component
//!
//! Rounded hero search field with a docked submit button. Typing only
//! updates the value; searching happens on explicit submit (Enter or the
//! button).

use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Properties for the SearchBox component
#[derive(Clone, PartialEq, Props)]
pub struct SearchBoxProps {
    /// Current search value
    pub value: String,
    /// Handler called when the text changes
    pub oninput: EventHandler<String>,
    /// Handler called when the form is submitted
    pub onsubmit: EventHandler<()>,
    /// Placeholder text
    #[props(default = "วัตถุดิบที่คุณมีตอนนี้คือ...".to_string())]
    pub placeholder: String,
    /// Accessible label of the submit button
    #[props(default = "ค้นหา".to_string())]
    pub submit_label: String,
}

/// Search form used in the landing hero and on the search page
///
/// # Example
///
/// ```rust,ignore
/// let mut text = use_signal(String::new);
///
/// rsx! {
///     SearchBox {
///         value: text(),
///         oninput: move |s| text.set(s),
///         onsubmit: move |_| submit(&text.read()),
///     }
/// }
/// ```
#[component]
pub fn SearchBox(props: SearchBoxProps) -> Element {
    let onsubmit = props.onsubmit;

    rsx! {
        form {
            class: "search-box",
            role: "search",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                onsubmit.call(());
            },
            input {
                class: "search-box__input",
                r#type: "text",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            Button {
                variant: ButtonVariant::Search,
                button_type: "submit".to_string(),
                aria_label: props.submit_label.clone(),
                "\u{1F50D}"
            }
        }
    }
}
