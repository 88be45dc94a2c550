//! Filter Pills Component
//!
//! Wrapping row of dietary filter pills. Any number can be active at once;
//! active pills are filled pink.

use dioxus::prelude::*;
use recipefinder_core::{DietaryFilter, FilterSet};

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Filters to offer, in display order
    #[props(default = DietaryFilter::ALL.to_vec())]
    pub filters: Vec<DietaryFilter>,
    /// Currently active filters
    pub active: FilterSet,
    /// Handler called with the filter whose pill was clicked
    pub on_toggle: EventHandler<DietaryFilter>,
}

/// Displays the filter vocabulary as toggleable pills
///
/// # Example
///
/// ```rust,ignore
/// let mut active = use_signal(FilterSet::new);
///
/// rsx! {
///     FilterPills {
///         active: active(),
///         on_toggle: move |f| { active.write().toggle(f); }
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "filter-pills",
            role: "group",
            "aria-label": "ตัวกรองเมนู",
            for filter in props.filters.iter().copied() {
                {
                    let is_active = props.active.contains(filter);
                    let on_toggle = props.on_toggle;
                    rsx! {
                        button {
                            key: "{filter}",
                            class: pill_class(is_active),
                            r#type: "button",
                            "aria-pressed": if is_active { "true" } else { "false" },
                            onclick: move |_| on_toggle.call(filter),
                            "{filter}"
                        }
                    }
                }
            }
        }
    }
}

fn pill_class(active: bool) -> &'static str {
    if active {
        "pill active"
    } else {
        "pill"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pill_class_reflects_state() {
        assert_eq!(pill_class(true), "pill active");
        assert_eq!(pill_class(false), "pill");
    }

    #[test]
    fn default_filters_cover_vocabulary() {
        assert_eq!(DietaryFilter::ALL.to_vec().len(), 8);
    }
}
