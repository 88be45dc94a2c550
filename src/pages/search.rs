//! Search page - recipes matching the ingredients in `?q=`.

use dioxus::prelude::*;
use recipefinder_core::{submit_search, Recipe, RecipeStore, SearchQuery};
use recipefinder_ui::{Button, ButtonVariant, RecipeGrid, SearchBox};

use crate::app::{Route, SearchParams};
use crate::context::use_catalog;
use crate::navigation::RouterNavigator;

/// Search results page.
///
/// An empty query lists the whole catalog ("see all").
#[component]
pub fn Search(query: SearchParams) -> Element {
    let router = use_navigator();
    let catalog = use_catalog();
    let mut field = use_signal(|| SearchField::new(&query.q));

    // Back/forward between searches keeps this page mounted with a new query
    use_effect(use_reactive!(|query| field.write().follow_route(&query.q)));

    let q = query.q;
    let parsed = SearchQuery::parse(&q);
    let results: Vec<Recipe> = parsed
        .filter(catalog.read().recipes())
        .into_iter()
        .cloned()
        .collect();

    let heading = if parsed.is_empty() {
        "เมนูทั้งหมด".to_string()
    } else {
        format!("ผลการค้นหา \u{201C}{}\u{201D}", q.trim())
    };
    let count = results.len();

    let submit = move |_: ()| {
        let mut nav = RouterNavigator::new(router);
        submit_search(&field.read().text, &mut nav);
    };

    rsx! {
        main { class: "search-page",
            div { class: "search-page__bar",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        router.push(Route::Landing {});
                    },
                    "\u{2190} กลับหน้าแรก"
                }
                SearchBox {
                    value: field.read().text.clone(),
                    oninput: move |value: String| field.write().text = value,
                    onsubmit: submit,
                }
            }

            section { class: "recipes-section",
                div { class: "recipes-section__header",
                    h2 { class: "section-title", "{heading}" }
                    span { class: "result-count", "{count} เมนู" }
                }
                RecipeGrid {
                    recipes: results,
                    empty_message: "ไม่พบเมนูจากวัตถุดิบนี้ ลองใช้คำค้นอื่นดูนะ".to_string(),
                }
            }
        }
    }
}

/// Search box contents on the results page.
///
/// Starts from the route's query and is replaced whenever the route moves to
/// a different query; typing in between only edits `text`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SearchField {
    text: String,
    route_q: String,
}

impl SearchField {
    fn new(q: &str) -> Self {
        Self {
            text: q.to_string(),
            route_q: q.to_string(),
        }
    }

    fn follow_route(&mut self, q: &str) {
        if self.route_q != q {
            self.route_q = q.to_string();
            self.text = q.to_string();
        }
    }
}
