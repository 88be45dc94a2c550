//! Landing page - "มีอะไรกิน?"
//!
//! Hero search, feature highlights, the featured (popular) grid and the
//! filterable explore grid. The two grids are selected independently: the
//! featured grid never reacts to filters, the explore grid reshuffles
//! whenever the catalog or the active filters change.

use dioxus::prelude::*;
use recipefinder_core::{select_featured, FilterSet, LandingState, Recipe, RecipeStore};
use recipefinder_ui::{FeatureCard, FilterPills, IconButton, RecipeGrid, SearchBox};

use crate::app::{Route, SearchParams};
use crate::context::{use_catalog, use_shuffler};
use crate::navigation::RouterNavigator;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let router = use_navigator();
    let catalog = use_catalog();
    let shuffler = use_shuffler();
    let mut state = use_signal(LandingState::new);

    // Only notifies when the active set itself changes, not on typing
    let filters: Memo<FilterSet> = use_memo(move || state.read().filters.clone());

    let featured: Memo<Vec<Recipe>> = use_memo(move || {
        let catalog = catalog.read();
        select_featured(catalog.recipes(), catalog.popular_recipes())
            .into_iter()
            .cloned()
            .collect()
    });

    let explore: Memo<Vec<Recipe>> = use_memo(move || {
        let catalog = catalog.read();
        let filters = filters.read();
        shuffler
            .select_explore(catalog.recipes(), &filters)
            .into_iter()
            .cloned()
            .collect()
    });

    let submit = move |_: ()| {
        let mut nav = RouterNavigator::new(router);
        state.read().submit_search(&mut nav);
    };

    let filters_visible = state.read().filters_visible;
    let search_text = state.read().search_text.clone();
    let explore_empty = if filters().is_empty() {
        "ยังไม่มีเมนูในระบบ"
    } else {
        "ไม่พบเมนูที่ตรงกับตัวกรอง ลองลดตัวกรองดูนะ"
    };

    rsx! {
        main { class: "landing",
            section { class: "hero",
                div { class: "hero__overlay" }
                div { class: "hero__content",
                    h1 { class: "hero__title", "มีอะไรกิน? ค้นหาเมนูจากวัตถุดิบที่คุณมี" }
                    p { class: "hero__tagline",
                        "แค่บอกเราว่าคุณมีอะไรในตู้เย็น เราจะแนะนำเมนูอาหารที่ทำได้ทันที!"
                    }
                    SearchBox {
                        value: search_text,
                        oninput: move |text: String| state.write().set_search_text(text),
                        onsubmit: submit,
                    }
                }
            }

            section { class: "features",
                h2 { class: "section-title", "เราช่วยคุณได้อย่างไร" }
                div { class: "features__grid",
                    FeatureCard {
                        icon: "\u{1F468}\u{200D}\u{1F373}".to_string(),
                        title: "ค้นหาเมนูจากวัตถุดิบ".to_string(),
                        body: "ใส่วัตถุดิบที่คุณมี เราจะแนะนำเมนูที่ทำได้ทันที".to_string(),
                    }
                    FeatureCard {
                        icon: "\u{1F4C8}".to_string(),
                        title: "คำนวณ BMR & TDEE".to_string(),
                        body: "คำนวณพลังงานที่ร่างกายต้องการและวางแผนอาหารให้เหมาะสม".to_string(),
                    }
                    FeatureCard {
                        icon: "\u{1F4B0}".to_string(),
                        title: "ประหยัดค่าใช้จ่าย".to_string(),
                        body: "ใช้วัตถุดิบที่มีอยู่แล้วให้คุ้มค่า ลดการทิ้งอาหาร".to_string(),
                    }
                }
            }

            section { class: "recipes-section",
                div { class: "recipes-section__header",
                    h2 { class: "section-title", "เมนูแนะนำ" }
                    Link {
                        class: "see-all",
                        to: Route::Search { query: SearchParams::default() },
                        "ดูทั้งหมด \u{2192}"
                    }
                }
                RecipeGrid {
                    recipes: featured(),
                    empty_message: "ยังไม่มีเมนูในระบบ".to_string(),
                }
            }

            section { class: "recipes-section recipes-section--explore",
                div { class: "recipes-section__header",
                    h2 { class: "section-title",
                        "สุ่มเมนูตามใจ"
                        IconButton {
                            aria_label: "กรองเมนู".to_string(),
                            pressed: filters_visible,
                            onclick: move |_| state.write().toggle_filters_visible(),
                            "\u{2699}"
                        }
                    }
                }
                if filters_visible {
                    div { class: "filter-panel",
                        h3 { class: "filter-panel__title", "ตัวกรองเมนู" }
                        FilterPills {
                            active: filters(),
                            on_toggle: move |filter| {
                                state.write().toggle_filter(filter);
                            },
                        }
                    }
                }
                RecipeGrid {
                    recipes: explore(),
                    empty_message: explore_empty.to_string(),
                }
            }
        }
    }
}
