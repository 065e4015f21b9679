//! Recipe Page Component
//!
//! The four compiled-in brewing guides in a two-column grid.

use brewguide_core::catalog;
use brewguide_core::motion::HEADING_ENTRANCE;
use brewguide_core::recipe::{BACKGROUND_IMAGE, PAGE_HEADING};
use dioxus::prelude::*;

use crate::components::{RecipeCard, background_style};
use crate::state::use_assets;

/// Recipe listing page
#[component]
pub fn RecipesPage() -> Element {
    let assets = use_assets();
    let background = use_hook(|| background_style(assets.src(BACKGROUND_IMAGE)));
    let heading_style = HEADING_ENTRANCE.animation_style("heading-enter", 0);

    rsx! {
        div {
            class: "page page-cover",
            style: "{background}",

            div {
                class: "page-overlay page-padded",

                h1 {
                    class: "recipes-heading",
                    style: "{heading_style}",
                    "{PAGE_HEADING}"
                }

                div {
                    class: "recipe-grid",
                    for (index, recipe) in catalog().iter().enumerate() {
                        RecipeCard {
                            key: "{recipe.title}",
                            recipe: *recipe,
                            index: index,
                        }
                    }
                }
            }
        }
    }
}
