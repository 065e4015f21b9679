//! # Recipe Card
//!
//! One brewing guide: icon, title and numbered steps over a faded photo.
//! Cards and their steps enter with staggered delays.

use brewguide_core::Recipe;
use brewguide_core::motion::{CARD_STAGGER, STEP_STAGGER};
use dioxus::prelude::*;

use crate::components::AssetImage;

/// Card for a single recipe at position `index` in the grid
#[component]
pub fn RecipeCard(recipe: Recipe, index: usize) -> Element {
    let icon = recipe.icon;
    let card_style = CARD_STAGGER.animation_style("card-enter", index);
    let steps: Vec<(usize, &'static str, String)> = recipe
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| (i, *step, STEP_STAGGER.animation_style("step-enter", i)))
        .collect();

    rsx! {
        div {
            class: "recipe-card",
            style: "{card_style}",

            // Faded background photo
            AssetImage {
                name: recipe.image,
                alt: recipe.title,
                class: "recipe-card-photo",
            }

            div {
                class: "recipe-card-body",

                div {
                    class: "recipe-card-header",
                    span {
                        class: "recipe-icon {icon.accent_class()}",
                        title: "{icon.label()}",
                        "{icon.glyph()}"
                    }
                    h2 { class: "recipe-title", "{recipe.title}" }
                }

                ol {
                    class: "recipe-steps",
                    for (step_index, step, step_style) in steps {
                        li {
                            key: "{step_index}",
                            class: "recipe-step",
                            style: "{step_style}",
                            span { class: "recipe-step-bullet", "☕" }
                            " {step}"
                        }
                    }
                }
            }
        }
    }
}
