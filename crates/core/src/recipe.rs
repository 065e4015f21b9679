//! Brewing guides shown on the recipe page
//!
//! The catalog is compiled in. Nothing here is loaded or mutated at runtime.

// ============================================================================
// Icons
// ============================================================================

/// Icon shown next to a recipe title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrewIcon {
    Espresso,
    Press,
    PourOver,
    Leaf,
}

impl BrewIcon {
    /// Glyph rendered for this icon
    pub fn glyph(&self) -> &'static str {
        match self {
            BrewIcon::Espresso => "☕",
            BrewIcon::Press => "🫖",
            BrewIcon::PourOver => "💧",
            BrewIcon::Leaf => "🍃",
        }
    }

    /// Text color class for the glyph
    pub fn accent_class(&self) -> &'static str {
        match self {
            BrewIcon::Espresso => "text-yellow-500",
            BrewIcon::Press => "text-green-500",
            BrewIcon::PourOver => "text-blue-500",
            BrewIcon::Leaf => "text-red-500",
        }
    }

    /// Accessible label
    pub fn label(&self) -> &'static str {
        match self {
            BrewIcon::Espresso => "Coffee cup",
            BrewIcon::Press => "Hot mug",
            BrewIcon::PourOver => "Filter",
            BrewIcon::Leaf => "Leaf",
        }
    }
}

// ============================================================================
// Recipes
// ============================================================================

/// A single brewing guide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub title: &'static str,
    pub icon: BrewIcon,
    /// Ordered preparation steps
    pub steps: &'static [&'static str],
    /// Background image file name, relative to the asset root
    pub image: &'static str,
}

/// Heading shown above the recipe grid
pub const PAGE_HEADING: &str = "3. Nesil Kahve Tarifleri";

/// Page background image file name
pub const BACKGROUND_IMAGE: &str = "coffee-bg.jpg";

static RECIPES: [Recipe; 4] = [
    Recipe {
        title: "Espresso",
        icon: BrewIcon::Espresso,
        steps: &[
            "Kahve çekirdeklerini ince öğütün.",
            "Portafiltreyi hazırlayın ve kahveyi sıkıştırın.",
            "Makineyi ısıtın ve suyu portafiltreden geçirin.",
            "Servis edin ve tadını çıkarın.",
        ],
        image: "espresso.jpg",
    },
    Recipe {
        title: "French Press",
        icon: BrewIcon::Press,
        steps: &[
            "Orta-kalınlıkta kahve çekirdeklerini öğütün.",
            "French Press’i ısıtın ve kahveyi ekleyin.",
            "Sıcak suyu ekleyin ve 4 dakika demleyin.",
            "Pistonu bastırın ve kahveyi dökün.",
        ],
        image: "french-press.jpg",
    },
    Recipe {
        title: "Pour Over",
        icon: BrewIcon::PourOver,
        steps: &[
            "Orta-ince kahve çekirdeklerini öğütün.",
            "Filtreyi yıkayın ve kahveyi ekleyin.",
            "Yavaşça sıcak suyu dökün ve kahvenin demlenmesini bekleyin.",
            "Kahveyi fincana dökün ve tadını çıkarın.",
        ],
        image: "pour-over.jpg",
    },
    Recipe {
        title: "Aeropress",
        icon: BrewIcon::Leaf,
        steps: &[
            "İnce kahve çekirdeklerini öğütün.",
            "Filtreyi yerleştirin ve ıslatın.",
            "Kahveyi ekleyin ve sıcak suyu dökün.",
            "Pistonu bastırarak kahveyi çıkarın.",
        ],
        image: "aeropress.jpg",
    },
];

/// All recipes, in display order
pub fn catalog() -> &'static [Recipe] {
    &RECIPES
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_order() {
        let titles: Vec<_> = catalog().iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            vec!["Espresso", "French Press", "Pour Over", "Aeropress"]
        );
    }

    #[test]
    fn test_every_recipe_has_four_steps() {
        assert_eq!(catalog().len(), 4);
        for recipe in catalog() {
            assert_eq!(recipe.steps.len(), 4, "{}", recipe.title);
            assert!(recipe.steps.iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn test_icons_and_images_are_distinct() {
        let icons: Vec<_> = catalog().iter().map(|r| r.icon).collect();
        assert_eq!(
            icons,
            vec![
                BrewIcon::Espresso,
                BrewIcon::Press,
                BrewIcon::PourOver,
                BrewIcon::Leaf
            ]
        );

        let mut images: Vec<_> = catalog().iter().map(|r| r.image).collect();
        images.sort_unstable();
        images.dedup();
        assert_eq!(images.len(), 4);
    }

    #[test]
    fn test_icon_accents() {
        assert_eq!(BrewIcon::Espresso.accent_class(), "text-yellow-500");
        assert_eq!(BrewIcon::Leaf.accent_class(), "text-red-500");
        assert!(!BrewIcon::PourOver.glyph().is_empty());
    }
}
