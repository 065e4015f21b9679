//! Coffee beans trailing the pointer

use brewguide_core::Position;
use brewguide_core::assets::BEAN_IMAGE;
use brewguide_core::motion::MARKER_STAGGER;
use dioxus::prelude::*;

use crate::components::AssetImage;

/// Marker edge length in pixels
pub const MARKER_SIZE: f32 = 24.0;

/// Renders one bean per marker, centered on its position
#[component]
pub fn MarkerTrail(markers: Vec<Position>) -> Element {
    let styles: Vec<String> = markers
        .iter()
        .enumerate()
        .map(|(index, marker)| marker_style(*marker, index))
        .collect();

    rsx! {
        for (index, style) in styles.into_iter().enumerate() {
            div {
                key: "{index}",
                class: "marker",
                style: "{style}",
                AssetImage {
                    name: BEAN_IMAGE,
                    alt: "Coffee Bean",
                    width: Some(MARKER_SIZE as u32),
                    height: Some(MARKER_SIZE as u32),
                }
            }
        }
    }
}

/// Absolute placement plus staggered fade-in for the marker at `index`
pub fn marker_style(position: Position, index: usize) -> String {
    let half = MARKER_SIZE / 2.0;
    format!(
        "left: {:.1}px; top: {:.1}px; {}",
        position.x - half,
        position.y - half,
        MARKER_STAGGER.animation_style("fade-in", index)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_style_centers_marker() {
        let style = marker_style(Position::new(100.0, 50.0), 0);
        assert!(style.starts_with("left: 88.0px; top: 38.0px;"));
        assert!(style.contains("fade-in"));
    }

    #[test]
    fn test_marker_style_staggers_fade() {
        let style = marker_style(Position::zero(), 3);
        assert!(style.contains("ease-out 0.30s"));
    }
}
