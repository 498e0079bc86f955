use log::Level;

use crate::animation::reveal::{Inset, RevealConfig, RootMargin};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose reveal/carousel tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// `KeyboardEvent.code` that advances the phone carousel.
pub const ADVANCE_KEY: &str = "Space";
pub const HINT_TIMEOUT_MS: u32 = 5_000;
pub const SLIDE_TRANSITION_MS: u32 = 500;

pub const SECTION_REVEAL: RevealConfig = RevealConfig::once(0.3);
pub const GRID_REVEAL: RevealConfig = RevealConfig::once(0.1);
/// Which section the nav highlights. A section counts while any part of it
/// crosses the middle 20% of the viewport, however tall it is.
pub const NAV_TRACKING: RevealConfig = RevealConfig::tracking(0.0, RootMargin::vertical(Inset::Percent(-40.0)));

pub const SECTION_STAGGER_MS: u32 = 200;
pub const GRID_STAGGER_MS: u32 = 100;
pub const LIST_STAGGER_MS: u32 = 100;
/// Side visuals start after the text column has begun.
pub const VISUAL_DELAY_MS: u32 = 300;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::reveal::{RevealController, Visibility};

    #[test]
    fn tall_section_is_tracked_by_any_overlap() {
        // a section three viewports tall fills the band at a ratio of about 0.07
        let mut controller = RevealController::new(NAV_TRACKING);
        assert_eq!(controller.observe(Visibility { ratio: 0.07, intersecting: true }), Some(true));
        assert_eq!(controller.observe(Visibility::HIDDEN), Some(false));
        assert_eq!(controller.observe(Visibility { ratio: 0.01, intersecting: true }), Some(true));
    }

    #[test]
    fn nav_band_is_the_middle_of_the_viewport() {
        assert_eq!(NAV_TRACKING.margin.to_string(), "-40% 0px -40% 0px");
        assert!(!NAV_TRACKING.trigger_once);
    }
}
