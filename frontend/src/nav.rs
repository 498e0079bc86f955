use std::collections::BTreeSet;
use std::rc::Rc;

use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

/// Page sections in top-to-bottom order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Hero,
    Features,
    Benefits,
    Grid,
    Cta,
    About,
}

impl SectionId {
    /// Element id the section renders with.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Features => "features",
            SectionId::Benefits => "benefits",
            SectionId::Grid => "grid",
            SectionId::Cta => "cta",
            SectionId::About => "about",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Links shown in the header, with their labels.
pub const NAV_LINKS: [(SectionId, &str); 4] = [
    (SectionId::Hero, "Home"),
    (SectionId::Features, "Features"),
    (SectionId::Benefits, "Benefits"),
    (SectionId::About, "About"),
];

/// Smooth-scrolls to the section if it is on the page.
pub fn scroll_to(section: SectionId) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        debug!("no element for #{}", section.anchor());
    }
}

/// Sections currently inside the tracking band.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveSection {
    in_view: BTreeSet<SectionId>,
}

impl ActiveSection {
    pub fn update(&mut self, section: SectionId, in_view: bool) {
        if in_view {
            self.in_view.insert(section);
        } else {
            self.in_view.remove(&section);
        }
    }

    /// Topmost section in view.
    pub fn current(&self) -> Option<SectionId> {
        self.in_view.iter().next().copied()
    }
}

impl Reducible for ActiveSection {
    type Action = (SectionId, bool);

    fn reduce(self: Rc<Self>, (section, in_view): Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.update(section, in_view);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topmost_visible_section_wins() {
        let mut active = ActiveSection::default();
        assert_eq!(active.current(), None);

        active.update(SectionId::Grid, true);
        active.update(SectionId::Benefits, true);
        assert_eq!(active.current(), Some(SectionId::Benefits));

        active.update(SectionId::Benefits, false);
        assert_eq!(active.current(), Some(SectionId::Grid));

        active.update(SectionId::Grid, false);
        assert_eq!(active.current(), None);
    }

    #[test]
    fn reducer_applies_updates() {
        let state = Rc::new(ActiveSection::default());
        let state = state.reduce((SectionId::Cta, true));
        let state = state.reduce((SectionId::Hero, true));
        assert_eq!(state.current(), Some(SectionId::Hero));
        let state = state.reduce((SectionId::Hero, false));
        assert_eq!(state.current(), Some(SectionId::Cta));
    }

    #[test]
    fn anchors_are_hrefs() {
        assert_eq!(SectionId::Cta.href(), "#cta");
        assert_eq!(NAV_LINKS.map(|(s, _)| s.anchor()), ["hero", "features", "benefits", "about"]);
    }
}
