use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    Empty,
}

/// Position in a fixed, non-empty slide list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideIndex {
    current: usize,
    count: usize,
}

impl SlideIndex {
    pub fn new(count: usize) -> Result<Self, CarouselError> {
        if count == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self { current: 0, count })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.count;
        self.current
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintPhase {
    Showing,
    /// Playing its exit before it is removed.
    Leaving,
    Gone,
}

/// One-time usage hint. Once hidden it never shows again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HintVisibility {
    phase: HintPhase,
}

impl Default for HintVisibility {
    fn default() -> Self {
        Self { phase: HintPhase::Showing }
    }
}

impl HintVisibility {
    pub fn is_visible(&self) -> bool {
        self.phase == HintPhase::Showing
    }

    pub fn phase(&self) -> HintPhase {
        self.phase
    }

    /// Returns true if this call hid the hint.
    pub fn hide(&mut self) -> bool {
        if self.phase != HintPhase::Showing {
            return false;
        }
        self.phase = HintPhase::Leaving;
        true
    }

    /// Exit animation finished. Returns true if the hint was leaving.
    pub fn finish_exit(&mut self) -> bool {
        if self.phase != HintPhase::Leaving {
            return false;
        }
        self.phase = HintPhase::Gone;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Exiting,
    Entering,
}

/// A slide change in flight. The outgoing slide plays out before the
/// incoming one plays in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub outgoing: usize,
    pub incoming: usize,
    pub stage: Stage,
}

/// What the screen shows right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlidePhase {
    Resting,
    Exiting,
    Entering,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Carousel<'a, T> {
    slides: &'a [T],
    index: SlideIndex,
    hint: HintVisibility,
    transition: Option<Transition>,
    generation: u32,
}

impl<'a, T> Carousel<'a, T> {
    pub fn new(slides: &'a [T]) -> Result<Self, CarouselError> {
        Ok(Self {
            slides,
            index: SlideIndex::new(slides.len())?,
            hint: HintVisibility::default(),
            transition: None,
            generation: 0,
        })
    }

    pub fn index(&self) -> SlideIndex {
        self.index
    }

    pub fn current(&self) -> usize {
        self.index.current()
    }

    pub fn hint_visible(&self) -> bool {
        self.hint.is_visible()
    }

    pub fn hint_phase(&self) -> HintPhase {
        self.hint.phase()
    }

    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    /// Identifies the stage now playing, `None` while resting. It changes only
    /// when a new stage starts, so a stage timer keyed on it is never restarted
    /// by a retarget.
    pub fn stage_key(&self) -> Option<u32> {
        self.transition.map(|_| self.generation)
    }

    fn begin_stage(&mut self, transition: Option<Transition>) {
        self.transition = transition;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Moves to the next slide, wrapping at the end, and hides the hint.
    ///
    /// While a slide is still playing out the pending target is replaced, and
    /// wrapping back onto that slide stops the change. Once the incoming slide
    /// is playing in, the latest index is picked up by [`Carousel::step`].
    pub fn advance(&mut self) -> usize {
        let previous = self.index.current();
        let current = self.index.advance();
        self.hint.hide();
        match self.transition {
            Some(t) if t.stage == Stage::Exiting && t.outgoing == current => self.begin_stage(None),
            Some(t) if t.stage == Stage::Exiting => {
                self.transition = Some(Transition { incoming: current, ..t });
            }
            Some(_) => {}
            None if current != previous => {
                self.begin_stage(Some(Transition { outgoing: previous, incoming: current, stage: Stage::Exiting }));
            }
            None => {}
        }
        current
    }

    /// Hint timer fired. Returns true if the hint was still showing.
    pub fn hint_timed_out(&mut self) -> bool {
        self.hint.hide()
    }

    /// Hint exit animation finished. Returns true if the hint was leaving.
    pub fn hint_exit_done(&mut self) -> bool {
        self.hint.finish_exit()
    }

    /// Current stage of the transition finished playing.
    pub fn step(&mut self) -> Option<Transition> {
        let current = self.index.current();
        let next = match self.transition {
            Some(Transition { outgoing, incoming, stage: Stage::Exiting }) => {
                Some(Transition { outgoing, incoming, stage: Stage::Entering })
            }
            Some(Transition { incoming, stage: Stage::Entering, .. }) if incoming != current => {
                Some(Transition { outgoing: incoming, incoming: current, stage: Stage::Exiting })
            }
            _ => None,
        };
        if self.transition.is_some() {
            self.begin_stage(next);
        }
        self.transition
    }

    /// Index of the slide on screen and how it is animating.
    pub fn displayed(&self) -> (usize, SlidePhase) {
        match self.transition {
            None => (self.index.current(), SlidePhase::Resting),
            Some(Transition { outgoing, stage: Stage::Exiting, .. }) => (outgoing, SlidePhase::Exiting),
            Some(Transition { incoming, stage: Stage::Entering, .. }) => (incoming, SlidePhase::Entering),
        }
    }

    pub fn displayed_slide(&self) -> &'a T {
        let slides = self.slides;
        &slides[self.displayed().0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: [&str; 5] = ["camera", "breed", "genetics", "health", "market"];

    fn settle<T>(carousel: &mut Carousel<'_, T>) {
        while carousel.step().is_some() {}
    }

    #[test]
    fn empty_list_is_rejected() {
        let empty: [u8; 0] = [];
        assert_eq!(Carousel::new(&empty), Err(CarouselError::Empty));
        assert_eq!(SlideIndex::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn six_advances_over_five_slides() {
        let mut carousel = Carousel::new(&FIVE).unwrap();
        let seen: Vec<usize> = (0..6).map(|_| carousel.advance()).collect();
        assert_eq!(seen, vec![1, 2, 3, 4, 0, 1]);
    }

    #[test]
    fn index_is_k_mod_n() {
        for n in 1..=7 {
            let slides = vec![(); n];
            let mut carousel = Carousel::new(&slides).unwrap();
            for k in 1..=20 {
                carousel.advance();
                if k % 3 == 0 {
                    carousel.step();
                }
                assert_eq!(carousel.current(), k % n);
                assert!(carousel.current() < carousel.index().count());
            }
        }
    }

    #[test]
    fn single_slide_stays_put_but_hides_hint() {
        let mut carousel = Carousel::new(&["only"]).unwrap();
        assert!(carousel.hint_visible());
        assert_eq!(carousel.advance(), 0);
        assert!(!carousel.hint_visible());
        assert_eq!(carousel.transition(), None);
        assert_eq!(carousel.displayed(), (0, SlidePhase::Resting));
    }

    #[test]
    fn hint_hides_on_timeout_first() {
        let mut carousel = Carousel::new(&FIVE).unwrap();
        assert!(carousel.hint_timed_out());
        assert!(!carousel.hint_visible());
        carousel.advance();
        assert!(!carousel.hint_visible());
    }

    #[test]
    fn hint_hides_on_advance_first() {
        let mut carousel = Carousel::new(&FIVE).unwrap();
        carousel.advance();
        assert!(!carousel.hint_timed_out());
        carousel.advance();
        assert!(!carousel.hint_visible());
    }

    #[test]
    fn transition_plays_out_then_in() {
        let mut carousel = Carousel::new(&FIVE).unwrap();
        carousel.advance();
        assert_eq!(carousel.displayed(), (0, SlidePhase::Exiting));
        assert_eq!(*carousel.displayed_slide(), "camera");

        carousel.step();
        assert_eq!(carousel.displayed(), (1, SlidePhase::Entering));

        assert_eq!(carousel.step(), None);
        assert_eq!(carousel.displayed(), (1, SlidePhase::Resting));
        assert_eq!(*carousel.displayed_slide(), "breed");
    }

    #[test]
    fn advances_while_exiting_retarget() {
        let mut carousel = Carousel::new(&FIVE).unwrap();
        carousel.advance();
        carousel.advance();
        carousel.advance();
        assert_eq!(
            carousel.transition(),
            Some(Transition { outgoing: 0, incoming: 3, stage: Stage::Exiting })
        );
        carousel.step();
        assert_eq!(carousel.displayed(), (3, SlidePhase::Entering));
    }

    #[test]
    fn advances_while_entering_are_coalesced() {
        let mut carousel = Carousel::new(&FIVE).unwrap();
        carousel.advance();
        carousel.step();
        carousel.advance();
        carousel.advance();
        // incoming slide keeps playing in
        assert_eq!(carousel.displayed(), (1, SlidePhase::Entering));

        assert_eq!(
            carousel.step(),
            Some(Transition { outgoing: 1, incoming: 3, stage: Stage::Exiting })
        );
        settle(&mut carousel);
        assert_eq!(carousel.displayed(), (3, SlidePhase::Resting));
    }

    #[test]
    fn wrapping_back_to_shown_slide_skips_second_transition() {
        let mut carousel = Carousel::new(&["a", "b"]).unwrap();
        carousel.advance();
        carousel.step();
        carousel.advance();
        carousel.advance();
        // back on slide 1, which is already playing in
        assert_eq!(carousel.step(), None);
        assert_eq!(carousel.displayed(), (1, SlidePhase::Resting));
    }

    #[test]
    fn wrapping_back_while_exiting_stops_the_change() {
        let mut carousel = Carousel::new(&["a", "b"]).unwrap();
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.transition(), None);
        assert_eq!(carousel.stage_key(), None);
        assert_eq!(carousel.displayed(), (0, SlidePhase::Resting));
    }

    #[test]
    fn retargeting_keeps_the_stage_key() {
        let mut carousel = Carousel::new(&FIVE).unwrap();
        carousel.advance();
        let exiting = carousel.stage_key();
        assert!(exiting.is_some());
        for _ in 0..10 {
            carousel.advance();
            assert_eq!(carousel.stage_key(), exiting);
        }
        assert_eq!(carousel.displayed().1, SlidePhase::Exiting);

        carousel.step();
        let entering = carousel.stage_key();
        assert!(entering.is_some());
        assert_ne!(entering, exiting);
        carousel.advance();
        assert_eq!(carousel.stage_key(), entering);
    }

    #[test]
    fn every_stage_boundary_changes_the_key() {
        let mut carousel = Carousel::new(&FIVE).unwrap();
        let mut keys = vec![carousel.stage_key()];
        carousel.advance();
        keys.push(carousel.stage_key());
        carousel.step();
        keys.push(carousel.stage_key());
        carousel.advance();
        carousel.step();
        keys.push(carousel.stage_key());
        settle(&mut carousel);
        keys.push(carousel.stage_key());
        carousel.advance();
        keys.push(carousel.stage_key());
        for pair in keys.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn hint_leaves_before_it_is_gone() {
        let mut carousel = Carousel::new(&FIVE).unwrap();
        assert_eq!(carousel.hint_phase(), HintPhase::Showing);
        assert!(!carousel.hint_exit_done());

        carousel.advance();
        assert_eq!(carousel.hint_phase(), HintPhase::Leaving);
        assert!(!carousel.hint_visible());
        assert!(!carousel.hint_timed_out());

        assert!(carousel.hint_exit_done());
        assert_eq!(carousel.hint_phase(), HintPhase::Gone);
        carousel.advance();
        assert_eq!(carousel.hint_phase(), HintPhase::Gone);
    }
}
