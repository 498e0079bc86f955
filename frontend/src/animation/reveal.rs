use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, warn};
use thiserror::Error;

/// One side of a root margin, in CSS units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Inset {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for Inset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inset::Px(v) => write!(f, "{}px", v),
            Inset::Percent(v) => write!(f, "{}%", v),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MarginError {
    #[error("root margin needs 1 to 4 components, got {0}")]
    Arity(usize),
    #[error("invalid root margin component `{0}`")]
    Component(String),
}

impl FromStr for Inset {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || MarginError::Component(s.to_string());
        if let Some(num) = s.strip_suffix("px") {
            num.parse().map(Inset::Px).map_err(|_| bad())
        } else if let Some(num) = s.strip_suffix('%') {
            num.parse().map(Inset::Percent).map_err(|_| bad())
        } else if s.parse::<f64>().map_err(|_| bad())? == 0.0 {
            Ok(Inset::Px(0.0))
        } else {
            Err(bad())
        }
    }
}

/// Grows or shrinks the viewport box before intersections are computed.
/// Follows CSS `margin` shorthand order: top, right, bottom, left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: Inset,
    pub right: Inset,
    pub bottom: Inset,
    pub left: Inset,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin::uniform(Inset::Px(0.0));

    pub const fn uniform(inset: Inset) -> Self {
        Self { top: inset, right: inset, bottom: inset, left: inset }
    }

    /// Same inset above and below, nothing at the sides.
    pub const fn vertical(inset: Inset) -> Self {
        Self { top: inset, right: Inset::Px(0.0), bottom: inset, left: Inset::Px(0.0) }
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for RootMargin {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Inset>, _>>()?;
        let (top, right, bottom, left) = match parts.as_slice() {
            [a] => (*a, *a, *a, *a),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            other => return Err(MarginError::Arity(other.len())),
        };
        Ok(Self { top, right, bottom, left })
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Construction parameters for a reveal, supplied by the owning section.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub margin: RootMargin,
    pub trigger_once: bool,
}

impl RevealConfig {
    pub const fn once(threshold: f64) -> Self {
        Self { threshold, margin: RootMargin::ZERO, trigger_once: true }
    }

    pub const fn tracking(threshold: f64, margin: RootMargin) -> Self {
        Self { threshold, margin, trigger_once: false }
    }

    fn clamped_threshold(&self) -> f64 {
        self.threshold.clamp(0.0, 1.0)
    }
}

/// A single intersection reading for the observed region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub ratio: f64,
    pub intersecting: bool,
}

impl Visibility {
    pub const HIDDEN: Visibility = Visibility { ratio: 0.0, intersecting: false };
}

impl From<f64> for Visibility {
    fn from(ratio: f64) -> Self {
        Self { ratio, intersecting: true }
    }
}

/// Tracks whether a section has been seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub has_been_seen: bool,
}

/// Turns visibility samples into the `revealed` signal for one section.
#[derive(Clone, Debug)]
pub struct RevealController {
    config: RevealConfig,
    state: RevealState,
    revealed: bool,
}

impl RevealController {
    pub fn new(config: RevealConfig) -> Self {
        Self { config, state: RevealState::default(), revealed: false }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// True once a latched reveal can no longer change.
    pub fn is_settled(&self) -> bool {
        self.config.trigger_once && self.revealed
    }

    /// Feeds one sample. Returns the new value when `revealed` changed.
    pub fn observe(&mut self, sample: impl Into<Visibility>) -> Option<bool> {
        let sample = sample.into();
        if self.is_settled() {
            return None;
        }
        let meets = sample.intersecting && sample.ratio.clamp(0.0, 1.0) >= self.config.clamped_threshold();
        if meets {
            self.state.has_been_seen = true;
        }
        let next = if self.config.trigger_once { self.state.has_been_seen } else { meets };
        if next == self.revealed {
            return None;
        }
        self.revealed = next;
        Some(next)
    }
}

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("target element is not mounted")]
    NoTarget,
    #[error("viewport observation is unavailable: {0}")]
    Unsupported(String),
}

/// Host capability that reports visibility of one region.
///
/// The returned subscription stops observation when dropped.
pub trait ViewportObserver {
    type Subscription;

    fn observe(
        &self,
        config: &RevealConfig,
        on_sample: Box<dyn FnMut(Visibility)>,
    ) -> Result<Self::Subscription, ObserveError>;
}

/// Wires a controller to an observer and reports every change of `revealed`.
/// When observation fails the region is reported revealed at once and `None`
/// is returned.
pub fn start_reveal<O, F>(observer: &O, config: RevealConfig, on_change: F) -> Option<O::Subscription>
where
    O: ViewportObserver,
    F: FnMut(bool) + 'static,
{
    let on_change = Rc::new(RefCell::new(on_change));
    let sink = {
        let on_change = Rc::clone(&on_change);
        let mut controller = RevealController::new(config.clone());
        Box::new(move |sample: Visibility| {
            if let Some(revealed) = controller.observe(sample) {
                debug!("reveal changed to {} at ratio {:.2}", revealed, sample.ratio);
                (&mut *on_change.borrow_mut())(revealed);
            }
        }) as Box<dyn FnMut(Visibility)>
    };
    match observer.observe(&config, sink) {
        Ok(subscription) => Some(subscription),
        Err(err) => {
            warn!("{}, showing content", err);
            (&mut *on_change.borrow_mut())(true);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(controller: &mut RevealController, ratios: &[f64]) -> Vec<bool> {
        ratios
            .iter()
            .map(|r| {
                controller.observe(*r);
                controller.is_revealed()
            })
            .collect()
    }

    #[test]
    fn one_shot_reveal_latches() {
        let mut controller = RevealController::new(RevealConfig::once(0.5));
        assert_eq!(feed(&mut controller, &[0.0, 0.3, 0.6, 0.2]), vec![false, false, true, true]);
        assert!(controller.state().has_been_seen);
        assert!(controller.is_settled());
        assert_eq!(controller.observe(Visibility::HIDDEN), None);
    }

    #[test]
    fn tracking_reveal_follows_intersection() {
        let mut controller = RevealController::new(RevealConfig::tracking(0.5, RootMargin::ZERO));
        assert_eq!(feed(&mut controller, &[0.6, 0.2, 0.5, 0.0]), vec![true, false, true, false]);
        // has_been_seen stays latched even when the flag drops
        assert!(controller.state().has_been_seen);
    }

    #[test]
    fn reports_only_changes() {
        let mut controller = RevealController::new(RevealConfig::tracking(0.3, RootMargin::ZERO));
        assert_eq!(controller.observe(0.1), None);
        assert_eq!(controller.observe(0.4), Some(true));
        assert_eq!(controller.observe(0.9), None);
        assert_eq!(controller.observe(Visibility::HIDDEN), Some(false));
    }

    #[test]
    fn zero_threshold_needs_an_intersecting_sample() {
        let mut controller = RevealController::new(RevealConfig::once(0.0));
        assert_eq!(controller.observe(Visibility::HIDDEN), None);
        assert_eq!(controller.observe(0.0), Some(true));
    }

    #[test]
    fn never_reaching_threshold_stays_hidden() {
        let mut controller = RevealController::new(RevealConfig::once(0.8));
        assert_eq!(feed(&mut controller, &[0.1, 0.5, 0.79, 0.0]), vec![false; 4]);
        assert!(!controller.state().has_been_seen);
    }

    #[test]
    fn parses_margin_shorthand() {
        let margin: RootMargin = "-20% 0px -20% 0px".parse().unwrap();
        assert_eq!(margin, RootMargin::vertical(Inset::Percent(-20.0)));
        assert_eq!(margin.to_string(), "-20% 0px -20% 0px");

        let margin: RootMargin = "10px 5%".parse().unwrap();
        assert_eq!(margin.bottom, Inset::Px(10.0));
        assert_eq!(margin.left, Inset::Percent(5.0));

        let margin: RootMargin = "0 1px 2px".parse().unwrap();
        assert_eq!(margin.to_string(), "0px 1px 2px 1px");
    }

    #[test]
    fn rejects_bad_margins() {
        assert_eq!("".parse::<RootMargin>(), Err(MarginError::Arity(0)));
        assert_eq!("1px 2px 3px 4px 5px".parse::<RootMargin>(), Err(MarginError::Arity(5)));
        assert_eq!("12em".parse::<RootMargin>(), Err(MarginError::Component("12em".into())));
        assert_eq!("5".parse::<RootMargin>(), Err(MarginError::Component("5".into())));
    }

    type Sink = Rc<RefCell<Option<Box<dyn FnMut(Visibility)>>>>;

    struct FakeViewport {
        sink: Sink,
        supported: bool,
    }

    impl ViewportObserver for FakeViewport {
        type Subscription = ();

        fn observe(
            &self,
            _config: &RevealConfig,
            on_sample: Box<dyn FnMut(Visibility)>,
        ) -> Result<(), ObserveError> {
            if !self.supported {
                return Err(ObserveError::Unsupported("no IntersectionObserver".into()));
            }
            *self.sink.borrow_mut() = Some(on_sample);
            Ok(())
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl FnMut(bool) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let out = Rc::clone(&seen);
        (seen, move |revealed| out.borrow_mut().push(revealed))
    }

    #[test]
    fn start_reveal_forwards_changes() {
        let viewport = FakeViewport { sink: Rc::default(), supported: true };
        let (seen, on_change) = recorder();
        assert!(start_reveal(&viewport, RevealConfig::once(0.5), on_change).is_some());

        let mut sink = viewport.sink.borrow_mut().take().unwrap();
        for ratio in [0.0, 0.3, 0.6, 0.2] {
            sink(Visibility::from(ratio));
        }
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn start_reveal_fails_open() {
        let viewport = FakeViewport { sink: Rc::default(), supported: false };
        let (seen, on_change) = recorder();
        assert!(start_reveal(&viewport, RevealConfig::once(0.5), on_change).is_none());
        assert_eq!(*seen.borrow(), vec![true]);
    }
}
