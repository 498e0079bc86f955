/// Where a revealed element sits in its animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Hidden,
    Visible,
}

impl From<bool> for AnimationState {
    fn from(revealed: bool) -> Self {
        if revealed {
            AnimationState::Visible
        } else {
            AnimationState::Hidden
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    Ease,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Animatable visual properties of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate_y: f64,
}

impl Pose {
    pub const REST: Pose = Pose { opacity: 1.0, translate_y: 0.0, scale: 1.0, rotate_y: 0.0 };

    pub const fn faded() -> Self {
        Pose { opacity: 0.0, ..Pose::REST }
    }

    pub const fn offset_y(self, translate_y: f64) -> Self {
        Pose { translate_y, ..self }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        Pose { scale, ..self }
    }

    pub const fn rotated_y(self, rotate_y: f64) -> Self {
        Pose { rotate_y, ..self }
    }

    pub fn css(&self) -> String {
        let mut parts = Vec::new();
        if self.translate_y != 0.0 {
            parts.push(format!("translateY({}px)", self.translate_y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({}deg)", self.rotate_y));
        }
        let transform = if parts.is_empty() { "none".to_string() } else { parts.join(" ") };
        format!("opacity: {}; transform: {};", self.opacity, transform)
    }
}

/// A tween between two poses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

pub const FADE_UP: AnimationSpec = AnimationSpec {
    from: Pose::faded().offset_y(30.0),
    to: Pose::REST,
    duration_ms: 500,
    delay_ms: 0,
    easing: Easing::EaseOut,
};

pub const SCALE_IN: AnimationSpec = AnimationSpec {
    from: Pose::faded().scaled(0.8),
    to: Pose::REST,
    duration_ms: 800,
    delay_ms: 0,
    easing: Easing::EaseOut,
};

pub const SLIDE_ENTER: AnimationSpec = AnimationSpec {
    from: Pose::faded().scaled(0.8).rotated_y(-90.0),
    to: Pose::REST,
    duration_ms: 500,
    delay_ms: 0,
    easing: Easing::EaseInOut,
};

pub const SLIDE_EXIT: AnimationSpec = AnimationSpec {
    from: Pose::REST,
    to: Pose::faded().scaled(0.8).rotated_y(90.0),
    duration_ms: 500,
    delay_ms: 0,
    easing: Easing::EaseInOut,
};

pub const HINT_ENTER: AnimationSpec = AnimationSpec {
    from: Pose::faded().offset_y(20.0),
    to: Pose::REST,
    duration_ms: 300,
    delay_ms: 0,
    easing: Easing::EaseOut,
};

pub const HINT_EXIT: AnimationSpec = AnimationSpec {
    from: Pose::REST,
    to: Pose::faded().offset_y(-20.0),
    duration_ms: 300,
    delay_ms: 0,
    easing: Easing::EaseOut,
};

pub const HEADER_DROP: AnimationSpec = AnimationSpec {
    from: Pose::REST.offset_y(-100.0),
    to: Pose::REST,
    duration_ms: 500,
    delay_ms: 0,
    easing: Easing::EaseOut,
};

impl AnimationSpec {
    pub const fn delayed(self, delay_ms: u32) -> Self {
        AnimationSpec { delay_ms, ..self }
    }

    pub const fn lasting(self, duration_ms: u32) -> Self {
        AnimationSpec { duration_ms, ..self }
    }

    /// Inline style for a state-driven element. Entering plays forward with
    /// the configured delay; leaving plays back at once.
    pub fn style_for(&self, state: AnimationState) -> String {
        let (pose, delay) = match state {
            AnimationState::Visible => (self.to, self.delay_ms),
            AnimationState::Hidden => (self.from, 0),
        };
        format!(
            "{} transition: opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms;",
            pose.css(),
            d = self.duration_ms,
            e = self.easing.css(),
            delay = delay,
        )
    }

    /// `@keyframes` rule for mount-time playback.
    pub fn keyframes(&self, name: &str) -> String {
        format!("@keyframes {} {{ from {{ {} }} to {{ {} }} }}", name, self.from.css(), self.to.css())
    }

    /// Inline style that plays the keyframes named `name`.
    pub fn animation(&self, name: &str) -> String {
        format!(
            "animation: {} {}ms {} {}ms both;",
            name,
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        )
    }
}

/// Start offsets for children revealed in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub const fn new(step_ms: u32) -> Self {
        Self { base_ms: 0, step_ms }
    }

    pub const fn starting_at(self, base_ms: u32) -> Self {
        Stagger { base_ms, ..self }
    }

    pub const fn delay_ms(&self, index: usize) -> u32 {
        self.base_ms + index as u32 * self.step_ms
    }

    /// Stagger for the children of item `index`; they never start before it.
    pub const fn nested(&self, index: usize, step_ms: u32) -> Stagger {
        Stagger { base_ms: self.delay_ms(index), step_ms }
    }

    pub fn item(&self, animation: AnimationSpec, index: usize) -> AnimationSpec {
        animation.delayed(self.delay_ms(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_delays_follow_document_order() {
        let stagger = Stagger::new(200).starting_at(100);
        let delays: Vec<u32> = (0..4).map(|i| stagger.delay_ms(i)).collect();
        assert_eq!(delays, vec![100, 300, 500, 700]);
    }

    #[test]
    fn delay_ignores_duration() {
        let stagger = Stagger::new(100);
        let short = stagger.item(FADE_UP.lasting(50), 3);
        let long = stagger.item(FADE_UP.lasting(5_000), 3);
        assert_eq!(short.delay_ms, 300);
        assert_eq!(long.delay_ms, 300);
    }

    #[test]
    fn nested_children_start_after_parent() {
        let section = Stagger::new(200);
        let list = section.nested(3, 100);
        assert_eq!(list.delay_ms(0), 600);
        assert!((0..10).all(|i| list.delay_ms(i) >= section.delay_ms(3)));
    }

    #[test]
    fn visible_style_plays_forward_with_delay() {
        let style = FADE_UP.delayed(200).style_for(AnimationState::Visible);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("opacity 500ms ease-out 200ms"));
    }

    #[test]
    fn hidden_style_reverses_without_delay() {
        let style = FADE_UP.delayed(200).style_for(AnimationState::Hidden);
        assert!(style.starts_with("opacity: 0; transform: translateY(30px);"));
        assert!(style.contains("transform 500ms ease-out 0ms"));
    }

    #[test]
    fn slide_transforms_mirror_each_other() {
        assert_eq!(SLIDE_ENTER.from.css(), "opacity: 0; transform: scale(0.8) rotateY(-90deg);");
        assert_eq!(SLIDE_EXIT.to.css(), "opacity: 0; transform: scale(0.8) rotateY(90deg);");
        assert_eq!(SLIDE_ENTER.to, SLIDE_EXIT.from);
    }

    #[test]
    fn keyframes_and_animation_css() {
        let hint = HINT_ENTER.delayed(50);
        assert_eq!(
            hint.keyframes("hint-in"),
            "@keyframes hint-in { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }"
        );
        assert_eq!(hint.animation("hint-in"), "animation: hint-in 300ms ease-out 50ms both;");
    }

    #[test]
    fn pose_css_joins_only_set_transforms() {
        assert_eq!(Pose::REST.css(), "opacity: 1; transform: none;");
        assert_eq!(
            Pose::faded().offset_y(-5.0).scaled(0.5).rotated_y(45.0).css(),
            "opacity: 0; transform: translateY(-5px) scale(0.5) rotateY(45deg);"
        );
    }

    #[test]
    fn hint_exit_rises_and_fades() {
        assert_eq!(
            HINT_EXIT.keyframes("hint-exit"),
            "@keyframes hint-exit { from { opacity: 1; transform: none; } to { opacity: 0; transform: translateY(-20px); } }"
        );
        assert_eq!(HINT_EXIT.duration_ms, HINT_ENTER.duration_ms);
    }

    #[test]
    fn state_from_revealed_flag() {
        assert_eq!(AnimationState::from(true), AnimationState::Visible);
        assert_eq!(AnimationState::from(false), AnimationState::Hidden);
    }
}
