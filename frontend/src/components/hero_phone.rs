use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error};
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::carousel::{Carousel, HintPhase, SlidePhase};
use crate::animation::stagger::{HINT_ENTER, HINT_EXIT, SLIDE_ENTER, SLIDE_EXIT};
use crate::config;
use crate::content::{SlideContent, SLIDES};

pub enum PhoneAction {
    Advance,
    HintTimedOut,
    HintExitDone,
    TransitionDone,
}

#[derive(Clone, PartialEq)]
pub struct PhoneState(Carousel<'static, SlideContent>);

impl Reducible for PhoneState {
    type Action = PhoneAction;

    fn reduce(self: Rc<Self>, action: PhoneAction) -> Rc<Self> {
        let mut carousel = self.0.clone();
        match action {
            PhoneAction::Advance => {
                let current = carousel.advance();
                debug!("phone advanced to slide {}", current);
            }
            PhoneAction::HintTimedOut => {
                if carousel.hint_timed_out() {
                    debug!("space hint timed out");
                }
            }
            PhoneAction::HintExitDone => {
                carousel.hint_exit_done();
            }
            PhoneAction::TransitionDone => {
                carousel.step();
            }
        }
        PhoneState(carousel).into()
    }
}

#[function_component(HeroBannerPhone)]
pub fn hero_banner_phone() -> Html {
    match Carousel::new(&SLIDES) {
        Ok(carousel) => html! { <PhoneCarousel initial={PhoneState(carousel)} /> },
        Err(err) => {
            error!("phone mockup not rendered: {}", err);
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
struct PhoneCarouselProps {
    initial: PhoneState,
}

#[function_component(PhoneCarousel)]
fn phone_carousel(props: &PhoneCarouselProps) -> Html {
    let state = use_reducer(|| props.initial.clone());

    {
        let state = state.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.code() == config::ADVANCE_KEY {
                e.prevent_default();
                state.dispatch(PhoneAction::Advance);
            }
        });
    }

    {
        let state = state.clone();
        use_timeout(move || state.dispatch(PhoneAction::HintTimedOut), config::HINT_TIMEOUT_MS);
    }

    // One timer per stage of a slide change; dropping it on a new stage or
    // unmount cancels it.
    {
        let state = state.clone();
        let stage_key = state.0.stage_key();
        use_effect_with_deps(
            move |stage_key| {
                let timer = stage_key.map(|_| {
                    Timeout::new(config::SLIDE_TRANSITION_MS, move || {
                        state.dispatch(PhoneAction::TransitionDone)
                    })
                });
                move || drop(timer)
            },
            stage_key,
        );
    }

    {
        let state = state.clone();
        let hint_phase = state.0.hint_phase();
        use_effect_with_deps(
            move |hint_phase| {
                let timer = (*hint_phase == HintPhase::Leaving).then(|| {
                    Timeout::new(HINT_EXIT.duration_ms, move || state.dispatch(PhoneAction::HintExitDone))
                });
                move || drop(timer)
            },
            hint_phase,
        );
    }

    let (index, phase) = state.0.displayed();
    let slide = state.0.displayed_slide();
    let slide_style = match phase {
        SlidePhase::Resting => String::new(),
        SlidePhase::Exiting => SLIDE_EXIT.lasting(config::SLIDE_TRANSITION_MS).animation("slide-exit"),
        SlidePhase::Entering => SLIDE_ENTER.lasting(config::SLIDE_TRANSITION_MS).animation("slide-enter"),
    };

    html! {
        <div class="phone-wrapper">
            <div class="phone-frame">
                <div class="phone-screen">
                    <div
                        key={index.to_string()}
                        class="phone-slide"
                        style={slide_style}
                    >
                        <div class="phone-placeholder" style={format!("background: {};", slide.background)}>
                            <div class="icon">{slide.icon}</div>
                            <h3>{slide.title}</h3>
                            <p>{slide.description}</p>
                        </div>
                    </div>
                </div>
            </div>
            {
                match state.0.hint_phase() {
                    HintPhase::Showing => html! {
                        <div class="space-hint" style={HINT_ENTER.animation("hint-enter")}>
                            {"Press SPACE to see features"}
                        </div>
                    },
                    HintPhase::Leaving => html! {
                        <div class="space-hint" style={HINT_EXIT.animation("hint-exit")}>
                            {"Press SPACE to see features"}
                        </div>
                    },
                    HintPhase::Gone => html! {},
                }
            }
            <style>
                {[
                    SLIDE_ENTER.keyframes("slide-enter"),
                    SLIDE_EXIT.keyframes("slide-exit"),
                    HINT_ENTER.keyframes("hint-enter"),
                    HINT_EXIT.keyframes("hint-exit"),
                ].join("\n")}
                {r#"
                    .phone-wrapper {
                        position: relative;
                        display: flex;
                        justify-content: center;
                        align-items: center;
                    }
                    .phone-frame {
                        width: 260px;
                        height: 520px;
                        background: linear-gradient(145deg, #1a1a1a, #2a2a2a);
                        border-radius: 20px;
                        padding: 15px;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.3), inset 0 1px 0 rgba(255, 255, 255, 0.1);
                        position: relative;
                    }
                    .phone-frame::before {
                        content: '';
                        position: absolute;
                        top: 8px;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 60px;
                        height: 6px;
                        background: #333;
                        border-radius: 3px;
                    }
                    .phone-screen {
                        width: 100%;
                        height: 100%;
                        background: #000;
                        border-radius: 16px;
                        overflow: hidden;
                        position: relative;
                        perspective: 800px;
                    }
                    .phone-slide {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .phone-placeholder {
                        width: 100%;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: white;
                        text-align: center;
                        padding: 2rem;
                        border-radius: 24px;
                        white-space: pre-line;
                    }
                    .phone-placeholder h3 {
                        font-size: 1.2rem;
                        margin-bottom: 1rem;
                        font-weight: 600;
                    }
                    .phone-placeholder p {
                        font-size: 0.9rem;
                        opacity: 0.9;
                        line-height: 1.4;
                    }
                    .phone-placeholder .icon {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .space-hint {
                        position: absolute;
                        bottom: -60px;
                        left: 50%;
                        margin-left: -110px;
                        width: 220px;
                        background: rgba(45, 80, 22, 0.9);
                        color: white;
                        padding: 0.5rem 1rem;
                        border-radius: 20px;
                        font-size: 0.8rem;
                        font-weight: 500;
                        text-align: center;
                        box-shadow: 0 5px 15px rgba(0, 0, 0, 0.2);
                    }
                    .space-hint::before {
                        content: '⌨️';
                        margin-right: 0.5rem;
                    }
                "#}
            </style>
        </div>
    }
}
