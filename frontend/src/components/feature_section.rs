use yew::prelude::*;

use crate::animation::stagger::{AnimationState, Stagger, FADE_UP, SCALE_IN};
use crate::config;
use crate::content::Highlight;
use crate::hooks::use_reveal;
use crate::nav::SectionId;

/// Which side the text column sits on.
#[derive(Clone, Copy, PartialEq)]
pub enum Layout {
    Left,
    Right,
}

impl Layout {
    pub fn class(self) -> &'static str {
        match self {
            Layout::Left => "layout-left",
            Layout::Right => "layout-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureSectionProps {
    pub layout: Layout,
    pub highlight: &'static Highlight,
}

#[function_component(FeatureSection)]
pub fn feature_section(props: &FeatureSectionProps) -> Html {
    let node = use_node_ref();
    let state = AnimationState::from(use_reveal(node.clone(), config::SECTION_REVEAL));

    let stagger = Stagger::new(config::SECTION_STAGGER_MS);
    let list = stagger.nested(3, config::LIST_STAGGER_MS);
    let item = |index: usize| stagger.item(FADE_UP, index).style_for(state);
    let visual = SCALE_IN.delayed(config::VISUAL_DELAY_MS).style_for(state);
    let highlight = props.highlight;

    html! {
        <section class={classes!("feature-section", props.layout.class())} id={SectionId::Features.anchor()}>
            <div class="feature-content" ref={node}>
                <div class="feature-text">
                    <span class="section-badge" style={item(0)}>{highlight.subtitle}</span>
                    <h2 class="section-title" style={item(1)}>{highlight.title}</h2>
                    <p class="section-description" style={item(2)}>{highlight.description}</p>
                    <ul class="check-list" style={item(3)}>
                        {
                            highlight.points.iter().enumerate().map(|(i, point)| html! {
                                <li style={list.item(FADE_UP, i).style_for(state)}>{*point}</li>
                            }).collect::<Html>()
                        }
                    </ul>
                    <a class="section-action" href={SectionId::Benefits.href()} style={item(4)}>
                        {"Learn More"}
                    </a>
                </div>
                <div class="feature-visual" style={visual}>
                    <div class="feature-card">
                        <div class="feature-card-icon">{"🧠"}</div>
                        <h3>{"AI Recognition"}</h3>
                        <p>{"Advanced machine learning algorithms trained on thousands of Indian cattle images for precise breed identification"}</p>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .feature-section {
                        padding: 5rem 0;
                        background: var(--white);
                    }
                    .feature-section.layout-left {
                        background: var(--gray-100);
                    }
                    .feature-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem;
                        display: grid;
                        grid-template-columns: 3fr 2fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .layout-left .feature-content {
                        grid-template-columns: 2fr 3fr;
                    }
                    .layout-left .feature-text {
                        order: 2;
                    }
                    .feature-visual {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                    }
                    .feature-card {
                        width: 350px;
                        height: 350px;
                        background: linear-gradient(135deg, var(--tech-blue), var(--light-blue));
                        border-radius: 30px;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: white;
                        text-align: center;
                        padding: 2rem;
                        box-shadow: 0 25px 50px rgba(30, 58, 138, 0.3);
                    }
                    .feature-card-icon {
                        font-size: 4rem;
                        margin-bottom: 1rem;
                    }
                    .feature-card h3 {
                        font-size: 1.5rem;
                        margin-bottom: 1rem;
                    }
                    .feature-card p {
                        opacity: 0.9;
                        line-height: 1.5;
                    }
                    .check-list {
                        list-style: none;
                        margin-bottom: 2rem;
                    }
                    .check-list li {
                        margin-bottom: 1rem;
                        color: var(--gray-700);
                    }
                    .check-list li::before {
                        content: '✅';
                        margin-right: 1rem;
                    }
                    @media (max-width: 768px) {
                        .feature-section {
                            padding: 3rem 0;
                        }
                        .feature-content,
                        .layout-left .feature-content {
                            grid-template-columns: 1fr;
                            gap: 2rem;
                        }
                        .feature-text,
                        .layout-left .feature-text {
                            order: 2;
                        }
                        .feature-card {
                            width: 280px;
                            height: 280px;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
