use yew::prelude::*;

use crate::animation::stagger::{AnimationState, Stagger, FADE_UP, SCALE_IN};
use crate::components::feature_section::Layout;
use crate::config;
use crate::content::{Highlight, BENEFIT_DETAILS, METRICS};
use crate::hooks::use_reveal;
use crate::nav::SectionId;

#[derive(Properties, PartialEq)]
pub struct BenefitsSectionProps {
    pub layout: Layout,
    pub highlight: &'static Highlight,
}

#[function_component(BenefitsSection)]
pub fn benefits_section(props: &BenefitsSectionProps) -> Html {
    let node = use_node_ref();
    let state = AnimationState::from(use_reveal(node.clone(), config::SECTION_REVEAL));

    let stagger = Stagger::new(config::SECTION_STAGGER_MS);
    let list = stagger.nested(3, config::LIST_STAGGER_MS);
    let cards = Stagger::new(config::LIST_STAGGER_MS).starting_at(config::VISUAL_DELAY_MS);
    let item = |index: usize| stagger.item(FADE_UP, index).style_for(state);
    let highlight = props.highlight;

    html! {
        <section class={classes!("benefits-section", props.layout.class())} id={SectionId::Benefits.anchor()}>
            <div class="benefits-content" ref={node}>
                <div class="benefits-text">
                    <span class="section-badge" style={item(0)}>{highlight.subtitle}</span>
                    <h2 class="section-title" style={item(1)}>{highlight.title}</h2>
                    <p class="section-description" style={item(2)}>{highlight.description}</p>
                    <div class="benefit-list" style={item(3)}>
                        {
                            highlight.points.iter().zip(BENEFIT_DETAILS.iter()).enumerate().map(|(i, (point, detail))| html! {
                                <div class="benefit-item" style={list.item(FADE_UP, i).style_for(state)}>
                                    <h4><span>{"💡"}</span>{*point}</h4>
                                    <p>{*detail}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <a class="section-action" href={SectionId::Grid.href()} style={item(4)}>
                        {"Explore Features"}
                    </a>
                </div>
                <div class="metric-grid">
                    {
                        METRICS.iter().enumerate().map(|(i, metric)| html! {
                            <div
                                class={classes!("metric-card", if metric.tilt > 0 { "tilt-right" } else { "tilt-left" })}
                                style={cards.item(SCALE_IN, i).style_for(state)}
                            >
                                <div class="metric-icon">{metric.icon}</div>
                                <h3>{metric.title}</h3>
                                <p>{metric.value}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .benefits-section {
                        padding: 5rem 0;
                        background: var(--gray-100);
                    }
                    .benefits-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem;
                        display: grid;
                        grid-template-columns: 3fr 2fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .benefits-section.layout-left .benefits-text {
                        order: 2;
                    }
                    .benefits-section.layout-left .benefits-content {
                        grid-template-columns: 2fr 3fr;
                    }
                    .benefit-list {
                        display: grid;
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }
                    .benefit-item {
                        background: var(--white);
                        border-radius: 15px;
                        padding: 1.25rem;
                        border-left: 4px solid var(--accent-green);
                        box-shadow: 0 5px 15px rgba(0, 0, 0, 0.05);
                    }
                    .benefit-item h4 {
                        color: var(--primary-green);
                        margin-bottom: 0.5rem;
                    }
                    .benefit-item h4 span {
                        margin-right: 0.5rem;
                    }
                    .benefit-item p {
                        font-size: 0.9rem;
                        color: var(--gray-700);
                        line-height: 1.5;
                    }
                    .metric-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .metric-card {
                        background: linear-gradient(135deg, var(--primary-green), var(--secondary-green));
                        color: white;
                        border-radius: 20px;
                        padding: 1.5rem;
                        text-align: center;
                        box-shadow: 0 15px 30px rgba(45, 80, 22, 0.2);
                    }
                    .metric-card.tilt-right:hover {
                        transform: scale(1.05) rotate(2deg) !important;
                    }
                    .metric-card.tilt-left:hover {
                        transform: scale(1.05) rotate(-2deg) !important;
                    }
                    .metric-icon {
                        font-size: 2rem;
                        margin-bottom: 0.5rem;
                    }
                    .metric-card h3 {
                        font-size: 1rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .metric-card p {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    @media (max-width: 768px) {
                        .benefits-section {
                            padding: 3rem 0;
                        }
                        .benefits-content,
                        .benefits-section.layout-left .benefits-content {
                            grid-template-columns: 1fr;
                            gap: 2rem;
                        }
                        .benefits-section.layout-left .benefits-text {
                            order: 2;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
