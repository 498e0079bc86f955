use yew::prelude::*;

use crate::animation::stagger::{AnimationState, Stagger, FADE_UP};
use crate::config;
use crate::content::GRID_FEATURES;
use crate::hooks::use_reveal;
use crate::nav::SectionId;

#[function_component(FeaturesGrid)]
pub fn features_grid() -> Html {
    let node = use_node_ref();
    let state = AnimationState::from(use_reveal(node.clone(), config::GRID_REVEAL));

    // Header and cards start together, each on its own cascade.
    let stagger = Stagger::new(config::GRID_STAGGER_MS);
    let header = |index: usize| stagger.item(FADE_UP, index).style_for(state);

    html! {
        <section class="grid-section" id={SectionId::Grid.anchor()}>
            <div class="grid-content" ref={node}>
                <div class="grid-header">
                    <span class="section-badge" style={header(0)}>{"AI Features"}</span>
                    <h2 class="section-title" style={header(1)}>{"Comprehensive Livestock Management"}</h2>
                    <p class="section-description" style={header(2)}>
                        {"Our AI-powered platform provides everything you need to manage your cattle and buffalo with confidence, from breed identification to health monitoring and market intelligence."}
                    </p>
                </div>
                <div class="feature-grid">
                    {
                        GRID_FEATURES.iter().enumerate().map(|(i, feature)| html! {
                            <div class="grid-card" style={stagger.item(FADE_UP, i).style_for(state)}>
                                <div class="grid-card-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                                <ul>
                                    { for feature.points.iter().map(|point| html! { <li>{*point}</li> }) }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .grid-section {
                        padding: 5rem 0;
                        background: var(--white);
                    }
                    .grid-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .grid-header {
                        text-align: center;
                        max-width: 800px;
                        margin: 0 auto 4rem;
                    }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 2rem;
                    }
                    .grid-card {
                        background: var(--white);
                        border-radius: 20px;
                        padding: 2rem;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                        border: 1px solid var(--gray-100);
                    }
                    .grid-card:hover {
                        transform: scale(1.02) !important;
                    }
                    .grid-card-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                    }
                    .grid-card h3 {
                        font-size: 1.3rem;
                        color: var(--primary-green);
                        margin-bottom: 1rem;
                    }
                    .grid-card p {
                        color: var(--gray-700);
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }
                    .grid-card ul {
                        list-style: none;
                        font-size: 0.9rem;
                        color: var(--gray-600);
                    }
                    .grid-card li {
                        margin-bottom: 0.5rem;
                    }
                    .grid-card li::before {
                        content: '✓';
                        color: var(--accent-green);
                        font-weight: bold;
                        margin-right: 0.5rem;
                    }
                    @media (max-width: 768px) {
                        .grid-section {
                            padding: 3rem 0;
                        }
                        .feature-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
