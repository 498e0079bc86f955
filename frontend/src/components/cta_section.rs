use yew::prelude::*;

use crate::animation::stagger::{AnimationState, Stagger, FADE_UP};
use crate::config;
use crate::content::{CTA_STATS, TRUST_BADGES};
use crate::hooks::use_reveal;
use crate::nav::SectionId;

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    let node = use_node_ref();
    let state = AnimationState::from(use_reveal(node.clone(), config::SECTION_REVEAL));

    let stagger = Stagger::new(config::SECTION_STAGGER_MS);
    let stats = stagger.nested(3, config::LIST_STAGGER_MS);
    let item = |index: usize| stagger.item(FADE_UP, index).style_for(state);

    html! {
        <section class="cta-section" id={SectionId::Cta.anchor()}>
            <div class="cta-floating">
                <span></span>
                <span></span>
                <span></span>
            </div>
            <div class="cta-content" ref={node}>
                <h2 class="cta-title" style={item(0)}>
                    {"Ready to Transform Your"}
                    <br />
                    <span class="accent">{"Livestock Management?"}</span>
                </h2>
                <p class="cta-description" style={item(1)}>
                    {"Join thousands of Indian farmers who are already using AI to make smarter decisions about their cattle and buffalo. Download our free app and start recognizing breeds instantly."}
                </p>
                <div class="cta-buttons" style={item(2)}>
                    <a class="cta-primary" href="#download">{"Download Free App"}</a>
                    <a class="cta-secondary" href="#demo">{"Try Web Demo"}</a>
                </div>
                <div class="cta-stats" style={item(3)}>
                    {
                        CTA_STATS.iter().enumerate().map(|(i, stat)| html! {
                            <div class="cta-stat" style={stats.item(FADE_UP, i).style_for(state)}>
                                <h3>{stat.value}</h3>
                                <p>{stat.label}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="trust-badges" style={item(4)}>
                    {
                        TRUST_BADGES.iter().map(|(icon, label)| html! {
                            <div class="trust-badge">
                                <span>{*icon}</span>
                                {*label}
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .cta-section {
                        position: relative;
                        padding: 6rem 0;
                        background: linear-gradient(135deg, #eff6ff 0%, #dbeafe 100%);
                        overflow: hidden;
                        text-align: center;
                    }
                    .cta-floating span {
                        position: absolute;
                        width: 120px;
                        height: 120px;
                        border-radius: 50%;
                        background: rgba(37, 99, 235, 0.08);
                        animation: cta-float 6s ease-in-out infinite;
                    }
                    .cta-floating span:nth-child(1) {
                        top: 10%;
                        left: 10%;
                    }
                    .cta-floating span:nth-child(2) {
                        top: 60%;
                        right: 10%;
                        animation-delay: -2s;
                    }
                    .cta-floating span:nth-child(3) {
                        bottom: 10%;
                        left: 40%;
                        animation-delay: -4s;
                    }
                    @keyframes cta-float {
                        0%, 100% { transform: translateY(0px) rotate(0deg); }
                        50% { transform: translateY(-20px) rotate(180deg); }
                    }
                    .cta-content {
                        position: relative;
                        z-index: 1;
                        max-width: 1000px;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .cta-title {
                        font-family: var(--font-display);
                        font-size: 3rem;
                        color: #1e293b;
                        margin-bottom: 1.5rem;
                    }
                    .cta-title .accent {
                        color: #2563eb;
                    }
                    .cta-description {
                        font-size: 1.2rem;
                        color: #475569;
                        line-height: 1.7;
                        margin-bottom: 2.5rem;
                    }
                    .cta-buttons {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .cta-primary, .cta-secondary {
                        padding: 1rem 2rem;
                        border-radius: 30px;
                        text-decoration: none;
                        font-weight: 600;
                        transition: transform 0.3s ease;
                    }
                    .cta-primary {
                        background: linear-gradient(135deg, #2563eb 0%, #1d4ed8 100%);
                        color: white;
                    }
                    .cta-secondary {
                        color: #2563eb;
                        border: 2px solid #2563eb;
                    }
                    .cta-primary:hover, .cta-secondary:hover {
                        transform: scale(1.05);
                    }
                    .cta-stats {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        margin-bottom: 3rem;
                    }
                    .cta-stat {
                        background: rgba(255, 255, 255, 0.7);
                        border-radius: 15px;
                        padding: 1.5rem;
                    }
                    .cta-stat h3 {
                        font-size: 2rem;
                        color: #2563eb;
                        margin-bottom: 0.5rem;
                    }
                    .cta-stat p {
                        color: #475569;
                    }
                    .trust-badges {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .trust-badge {
                        background: white;
                        border-radius: 20px;
                        padding: 0.5rem 1rem;
                        font-size: 0.9rem;
                        color: #1e293b;
                        box-shadow: 0 5px 15px rgba(0, 0, 0, 0.05);
                    }
                    .trust-badge span {
                        margin-right: 0.5rem;
                    }
                    @media (max-width: 768px) {
                        .cta-title {
                            font-size: 2rem;
                        }
                        .cta-buttons {
                            flex-direction: column;
                            align-items: center;
                        }
                        .cta-stats {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
        </section>
    }
}
