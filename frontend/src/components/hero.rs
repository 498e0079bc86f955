use yew::prelude::*;

use crate::animation::stagger::{AnimationSpec, Pose, Stagger, FADE_UP, SCALE_IN};
use crate::components::hero_phone::HeroBannerPhone;
use crate::config;
use crate::content::HERO_STATS;
use crate::nav::SectionId;

const HERO_TEXT: AnimationSpec = FADE_UP.lasting(800);
const HERO_TITLE: AnimationSpec = AnimationSpec { from: Pose::faded().offset_y(50.0), ..HERO_TEXT };
const HERO_VISUAL: AnimationSpec = SCALE_IN.lasting(1000).delayed(config::VISUAL_DELAY_MS);

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    // Plays on mount, no scroll trigger.
    let stagger = Stagger::new(200).starting_at(200);

    html! {
        <section class="hero" id={SectionId::Hero.anchor()}>
            <div class="hero-content">
                <div class="hero-text">
                    <h1 class="hero-title" style={stagger.item(HERO_TITLE, 0).animation("hero-title-in")}>
                        {"AI-Powered Cattle Recognition"}
                        <br />
                        <span class="accent">{"for India"}</span>
                    </h1>
                    <p class="hero-subtitle" style={stagger.item(HERO_TEXT, 1).animation("hero-text-in")}>
                        {"Revolutionary technology that helps Indian farmers identify cattle and buffalo breeds with 99% accuracy, empowering better livestock management and breeding decisions."}
                    </p>
                    <div class="hero-buttons" style={stagger.item(HERO_TEXT, 2).animation("hero-text-in")}>
                        <a class="hero-primary" href={SectionId::Cta.href()}>{"Download App"}</a>
                        <a class="hero-secondary" href={SectionId::Features.href()}>{"Watch Demo"}</a>
                    </div>
                    <div class="hero-stats" style={stagger.item(HERO_TEXT, 3).animation("hero-text-in")}>
                        {
                            HERO_STATS.iter().map(|stat| html! {
                                <div class="hero-stat">
                                    <h3>{stat.value}</h3>
                                    <p>{stat.label}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="hero-visual" style={HERO_VISUAL.animation("hero-visual-in")}>
                    <HeroBannerPhone />
                </div>
            </div>
            <style>
                {format!(
                    "{}\n{}\n{}",
                    HERO_TITLE.keyframes("hero-title-in"),
                    HERO_TEXT.keyframes("hero-text-in"),
                    HERO_VISUAL.keyframes("hero-visual-in"),
                )}
                {r#"
                    .hero {
                        min-height: 100vh;
                        background: linear-gradient(135deg, #f8fafc 0%, #e2e8f0 100%);
                        display: flex;
                        align-items: center;
                        padding: 6rem 2rem 4rem;
                        position: relative;
                        overflow: hidden;
                    }
                    .hero-content {
                        max-width: 1400px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1.3fr 1fr;
                        gap: 2rem;
                        align-items: center;
                        padding: 0 2rem;
                    }
                    .hero-title {
                        font-family: var(--font-display);
                        font-size: 3.5rem;
                        font-weight: 700;
                        color: #1e293b;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .hero-title .accent {
                        color: #2563eb;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #64748b;
                        margin-bottom: 2rem;
                        line-height: 1.6;
                    }
                    .hero-buttons {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .hero-primary, .hero-secondary {
                        padding: 1rem 2rem;
                        border-radius: 30px;
                        text-decoration: none;
                        font-weight: 600;
                        font-size: 1.1rem;
                        transition: all 0.3s ease;
                    }
                    .hero-primary {
                        background: linear-gradient(135deg, #2563eb 0%, #1d4ed8 100%);
                        color: white;
                    }
                    .hero-primary::before {
                        content: '📱 ';
                    }
                    .hero-primary:hover {
                        transform: translateY(-3px);
                        box-shadow: 0 15px 30px rgba(37, 99, 235, 0.3);
                    }
                    .hero-secondary {
                        color: #2563eb;
                        border: 2px solid #2563eb;
                    }
                    .hero-secondary::before {
                        content: '▶️ ';
                    }
                    .hero-secondary:hover {
                        background: #2563eb;
                        color: white;
                        transform: translateY(-3px);
                    }
                    .hero-stats {
                        display: flex;
                        gap: 2rem;
                    }
                    .hero-stat {
                        text-align: center;
                    }
                    .hero-stat h3 {
                        font-family: var(--font-display);
                        font-size: 2rem;
                        color: #1e293b;
                        margin-bottom: 0.5rem;
                    }
                    .hero-stat p {
                        font-size: 0.9rem;
                        color: #64748b;
                    }
                    .hero-visual {
                        display: flex;
                        justify-content: flex-end;
                        align-items: center;
                        padding-right: 1rem;
                    }
                    @media (max-width: 768px) {
                        .hero-content {
                            grid-template-columns: 1fr;
                            text-align: center;
                            padding: 0 1rem;
                        }
                        .hero-title {
                            font-size: 2.5rem;
                        }
                        .hero-text {
                            order: 2;
                        }
                        .hero-buttons {
                            flex-direction: column;
                            align-items: center;
                        }
                        .hero-stats {
                            justify-content: center;
                        }
                        .hero-visual {
                            order: 1;
                            justify-content: center;
                            padding-right: 0;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
