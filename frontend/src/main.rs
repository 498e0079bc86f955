use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod hooks;
mod nav;
mod animation {
    pub mod carousel;
    pub mod reveal;
    pub mod stagger;
}
mod components {
    pub mod benefits_section;
    pub mod cta_section;
    pub mod feature_section;
    pub mod features_grid;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod hero_phone;
    pub mod tracked_section;
}

use components::{
    benefits_section::BenefitsSection,
    cta_section::CtaSection,
    feature_section::{FeatureSection, Layout},
    features_grid::FeaturesGrid,
    footer::Footer,
    header::Header,
    hero::HeroSection,
    tracked_section::TrackedSection,
};
use content::{EMPOWERING, RECOGNITION};
use nav::{ActiveSection, SectionId};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <LandingPage /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component(LandingPage)]
fn landing_page() -> Html {
    let active = use_reducer(ActiveSection::default);
    let on_visibility = {
        let active = active.dispatcher();
        Callback::from(move |update: (SectionId, bool)| active.dispatch(update))
    };

    html! {
        <div class="app">
            <Header active={active.current()} />
            <main class="app-content">
                <TrackedSection section={SectionId::Hero} on_visibility={on_visibility.clone()}>
                    <HeroSection />
                </TrackedSection>
                <TrackedSection section={SectionId::Features} on_visibility={on_visibility.clone()}>
                    <FeatureSection layout={Layout::Right} highlight={&RECOGNITION} />
                </TrackedSection>
                <TrackedSection section={SectionId::Benefits} on_visibility={on_visibility.clone()}>
                    <BenefitsSection layout={Layout::Left} highlight={&EMPOWERING} />
                </TrackedSection>
                <TrackedSection section={SectionId::Grid} on_visibility={on_visibility.clone()}>
                    <FeaturesGrid />
                </TrackedSection>
                <TrackedSection section={SectionId::Cta} on_visibility={on_visibility}>
                    <CtaSection />
                </TrackedSection>
            </main>
            <Footer />
            <style>
                {r#"
                    :root {
                        --primary-green: #2d5016;
                        --secondary-green: #4a7c3a;
                        --accent-green: #6b9b37;
                        --light-green: #e8f5e0;
                        --tech-blue: #1e3a8a;
                        --light-blue: #3b82f6;
                        --warm-orange: #ea580c;
                        --earth-brown: #7c2d12;
                        --cream: #fefcf3;
                        --white: #ffffff;
                        --gray-100: #f3f4f6;
                        --gray-600: #4b5563;
                        --gray-700: #374151;
                        --font-display: 'Poppins', sans-serif;
                        --font-body: 'Inter', sans-serif;
                    }
                    * {
                        margin: 0;
                        padding: 0;
                        box-sizing: border-box;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        font-family: var(--font-body);
                        color: var(--gray-700);
                        background: var(--white);
                    }
                    .app {
                        position: relative;
                        min-height: 100vh;
                        overflow-x: hidden;
                    }
                    .app-content {
                        position: relative;
                        z-index: 1;
                    }
                    .section-badge {
                        display: inline-block;
                        background: linear-gradient(135deg, var(--primary-green), var(--secondary-green));
                        color: white;
                        padding: 0.5rem 1rem;
                        border-radius: 20px;
                        font-size: 0.9rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .section-title {
                        font-family: var(--font-display);
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: var(--primary-green);
                        margin-bottom: 1.5rem;
                        line-height: 1.2;
                    }
                    .section-description {
                        font-size: 1.1rem;
                        color: var(--gray-700);
                        line-height: 1.7;
                        margin-bottom: 2rem;
                    }
                    .section-action {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: linear-gradient(135deg, var(--secondary-green), var(--accent-green));
                        color: white;
                        padding: 1rem 2rem;
                        border-radius: 25px;
                        text-decoration: none;
                        font-weight: 600;
                    }
                    .section-action::after {
                        content: '→';
                    }
                    .section-action:hover {
                        box-shadow: 0 10px 25px rgba(74, 124, 58, 0.3);
                    }
                    @media (max-width: 768px) {
                        .section-title {
                            font-size: 2rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
