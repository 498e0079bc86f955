use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::stagger::HEADER_DROP;
use crate::nav::{scroll_to, SectionId, NAV_LINKS};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Section to highlight in the nav.
    #[prop_or_default]
    pub active: Option<SectionId>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);

    let go_to = {
        let menu_open = menu_open.clone();
        move |section: SectionId| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to(section);
                menu_open.set(false);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|&(section, label)| {
                let active = props.active == Some(section);
                html! {
                    <li class={class}>
                        <a
                            href={section.href()}
                            class={classes!(active.then(|| "active"))}
                            onclick={go_to(section)}
                        >
                            {label}
                        </a>
                    </li>
                }
            })
            .collect::<Html>()
    };

    html! {
        <header class="site-header" style={HEADER_DROP.animation("header-drop")}>
            <nav class="site-nav">
                <div class="site-logo">{"AI Cattle Recognition"}</div>
                <ul class="nav-links">
                    { links("nav-link") }
                </ul>
                <a class="nav-cta" href={SectionId::Cta.href()} onclick={go_to(SectionId::Cta)}>
                    {"Get App"}
                </a>
                <button class="mobile-menu-button" onclick={toggle_menu}>
                    {"☰"}
                </button>
            </nav>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            <ul>
                                { links("mobile-link") }
                            </ul>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {HEADER_DROP.keyframes("header-drop")}
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1000;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.08);
                    }
                    .site-nav {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .site-logo {
                        font-family: var(--font-display);
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: var(--primary-green);
                    }
                    .nav-links {
                        display: flex;
                        list-style: none;
                        gap: 2rem;
                    }
                    .nav-link a {
                        color: var(--gray-700);
                        text-decoration: none;
                        font-weight: 500;
                        transition: color 0.3s ease;
                    }
                    .nav-link a:hover,
                    .nav-link a.active {
                        color: var(--primary-green);
                    }
                    .nav-cta {
                        background: linear-gradient(135deg, var(--primary-green), var(--secondary-green));
                        color: white;
                        padding: 0.75rem 1.5rem;
                        border-radius: 25px;
                        text-decoration: none;
                        font-weight: 600;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .nav-cta:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 10px 20px rgba(45, 80, 22, 0.3);
                    }
                    .mobile-menu-button {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        color: var(--primary-green);
                        cursor: pointer;
                    }
                    .mobile-menu {
                        background: white;
                        padding: 1rem 2rem;
                    }
                    .mobile-menu ul {
                        list-style: none;
                    }
                    .mobile-link a {
                        display: block;
                        padding: 0.75rem 0;
                        color: var(--gray-700);
                        text-decoration: none;
                    }
                    @media (max-width: 768px) {
                        .nav-links, .nav-cta {
                            display: none;
                        }
                        .mobile-menu-button {
                            display: block;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
