use yew::prelude::*;

use crate::content::SOCIAL_LINKS;
use crate::nav::SectionId;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer" id={SectionId::About.anchor()}>
            <div class="footer-content">
                <div class="footer-company">
                    <h3>{"AI Cattle Recognition"}</h3>
                    <p>{"Empowering Indian farmers with cutting-edge AI technology for better livestock management."}</p>
                    <div class="footer-social">
                        {
                            SOCIAL_LINKS.iter().map(|(name, icon)| html! {
                                <a href="#" aria-label={*name}>{*icon}</a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="footer-copyright">
                    <p>
                        {"© 2024 AI Cattle Recognition. All rights reserved. | "}
                        <a href="#privacy">{"Privacy Policy"}</a>
                        {" | "}
                        <a href="#terms">{"Terms of Service"}</a>
                    </p>
                    <p class="footer-note">{"Made with ❤️ for Indian farmers | Hackathon Project 2024"}</p>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: linear-gradient(135deg, #e0e7ff 0%, #c7d2fe 100%);
                        padding: 3rem 0 1.5rem;
                    }
                    .footer-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .footer-company {
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .footer-company h3 {
                        font-family: var(--font-display);
                        font-size: 1.5rem;
                        color: #1e293b;
                        margin-bottom: 1rem;
                    }
                    .footer-company p {
                        color: #374151;
                        max-width: 500px;
                        margin: 0 auto 1.5rem;
                    }
                    .footer-social {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .footer-social a {
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.6);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-decoration: none;
                        transition: transform 0.3s ease;
                    }
                    .footer-social a:hover {
                        transform: translateY(-3px);
                    }
                    .footer-copyright {
                        text-align: center;
                        color: #374151;
                        font-size: 0.9rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.4);
                        padding-top: 1rem;
                        font-weight: 500;
                    }
                    .footer-copyright a {
                        color: #1e40af;
                        margin: 0 0.5rem;
                    }
                    .footer-note {
                        margin-top: 0.5rem;
                        font-size: 0.8rem;
                    }
                "#}
            </style>
        </footer>
    }
}
