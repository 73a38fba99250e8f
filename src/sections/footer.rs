use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::FadeIn;
use crate::content::{Link, FOOTER_OFFERINGS, FOOTER_TOOLS};

fn link_column(title: &'static str, links: &'static [Link]) -> Html {
    html! {
        <div class="footer-column">
            <h4>{title}</h4>
            <ul>
                { for links.iter().map(|link| html! {
                    <li><a href={link.href}>{link.label}</a></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        z-index: 1;
                        background: #111111;
                        color: rgba(250, 247, 242, 0.7);
                        padding: 5rem 2rem 2.5rem;
                    }

                    .site-footer .inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .site-footer .top {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 3rem;
                    }

                    .site-footer .brand {
                        font-size: 1.6rem;
                        font-weight: 600;
                        color: #FAF7F2;
                        letter-spacing: -0.02em;
                    }

                    .site-footer .tagline {
                        margin-top: 0.75rem;
                        max-width: 20rem;
                        line-height: 1.6;
                    }

                    .footer-column h4 {
                        margin: 0 0 1rem;
                        color: #FAF7F2;
                        font-size: 0.85rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }

                    .footer-column ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }

                    .footer-column li {
                        margin-bottom: 0.6rem;
                    }

                    .footer-column a {
                        color: inherit;
                        text-decoration: none;
                        font-size: 0.92rem;
                    }

                    .footer-column a:hover {
                        color: #FAF7F2;
                    }

                    .site-footer .legal {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        margin-top: 4rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(250, 247, 242, 0.1);
                        font-size: 0.8rem;
                    }

                    @media (max-width: 768px) {
                        .site-footer .top {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="inner">
                <FadeIn y={20.0}>
                    <div class="top">
                        <div>
                            <div class="brand">{"aeviti"}</div>
                            <p class="tagline">{"Calm, conservative wellness interpretation for the long run."}</p>
                        </div>
                        { link_column("Offerings", FOOTER_OFFERINGS) }
                        { link_column("Tools", FOOTER_TOOLS) }
                    </div>
                </FadeIn>
                <div class="legal">
                    <span>{format!("© {} Aeviti. All rights reserved.", year)}</span>
                    <span>{"Aeviti provides wellness information, not medical advice, diagnosis or treatment."}</span>
                </div>
            </div>
        </footer>
    }
}
