use yew::prelude::*;

use crate::components::{FadeIn, Overline, TextReveal};
use crate::content::{total_markers, Category, CATEGORIES};
use crate::motion::{Easing, Stagger, Variant};

#[derive(Properties, PartialEq)]
struct CategoryCardProps {
    category: Category,
    delay: f64,
}

#[function_component(CategoryCard)]
fn category_card(props: &CategoryCardProps) -> Html {
    let category = props.category;

    html! {
        <FadeIn delay={props.delay} y={30.0} duration={0.8}>
            <article class="category" style={format!("--accent: {};", category.color)}>
                <header>
                    <span class="count">{category.count}</span>
                    <h3>{category.name}</h3>
                </header>
                <p>{category.subtitle}</p>
                <ul>
                    { for category.markers.iter().map(|marker| html! { <li>{*marker}</li> }) }
                </ul>
            </article>
        </FadeIn>
    }
}

#[function_component(Coverage)]
pub fn coverage() -> Html {
    let cards = Stagger::default();
    let heading = format!("{} markers.\nFive categories. *One picture*.", total_markers());

    html! {
        <section id="coverage" class="coverage">
            <style>
                {r#"
                    .coverage {
                        position: relative;
                        z-index: 1;
                        background: #F0EBE3;
                        padding: 8rem 2rem;
                    }

                    .coverage .inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .coverage h2 {
                        font-size: clamp(2rem, 4vw, 3.25rem);
                        letter-spacing: -0.03em;
                        font-weight: 500;
                        line-height: 1.1;
                        margin: 1rem 0 3.5rem;
                    }

                    .coverage .grid {
                        display: grid;
                        grid-template-columns: repeat(5, 1fr);
                        gap: 1rem;
                    }

                    .category {
                        height: 100%;
                        box-sizing: border-box;
                        border-radius: 1.25rem;
                        background: #FAF7F2;
                        padding: 1.5rem;
                        border-top: 3px solid var(--accent);
                    }

                    .category header {
                        display: flex;
                        align-items: baseline;
                        gap: 0.6rem;
                    }

                    .category .count {
                        font-size: 2rem;
                        font-weight: 600;
                        color: var(--accent);
                    }

                    .category h3 {
                        margin: 0;
                        font-size: 1.05rem;
                    }

                    .category p {
                        color: #666666;
                        font-size: 0.88rem;
                        line-height: 1.5;
                    }

                    .category ul {
                        list-style: none;
                        padding: 0;
                        margin: 1rem 0 0;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.4rem;
                    }

                    .category li {
                        font-size: 0.75rem;
                        padding: 0.25rem 0.6rem;
                        border-radius: 999px;
                        background: #F0EBE3;
                    }

                    @media (max-width: 1024px) {
                        .coverage .grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 600px) {
                        .coverage .grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="inner">
                <FadeIn variant={Variant::FadeDown} y={16.0} easing={Easing::QuartOut}>
                    <Overline>{"Coverage"}</Overline>
                </FadeIn>
                <TextReveal tag="h2" text={heading} />
                <div class="grid">
                    { for CATEGORIES.iter().enumerate().map(|(i, category)| html! {
                        <CategoryCard key={category.key} category={*category} delay={cards.delay(i)} />
                    }) }
                </div>
            </div>
        </section>
    }
}
