use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::PracticeArea;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub area: PracticeArea,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let page = props.area.page();
    let background = format!(
        "background-image: linear-gradient(rgba(12, 22, 40, 0.65), rgba(12, 22, 40, 0.85)), url('{}');",
        page.hero_image
    );

    html! {
        <header class="practice-hero" style={background}>
            <div class="practice-hero-content">
                <h1>{page.title}</h1>
                <p class="practice-hero-subtitle">{page.subtitle}</p>
                <Link<Route> to={Route::evaluation(props.area)} classes="hero-cta">
                    {"Start Your Free Case Evaluation"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .practice-hero {
                    min-height: 60vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background-size: cover;
                    background-position: center;
                    padding: 120px 20px 60px;
                    text-align: center;
                    color: #ffffff;
                }
                .practice-hero-content {
                    max-width: 900px;
                }
                .practice-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .practice-hero-subtitle {
                    font-size: 1.3rem;
                    color: #d4dbe6;
                    margin-bottom: 2rem;
                }
                .hero-cta {
                    display: inline-block;
                    background: #c8a45c;
                    color: #0c1628;
                    padding: 1rem 2rem;
                    border-radius: 6px;
                    font-weight: 600;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }
                .hero-cta:hover {
                    background: #e0bd72;
                }
                @media (max-width: 768px) {
                    .practice-hero h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
