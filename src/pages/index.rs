use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::seo::Seo;
use crate::config;
use crate::content::PracticeArea;
use crate::Route;

#[function_component(PracticeAreasIndex)]
pub fn practice_areas_index() -> Html {
    html! {
        <div class="areas-page">
            <Seo
                title="Practice Areas"
                description="Catastrophic injury and abuse attorneys serving clients throughout California. Free case evaluations, no fee unless we win."
                path="/"
            />
            <section class="areas-hero">
                <h1>{config::FIRM_NAME}</h1>
                <p>{"Former defense attorneys now fighting for injury and abuse victims across California."}</p>
            </section>
            <section class="areas-grid">
                {
                    PracticeArea::all().iter().map(|area| {
                        let page = area.page();
                        html! {
                            <Link<Route>
                                to={Route::PracticeArea { slug: area.slug().to_string() }}
                                classes="area-card"
                            >
                                <h2>{page.title}</h2>
                                <p>{page.subtitle}</p>
                                <span class="area-card-more">{"Learn more →"}</span>
                            </Link<Route>>
                        }
                    }).collect::<Html>()
                }
            </section>
            <style>
                {r#"
                .areas-page {
                    background: #0c1628;
                    color: #ffffff;
                    min-height: 100vh;
                    padding: 120px 1.5rem 5rem;
                }
                .areas-hero {
                    text-align: center;
                    max-width: 800px;
                    margin: 0 auto 3rem;
                }
                .areas-hero h1 {
                    font-size: 2.8rem;
                    color: #c8a45c;
                }
                .areas-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 1.5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .area-card {
                    display: block;
                    padding: 2rem;
                    border-radius: 10px;
                    border: 1px solid rgba(200, 164, 92, 0.3);
                    background: #13203a;
                    color: #ffffff;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }
                .area-card:hover {
                    transform: translateY(-4px);
                }
                .area-card p {
                    color: #b8c2d1;
                }
                .area-card-more {
                    color: #c8a45c;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
