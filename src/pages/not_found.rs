use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page Not Found"}</h1>
            <p>{"The page you are looking for does not exist or has moved."}</p>
            <Link<Route> to={Route::Home} classes="not-found-home">
                {"See all practice areas"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    background: #0c1628;
                    color: #ffffff;
                    min-height: 100vh;
                    padding: 160px 1.5rem;
                    text-align: center;
                }
                .not-found-home {
                    color: #c8a45c;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
