use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod lead;
mod links;
mod toggles;
mod components {
    pub mod collapsible;
    pub mod contact_sidebar;
    pub mod faq_list;
    pub mod go_back;
    pub mod hero;
    pub mod lead_form;
    pub mod reveal;
    pub mod seo;
    pub mod tab_nav;
}
mod pages {
    pub mod case_evaluation;
    pub mod index;
    pub mod not_found;
    pub mod practice_area;
    pub mod thank_you;
}

use content::PracticeArea;
use pages::{
    case_evaluation::CaseEvaluationPage,
    index::PracticeAreasIndex,
    not_found::NotFound,
    practice_area::PracticeAreaPage,
    thank_you::ThankYou,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/practice-areas/:slug")]
    PracticeArea { slug: String },
    #[at("/aviation/case-evaluation")]
    AviationEvaluation,
    #[at("/benzene-case-evaluation")]
    BenzeneEvaluation,
    #[at("/elder-abuse-case-evaluation")]
    ElderAbuseEvaluation,
    #[at("/sexual-abuse-case-evaluation")]
    SexualAbuseEvaluation,
    #[at("/spinal-cord-case-evaluation")]
    SpinalCordEvaluation,
    #[at("/truck-accident-case-evaluation")]
    TruckEvaluation,
    #[at("/thank-you")]
    ThankYou,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn evaluation(area: PracticeArea) -> Route {
        match area {
            PracticeArea::Aviation => Route::AviationEvaluation,
            PracticeArea::Benzene => Route::BenzeneEvaluation,
            PracticeArea::ElderAbuse => Route::ElderAbuseEvaluation,
            PracticeArea::SexualAbuse => Route::SexualAbuseEvaluation,
            PracticeArea::SpinalCord => Route::SpinalCordEvaluation,
            PracticeArea::Truck => Route::TruckEvaluation,
        }
    }
}

fn evaluation(area: PracticeArea) -> Html {
    info!("Rendering {} case evaluation", area.slug());
    html! { <CaseEvaluationPage key={area.slug()} {area} /> }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering practice areas index");
            html! { <PracticeAreasIndex /> }
        },
        Route::PracticeArea { slug } => match PracticeArea::from_slug(&slug) {
            Some(area) => {
                info!("Rendering practice area {}", slug);
                html! { <PracticeAreaPage key={slug} {area} /> }
            }
            None => {
                warn!("Unknown practice area {}", slug);
                html! { <NotFound /> }
            }
        },
        Route::AviationEvaluation => evaluation(PracticeArea::Aviation),
        Route::BenzeneEvaluation => evaluation(PracticeArea::Benzene),
        Route::ElderAbuseEvaluation => evaluation(PracticeArea::ElderAbuse),
        Route::SexualAbuseEvaluation => evaluation(PracticeArea::SexualAbuse),
        Route::SpinalCordEvaluation => evaluation(PracticeArea::SpinalCord),
        Route::TruckEvaluation => evaluation(PracticeArea::Truck),
        Route::ThankYou => {
            info!("Rendering Thank You page");
            html! { <ThankYou /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 80.0); // past the top of the hero
                }) as Box<dyn FnMut()>);

                if window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()).is_err() {
                    warn!("Could not attach nav scroll listener");
                }
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::FIRM_NAME}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        PracticeArea::all().iter().map(|area| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route>
                                    to={Route::PracticeArea { slug: area.slug().to_string() }}
                                    classes="nav-link"
                                >
                                    {area.name()}
                                </Link<Route>>
                            </div>
                        }).collect::<Html>()
                    }
                    <a class="nav-call-button" href={links::tel_href(config::PHONE_DIGITS)}>
                        {config::PHONE_DISPLAY}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    height: 74px;
                    background: transparent;
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(12, 22, 40, 0.97);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
                }
                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    max-width: 1200px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .nav-logo {
                    color: #c8a45c;
                    font-size: 1.3rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.2rem;
                }
                .nav-link {
                    color: #d4dbe6;
                    text-decoration: none;
                    font-size: 0.9rem;
                }
                .nav-link:hover {
                    color: #c8a45c;
                }
                .nav-call-button {
                    padding: 0.5rem 1rem;
                    border-radius: 6px;
                    background: #c8a45c;
                    color: #0c1628;
                    font-weight: 600;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #ffffff;
                }
                @media (max-width: 1000px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 74px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(12, 22, 40, 0.98);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_routes_match_content_paths() {
        for area in PracticeArea::all() {
            assert_eq!(Route::evaluation(*area).to_path(), area.evaluation().path);
        }
    }

    #[test]
    fn practice_area_route_uses_slug() {
        for area in PracticeArea::all() {
            let route = Route::PracticeArea { slug: area.slug().to_string() };
            assert_eq!(route.to_path(), area.page_path());
        }
    }
}
