use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::links::tel_href;
use crate::Route;

fn confirmation_for(service: Option<&str>) -> &'static str {
    match service {
        Some("elder-abuse-evaluation") => {
            "Your elder abuse case evaluation has been received. A member of our team will contact you within 24 hours. If your loved one is in immediate danger, call 911."
        }
        _ => "Your request has been received. A member of our team will contact you within 24 hours.",
    }
}

#[function_component(ThankYou)]
pub fn thank_you() -> Html {
    let service = use_search_param("service".to_string());

    html! {
        <div class="thank-you-page">
            <h1>{"Thank You"}</h1>
            <p>{confirmation_for(service.as_deref())}</p>
            <p>
                {"Questions in the meantime? Call "}
                <a href={tel_href(config::PHONE_DIGITS)}>{config::PHONE_DISPLAY}</a>
            </p>
            <Link<Route> to={Route::Home} classes="thank-you-home">
                {"Back to Practice Areas"}
            </Link<Route>>
            <style>
                {r#"
                .thank-you-page {
                    background: #0c1628;
                    color: #ffffff;
                    min-height: 100vh;
                    padding: 160px 1.5rem 5rem;
                    text-align: center;
                }
                .thank-you-page p {
                    color: #d4dbe6;
                    max-width: 640px;
                    margin: 0 auto 1rem;
                }
                .thank-you-page a {
                    color: #c8a45c;
                }
                .thank-you-home {
                    display: inline-block;
                    margin-top: 1.5rem;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::confirmation_for;

    #[test]
    fn elder_abuse_gets_its_own_message() {
        assert!(confirmation_for(Some("elder-abuse-evaluation")).contains("elder abuse"));
        assert_eq!(confirmation_for(None), confirmation_for(Some("unknown")));
    }
}
