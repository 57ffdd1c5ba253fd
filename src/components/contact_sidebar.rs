use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::PracticeArea;
use crate::links::{mailto_href, tel_href};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ContactSidebarProps {
    pub area: PracticeArea,
}

#[function_component(ContactSidebar)]
pub fn contact_sidebar(props: &ContactSidebarProps) -> Html {
    let page = props.area.page();
    let email = mailto_href(page.contact_email, page.title, "");

    html! {
        <aside class="contact-sidebar">
            <h3>{"3 Ways to Start Your Case"}</h3>
            <a class="sidebar-action" href={tel_href(config::PHONE_DIGITS)}>
                <span class="sidebar-action-title">{"Call Us 24/7"}</span>
                <span class="sidebar-action-detail">{config::PHONE_DISPLAY}</span>
            </a>
            <Link<Route> to={Route::evaluation(props.area)} classes="sidebar-action">
                <span class="sidebar-action-title">{"Free Case Evaluation"}</span>
                <span class="sidebar-action-detail">{"Takes about 5 minutes"}</span>
            </Link<Route>>
            <a class="sidebar-action" href={email}>
                <span class="sidebar-action-title">{"Email Us"}</span>
                <span class="sidebar-action-detail">{page.contact_email}</span>
            </a>
            <p class="sidebar-note">{"No fee unless we win. Consultations are free and confidential."}</p>
            <style>
                {r#"
                .contact-sidebar {
                    position: sticky;
                    top: 140px;
                    background: #13203a;
                    border: 1px solid rgba(200, 164, 92, 0.3);
                    border-radius: 10px;
                    padding: 1.5rem;
                }
                .contact-sidebar h3 {
                    color: #c8a45c;
                    margin-bottom: 1rem;
                }
                .sidebar-action {
                    display: flex;
                    flex-direction: column;
                    padding: 0.9rem 1rem;
                    margin-bottom: 0.75rem;
                    border-radius: 6px;
                    background: rgba(255, 255, 255, 0.05);
                    color: #ffffff;
                    text-decoration: none;
                }
                .sidebar-action:hover {
                    background: rgba(200, 164, 92, 0.15);
                }
                .sidebar-action-title {
                    font-weight: 600;
                }
                .sidebar-action-detail {
                    font-size: 0.9rem;
                    color: #b8c2d1;
                }
                .sidebar-note {
                    font-size: 0.85rem;
                    color: #8d99ab;
                }
                "#}
            </style>
        </aside>
    }
}
