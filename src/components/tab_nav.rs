use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::content::Tab;
use crate::toggles::TabBar;

#[derive(Properties, PartialEq)]
pub struct TabNavProps {
    pub tabs: &'static [Tab],
    pub bar: TabBar,
    pub on_select: Callback<&'static str>,
}

/// Smoothly scrolls the element with `id` to the top of the viewport.
pub fn scroll_to_anchor(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    match element {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            options.block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("No element with id {} to scroll to", id),
    }
}

#[function_component(TabNav)]
pub fn tab_nav(props: &TabNavProps) -> Html {
    html! {
        <nav class="tab-nav">
            <div class="tab-nav-inner">
                {
                    props.tabs.iter().map(|tab| {
                        let id = tab.id;
                        let onclick = {
                            let on_select = props.on_select.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_select.emit(id);
                                scroll_to_anchor(id);
                            })
                        };
                        html! {
                            <button
                                key={id}
                                class={classes!("tab-button", props.bar.is_active(id).then(|| "active"))}
                                {onclick}
                            >
                                {tab.label}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .tab-nav {
                    position: sticky;
                    top: 74px;
                    z-index: 50;
                    background: #0c1628;
                    border-bottom: 1px solid rgba(200, 164, 92, 0.3);
                    overflow-x: auto;
                }
                .tab-nav-inner {
                    display: flex;
                    gap: 0.25rem;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .tab-button {
                    background: none;
                    border: none;
                    border-bottom: 3px solid transparent;
                    color: #d4dbe6;
                    padding: 1rem 1.2rem;
                    font-size: 0.85rem;
                    letter-spacing: 0.05em;
                    white-space: nowrap;
                    cursor: pointer;
                }
                .tab-button.active {
                    color: #c8a45c;
                    border-bottom-color: #c8a45c;
                }
                "#}
            </style>
        </nav>
    }
}
