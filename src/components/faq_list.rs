use log::info;
use yew::prelude::*;

use super::tab_nav::scroll_to_anchor;
use crate::content::FaqEntry;
use crate::toggles::{faq_anchor, Accordion};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    entry: FaqEntry,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div id={faq_anchor(props.index)} class={classes!("faq-item", if props.open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    <p>{props.entry.answer}</p>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
    pub accordion: Accordion,
    pub on_change: Callback<Accordion>,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    // A #faq-N hash opens that question once the list is mounted.
    {
        let accordion = props.accordion;
        let on_change = props.on_change.clone();
        let len = props.entries.len();
        use_effect_with_deps(
            move |_| {
                let hash = web_sys::window()
                    .and_then(|w| w.location().hash().ok())
                    .unwrap_or_default();
                let mut next = accordion;
                if next.open_from_hash(&hash, len) {
                    info!("Opening FAQ from link {}", hash);
                    on_change.emit(next);
                    if let Some(index) = next.open_index() {
                        scroll_to_anchor(&faq_anchor(index));
                    }
                }
                || ()
            },
            (),
        );
    }

    let on_toggle = {
        let accordion = props.accordion;
        let on_change = props.on_change.clone();
        Callback::from(move |index: usize| {
            let mut next = accordion;
            next.toggle(index);
            on_change.emit(next);
        })
    };

    html! {
        <div class="faq-list">
            {
                props.entries.iter().enumerate().map(|(index, entry)| html! {
                    <FaqItem
                        key={index}
                        {index}
                        entry={*entry}
                        open={props.accordion.is_open(index)}
                        on_toggle={on_toggle.clone()}
                    />
                }).collect::<Html>()
            }
            <style>
                {r#"
                .faq-item {
                    border: 1px solid rgba(200, 164, 92, 0.2);
                    border-radius: 8px;
                    margin-bottom: 1rem;
                    background: rgba(255, 255, 255, 0.03);
                    scroll-margin-top: 140px;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.2rem;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-item.open .faq-question {
                    color: #c8a45c;
                }
                .toggle-icon {
                    font-size: 1.4rem;
                    margin-left: 1rem;
                }
                .faq-answer {
                    padding: 0 1.2rem 1.2rem;
                    color: #b8c2d1;
                    line-height: 1.7;
                }
                "#}
            </style>
        </div>
    }
}
