use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};
use yew::prelude::*;

use crate::toggles::Revealed;

/// Fraction of the viewport a section's top must pass before it fades in.
const REVEAL_AT: f64 = 0.8;

fn in_reveal_zone(top: f64, viewport: f64) -> bool {
    top < viewport * REVEAL_AT
}

impl Reducible for Revealed {
    type Action = Vec<String>;

    fn reduce(self: Rc<Self>, ids: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.reveal(ids) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Ids of the `.content-section` blocks currently in the reveal zone.
fn sections_in_view(window: &Window, document: &Document) -> Vec<String> {
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let Ok(sections) = document.query_selector_all(".content-section") else {
        return Vec::new();
    };

    (0..sections.length())
        .filter_map(|i| sections.get(i).and_then(|n| n.dyn_into::<Element>().ok()))
        .filter(|element| in_reveal_zone(element.get_bounding_client_rect().top(), viewport))
        .map(|element| element.id())
        .filter(|id| !id.is_empty())
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub on_reveal: Callback<Vec<String>>,
}

/// Reports `.content-section` blocks as they scroll into view. The page keeps
/// the result in a [`Revealed`] and renders the `visible` class from it.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    {
        let on_reveal = props.on_reveal.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.clone().and_then(|window| {
                    let document = window.document()?;
                    let report = move |window: &Window, document: &Document| {
                        let ids = sections_in_view(window, document);
                        if !ids.is_empty() {
                            on_reveal.emit(ids);
                        }
                    };
                    report(&window, &document);

                    let scroll_window = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        report(&scroll_window, &document);
                    }) as Box<dyn FnMut()>);
                    window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .ok()?;
                    Some(callback)
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <style>
            {r#"
            .content-section {
                opacity: 0;
                transform: translateY(24px);
                transition: opacity 0.6s ease, transform 0.6s ease;
            }
            .content-section.visible {
                opacity: 1;
                transform: none;
            }
            "#}
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_zone_is_upper_eighty_percent() {
        assert!(in_reveal_zone(0.0, 1000.0));
        assert!(in_reveal_zone(799.0, 1000.0));
        assert!(!in_reveal_zone(800.0, 1000.0));
        assert!(!in_reveal_zone(1200.0, 1000.0));
    }

    #[test]
    fn reducer_keeps_state_when_nothing_is_new() {
        let state = Rc::new(Revealed::default());
        let state = state.reduce(vec!["overview".to_string()]);
        assert!(state.is_revealed("overview"));
        let same = Rc::clone(&state).reduce(vec!["overview".to_string()]);
        assert!(Rc::ptr_eq(&state, &same));
    }
}
