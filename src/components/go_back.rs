use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const SHOW_AFTER_PX: f64 = 100.0;

#[function_component(GoBack)]
pub fn go_back() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.clone().map(|window| {
                    let scroll_window = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                        visible.set(scroll_y > SHOW_AFTER_PX);
                    }) as Box<dyn FnMut()>);
                    if window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("Could not attach scroll listener for back button");
                    }
                    callback
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

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    });

    html! {
        <>
            <button
                class={classes!("go-back-button", (*visible).then(|| "visible"))}
                aria-label="Go back"
                {onclick}
            >
                {"← Back"}
            </button>
            <style>
                {r#"
                .go-back-button {
                    position: fixed;
                    left: 20px;
                    bottom: 20px;
                    z-index: 90;
                    padding: 0.6rem 1.1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(200, 164, 92, 0.5);
                    background: #0c1628;
                    color: #c8a45c;
                    cursor: pointer;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }
                .go-back-button.visible {
                    opacity: 1;
                    pointer-events: auto;
                }
                "#}
            </style>
        </>
    }
}
