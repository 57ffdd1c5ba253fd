use log::debug;
use web_sys::Document;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct SeoProps {
    pub title: AttrValue,
    pub description: AttrValue,
    /// Site-relative path used for the canonical link.
    pub path: AttrValue,
}

fn upsert_head(document: &Document, selector: &str, tag: &str, attrs: &[(&str, &str)]) {
    let existing = document.query_selector(selector).ok().flatten();
    let element = match existing {
        Some(element) => element,
        None => {
            let Some(head) = document.head() else {
                return;
            };
            let Ok(element) = document.create_element(tag) else {
                return;
            };
            if head.append_child(&element).is_err() {
                debug!("Could not append {} to head", tag);
                return;
            }
            element
        }
    };
    for (name, value) in attrs {
        let _ = element.set_attribute(name, value);
    }
}

#[function_component(Seo)]
pub fn seo(props: &SeoProps) -> Html {
    {
        let title = format!("{} | {}", props.title, config::FIRM_NAME);
        let description = props.description.to_string();
        let canonical = format!("{}{}", config::site_origin(), props.path);
        use_effect_with_deps(
            move |_| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.set_title(&title);
                    upsert_head(
                        &document,
                        "meta[name=\"description\"]",
                        "meta",
                        &[("name", "description"), ("content", description.as_str())],
                    );
                    upsert_head(
                        &document,
                        "link[rel=\"canonical\"]",
                        "link",
                        &[("rel", "canonical"), ("href", canonical.as_str())],
                    );
                }
                || ()
            },
            props.path.clone(),
        );
    }

    html! {}
}
