use yew::prelude::*;

use crate::content::Collapsible;

#[derive(Properties, PartialEq)]
pub struct CollapsibleSectionProps {
    pub section: Collapsible,
    pub open: bool,
    pub revealed: bool,
    pub on_toggle: Callback<&'static str>,
}

fn section_classes(open: bool, revealed: bool) -> Classes {
    classes!(
        "content-section",
        "collapsible",
        open.then(|| "open"),
        revealed.then(|| "visible")
    )
}

#[function_component(CollapsibleSection)]
pub fn collapsible_section(props: &CollapsibleSectionProps) -> Html {
    let section = props.section;
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(section.id);
        })
    };

    html! {
        <section id={section.id} class={section_classes(props.open, props.revealed)}>
            <h2>{section.title}</h2>
            <p class="collapsible-summary">{section.summary}</p>
            if props.open {
                <ul class="collapsible-details">
                    { for section.details.iter().map(|line| html! { <li>{*line}</li> }) }
                </ul>
            }
            if !section.details.is_empty() {
                <button class="collapsible-toggle" onclick={toggle}>
                    {if props.open { "Show less" } else { "Read more" }}
                </button>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::section_classes;

    #[test]
    fn expanding_a_revealed_section_keeps_it_visible() {
        for open in [false, true] {
            let classes = section_classes(open, true).to_string();
            assert!(classes.split(' ').any(|c| c == "visible"), "{}", classes);
            assert_eq!(classes.split(' ').any(|c| c == "open"), open);
        }
        assert!(!section_classes(true, false).contains("visible"));
    }
}
