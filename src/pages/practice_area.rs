use yew::prelude::*;

use crate::components::{
    collapsible::CollapsibleSection, contact_sidebar::ContactSidebar, faq_list::FaqList,
    go_back::GoBack, hero::Hero, lead_form::LeadForm, reveal::Reveal, seo::Seo, tab_nav::TabNav,
};
use crate::content::{Collapsible, PracticeArea, EVALUATION_ANCHOR, FAQ_ANCHOR, RESOURCES_ANCHOR};
use crate::toggles::{Accordion, ExpandedSections, Revealed, TabBar};

#[derive(Properties, PartialEq)]
pub struct PracticeAreaPageProps {
    pub area: PracticeArea,
}

#[function_component(PracticeAreaPage)]
pub fn practice_area_page(props: &PracticeAreaPageProps) -> Html {
    let page = props.area.page();
    let active_tab = use_state(|| TabBar::new(page.tabs.first().map(|t| t.id).unwrap_or("overview")));
    let expanded_sections = use_state(ExpandedSections::default);
    let expanded_faq = use_state(Accordion::default);
    let revealed = use_reducer_eq(Revealed::default);

    let on_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |id: &'static str| {
            let mut bar = (*active_tab).clone();
            if bar.select(id) {
                active_tab.set(bar);
            }
        })
    };

    let on_section_toggle = {
        let expanded_sections = expanded_sections.clone();
        Callback::from(move |id: &'static str| {
            let mut sections = (*expanded_sections).clone();
            sections.toggle(id);
            expanded_sections.set(sections);
        })
    };

    let on_faq_change = {
        let expanded_faq = expanded_faq.clone();
        Callback::from(move |accordion: Accordion| expanded_faq.set(accordion))
    };

    let on_reveal = {
        let dispatcher = revealed.dispatcher();
        Callback::from(move |ids: Vec<String>| dispatcher.dispatch(ids))
    };
    let shell_classes = |id: &str, extra: &'static str| {
        classes!("content-section", extra, revealed.is_revealed(id).then(|| "visible"))
    };

    let render_section = |section: &'static Collapsible| {
        html! {
            <CollapsibleSection
                key={section.id}
                section={*section}
                open={expanded_sections.is_open(section.id)}
                revealed={revealed.is_revealed(section.id)}
                on_toggle={on_section_toggle.clone()}
            />
        }
    };

    // The overview leads, the quick form follows it, then the rest.
    let (overview, rest) = match page.sections.split_first() {
        Some((first, rest)) => (Some(first), rest),
        None => (None, &page.sections[..]),
    };

    html! {
        <div class="practice-page">
            <Seo
                title={page.title}
                description={page.seo_description}
                path={props.area.page_path()}
            />
            <Hero area={props.area} />
            <TabNav tabs={page.tabs} bar={(*active_tab).clone()} on_select={on_tab} />

            <div class="practice-layout">
                <main class="practice-main">
                    { for overview.map(&render_section) }

                    <section id={EVALUATION_ANCHOR} class={shell_classes(EVALUATION_ANCHOR, "evaluation-section")}>
                        <LeadForm
                            title={page.quick_form_title}
                            sections={page.quick_form}
                            action={page.submit}
                        />
                    </section>

                    { for rest.iter().map(&render_section) }

                    <section id={FAQ_ANCHOR} class={shell_classes(FAQ_ANCHOR, "faq-section")}>
                        <h2>{"Frequently Asked Questions"}</h2>
                        <FaqList
                            entries={page.faq}
                            accordion={*expanded_faq}
                            on_change={on_faq_change}
                        />
                    </section>

                    <section id={RESOURCES_ANCHOR} class={shell_classes(RESOURCES_ANCHOR, "resources-section")}>
                        <h2>{"Helpful Resources"}</h2>
                        <ul class="resource-list">
                            {
                                page.resources.iter().map(|resource| html! {
                                    <li key={resource.href}>
                                        <a href={resource.href} target="_blank" rel="noopener noreferrer">
                                            {resource.title}
                                        </a>
                                        <p>{resource.description}</p>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </section>
                </main>

                <ContactSidebar area={props.area} />
            </div>

            <GoBack />
            <Reveal {on_reveal} />
            <style>
                {r#"
                .practice-page {
                    background: #0c1628;
                    color: #ffffff;
                    min-height: 100vh;
                }
                .practice-layout {
                    display: grid;
                    grid-template-columns: minmax(0, 1fr) 320px;
                    gap: 2.5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem 5rem;
                    align-items: start;
                }
                .content-section {
                    margin-bottom: 3rem;
                    scroll-margin-top: 140px;
                }
                .content-section h2 {
                    color: #c8a45c;
                    font-size: 1.8rem;
                    margin-bottom: 1rem;
                }
                .collapsible-summary {
                    color: #d4dbe6;
                    line-height: 1.7;
                }
                .collapsible-details {
                    color: #b8c2d1;
                    line-height: 1.7;
                    padding-left: 1.2rem;
                }
                .collapsible-toggle {
                    background: none;
                    border: none;
                    color: #c8a45c;
                    padding: 0.5rem 0;
                    cursor: pointer;
                    font-weight: 600;
                }
                .resource-list {
                    list-style: none;
                    padding: 0;
                }
                .resource-list li {
                    margin-bottom: 1rem;
                }
                .resource-list a {
                    color: #c8a45c;
                    font-weight: 600;
                }
                .resource-list p {
                    color: #b8c2d1;
                    margin: 0.25rem 0 0;
                }
                @media (max-width: 900px) {
                    .practice-layout {
                        grid-template-columns: 1fr;
                    }
                    .contact-sidebar {
                        position: static;
                    }
                }
                "#}
            </style>
        </div>
    }
}
