use log::debug;
use yew::prelude::*;

use crate::components::{go_back::GoBack, lead_form::LeadForm, seo::Seo};
use crate::config;
use crate::content::PracticeArea;
use crate::lead::FormState;
use crate::links::{parse_query, tel_href};

#[derive(Properties, PartialEq)]
pub struct CaseEvaluationPageProps {
    pub area: PracticeArea,
}

/// Values handed over by the quick form's redirect.
fn prefill_from_location(area: PracticeArea) -> FormState {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let mut state = FormState::default();
    let taken = state.prefill(&parse_query(&search), area.evaluation().sections);
    debug!("Prefilled {} evaluation fields from the query string", taken);
    state
}

#[function_component(CaseEvaluationPage)]
pub fn case_evaluation_page(props: &CaseEvaluationPageProps) -> Html {
    let evaluation = props.area.evaluation();
    let initial = {
        let area = props.area;
        use_state(move || prefill_from_location(area))
    };

    html! {
        <div class="evaluation-page">
            <Seo
                title={evaluation.title}
                description={evaluation.intro}
                path={evaluation.path}
            />
            <header class="evaluation-header">
                <h1>{evaluation.title}</h1>
                <p>{evaluation.intro}</p>
                <p class="evaluation-call">
                    {"Prefer to talk? Call "}
                    <a href={tel_href(config::PHONE_DIGITS)}>{config::PHONE_DISPLAY}</a>
                </p>
            </header>
            <div class="evaluation-form-wrapper">
                <LeadForm
                    title={evaluation.title}
                    sections={evaluation.sections}
                    action={evaluation.submit}
                    initial={(*initial).clone()}
                    redirect_delay_ms={evaluation.redirect_delay_ms}
                    submit_label="Submit Case Evaluation"
                />
            </div>
            <GoBack />
            <style>
                {r#"
                .evaluation-page {
                    background: #0c1628;
                    color: #ffffff;
                    min-height: 100vh;
                    padding: 120px 1.5rem 5rem;
                }
                .evaluation-header {
                    max-width: 800px;
                    margin: 0 auto 2rem;
                    text-align: center;
                }
                .evaluation-header h1 {
                    font-size: 2.4rem;
                    margin-bottom: 1rem;
                }
                .evaluation-header p {
                    color: #d4dbe6;
                }
                .evaluation-call a {
                    color: #c8a45c;
                    font-weight: 600;
                }
                .evaluation-form-wrapper {
                    max-width: 800px;
                    margin: 0 auto;
                }
                "#}
            </style>
        </div>
    }
}
