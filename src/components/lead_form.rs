use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::lead::{self, FieldKind, FieldSpec, FormPhase, FormSection, FormState, SubmitAction, SubmitTarget};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub title: &'static str,
    pub sections: &'static [FormSection],
    pub action: SubmitAction,
    #[prop_or_default]
    pub initial: FormState,
    #[prop_or_default]
    pub redirect_delay_ms: u32,
    #[prop_or("Get My Free Case Evaluation")]
    pub submit_label: &'static str,
}

fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(href).is_err() {
            warn!("Navigation to {} failed", href);
        }
    }
}

fn follow(target: &SubmitTarget, delay_ms: u32) {
    match target {
        SubmitTarget::Navigate(href) if delay_ms > 0 => {
            let href = href.clone();
            Timeout::new(delay_ms, move || navigate(&href)).forget();
        }
        SubmitTarget::Navigate(href) => navigate(href),
        SubmitTarget::OpenMail(href) => {
            if let Some(window) = web_sys::window() {
                if window.open_with_url_and_target(href, "_blank").is_err() {
                    warn!("Could not open mail client");
                }
            }
        }
    }
}

fn render_field(field: &'static FieldSpec, form: &UseStateHandle<FormState>, today: &str) -> Html {
    let id = field.id;
    let value = form.text(id).to_string();

    let control = match field.kind {
        FieldKind::TextArea => {
            let oninput = {
                let form = form.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    let mut next = (*form).clone();
                    next.set_text(id, input.value());
                    form.set(next);
                })
            };
            html! {
                <textarea
                    id={id}
                    name={id}
                    rows="4"
                    {value}
                    placeholder={field.placeholder}
                    required={field.required}
                    {oninput}
                />
            }
        }
        FieldKind::Select(options) => {
            let onchange = {
                let form = form.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    let mut next = (*form).clone();
                    next.set_text(id, select.value());
                    form.set(next);
                })
            };
            html! {
                <select id={id} name={id} required={field.required} {onchange}>
                    <option value="" selected={value.is_empty()}>
                        {field.placeholder.unwrap_or("Select an option")}
                    </option>
                    {
                        options.iter().map(|option| html! {
                            <option value={option.value} selected={value == option.value}>
                                {option.label}
                            </option>
                        }).collect::<Html>()
                    }
                </select>
            }
        }
        FieldKind::Checkbox => {
            let onchange = {
                let form = form.clone();
                Callback::from(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let mut next = (*form).clone();
                    next.set_checked(id, input.checked());
                    form.set(next);
                })
            };
            return html! {
                <div class="form-field checkbox-field">
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            id={id}
                            name={id}
                            checked={form.checked(id)}
                            required={field.required}
                            {onchange}
                        />
                        {field.label}
                    </label>
                </div>
            };
        }
        kind => {
            let oninput = {
                let form = form.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let mut next = (*form).clone();
                    next.set_text(id, input.value());
                    form.set(next);
                })
            };
            // No future incident dates.
            let max = (kind == FieldKind::Date).then(|| today.to_string());
            html! {
                <input
                    type={kind.input_type()}
                    id={id}
                    name={id}
                    {value}
                    {max}
                    placeholder={field.placeholder}
                    required={field.required}
                    {oninput}
                />
            }
        }
    };

    html! {
        <div class="form-field">
            <label for={id}>
                {field.label}
                if field.required {
                    <span class="required-mark">{" *"}</span>
                }
            </label>
            {control}
        </div>
    }
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let form = {
        let initial = props.initial.clone();
        use_state(move || initial)
    };
    let phase = use_state(|| FormPhase::Idle);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let form = form.clone();
        let phase = phase.clone();
        let error = error.clone();
        let action = props.action;
        let title = props.title;
        let sections = props.sections;
        let delay_ms = props.redirect_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match lead::submit(&action, title, &form, sections) {
                Ok(target) => {
                    info!(
                        "Lead form \"{}\" submitted: {}",
                        title,
                        serde_json::to_string(&target).unwrap_or_default()
                    );
                    error.set(None);
                    phase.set(FormPhase::Submitted);
                    follow(&target, delay_ms);
                }
                Err(err) => {
                    warn!("Lead form \"{}\" rejected: {}", title, err);
                    error.set(Some(err.to_string()));
                }
            }
        })
    };

    if *phase == FormPhase::Submitted {
        let message = match props.action {
            SubmitAction::Mailto { .. } => {
                "Your email app should open with your information filled in. Press send and we will contact you within 24 hours."
            }
            SubmitAction::Redirect { .. } => "Thank you. Taking you to the next step...",
        };
        return html! {
            <div class="lead-form submitted">
                <h3>{props.title}</h3>
                <p class="lead-form-confirmation">{message}</p>
            </div>
        };
    }

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    html! {
        <form class="lead-form" {onsubmit}>
            <h3>{props.title}</h3>
            {
                props.sections.iter().map(|section| html! {
                    <fieldset class="form-section">
                        if !section.title.is_empty() {
                            <legend>{section.title}</legend>
                        }
                        { for section.fields.iter().map(|field| render_field(field, &form, &today)) }
                    </fieldset>
                }).collect::<Html>()
            }
            if let Some(message) = (*error).clone() {
                <p class="form-error" role="alert">{message}</p>
            }
            <button type="submit" class="form-submit">{props.submit_label}</button>
            <p class="form-disclaimer">{"Your information is kept confidential. Submitting this form does not create an attorney-client relationship."}</p>
            <style>
                {r#"
                .lead-form {
                    background: #13203a;
                    border: 1px solid rgba(200, 164, 92, 0.3);
                    border-radius: 10px;
                    padding: 2rem;
                }
                .lead-form h3 {
                    color: #c8a45c;
                    margin-bottom: 1.5rem;
                }
                .form-section {
                    border: none;
                    padding: 0;
                    margin: 0 0 1.5rem;
                }
                .form-section legend {
                    font-weight: 600;
                    color: #ffffff;
                    margin-bottom: 1rem;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1rem;
                }
                .form-field label {
                    color: #d4dbe6;
                    margin-bottom: 0.4rem;
                    font-size: 0.95rem;
                }
                .required-mark {
                    color: #e07a5f;
                }
                .form-field input,
                .form-field select,
                .form-field textarea {
                    padding: 0.75rem;
                    border-radius: 6px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.05);
                    color: #ffffff;
                    font-size: 1rem;
                }
                .checkbox-label {
                    display: flex;
                    gap: 0.6rem;
                    align-items: flex-start;
                }
                .form-error {
                    color: #e07a5f;
                    margin-bottom: 1rem;
                }
                .form-submit {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 6px;
                    background: #c8a45c;
                    color: #0c1628;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .form-disclaimer {
                    margin-top: 1rem;
                    font-size: 0.8rem;
                    color: #8d99ab;
                }
                .lead-form-confirmation {
                    color: #d4dbe6;
                    line-height: 1.6;
                }
                "#}
            </style>
        </form>
    }
}
