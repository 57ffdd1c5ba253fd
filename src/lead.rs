//! Lead capture: field descriptors, the controlled form state and the
//! submit step that turns a filled form into a redirect or a `mailto:` link.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::links;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Tel,
    Email,
    Date,
    TextArea,
    Select(&'static [SelectOption]),
    Checkbox,
}

impl FieldKind {
    /// Value for the `type` attribute of an `<input>`.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Tel => "tel",
            FieldKind::Email => "email",
            FieldKind::Date => "date",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Text | FieldKind::TextArea | FieldKind::Select(_) => "text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(id: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            kind,
            required: false,
            placeholder: None,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn placeholder(self, text: &'static str) -> Self {
        Self {
            placeholder: Some(text),
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormSection {
    /// Empty for single-section quick forms.
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    /// `carry_values` appends the filled text fields as query parameters.
    Redirect {
        path: &'static str,
        carry_values: bool,
    },
    Mailto {
        address: &'static str,
        subject: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "href", rename_all = "snake_case")]
pub enum SubmitTarget {
    Navigate(String),
    OpenMail(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    #[error("Please fill out the \"{field}\" field.")]
    MissingRequired { field: &'static str },
    #[error("Please check \"{field}\" to continue.")]
    ConsentRequired { field: &'static str },
}

/// Field values as typed by the user, keyed by field id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    text: BTreeMap<String, String>,
    checked: BTreeMap<String, bool>,
}

impl FormState {
    pub fn set_text(&mut self, id: &str, value: impl Into<String>) {
        self.text.insert(id.to_string(), value.into());
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) {
        self.checked.insert(id.to_string(), checked);
    }

    pub fn text(&self, id: &str) -> &str {
        self.text.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn checked(&self, id: &str) -> bool {
        self.checked.get(id).copied().unwrap_or(false)
    }

    /// Copies values for known, non-checkbox fields. Returns how many were taken.
    pub fn prefill<K, V>(&mut self, pairs: &[(K, V)], sections: &[FormSection]) -> usize
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut taken = 0;
        for (key, value) in pairs {
            let known = fields(sections)
                .any(|f| f.id == key.as_ref() && f.kind != FieldKind::Checkbox);
            if known {
                self.set_text(key.as_ref(), value.as_ref());
                taken += 1;
            }
        }
        taken
    }
}

pub fn fields(sections: &[FormSection]) -> impl Iterator<Item = &FieldSpec> {
    sections.iter().flat_map(|s| s.fields.iter())
}

/// Same rule the browser applies to `required` inputs, nothing more.
pub fn validate(state: &FormState, sections: &[FormSection]) -> Result<(), LeadError> {
    for field in fields(sections).filter(|f| f.required) {
        match field.kind {
            FieldKind::Checkbox => {
                if !state.checked(field.id) {
                    return Err(LeadError::ConsentRequired { field: field.label });
                }
            }
            _ => {
                if state.text(field.id).trim().is_empty() {
                    return Err(LeadError::MissingRequired { field: field.label });
                }
            }
        }
    }
    Ok(())
}

pub fn compose_body(title: &str, state: &FormState, sections: &[FormSection]) -> String {
    let mut body = String::new();
    body.push_str(title);
    body.push('\n');

    for section in sections {
        body.push('\n');
        if !section.title.is_empty() {
            body.push_str(section.title);
            body.push_str(":\n");
        }
        for field in section.fields {
            let value = match field.kind {
                FieldKind::Checkbox => {
                    if state.checked(field.id) {
                        "Yes"
                    } else {
                        "No"
                    }
                }
                _ => state.text(field.id),
            };
            body.push_str(field.label);
            body.push_str(": ");
            body.push_str(value);
            body.push('\n');
        }
    }
    body
}

pub fn subject_line(base: &str, state: &FormState) -> String {
    let name = [state.text("firstName").trim(), state.text("lastName").trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        base.to_string()
    } else {
        format!("{} - {}", base, name)
    }
}

pub fn submit(
    action: &SubmitAction,
    title: &str,
    state: &FormState,
    sections: &[FormSection],
) -> Result<SubmitTarget, LeadError> {
    validate(state, sections)?;

    let target = match *action {
        SubmitAction::Redirect { path, carry_values: false } => {
            SubmitTarget::Navigate(path.to_string())
        }
        SubmitAction::Redirect { path, carry_values: true } => {
            let pairs = fields(sections)
                .filter(|f| f.kind != FieldKind::Checkbox)
                .map(|f| (f.id, state.text(f.id)))
                .collect::<Vec<_>>();
            SubmitTarget::Navigate(links::with_query(path, &pairs))
        }
        SubmitAction::Mailto { address, subject } => {
            let body = compose_body(title, state, sections);
            SubmitTarget::OpenMail(links::mailto_href(
                address,
                &subject_line(subject, state),
                &body,
            ))
        }
    };
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::parse_query;

    const KINDS: &[SelectOption] = &[
        SelectOption { value: "workplace-harassment", label: "Workplace Sexual Harassment" },
        SelectOption { value: "other", label: "Other" },
    ];

    const CONTACT: &[FieldSpec] = &[
        FieldSpec::new("firstName", "First Name", FieldKind::Text).required(),
        FieldSpec::new("lastName", "Last Name", FieldKind::Text),
        FieldSpec::new("email", "Email", FieldKind::Email).required(),
    ];

    const INCIDENT: &[FieldSpec] = &[
        FieldSpec::new("incidentDate", "Date", FieldKind::Date).required(),
        FieldSpec::new("abuseType", "Type", FieldKind::Select(KINDS)),
        FieldSpec::new("description", "Description", FieldKind::TextArea),
        FieldSpec::new("consent", "I agree to be contacted", FieldKind::Checkbox).required(),
    ];

    const SECTIONS: &[FormSection] = &[
        FormSection { title: "Personal Information", fields: CONTACT },
        FormSection { title: "Incident Details", fields: INCIDENT },
    ];

    fn filled() -> FormState {
        let mut state = FormState::default();
        state.set_text("firstName", "Jane");
        state.set_text("lastName", "Doe");
        state.set_text("email", "jane@example.com");
        state.set_text("incidentDate", "2024-01-01");
        state.set_text("abuseType", "workplace-harassment");
        state.set_text("description", "Fell from a ladder & hurt my back");
        state.set_checked("consent", true);
        state
    }

    #[test]
    fn empty_required_field_blocks_submit() {
        let mut state = filled();
        state.set_text("email", "   ");
        let action = SubmitAction::Redirect { path: "/x", carry_values: true };
        assert_eq!(
            submit(&action, "T", &state, SECTIONS),
            Err(LeadError::MissingRequired { field: "Email" })
        );
    }

    #[test]
    fn unchecked_consent_blocks_submit() {
        let mut state = filled();
        state.set_checked("consent", false);
        assert_eq!(
            validate(&state, SECTIONS),
            Err(LeadError::ConsentRequired { field: "I agree to be contacted" })
        );
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let mut state = filled();
        state.set_text("lastName", "");
        state.set_text("description", "");
        assert!(validate(&state, SECTIONS).is_ok());
    }

    #[test]
    fn redirect_carries_every_value() {
        let state = filled();
        let action = SubmitAction::Redirect {
            path: "/sexual-abuse-case-evaluation",
            carry_values: true,
        };
        let target = submit(&action, "T", &state, SECTIONS).unwrap();

        let SubmitTarget::Navigate(href) = target else {
            panic!("expected a navigation");
        };
        let (path, search) = href.split_once('?').unwrap();
        assert_eq!(path, "/sexual-abuse-case-evaluation");

        let pairs = parse_query(search);
        for id in ["firstName", "lastName", "email", "incidentDate", "abuseType", "description"] {
            assert!(
                pairs.iter().any(|(k, v)| k == id && v == state.text(id)),
                "{} missing from {}",
                id,
                href
            );
        }
        assert!(pairs.iter().all(|(k, _)| k != "consent"));
    }

    #[test]
    fn plain_redirect_keeps_values_out_of_the_url() {
        let state = filled();
        let action = SubmitAction::Redirect {
            path: "/thank-you?service=elder-abuse-evaluation",
            carry_values: false,
        };
        assert_eq!(
            submit(&action, "T", &state, SECTIONS),
            Ok(SubmitTarget::Navigate("/thank-you?service=elder-abuse-evaluation".into()))
        );
    }

    #[test]
    fn mailto_body_lists_sections_and_values() {
        let state = filled();
        let action = SubmitAction::Mailto {
            address: "info@trembachlawfirm.com",
            subject: "Truck Accident Case Evaluation",
        };
        let target = submit(&action, "Truck Accident Case Evaluation", &state, SECTIONS).unwrap();
        let SubmitTarget::OpenMail(href) = target else {
            panic!("expected a mailto");
        };
        assert!(href.starts_with("mailto:info@trembachlawfirm.com?subject="));

        let (_, search) = href.split_once('?').unwrap();
        let pairs = parse_query(search);
        assert_eq!(pairs[0].1, "Truck Accident Case Evaluation - Jane Doe");
        assert_eq!(
            pairs[1].1,
            "Truck Accident Case Evaluation\n\
             \n\
             Personal Information:\n\
             First Name: Jane\n\
             Last Name: Doe\n\
             Email: jane@example.com\n\
             \n\
             Incident Details:\n\
             Date: 2024-01-01\n\
             Type: workplace-harassment\n\
             Description: Fell from a ladder & hurt my back\n\
             I agree to be contacted: Yes\n"
        );
    }

    #[test]
    fn subject_line_uses_whichever_names_exist() {
        let mut state = FormState::default();
        assert_eq!(subject_line("Inquiry", &state), "Inquiry");
        state.set_text("lastName", "Doe");
        assert_eq!(subject_line("Inquiry", &state), "Inquiry - Doe");
        state.set_text("firstName", "Jane");
        assert_eq!(subject_line("Inquiry", &state), "Inquiry - Jane Doe");
    }

    #[test]
    fn prefill_ignores_unknown_and_checkbox_keys() {
        let mut state = FormState::default();
        let taken = state.prefill(
            &[("firstName", "Mary"), ("utm_source", "ad"), ("consent", "true")],
            SECTIONS,
        );
        assert_eq!(taken, 1);
        assert_eq!(state.text("firstName"), "Mary");
        assert_eq!(state.text("utm_source"), "");
        assert!(!state.checked("consent"));
    }

    #[test]
    fn submission_serializes_for_logging() {
        let target = SubmitTarget::Navigate("/x".into());
        assert_eq!(
            serde_json::to_string(&target).unwrap(),
            r#"{"kind":"navigate","href":"/x"}"#
        );
    }
}
