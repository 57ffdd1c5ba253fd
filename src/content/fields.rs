use crate::lead::{FieldKind, FieldSpec, SelectOption};

pub const FIRST_NAME: FieldSpec = FieldSpec::new("firstName", "First Name", FieldKind::Text).required();
pub const LAST_NAME: FieldSpec = FieldSpec::new("lastName", "Last Name", FieldKind::Text).required();
pub const PHONE: FieldSpec = FieldSpec::new("phone", "Phone", FieldKind::Tel).required();
pub const EMAIL: FieldSpec = FieldSpec::new("email", "Email", FieldKind::Email).required();

pub const MEDICAL_TREATMENT: FieldSpec =
    FieldSpec::new("medicalTreatment", "Medical Treatment Received", FieldKind::TextArea);
pub const ADDITIONAL_INFO: FieldSpec =
    FieldSpec::new("additionalInfo", "Anything Else We Should Know", FieldKind::TextArea);

pub const CONSENT: FieldSpec = FieldSpec::new(
    "consent",
    "I consent to be contacted about my case. Submitting this form does not create an attorney-client relationship.",
    FieldKind::Checkbox,
)
.required();

pub const YES_NO: &[SelectOption] = &[
    SelectOption { value: "yes", label: "Yes" },
    SelectOption { value: "no", label: "No" },
    SelectOption { value: "not-sure", label: "Not Sure" },
];

pub const CONTACT: &[FieldSpec] = &[FIRST_NAME, LAST_NAME, PHONE, EMAIL];
