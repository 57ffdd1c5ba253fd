use super::fields::{self, CONSENT, CONTACT};
use super::{Collapsible, EvaluationPage, FaqEntry, PracticePage, ResourceLink, Tab};
use crate::config;
use crate::lead::{FieldKind, FieldSpec, FormSection, SelectOption, SubmitAction};

const EVALUATION_PATH: &str = "/spinal-cord-case-evaluation";

const INJURY_TYPES: &[SelectOption] = &[
    SelectOption { value: "complete-sci", label: "Complete Spinal Cord Injury" },
    SelectOption { value: "incomplete-sci", label: "Incomplete Spinal Cord Injury" },
    SelectOption { value: "quadriplegia", label: "Quadriplegia/Tetraplegia" },
    SelectOption { value: "paraplegia", label: "Paraplegia" },
    SelectOption { value: "cervical", label: "Cervical Spine Injury" },
    SelectOption { value: "thoracic", label: "Thoracic Spine Injury" },
    SelectOption { value: "lumbar", label: "Lumbar Spine Injury" },
    SelectOption { value: "not-sure", label: "Not Sure - Need Evaluation" },
];

const ACCIDENT_TYPES: &[SelectOption] = &[
    SelectOption { value: "motor-vehicle", label: "Car, Truck or Motorcycle Accident" },
    SelectOption { value: "fall", label: "Slip, Trip or Fall" },
    SelectOption { value: "workplace", label: "Workplace or Construction Accident" },
    SelectOption { value: "medical", label: "Medical or Surgical Error" },
    SelectOption { value: "sports", label: "Sports or Recreation" },
    SelectOption { value: "violence", label: "Assault or Violence" },
    SelectOption { value: "other", label: "Other" },
];

const ACCIDENT_DATE: FieldSpec =
    FieldSpec::new("accidentDate", "Accident Date", FieldKind::Date).required();
const INJURY_TYPE: FieldSpec =
    FieldSpec::new("injuryType", "Injury Type", FieldKind::Select(INJURY_TYPES))
        .placeholder("Select injury type");
const ACCIDENT_LOCATION: FieldSpec =
    FieldSpec::new("accidentLocation", "Accident Location", FieldKind::Text)
        .placeholder("Where did the accident occur?");

const QUICK_FIELDS: &[FieldSpec] = &[ACCIDENT_DATE, INJURY_TYPE, ACCIDENT_LOCATION];

const ACCIDENT_FIELDS: &[FieldSpec] = &[
    ACCIDENT_DATE,
    ACCIDENT_LOCATION,
    FieldSpec::new("accidentType", "How Did the Injury Happen?", FieldKind::Select(ACCIDENT_TYPES)),
    FieldSpec::new("accidentDescription", "Describe the Accident", FieldKind::TextArea).required(),
];

const INJURY_FIELDS: &[FieldSpec] = &[
    INJURY_TYPE,
    FieldSpec::new("injuryLevel", "Injury Level (if known)", FieldKind::Text).placeholder("e.g. C5, T10"),
    fields::MEDICAL_TREATMENT,
    FieldSpec::new("currentSymptoms", "Current Symptoms and Limitations", FieldKind::TextArea),
];

const LEGAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("previousAttorney", "Have You Spoken With Another Attorney?", FieldKind::Select(fields::YES_NO)),
    FieldSpec::new("insuranceClaim", "Has an Insurance Claim Been Filed?", FieldKind::Select(fields::YES_NO)),
    fields::ADDITIONAL_INFO,
    CONSENT,
];

pub static PAGE: PracticePage = PracticePage {
    title: "California Spinal Cord Injury Lawyers",
    subtitle: "Lifetime Care Deserves Lifetime Compensation",
    hero_image: "/assets/spinal-cord-hero.jpg",
    seo_description: "California spinal cord injury and paralysis attorneys fighting for quadriplegia, paraplegia and incomplete SCI victims. Free case evaluation.",
    tabs: &[
        Tab { id: "overview", label: "OVERVIEW" },
        Tab { id: "evaluation", label: "CASE EVALUATION" },
        Tab { id: "what-to-do", label: "WHAT TO DO" },
        Tab { id: "types-of-injuries", label: "INJURY TYPES" },
        Tab { id: "proving-negligence", label: "PROVING NEGLIGENCE" },
        Tab { id: "compensation", label: "COMPENSATION" },
        Tab { id: "time-limits", label: "TIME LIMITS" },
        Tab { id: "faq", label: "FAQ" },
        Tab { id: "resources", label: "RESOURCES" },
    ],
    sections: &[
        Collapsible {
            id: "overview",
            title: "Spinal Cord Injuries Change Everything",
            summary: "A spinal cord injury can mean lifelong paralysis, constant medical care and the loss of a career. Your claim must account for all of it.",
            details: &[
                "Lifetime costs range from $1.5 million for incomplete injuries to over $5 million for high quadriplegia.",
                "We work with life care planners and economists to project every future need.",
                "Former defense experience tells us how insurers try to undervalue these claims.",
            ],
        },
        Collapsible {
            id: "what-to-do",
            title: "What To Do After a Spinal Cord Injury",
            summary: "Early steps protect both your recovery and your case.",
            details: &[
                "Follow every treatment and rehabilitation recommendation.",
                "Keep a journal of symptoms, limitations and daily challenges.",
                "Save bills, receipts and records of lost work.",
                "Refer insurance adjusters to your attorney.",
            ],
        },
        Collapsible {
            id: "types-of-injuries",
            title: "Types of Spinal Cord Injuries",
            summary: "The level and completeness of the injury determine its effect on the body.",
            details: &[
                "Complete injuries: total loss of function below the injury level",
                "Incomplete injuries: partial sensation or movement preserved",
                "Quadriplegia from cervical injuries (C1-C8)",
                "Paraplegia from thoracic or lumbar injuries (T1-L5)",
            ],
        },
        Collapsible {
            id: "proving-negligence",
            title: "Proving Negligence",
            summary: "We establish duty, breach, causation and damages with evidence and expert testimony.",
            details: &[
                "Accident reconstruction and scene investigation.",
                "Medical experts linking the event to the injury level.",
                "Records of safety violations, maintenance failures or product defects.",
            ],
        },
        Collapsible {
            id: "compensation",
            title: "Compensation Available",
            summary: "Damages cover the full lifetime impact of the injury.",
            details: &[
                "Past and future medical and rehabilitation costs",
                "Home and vehicle modifications",
                "Attendant care and lost earning capacity",
                "Pain and suffering and loss of enjoyment of life",
            ],
        },
        Collapsible {
            id: "time-limits",
            title: "Time Limits",
            summary: "California generally allows two years from the injury to file. Claims against public entities require notice within six months.",
            details: &[
                "Medical malpractice claims carry their own notice requirements.",
                "The discovery rule may extend deadlines for injuries that were not immediately apparent.",
            ],
        },
    ],
    faq: &[
        FaqEntry {
            question: "What is the difference between complete and incomplete spinal cord injury?",
            answer: "A complete injury results in total loss of sensation and motor function below the injury level. An incomplete injury preserves some function, allowing partial sensation or movement.",
        },
        FaqEntry {
            question: "How much is a spinal cord injury case worth in California?",
            answer: "Cases typically range from $2 million to over $10 million depending on severity, age, injury level, medical costs and lost wages. Each case requires individual evaluation.",
        },
        FaqEntry {
            question: "How long do I have to file a spinal cord injury lawsuit in California?",
            answer: "Generally two years from the injury date. Government claims require filing within six months, and medical malpractice has specific notice requirements.",
        },
        FaqEntry {
            question: "What is quadriplegia versus paraplegia?",
            answer: "Quadriplegia affects all four limbs and results from cervical spine injuries. Paraplegia affects the lower body and results from thoracic or lumbar injuries.",
        },
        FaqEntry {
            question: "Can spinal cord injuries heal or recover?",
            answer: "Complete injuries rarely recover function below the injury level. Incomplete injuries may improve with intensive rehabilitation, and most recovery occurs within the first year.",
        },
        FaqEntry {
            question: "What are the lifetime costs of spinal cord injuries?",
            answer: "First-year costs range from $375,000 to $1.15 million, and annual costs thereafter from $45,000 to $200,000, before lost wages, home modifications or attendant care.",
        },
    ],
    quick_form_title: "Free Spinal Cord Injury Case Evaluation",
    quick_form: &[FormSection { title: "", fields: QUICK_FIELDS }],
    submit: SubmitAction::Redirect {
        path: EVALUATION_PATH,
        carry_values: true,
    },
    contact_email: config::INTAKE_EMAIL,
    resources: &[
        ResourceLink {
            title: "Christopher & Dana Reeve Foundation",
            description: "Resources and support for people living with paralysis.",
            href: "https://www.christopherreeve.org/",
        },
        ResourceLink {
            title: "National Spinal Cord Injury Statistical Center",
            description: "Facts and figures on spinal cord injuries.",
            href: "https://www.nscisc.uab.edu/",
        },
    ],
};

pub static EVALUATION: EvaluationPage = EvaluationPage {
    path: EVALUATION_PATH,
    title: "Spinal Cord Injury Case Evaluation",
    intro: "We will review your spinal cord injury case immediately and contact you within 24 hours.",
    sections: &[
        FormSection { title: "Personal Information", fields: CONTACT },
        FormSection { title: "Accident Details", fields: ACCIDENT_FIELDS },
        FormSection { title: "Injury Information", fields: INJURY_FIELDS },
        FormSection { title: "Legal Information", fields: LEGAL_FIELDS },
    ],
    submit: SubmitAction::Mailto {
        address: config::INTAKE_EMAIL,
        subject: "Spinal Cord Injury Case Evaluation",
    },
    redirect_delay_ms: 0,
};
