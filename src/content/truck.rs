use super::fields::{self, CONSENT, CONTACT};
use super::{Collapsible, EvaluationPage, FaqEntry, PracticePage, ResourceLink, Tab};
use crate::config;
use crate::lead::{FieldKind, FieldSpec, FormSection, SelectOption, SubmitAction};

const EVALUATION_PATH: &str = "/truck-accident-case-evaluation";

const INJURY_TYPES: &[SelectOption] = &[
    SelectOption { value: "brain-injury", label: "Traumatic Brain Injury" },
    SelectOption { value: "spinal-injury", label: "Spinal Cord Injury" },
    SelectOption { value: "fractures", label: "Multiple Fractures" },
    SelectOption { value: "internal-injuries", label: "Internal Injuries" },
    SelectOption { value: "burns", label: "Burn Injuries" },
    SelectOption { value: "other", label: "Other Severe Injuries" },
];

const ACCIDENT_DATE: FieldSpec = FieldSpec::new("accidentDate", "Accident Date", FieldKind::Date).required();
const INJURY_TYPE: FieldSpec = FieldSpec::new("injuryType", "Type of Injury", FieldKind::Select(INJURY_TYPES))
    .placeholder("Select injury type");
const DESCRIPTION: FieldSpec = FieldSpec::new("description", "Briefly Describe the Accident", FieldKind::TextArea);

const TRUCK_TYPES: &[SelectOption] = &[
    SelectOption { value: "18-wheeler", label: "18-Wheeler / Semi-Truck" },
    SelectOption { value: "tanker", label: "Tanker Truck" },
    SelectOption { value: "delivery", label: "Delivery Truck" },
    SelectOption { value: "dump", label: "Dump or Construction Truck" },
    SelectOption { value: "other", label: "Other Commercial Vehicle" },
];

const QUICK_FIELDS: &[FieldSpec] = &[ACCIDENT_DATE, INJURY_TYPE];

const ACCIDENT_FIELDS: &[FieldSpec] = &[
    ACCIDENT_DATE,
    FieldSpec::new("accidentLocation", "Location of Accident", FieldKind::Text).required(),
    FieldSpec::new("truckType", "Type of Truck", FieldKind::Select(TRUCK_TYPES)),
    FieldSpec::new("truckingCompany", "Trucking Company (if known)", FieldKind::Text),
    FieldSpec::new("policeReport", "Was a Police Report Filed?", FieldKind::Select(fields::YES_NO)),
    DESCRIPTION,
];

const INJURY_FIELDS: &[FieldSpec] = &[
    INJURY_TYPE,
    FieldSpec::new("injuries", "Describe Your Injuries", FieldKind::TextArea),
    fields::MEDICAL_TREATMENT,
    FieldSpec::new("missedWork", "Have You Missed Work?", FieldKind::Select(fields::YES_NO)),
];

const ADDITIONAL_FIELDS: &[FieldSpec] = &[fields::ADDITIONAL_INFO, CONSENT];

pub static PAGE: PracticePage = PracticePage {
    title: "California Truck Accident Lawyers",
    subtitle: "Catastrophic Injury Experts Fighting Trucking Companies",
    hero_image: "/assets/truck-accidents-hero.jpg",
    seo_description: "Expert truck accident attorneys fighting trucking companies throughout California. Former defense counsel now pursuing maximum compensation for big rig victims.",
    tabs: &[
        Tab { id: "overview", label: "OVERVIEW" },
        Tab { id: "evaluation", label: "CASE EVALUATION" },
        Tab { id: "regulations", label: "FEDERAL REGULATIONS" },
        Tab { id: "defense-tactics", label: "DEFENSE TACTICS" },
        Tab { id: "injuries", label: "CATASTROPHIC INJURIES" },
        Tab { id: "compensation", label: "COMPENSATION" },
        Tab { id: "faq", label: "FAQ" },
        Tab { id: "resources", label: "RESOURCES" },
    ],
    sections: &[
        Collapsible {
            id: "overview",
            title: "California's Commercial Trucking Crisis",
            summary: "Every year over 5,000 people die and 150,000 are injured in commercial truck accidents across America. California's ports and highways carry a disproportionate share of that traffic.",
            details: &[
                "The Ports of Los Angeles and Long Beach send millions of trucks onto California roads each year.",
                "Size and weight disparities turn minor errors into fatal catastrophes.",
                "Our former defense experience shows us exactly how trucking companies fight these claims.",
            ],
        },
        Collapsible {
            id: "regulations",
            title: "Federal Trucking Regulations",
            summary: "FMCSA rules set strict safety requirements that trucking companies routinely violate in pursuit of profit.",
            details: &[
                "11-hour daily driving limit within a 14-hour work window",
                "10 consecutive hours off duty and 30-minute break requirements",
                "Electronic logging device compliance",
                "Pre-trip inspections, brake maintenance and load securement rules",
            ],
        },
        Collapsible {
            id: "defense-tactics",
            title: "Trucking Company Defense Tactics",
            summary: "Trucking companies send rapid response teams to the scene before victims leave the hospital.",
            details: &[
                "They blame other drivers, question medical treatment and minimize injuries.",
                "We answer with independent investigation and immediate evidence preservation letters.",
                "Expert reconstruction, spoliation claims and aggressive discovery follow.",
            ],
        },
        Collapsible {
            id: "injuries",
            title: "Catastrophic Truck Accident Injuries",
            summary: "Truck crashes cause devastating injury patterns that need specialized medical and legal expertise.",
            details: &[
                "Traumatic brain injuries",
                "Spinal cord damage and paralysis",
                "Crushing injuries, amputations and severe burns",
                "Post-traumatic stress disorder",
            ],
        },
        Collapsible {
            id: "compensation",
            title: "Maximum Compensation Recovery",
            summary: "Truck accident damages reflect the severity and lifelong impact of these injuries.",
            details: &[
                "Economic: medical expenses, lost wages, diminished earning capacity, home modifications",
                "Non-economic: pain and suffering, emotional distress, loss of consortium",
                "Punitive damages when companies knowingly break safety rules",
            ],
        },
    ],
    faq: &[
        FaqEntry {
            question: "Who is liable for a truck accident?",
            answer: "Liability can extend beyond the driver to the trucking company, the cargo loader, the truck or parts manufacturer and maintenance contractors. We investigate every party.",
        },
        FaqEntry {
            question: "How are truck accident cases different from car accidents?",
            answer: "Truck cases involve federal regulations, corporate defendants with rapid response teams, larger insurance policies and electronic data such as ELD and black box records that must be preserved quickly.",
        },
        FaqEntry {
            question: "What evidence matters most after a truck crash?",
            answer: "Electronic logging device data, the truck's event data recorder, driver qualification files, maintenance records and dispatch communications. Much of it can be overwritten within days.",
        },
        FaqEntry {
            question: "How long do I have to file a truck accident claim in California?",
            answer: "Generally two years for personal injury and wrongful death. Claims involving public entities require notice within six months.",
        },
        FaqEntry {
            question: "What if I was partly at fault?",
            answer: "California follows pure comparative negligence. Your recovery is reduced by your share of fault but not barred.",
        },
    ],
    quick_form_title: "Get Your Free Consultation",
    quick_form: &[FormSection { title: "", fields: QUICK_FIELDS }],
    submit: SubmitAction::Redirect {
        path: EVALUATION_PATH,
        carry_values: true,
    },
    contact_email: config::INTAKE_EMAIL,
    resources: &[
        ResourceLink {
            title: "FMCSA Company Safety Records",
            description: "Look up a carrier's inspection and crash history.",
            href: "https://safer.fmcsa.dot.gov/",
        },
        ResourceLink {
            title: "California Highway Patrol Collision Reports",
            description: "How to request a copy of your collision report.",
            href: "https://www.chp.ca.gov/",
        },
    ],
};

pub static EVALUATION: EvaluationPage = EvaluationPage {
    path: EVALUATION_PATH,
    title: "Truck Accident Case Evaluation",
    intro: "Time is critical in preserving evidence against well-funded trucking companies. Tell us what happened.",
    sections: &[
        FormSection { title: "Personal Information", fields: CONTACT },
        FormSection { title: "Accident Details", fields: ACCIDENT_FIELDS },
        FormSection { title: "Injury Information", fields: INJURY_FIELDS },
        FormSection { title: "Additional Information", fields: ADDITIONAL_FIELDS },
    ],
    submit: SubmitAction::Mailto {
        address: config::INTAKE_EMAIL,
        subject: "Truck Accident Case Evaluation",
    },
    redirect_delay_ms: 0,
};
