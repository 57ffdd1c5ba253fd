use super::fields::{self, CONSENT, CONTACT};
use super::{Collapsible, EvaluationPage, FaqEntry, PracticePage, ResourceLink, Tab};
use crate::config;
use crate::lead::{FieldKind, FieldSpec, FormSection, SelectOption, SubmitAction};

const EVALUATION_PATH: &str = "/aviation/case-evaluation";

const ACCIDENT_TYPES: &[SelectOption] = &[
    SelectOption { value: "commercial-airline", label: "Commercial Airline Crash" },
    SelectOption { value: "private-plane", label: "Private Plane Accident" },
    SelectOption { value: "helicopter", label: "Helicopter Crash" },
    SelectOption { value: "military-aircraft", label: "Military Aircraft Accident" },
    SelectOption { value: "air-ambulance", label: "Air Ambulance Crash" },
    SelectOption { value: "charter-flight", label: "Charter Flight Accident" },
    SelectOption { value: "flight-training", label: "Flight Training Accident" },
    SelectOption { value: "agricultural", label: "Agricultural Aviation" },
    SelectOption { value: "other", label: "Other Aviation Accident" },
];

const ACCIDENT_DATE: FieldSpec =
    FieldSpec::new("accidentDate", "Accident Date", FieldKind::Date).required();
const ACCIDENT_TYPE: FieldSpec = FieldSpec::new(
    "accidentType",
    "Accident Type",
    FieldKind::Select(ACCIDENT_TYPES),
)
.placeholder("Select accident type");

const QUICK_FIELDS: &[FieldSpec] = &[ACCIDENT_DATE, ACCIDENT_TYPE];

const ACCIDENT_FIELDS: &[FieldSpec] = &[
    ACCIDENT_DATE,
    ACCIDENT_TYPE,
    FieldSpec::new("flightNumber", "Flight Number or Aircraft Registration", FieldKind::Text),
    FieldSpec::new("accidentLocation", "Location of Accident", FieldKind::Text).required(),
    FieldSpec::new("accidentDescription", "What Happened?", FieldKind::TextArea).required(),
];

const INJURY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("injuries", "Injuries Sustained", FieldKind::TextArea),
    fields::MEDICAL_TREATMENT,
    FieldSpec::new("wrongfulDeath", "Did a Loved One Pass Away?", FieldKind::Select(fields::YES_NO)),
];

const ADDITIONAL_FIELDS: &[FieldSpec] = &[fields::ADDITIONAL_INFO, CONSENT];

pub static PAGE: PracticePage = PracticePage {
    title: "California Aviation Accident Attorneys",
    subtitle: "Fighting for Victims of Airplane and Helicopter Crashes",
    hero_image: "/assets/aviation-hero.jpg",
    seo_description: "California aviation accident lawyers representing victims of airline, private plane and helicopter crashes. Free case evaluation, no fee unless we win.",
    tabs: &[
        Tab { id: "overview", label: "OVERVIEW" },
        Tab { id: "evaluation", label: "CASE EVALUATION" },
        Tab { id: "accident-steps", label: "WHAT TO DO AFTER ACCIDENT" },
        Tab { id: "accident-types", label: "TYPES OF ACCIDENTS" },
        Tab { id: "legal-process", label: "LEGAL PROCESS" },
        Tab { id: "faq", label: "FAQ" },
        Tab { id: "resources", label: "RESOURCES" },
    ],
    sections: &[
        Collapsible {
            id: "overview",
            title: "California Aviation Accident Attorneys",
            summary: "Aviation accidents involve federal regulations, NTSB investigations and technical evidence that decide who is responsible for your losses. Our former defense experience shows us how airlines and manufacturers defend these cases.",
            details: &[
                "Our team works with former pilots, mechanics and investigators who understand the technical side of every crash.",
                "We handle aviation accidents throughout California, from LAX commercial disasters to Central Valley crop duster crashes.",
                "We dispatch investigators to accident sites immediately to preserve evidence before weather and cleanup crews destroy it.",
                "We advance all costs including investigations, experts and litigation expenses. You pay nothing unless we win.",
            ],
        },
        Collapsible {
            id: "accident-steps",
            title: "What To Do After an Aviation Accident",
            summary: "The first days after a crash decide how much evidence survives. Get medical care first, then protect your claim.",
            details: &[
                "Seek medical attention even if injuries seem minor. Internal injuries and brain trauma often appear later.",
                "Keep boarding passes, tickets, luggage tags and any photos or video from the flight.",
                "Write down names of crew, passengers and witnesses while memories are fresh.",
                "Do not give recorded statements to airline representatives or insurance adjusters.",
                "Contact an aviation attorney before signing any release or accepting an early payment.",
            ],
        },
        Collapsible {
            id: "accident-types",
            title: "Types of Aviation Accidents We Handle",
            summary: "California's airports and airspace see every kind of flight, and every kind of crash.",
            details: &[
                "Commercial airline crashes and emergency landings",
                "Private plane and corporate jet accidents",
                "Helicopter tours and medical transport crashes",
                "Military aircraft accidents at bases throughout California",
                "Agricultural aviation and crop dusting accidents",
                "Flight training and air show accidents",
            ],
        },
        Collapsible {
            id: "legal-process",
            title: "The Aviation Accident Legal Process",
            summary: "Aviation claims move through federal and state law at once. We coordinate every track so no deadline is missed.",
            details: &[
                "Independent investigation alongside the NTSB and FAA inquiries.",
                "Identification of every liable party: airlines, operators, maintenance providers, manufacturers and airports.",
                "Government claims filed within the six-month notice window when federal or public entities are involved.",
                "Expert reconstruction and damages analysis before settlement talks begin.",
                "Trial preparation from day one, so insurers negotiate against a ready case.",
            ],
        },
    ],
    faq: &[
        FaqEntry {
            question: "How much is my aviation accident case worth?",
            answer: "Aviation accident settlements vary widely from hundreds of thousands to tens of millions depending on injury severity, liability clarity and available insurance. Factors include medical expenses, lost income, pain and suffering, and whether punitive damages apply.",
        },
        FaqEntry {
            question: "Who can be sued in an aviation accident?",
            answer: "Multiple parties may share liability including airlines, aircraft owners and operators, pilots, maintenance facilities, aircraft and component manufacturers, airports, air traffic controllers (through the federal government), fixed base operators and flight schools.",
        },
        FaqEntry {
            question: "What if the airline or tour operator had me sign a waiver?",
            answer: "Liability waivers don't protect against gross negligence, intentional misconduct or violations of statutory duties. California law limits waiver enforceability, especially for commercial carriers.",
        },
        FaqEntry {
            question: "How long do I have to file an aviation accident lawsuit?",
            answer: "California generally allows two years for personal injury and wrongful death claims, but government claims require six-month notice and international flights under the Montreal Convention follow their own two-year rule. Early consultation ensures all deadlines are met.",
        },
        FaqEntry {
            question: "What if the NTSB finds pilot error caused the crash?",
            answer: "NTSB findings aren't admissible in court and don't determine legal liability. Pilot error doesn't exclude other contributing factors like inadequate training, maintenance failures or design defects.",
        },
        FaqEntry {
            question: "Should I talk to airline representatives or insurance adjusters?",
            answer: "Never give statements or sign documents without legal counsel. Airlines and insurers seek admissions to minimize liability. Let us handle all communications while you focus on recovery.",
        },
    ],
    quick_form_title: "Free Aviation Accident Case Evaluation",
    quick_form: &[FormSection { title: "", fields: QUICK_FIELDS }],
    submit: SubmitAction::Redirect {
        path: EVALUATION_PATH,
        carry_values: true,
    },
    contact_email: config::INTAKE_EMAIL,
    resources: &[
        ResourceLink {
            title: "NTSB Aviation Investigation Search",
            description: "Look up preliminary and final reports for aviation accidents.",
            href: "https://www.ntsb.gov/Pages/investigations.aspx",
        },
        ResourceLink {
            title: "FAA Accident & Incident Data",
            description: "Federal records of aviation accidents and incidents.",
            href: "https://www.faa.gov/data_research/accident_incident",
        },
    ],
};

pub static EVALUATION: EvaluationPage = EvaluationPage {
    path: EVALUATION_PATH,
    title: "Aviation Accident Case Evaluation",
    intro: "Get an expert legal assessment of your airplane or helicopter crash case. You pay nothing until we win.",
    sections: &[
        FormSection { title: "Personal Information", fields: CONTACT },
        FormSection { title: "Accident Details", fields: ACCIDENT_FIELDS },
        FormSection { title: "Injury Information", fields: INJURY_FIELDS },
        FormSection { title: "Additional Information", fields: ADDITIONAL_FIELDS },
    ],
    submit: SubmitAction::Mailto {
        address: config::INTAKE_EMAIL,
        subject: "Aviation Accident Case Evaluation",
    },
    redirect_delay_ms: 0,
};
