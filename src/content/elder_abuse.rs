use super::fields::{self, CONSENT, CONTACT, EMAIL, FIRST_NAME, PHONE};
use super::{Collapsible, EvaluationPage, FaqEntry, PracticePage, ResourceLink, Tab};
use crate::config;
use crate::lead::{FieldKind, FieldSpec, FormSection, SelectOption, SubmitAction};

const EVALUATION_PATH: &str = "/elder-abuse-case-evaluation";

const ABUSE_TYPES: &[SelectOption] = &[
    SelectOption { value: "nursing-home-neglect", label: "Nursing Home Neglect" },
    SelectOption { value: "physical-abuse", label: "Physical Abuse" },
    SelectOption { value: "financial-exploitation", label: "Financial Exploitation" },
    SelectOption { value: "assisted-living-abuse", label: "Assisted Living Abuse" },
    SelectOption { value: "home-care-abuse", label: "Home Care Abuse" },
    SelectOption { value: "emotional-abuse", label: "Emotional Abuse" },
    SelectOption { value: "medication-errors", label: "Medication Errors" },
    SelectOption { value: "other", label: "Other/Not Sure" },
];

const FACILITY_TYPES: &[SelectOption] = &[
    SelectOption { value: "nursing-home", label: "Nursing Home" },
    SelectOption { value: "assisted-living", label: "Assisted Living Facility" },
    SelectOption { value: "memory-care", label: "Memory Care Unit" },
    SelectOption { value: "home-care", label: "In-Home Care Agency" },
    SelectOption { value: "hospital", label: "Hospital" },
    SelectOption { value: "family", label: "Family Member or Private Caregiver" },
];

const ABUSE_TYPE: FieldSpec =
    FieldSpec::new("abuseType", "Type of Abuse", FieldKind::Select(ABUSE_TYPES))
        .placeholder("Select type of abuse");

const QUICK_FIELDS: &[FieldSpec] = &[FIRST_NAME, PHONE, EMAIL, ABUSE_TYPE];

const ABUSE_FIELDS: &[FieldSpec] = &[
    ABUSE_TYPE,
    FieldSpec::new("facilityName", "Facility or Caregiver Name", FieldKind::Text),
    FieldSpec::new("facilityType", "Facility Type", FieldKind::Select(FACILITY_TYPES)),
    FieldSpec::new("abuseDate", "When Was the Abuse Discovered?", FieldKind::Date),
    FieldSpec::new("abuseDescription", "Describe What Happened", FieldKind::TextArea).required(),
];

const MEDICAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("injuriesDescription", "Injuries or Health Decline", FieldKind::TextArea),
    fields::MEDICAL_TREATMENT,
    FieldSpec::new("currentMedicalNeeds", "Current Medical Needs", FieldKind::TextArea),
];

const FINANCIAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("financialLosses", "Financial Losses", FieldKind::TextArea),
    FieldSpec::new("stolenAmount", "Approximate Amount Taken", FieldKind::Text),
];

const ADDITIONAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("witnessesAvailable", "Are Witnesses Available?", FieldKind::Select(fields::YES_NO)),
    FieldSpec::new("reportedToAPS", "Reported to Adult Protective Services?", FieldKind::Select(fields::YES_NO)),
    FieldSpec::new("lawEnforcementInvolved", "Law Enforcement Involved?", FieldKind::Select(fields::YES_NO)),
    fields::ADDITIONAL_INFO,
    CONSENT,
];

pub static PAGE: PracticePage = PracticePage {
    title: "California Elder Abuse Attorneys",
    subtitle: "Protecting California's Vulnerable Seniors",
    hero_image: "/assets/elder-abuse-hero.jpg",
    seo_description: "California elder abuse lawyers handling nursing home neglect, financial exploitation and caregiver abuse under EADACPA. Confidential, 24/7, no fee unless we win.",
    tabs: &[
        Tab { id: "overview", label: "OVERVIEW" },
        Tab { id: "evaluation", label: "CASE EVALUATION" },
        Tab { id: "immediate-steps", label: "WHAT TO DO AFTER ABUSE" },
        Tab { id: "types-abuse", label: "TYPES OF ELDER ABUSE" },
        Tab { id: "legal-process", label: "LEGAL PROCESS" },
        Tab { id: "faq", label: "FAQ" },
        Tab { id: "resources", label: "RESOURCES" },
    ],
    sections: &[
        Collapsible {
            id: "overview",
            title: "California Elder Abuse Attorneys",
            summary: "Physical violence, financial exploitation, neglect in care facilities and emotional abuse rob seniors of dignity and security. California's Elder Abuse and Dependent Adult Civil Protection Act (EADACPA) gives families powerful remedies.",
            details: &[
                "EADACPA covers adults 65 and older and dependent adults aged 18 to 64.",
                "Successful claims can recover attorney fees, punitive damages and pain and suffering.",
                "We know how to prove the heightened standards these enhanced remedies require.",
            ],
        },
        Collapsible {
            id: "immediate-steps",
            title: "What To Do After Discovering Abuse",
            summary: "Safety comes first. Then document everything while evidence is fresh.",
            details: &[
                "Remove your loved one from danger and seek medical care.",
                "Photograph injuries, living conditions and medication packaging.",
                "Report to Adult Protective Services (833-401-0832) and, for crimes, to law enforcement.",
                "Preserve bank statements, care plans and all communications with the facility.",
            ],
        },
        Collapsible {
            id: "types-abuse",
            title: "Types of Elder Abuse",
            summary: "California law recognizes several forms of elder abuse, each with its own evidence requirements.",
            details: &[
                "Physical abuse: hitting, improper restraint, sexual assault",
                "Neglect: bedsores, malnutrition, dehydration, medication errors",
                "Financial abuse: theft, fraud, undue influence, misuse of power of attorney",
                "Emotional abuse: threats, humiliation, isolation",
                "Abandonment by caregivers",
            ],
        },
        Collapsible {
            id: "legal-process",
            title: "The Elder Abuse Legal Process",
            summary: "We build cases that meet the clear and convincing evidence standard for enhanced damages.",
            details: &[
                "Review of medical records, care plans and staffing records.",
                "Interviews with witnesses and former staff.",
                "Geriatric, nursing and financial experts to establish the standard of care.",
                "Settlement negotiation or trial, with fee-shifting under EADACPA.",
            ],
        },
    ],
    faq: &[
        FaqEntry {
            question: "What is the Elder Abuse and Dependent Adult Civil Protection Act (EADACPA)?",
            answer: "California's EADACPA provides enhanced legal protections for adults 65 and older and dependent adults aged 18-64. The law allows for attorney fees, punitive damages and pain and suffering compensation when abuse, neglect or financial exploitation occurs.",
        },
        FaqEntry {
            question: "What is the statute of limitations for elder abuse cases in California?",
            answer: "Generally, elder abuse cases must be filed within two years from the date of discovery of the abuse. For financial abuse cases, the timeline may be extended to four years from discovery.",
        },
        FaqEntry {
            question: "Can I sue a nursing home for elder abuse?",
            answer: "Yes. Nursing homes have a legal duty to provide adequate care and protection. You can sue for physical abuse, neglect leading to bedsores or malnutrition, medication errors, falls due to inadequate supervision and financial exploitation.",
        },
        FaqEntry {
            question: "Do I need to pay attorney fees upfront for an elder abuse case?",
            answer: "No. We work on contingency, meaning you pay nothing unless we win. EADACPA also allows recovery of attorney fees from defendants in successful cases.",
        },
        FaqEntry {
            question: "Can I file a case if my loved one has dementia?",
            answer: "Yes. Cognitive impairment doesn't prevent filing elder abuse claims. Family members can file on behalf of incapacitated elders through conservatorship or as successors in interest.",
        },
        FaqEntry {
            question: "How do bedsores indicate elder abuse?",
            answer: "Severe bedsores often indicate neglect because they are largely preventable with regular turning, adequate nutrition, proper hygiene and appropriate equipment.",
        },
    ],
    quick_form_title: "Free Case Evaluation",
    quick_form: &[FormSection { title: "", fields: QUICK_FIELDS }],
    submit: SubmitAction::Redirect {
        path: EVALUATION_PATH,
        carry_values: true,
    },
    contact_email: config::CONFIDENTIAL_EMAIL,
    resources: &[
        ResourceLink {
            title: "California Adult Protective Services",
            description: "Report suspected abuse of an elder or dependent adult, 24 hours a day.",
            href: "https://www.cdss.ca.gov/adult-protective-services",
        },
        ResourceLink {
            title: "Long-Term Care Ombudsman",
            description: "Advocates for residents of nursing homes and assisted living facilities.",
            href: "https://aging.ca.gov/Programs_and_Services/Long-Term_Care_Ombudsman/",
        },
    ],
};

pub static EVALUATION: EvaluationPage = EvaluationPage {
    path: EVALUATION_PATH,
    title: "Elder Abuse Case Evaluation",
    intro: "100% confidential. We'll contact you within 24 hours to discuss your loved one's case.",
    sections: &[
        FormSection { title: "Personal Information", fields: CONTACT },
        FormSection { title: "Abuse Information", fields: ABUSE_FIELDS },
        FormSection { title: "Medical Information", fields: MEDICAL_FIELDS },
        FormSection { title: "Financial Information", fields: FINANCIAL_FIELDS },
        FormSection { title: "Additional Information", fields: ADDITIONAL_FIELDS },
    ],
    submit: SubmitAction::Redirect {
        path: "/thank-you?service=elder-abuse-evaluation",
        carry_values: false,
    },
    redirect_delay_ms: 2_000,
};
