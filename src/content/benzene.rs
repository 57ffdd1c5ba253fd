use super::fields::{self, CONSENT, CONTACT};
use super::{Collapsible, EvaluationPage, FaqEntry, PracticePage, ResourceLink, Tab};
use crate::config;
use crate::lead::{FieldKind, FieldSpec, FormSection, SelectOption, SubmitAction};

const EVALUATION_PATH: &str = "/benzene-case-evaluation";

const BLOOD_CANCERS: &[SelectOption] = &[
    SelectOption { value: "aml", label: "Acute Myeloid Leukemia (AML)" },
    SelectOption { value: "all", label: "Acute Lymphoblastic Leukemia (ALL)" },
    SelectOption { value: "cll", label: "Chronic Lymphocytic Leukemia (CLL)" },
    SelectOption { value: "cml", label: "Chronic Myeloid Leukemia (CML)" },
    SelectOption { value: "multiple-myeloma", label: "Multiple Myeloma" },
    SelectOption { value: "non-hodgkin", label: "Non-Hodgkin Lymphoma" },
    SelectOption { value: "mds", label: "Myelodysplastic Syndromes" },
    SelectOption { value: "aplastic-anemia", label: "Aplastic Anemia" },
    SelectOption { value: "other", label: "Other Blood Cancer" },
];

const EXPOSURE_LOCATION: FieldSpec =
    FieldSpec::new("exposureLocation", "Exposure Location", FieldKind::Text)
        .required()
        .placeholder("Oil Refinery, Gas Station, Chemical Plant, etc.");
const BLOOD_CANCER_TYPE: FieldSpec = FieldSpec::new(
    "bloodCancerType",
    "Blood Cancer Type",
    FieldKind::Select(BLOOD_CANCERS),
)
.placeholder("Select condition...");
const DIAGNOSIS_DATE: FieldSpec = FieldSpec::new("diagnosisDate", "Diagnosis Date", FieldKind::Date);

const QUICK_FIELDS: &[FieldSpec] = &[EXPOSURE_LOCATION, BLOOD_CANCER_TYPE, DIAGNOSIS_DATE];

const EXPOSURE_FIELDS: &[FieldSpec] = &[
    EXPOSURE_LOCATION,
    FieldSpec::new("employer", "Employer(s) During Exposure", FieldKind::Text),
    FieldSpec::new("jobTitle", "Job Title or Duties", FieldKind::Text),
    FieldSpec::new("exposureYears", "Years of Exposure", FieldKind::Text).placeholder("e.g. 1988-2004"),
    FieldSpec::new("productsUsed", "Products or Chemicals Used", FieldKind::TextArea),
];

const DIAGNOSIS_FIELDS: &[FieldSpec] = &[
    BLOOD_CANCER_TYPE,
    DIAGNOSIS_DATE,
    fields::MEDICAL_TREATMENT,
    FieldSpec::new("familyClaim", "Filing on Behalf of a Family Member?", FieldKind::Select(fields::YES_NO)),
];

const ADDITIONAL_FIELDS: &[FieldSpec] = &[fields::ADDITIONAL_INFO, CONSENT];

pub static PAGE: PracticePage = PracticePage {
    title: "California Benzene Exposure Lawyers",
    subtitle: "Holding Refineries and Manufacturers Accountable for Blood Cancer",
    hero_image: "/assets/benzene-hero.jpg",
    seo_description: "Benzene exposure attorneys for California workers and families diagnosed with leukemia, lymphoma and other blood cancers. Free confidential case review.",
    tabs: &[
        Tab { id: "overview", label: "OVERVIEW" },
        Tab { id: "evaluation", label: "CASE EVALUATION" },
        Tab { id: "diagnosis-steps", label: "WHAT TO DO AFTER DIAGNOSIS" },
        Tab { id: "diagnosis-process", label: "DIAGNOSIS PROCESS" },
        Tab { id: "legal-process", label: "LEGAL PROCESS" },
        Tab { id: "faq", label: "FAQ" },
        Tab { id: "resources", label: "RESOURCES" },
    ],
    sections: &[
        Collapsible {
            id: "overview",
            title: "Benzene Exposure and Blood Cancer",
            summary: "Benzene is a known human carcinogen used in refining, chemical manufacturing and countless solvents. Long-term exposure is strongly linked to leukemia and other blood cancers.",
            details: &[
                "Oil refinery workers, gas station employees, mechanics, painters and printers face elevated risk.",
                "Blood cancers from benzene often develop 5 to 30 years after exposure.",
                "California's discovery rule protects workers who only recently learned of the connection.",
            ],
        },
        Collapsible {
            id: "diagnosis-steps",
            title: "What To Do After a Diagnosis",
            summary: "Your health comes first. While you focus on treatment, a few steps protect your right to compensation.",
            details: &[
                "Request copies of pathology reports, bone marrow biopsies and treatment records.",
                "List every employer, job site and product you remember working with.",
                "Keep pay stubs and union records that show where and when you worked.",
                "Do not sign statements for former employers or their insurers without advice.",
            ],
        },
        Collapsible {
            id: "diagnosis-process",
            title: "How Benzene-Related Cancers Are Diagnosed",
            summary: "Diagnosis usually starts with abnormal blood counts and is confirmed by bone marrow testing.",
            details: &[
                "Complete blood count showing abnormal white cells, anemia or low platelets.",
                "Bone marrow aspiration and biopsy to identify the specific cancer.",
                "Cytogenetic testing, which can reveal chromosome changes associated with chemical exposure.",
            ],
        },
        Collapsible {
            id: "legal-process",
            title: "The Benzene Litigation Process",
            summary: "We reconstruct your exposure history and prove causation with industrial hygiene and medical experts.",
            details: &[
                "Free review of your work history and medical records.",
                "Identification of manufacturers, suppliers and premises owners responsible for exposure.",
                "Expert testimony on exposure levels and medical causation.",
                "Negotiation or trial, with no fees unless we recover for you.",
            ],
        },
    ],
    faq: &[
        FaqEntry {
            question: "Can I file a benzene exposure lawsuit in California?",
            answer: "Yes, if you were exposed to benzene and developed blood cancer, you may have a valid legal claim. California law provides strong protections for toxic exposure victims, including strict liability for dangerous substances.",
        },
        FaqEntry {
            question: "What is the statute of limitations for benzene cases in California?",
            answer: "Generally two years from the date you discovered or should have discovered that your illness was caused by benzene exposure. Because of the long latency of blood cancers, the discovery rule is crucial.",
        },
        FaqEntry {
            question: "What types of cancer are linked to benzene exposure?",
            answer: "Benzene is strongly linked to AML, ALL, CLL, CML, multiple myeloma, non-Hodgkin lymphoma, myelodysplastic syndromes and aplastic anemia.",
        },
        FaqEntry {
            question: "Do I need to prove exactly where I was exposed to benzene?",
            answer: "No. Our investigators identify possible sources of exposure throughout your work history, using industrial hygiene experts and historical records. Many clients only remember their job duties, not specific products.",
        },
        FaqEntry {
            question: "Can family members file claims for benzene exposure?",
            answer: "Spouses can file wrongful death claims if benzene exposure caused their partner's death. Family members who developed cancer from secondary exposure may also have claims.",
        },
        FaqEntry {
            question: "What if I was exposed to benzene decades ago?",
            answer: "That doesn't bar your claim. The statute of limitations doesn't begin until you discover the connection between your illness and benzene exposure.",
        },
    ],
    quick_form_title: "Free Benzene Exposure Case Evaluation",
    quick_form: &[FormSection { title: "", fields: QUICK_FIELDS }],
    submit: SubmitAction::Redirect {
        path: EVALUATION_PATH,
        carry_values: true,
    },
    contact_email: config::INTAKE_EMAIL,
    resources: &[
        ResourceLink {
            title: "CDC: Facts About Benzene",
            description: "Exposure sources and health effects.",
            href: "https://emergency.cdc.gov/agent/benzene/basics/facts.asp",
        },
        ResourceLink {
            title: "Leukemia & Lymphoma Society",
            description: "Patient support, treatment information and financial help.",
            href: "https://www.lls.org/",
        },
    ],
};

pub static EVALUATION: EvaluationPage = EvaluationPage {
    path: EVALUATION_PATH,
    title: "Benzene Exposure Case Evaluation",
    intro: "Tell us about your work history and diagnosis. Every review is free and confidential.",
    sections: &[
        FormSection { title: "Personal Information", fields: CONTACT },
        FormSection { title: "Exposure History", fields: EXPOSURE_FIELDS },
        FormSection { title: "Diagnosis", fields: DIAGNOSIS_FIELDS },
        FormSection { title: "Additional Information", fields: ADDITIONAL_FIELDS },
    ],
    submit: SubmitAction::Mailto {
        address: config::INTAKE_EMAIL,
        subject: "Benzene Exposure Case Inquiry",
    },
    redirect_delay_ms: 0,
};
