use super::fields::{self, CONSENT, EMAIL, FIRST_NAME, PHONE};
use super::{Collapsible, EvaluationPage, FaqEntry, PracticePage, ResourceLink, Tab};
use crate::config;
use crate::lead::{FieldKind, FieldSpec, FormSection, SelectOption, SubmitAction};

const EVALUATION_PATH: &str = "/sexual-abuse-case-evaluation";

const ABUSE_TYPES: &[SelectOption] = &[
    SelectOption { value: "workplace-harassment", label: "Workplace Sexual Harassment" },
    SelectOption { value: "school-abuse", label: "School/Educational Setting" },
    SelectOption { value: "religious-abuse", label: "Religious Institution" },
    SelectOption { value: "healthcare-abuse", label: "Healthcare Provider" },
    SelectOption { value: "family-abuse", label: "Family Member" },
    SelectOption { value: "stranger-assault", label: "Stranger Assault" },
    SelectOption { value: "online-abuse", label: "Online/Digital Abuse" },
    SelectOption { value: "institutional", label: "Institutional Setting" },
    SelectOption { value: "other", label: "Other/Prefer Not to Say" },
];

const TIMEFRAMES: &[SelectOption] = &[
    SelectOption { value: "recent", label: "Within the last year" },
    SelectOption { value: "2-5-years", label: "2-5 years ago" },
    SelectOption { value: "5-10-years", label: "5-10 years ago" },
    SelectOption { value: "10-20-years", label: "10-20 years ago" },
    SelectOption { value: "over-20-years", label: "More than 20 years ago" },
    SelectOption { value: "childhood", label: "During childhood/adolescence" },
    SelectOption { value: "prefer-not-say", label: "Prefer not to say" },
];

const RELATIONSHIPS: &[SelectOption] = &[
    SelectOption { value: "employer-coworker", label: "Employer or Coworker" },
    SelectOption { value: "teacher-coach", label: "Teacher or Coach" },
    SelectOption { value: "clergy", label: "Clergy or Religious Leader" },
    SelectOption { value: "medical-provider", label: "Doctor or Medical Provider" },
    SelectOption { value: "family-member", label: "Family Member" },
    SelectOption { value: "stranger", label: "Stranger" },
    SelectOption { value: "prefer-not-say", label: "Prefer not to say" },
];

const ABUSE_TYPE: FieldSpec = FieldSpec::new("abuseType", "Type of Abuse", FieldKind::Select(ABUSE_TYPES))
    .placeholder("Select type (optional)");
const TIMEFRAME: FieldSpec = FieldSpec::new("timeframe", "When Did This Occur?", FieldKind::Select(TIMEFRAMES))
    .placeholder("Select timeframe (optional)");
const RELATIONSHIP: FieldSpec = FieldSpec::new(
    "relationship",
    "Relationship to the Abuser",
    FieldKind::Select(RELATIONSHIPS),
)
.placeholder("Select relationship (optional)");

const QUICK_FIELDS: &[FieldSpec] = &[ABUSE_TYPE, TIMEFRAME, RELATIONSHIP];

// Survivors may use initials or a first name only.
const CONTACT_FIELDS: &[FieldSpec] = &[
    FIRST_NAME,
    FieldSpec::new("lastName", "Last Name (optional)", FieldKind::Text),
    PHONE,
    EMAIL,
    FieldSpec::new("contactPreference", "Safest Way to Reach You", FieldKind::Text)
        .placeholder("e.g. text only, evenings"),
];

const EXPERIENCE_FIELDS: &[FieldSpec] = &[
    ABUSE_TYPE,
    TIMEFRAME,
    RELATIONSHIP,
    FieldSpec::new("institution", "Institution Involved (if any)", FieldKind::Text),
    FieldSpec::new("reportedToPolice", "Reported to Law Enforcement?", FieldKind::Select(fields::YES_NO)),
    FieldSpec::new("experienceSummary", "Share Only What You're Comfortable Sharing", FieldKind::TextArea),
];

const ADDITIONAL_FIELDS: &[FieldSpec] = &[fields::ADDITIONAL_INFO, CONSENT];

pub static PAGE: PracticePage = PracticePage {
    title: "California Sexual Abuse Lawyers",
    subtitle: "Confidential Representation for Survivors",
    hero_image: "/assets/sexual-abuse-hero.jpg",
    seo_description: "Confidential California sexual abuse attorneys representing survivors of workplace, school, religious and institutional abuse. Free, private consultation.",
    tabs: &[
        Tab { id: "overview", label: "OVERVIEW" },
        Tab { id: "evaluation", label: "CASE EVALUATION" },
        Tab { id: "types", label: "TYPES OF ABUSE" },
        Tab { id: "legal-process", label: "LEGAL PROCESS" },
        Tab { id: "compensation", label: "COMPENSATION" },
        Tab { id: "time-limits", label: "TIME LIMITS" },
        Tab { id: "faq", label: "FAQ" },
        Tab { id: "resources", label: "RESOURCES" },
    ],
    sections: &[
        Collapsible {
            id: "overview",
            title: "Standing With Survivors",
            summary: "Coming forward takes courage. We handle every case with strict confidentiality and move at a pace you control.",
            details: &[
                "Cases can often be filed under initials (Jane Doe/John Doe).",
                "Sensitive records can be sealed, and many cases resolve through confidential settlements.",
                "Civil claims can succeed even when no criminal charges were filed.",
            ],
        },
        Collapsible {
            id: "types",
            title: "Types of Sexual Abuse Cases",
            summary: "Abuse happens in every setting, and institutions that enable it can be held responsible.",
            details: &[
                "Workplace sexual harassment and assault",
                "Abuse in schools, universities and youth sports",
                "Clergy and religious institution abuse",
                "Abuse by doctors and healthcare providers",
                "Domestic, intimate partner and family member abuse",
            ],
        },
        Collapsible {
            id: "legal-process",
            title: "How a Civil Case Works",
            summary: "A civil case seeks accountability and compensation. The burden of proof is lower than in criminal court.",
            details: &[
                "Confidential consultation and case review.",
                "Investigation of the abuser and any institution that ignored warning signs.",
                "Filing under a pseudonym where allowed.",
                "Negotiation, mediation or trial. You decide how far to go.",
            ],
        },
        Collapsible {
            id: "compensation",
            title: "Compensation for Survivors",
            summary: "Damages reflect both the financial cost and the personal harm of abuse.",
            details: &[
                "Therapy and medical expenses, past and future",
                "Lost income and earning capacity",
                "Pain and suffering, emotional distress and trauma",
                "Punitive damages against institutions that concealed abuse",
            ],
        },
        Collapsible {
            id: "time-limits",
            title: "Time Limits in California",
            summary: "California has extended filing deadlines for survivors of sexual abuse, including childhood abuse.",
            details: &[
                "Childhood abuse claims may be filed until age 40.",
                "Or within five years of discovering that the abuse caused psychological injury, whichever is later.",
                "Recent law changes have opened windows for older claims. Ask us about your dates.",
            ],
        },
    ],
    faq: &[
        FaqEntry {
            question: "What is the difference between sexual abuse and sexual assault?",
            answer: "Sexual abuse is a broader term that includes any non-consensual sexual contact or behavior, while sexual assault typically refers to more specific criminal acts. Both can result in civil lawsuits regardless of whether criminal charges were filed.",
        },
        FaqEntry {
            question: "Can I file a lawsuit if the criminal case was dropped or the perpetrator was acquitted?",
            answer: "Yes. Civil cases only require proof by a preponderance of the evidence, a lower standard than beyond a reasonable doubt. Many civil cases succeed even when criminal cases do not.",
        },
        FaqEntry {
            question: "How much does it cost to hire a sexual abuse attorney?",
            answer: "We work on a contingency fee basis, meaning you pay no attorneys' fees unless we win your case. The initial consultation is always free and confidential.",
        },
        FaqEntry {
            question: "Will my case be public? Can I remain anonymous?",
            answer: "We take every possible step to protect your privacy. Cases can often be filed under initials, and we can request that sensitive information be sealed.",
        },
        FaqEntry {
            question: "What if I don't remember all the details of the abuse?",
            answer: "Trauma can affect memory, and courts understand this. Fragmented memories don't prevent a valid case. We use medical records, witness testimony and other evidence to build your case.",
        },
        FaqEntry {
            question: "Can I sue if the perpetrator is deceased?",
            answer: "Yes, you may be able to sue the perpetrator's estate or institutions, employers or organizations that enabled the abuse.",
        },
    ],
    quick_form_title: "Confidential Case Evaluation",
    quick_form: &[FormSection { title: "", fields: QUICK_FIELDS }],
    submit: SubmitAction::Redirect {
        path: EVALUATION_PATH,
        carry_values: true,
    },
    contact_email: config::CONFIDENTIAL_EMAIL,
    resources: &[
        ResourceLink {
            title: "RAINN National Sexual Assault Hotline",
            description: "1-800-656-HOPE (4673), free and confidential, 24/7.",
            href: "tel:18006564673",
        },
        ResourceLink {
            title: "California Coalition Against Sexual Assault",
            description: "Find a rape crisis center near you.",
            href: "https://www.valor.us/",
        },
    ],
};

pub static EVALUATION: EvaluationPage = EvaluationPage {
    path: EVALUATION_PATH,
    title: "Confidential Sexual Abuse Case Evaluation",
    intro: "Everything you share is confidential. Only the contact fields are required.",
    sections: &[
        FormSection { title: "How Can We Reach You?", fields: CONTACT_FIELDS },
        FormSection { title: "About What Happened", fields: EXPERIENCE_FIELDS },
        FormSection { title: "Additional Information", fields: ADDITIONAL_FIELDS },
    ],
    submit: SubmitAction::Mailto {
        address: config::CONFIDENTIAL_EMAIL,
        subject: "Confidential Case Evaluation",
    },
    redirect_delay_ms: 0,
};
