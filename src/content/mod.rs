//! Static copy and per-page configuration for each practice area.

mod aviation;
mod benzene;
mod elder_abuse;
mod fields;
mod sexual_abuse;
mod spinal_cord;
mod truck;

use crate::lead::{FormSection, SubmitAction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tab {
    pub id: &'static str,
    pub label: &'static str,
}

/// A content block whose summary is always shown and whose details expand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collapsible {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceLink {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

/// Anchors the page shell renders itself; every other tab points at a [`Collapsible`].
pub const EVALUATION_ANCHOR: &str = "evaluation";
pub const FAQ_ANCHOR: &str = "faq";
pub const RESOURCES_ANCHOR: &str = "resources";

#[derive(Debug, PartialEq)]
pub struct PracticePage {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub hero_image: &'static str,
    pub seo_description: &'static str,
    pub tabs: &'static [Tab],
    pub sections: &'static [Collapsible],
    pub faq: &'static [FaqEntry],
    pub quick_form_title: &'static str,
    pub quick_form: &'static [FormSection],
    pub submit: SubmitAction,
    pub contact_email: &'static str,
    pub resources: &'static [ResourceLink],
}

#[derive(Debug, PartialEq)]
pub struct EvaluationPage {
    pub path: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub sections: &'static [FormSection],
    pub submit: SubmitAction,
    /// Pause before navigating so the confirmation can be read.
    pub redirect_delay_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PracticeArea {
    Aviation,
    Benzene,
    ElderAbuse,
    SexualAbuse,
    SpinalCord,
    Truck,
}

impl PracticeArea {
    pub fn all() -> &'static [PracticeArea] {
        &[
            PracticeArea::Aviation,
            PracticeArea::Benzene,
            PracticeArea::ElderAbuse,
            PracticeArea::SexualAbuse,
            PracticeArea::SpinalCord,
            PracticeArea::Truck,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            PracticeArea::Aviation => "aviation-accidents",
            PracticeArea::Benzene => "benzene-exposure",
            PracticeArea::ElderAbuse => "elder-abuse",
            PracticeArea::SexualAbuse => "sexual-abuse",
            PracticeArea::SpinalCord => "spinal-cord-injuries",
            PracticeArea::Truck => "truck-accidents",
        }
    }

    /// Short name for menus.
    pub fn name(&self) -> &'static str {
        match self {
            PracticeArea::Aviation => "Aviation Accidents",
            PracticeArea::Benzene => "Benzene Exposure",
            PracticeArea::ElderAbuse => "Elder Abuse",
            PracticeArea::SexualAbuse => "Sexual Abuse",
            PracticeArea::SpinalCord => "Spinal Cord Injuries",
            PracticeArea::Truck => "Truck Accidents",
        }
    }

    pub fn from_slug(slug: &str) -> Option<PracticeArea> {
        Self::all().iter().copied().find(|area| area.slug() == slug)
    }

    pub fn page_path(&self) -> String {
        format!("/practice-areas/{}", self.slug())
    }

    pub fn page(&self) -> &'static PracticePage {
        match self {
            PracticeArea::Aviation => &aviation::PAGE,
            PracticeArea::Benzene => &benzene::PAGE,
            PracticeArea::ElderAbuse => &elder_abuse::PAGE,
            PracticeArea::SexualAbuse => &sexual_abuse::PAGE,
            PracticeArea::SpinalCord => &spinal_cord::PAGE,
            PracticeArea::Truck => &truck::PAGE,
        }
    }

    pub fn evaluation(&self) -> &'static EvaluationPage {
        match self {
            PracticeArea::Aviation => &aviation::EVALUATION,
            PracticeArea::Benzene => &benzene::EVALUATION,
            PracticeArea::ElderAbuse => &elder_abuse::EVALUATION,
            PracticeArea::SexualAbuse => &sexual_abuse::EVALUATION,
            PracticeArea::SpinalCord => &spinal_cord::EVALUATION,
            PracticeArea::Truck => &truck::EVALUATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::{self, FormState, SubmitTarget};
    use crate::links::parse_query;

    #[test]
    fn slugs_round_trip() {
        for area in PracticeArea::all() {
            assert_eq!(PracticeArea::from_slug(area.slug()), Some(*area));
        }
        assert_eq!(PracticeArea::from_slug("dog-bites"), None);
    }

    #[test]
    fn every_tab_has_an_anchor() {
        for area in PracticeArea::all() {
            let page = area.page();
            assert_eq!(page.tabs.first().map(|t| t.id), Some("overview"), "{:?}", area);
            for tab in page.tabs {
                let rendered = [EVALUATION_ANCHOR, FAQ_ANCHOR, RESOURCES_ANCHOR].contains(&tab.id)
                    || page.sections.iter().any(|s| s.id == tab.id);
                assert!(rendered, "{:?} tab {} has no section", area, tab.id);
            }
        }
    }

    #[test]
    fn quick_form_redirects_land_on_the_evaluation_page() {
        for area in PracticeArea::all() {
            if let SubmitAction::Redirect { path, .. } = area.page().submit {
                assert_eq!(path, area.evaluation().path, "{:?}", area);
            }
        }
    }

    #[test]
    fn quick_form_values_prefill_the_evaluation_form() {
        for area in PracticeArea::all() {
            let page = area.page();
            let evaluation = area.evaluation();
            for field in lead::fields(page.quick_form) {
                assert!(
                    lead::fields(evaluation.sections).any(|f| f.id == field.id),
                    "{:?}: {} missing from evaluation form",
                    area,
                    field.id
                );
            }
        }
    }

    #[test]
    fn elder_abuse_quick_form_redirects() {
        let page = PracticeArea::ElderAbuse.page();
        let mut state = FormState::default();
        state.set_text("firstName", "Mary");
        state.set_text("phone", "555-1234");
        state.set_text("email", "m@x.com");
        state.set_text("abuseType", "nursing-home-neglect");

        let target =
            lead::submit(&page.submit, page.quick_form_title, &state, page.quick_form).unwrap();
        let SubmitTarget::Navigate(href) = target else {
            panic!("elder abuse quick form should navigate");
        };
        let (path, search) = href.split_once('?').unwrap();
        assert_eq!(path, "/elder-abuse-case-evaluation");
        assert_eq!(
            parse_query(search),
            vec![
                ("firstName".to_string(), "Mary".to_string()),
                ("phone".to_string(), "555-1234".to_string()),
                ("email".to_string(), "m@x.com".to_string()),
                ("abuseType".to_string(), "nursing-home-neglect".to_string()),
            ]
        );
    }

    #[test]
    fn elder_abuse_quick_form_requires_contact_fields() {
        let page = PracticeArea::ElderAbuse.page();
        let mut state = FormState::default();
        state.set_text("firstName", "Mary");
        assert!(lead::submit(&page.submit, page.quick_form_title, &state, page.quick_form).is_err());
    }

    #[test]
    fn elder_abuse_type_is_optional() {
        let page = PracticeArea::ElderAbuse.page();
        let mut state = FormState::default();
        state.set_text("firstName", "Mary");
        state.set_text("phone", "555-1234");
        state.set_text("email", "m@x.com");

        let target =
            lead::submit(&page.submit, page.quick_form_title, &state, page.quick_form).unwrap();
        let SubmitTarget::Navigate(href) = target else {
            panic!("elder abuse quick form should navigate");
        };
        assert!(!href.contains("abuseType"), "{}", href);
    }

    #[test]
    fn sexual_abuse_quick_form_is_optional() {
        let page = PracticeArea::SexualAbuse.page();
        let target = lead::submit(
            &page.submit,
            page.quick_form_title,
            &FormState::default(),
            page.quick_form,
        )
        .unwrap();
        assert_eq!(target, SubmitTarget::Navigate("/sexual-abuse-case-evaluation".into()));
    }

    #[test]
    fn truck_quick_form_carries_date_and_injury() {
        let page = PracticeArea::Truck.page();
        let mut state = FormState::default();
        state.set_text("accidentDate", "2024-01-01");
        state.set_text("injuryType", "brain-injury");

        let target =
            lead::submit(&page.submit, page.quick_form_title, &state, page.quick_form).unwrap();
        let SubmitTarget::Navigate(href) = target else {
            panic!("truck quick form should navigate");
        };
        let (path, search) = href.split_once('?').unwrap();
        assert_eq!(path, "/truck-accident-case-evaluation");
        assert_eq!(
            parse_query(search),
            vec![
                ("accidentDate".to_string(), "2024-01-01".to_string()),
                ("injuryType".to_string(), "brain-injury".to_string()),
            ]
        );
    }

    #[test]
    fn truck_quick_form_requires_accident_date() {
        let page = PracticeArea::Truck.page();
        let mut state = FormState::default();
        state.set_text("injuryType", "burns");
        assert!(lead::submit(&page.submit, page.quick_form_title, &state, page.quick_form).is_err());
    }

    #[test]
    fn every_quick_form_hands_off_to_its_evaluation() {
        for area in PracticeArea::all() {
            assert!(
                matches!(area.page().submit, SubmitAction::Redirect { carry_values: true, .. }),
                "{:?}",
                area
            );
        }
    }

    #[test]
    fn evaluation_forms_require_consent() {
        for area in PracticeArea::all() {
            let evaluation = area.evaluation();
            assert!(
                lead::fields(evaluation.sections)
                    .any(|f| f.id == fields::CONSENT.id && f.required),
                "{:?}",
                area
            );
        }
    }
}
