use std::fmt;

use crate::{
    contact::{ContactError, ContactFormData, ContactMessage, Courier, Field},
    content::SKILLS,
};

/// The single visible content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Achievements,
    Contact,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::About,
        Section::Achievements,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Project",
            Self::Achievements => "Achievements",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    section: Section,
    active_skill: Option<usize>,
    skill_count: usize,
    contact: ContactFormData,
    status: SubmissionStatus,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(SKILLS.len())
    }
}

impl ViewState {
    pub fn new(skill_count: usize) -> Self {
        Self {
            section: Section::default(),
            active_skill: None,
            skill_count,
            contact: ContactFormData::default(),
            status: SubmissionStatus::default(),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn active_skill(&self) -> Option<usize> {
        self.active_skill
    }

    pub fn contact(&self) -> &ContactFormData {
        &self.contact
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn select_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Expands `index`, or collapses it if it is already expanded.
    /// Indices past the end of the skills list are ignored.
    pub fn toggle_skill(&mut self, index: usize) {
        if index >= self.skill_count {
            return;
        }
        self.active_skill = if self.active_skill == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.contact.update(field, value);
    }

    /// First half of a submission: validate and mark the form as sending.
    pub fn begin_submission(&mut self) -> Result<ContactMessage, ContactError> {
        if self.status == SubmissionStatus::Sending {
            return Err(ContactError::Pending);
        }
        match self.contact.message() {
            Ok(msg) => {
                self.status = SubmissionStatus::Sending;
                Ok(msg)
            }
            Err(e) => {
                self.status = SubmissionStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Second half of a submission. The fields are only cleared once
    /// delivery is confirmed.
    pub fn settle_submission(&mut self, outcome: Result<(), ContactError>) {
        match outcome {
            Ok(()) => {
                self.contact.clear();
                self.status = SubmissionStatus::Sent;
            }
            Err(e) => self.status = SubmissionStatus::Failed(e.to_string()),
        }
    }

    pub fn submit_contact_form(&mut self, courier: &dyn Courier) -> Result<(), ContactError> {
        let msg = self.begin_submission()?;
        let outcome = courier.deliver(&msg);
        self.settle_submission(outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::content::PROJECTS;

    struct StubCourier {
        succeed: bool,
        received: Mutex<Vec<ContactMessage>>,
    }

    impl StubCourier {
        fn new(succeed: bool) -> Self {
            Self {
                succeed,
                received: Mutex::new(Vec::new()),
            }
        }
    }

    impl Courier for StubCourier {
        fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
            self.received.lock().unwrap().push(message.clone());
            if self.succeed {
                Ok(())
            } else {
                Err(ContactError::Delivery("relay unavailable".to_string()))
            }
        }
    }

    fn fill(state: &mut ViewState) {
        state.update_field(Field::Name, "A");
        state.update_field(Field::Email, "a@b.com");
        state.update_field(Field::Message, "hi");
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.section(), Section::Home);
        assert_eq!(state.active_skill(), None);
        assert_eq!(state.contact(), &ContactFormData::default());
        assert_eq!(state.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_last_selected_section_wins() {
        let mut state = ViewState::default();
        let sequence = [
            Section::Contact,
            Section::Home,
            Section::Achievements,
            Section::Achievements,
            Section::About,
            Section::Projects,
        ];
        for section in sequence {
            state.select_section(section);
            assert_eq!(state.section(), section);
        }
        // every section is reachable from every other in one step
        for from in Section::ALL {
            for to in Section::ALL {
                state.select_section(from);
                state.select_section(to);
                assert_eq!(state.section(), to);
            }
        }
    }

    #[test]
    fn test_toggle_skill_twice_collapses() {
        let mut state = ViewState::default();
        state.toggle_skill(2);
        assert_eq!(state.active_skill(), Some(2));
        state.toggle_skill(2);
        assert_eq!(state.active_skill(), None);
    }

    #[test]
    fn test_toggle_skill_switches_expanded_entry() {
        let mut state = ViewState::default();
        state.toggle_skill(1);
        state.toggle_skill(4);
        assert_eq!(state.active_skill(), Some(4));
    }

    #[test]
    fn test_toggle_skill_ignores_unknown_index() {
        let mut state = ViewState::new(3);
        state.toggle_skill(1);
        state.toggle_skill(3);
        assert_eq!(state.active_skill(), Some(1));
        let mut state = ViewState::default();
        state.toggle_skill(SKILLS.len());
        assert_eq!(state.active_skill(), None);
    }

    #[test]
    fn test_projects_section_lists_configured_projects() {
        let mut state = ViewState::default();
        assert_eq!(state.section(), Section::Home);
        state.select_section(Section::Projects);
        assert_eq!(state.section(), Section::Projects);
        let titles = PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec!["Audit Safe", "Matdaan", "Cropify", "Your Hr", "Project 3"]
        );
    }

    #[test]
    fn test_submit_success_resets_form() {
        let mut state = ViewState::default();
        fill(&mut state);
        let courier = StubCourier::new(true);

        assert_eq!(state.submit_contact_form(&courier), Ok(()));
        assert_eq!(state.contact(), &ContactFormData::default());
        assert_eq!(state.status(), &SubmissionStatus::Sent);

        let received = courier.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].name, "A");
        assert_eq!(received[0].email, "a@b.com");
        assert_eq!(received[0].message, "hi");
    }

    #[test]
    fn test_submit_failure_keeps_fields() {
        let mut state = ViewState::default();
        fill(&mut state);
        let courier = StubCourier::new(false);

        let res = state.submit_contact_form(&courier);
        assert!(matches!(res, Err(ContactError::Delivery(_))));
        assert_eq!(state.contact().get(Field::Name), "A");
        assert_eq!(state.contact().get(Field::Email), "a@b.com");
        assert_eq!(state.contact().get(Field::Message), "hi");
        assert!(matches!(state.status(), SubmissionStatus::Failed(_)));
    }

    #[test]
    fn test_submit_with_missing_field_never_reaches_courier() {
        let mut state = ViewState::default();
        state.update_field(Field::Name, "A");
        state.update_field(Field::Message, "hi");
        let courier = StubCourier::new(true);

        let res = state.submit_contact_form(&courier);
        assert_eq!(res, Err(ContactError::Validation(Field::Email)));
        assert!(courier.received.lock().unwrap().is_empty());
        assert_eq!(state.contact().get(Field::Name), "A");
    }

    #[test]
    fn test_begin_submission_rejects_while_sending() {
        let mut state = ViewState::default();
        fill(&mut state);
        assert!(state.begin_submission().is_ok());
        assert_eq!(state.status(), &SubmissionStatus::Sending);
        assert_eq!(state.begin_submission(), Err(ContactError::Pending));

        state.settle_submission(Err(ContactError::Delivery("timeout".to_string())));
        assert!(state.begin_submission().is_ok());
    }

    #[test]
    fn test_section_ids() {
        let ids = Section::ALL.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["home", "projects", "about", "achievements", "contact"]);
    }
}
