//! Settings form: three independently editable sections saved in a fixed order

use crate::shared::notice::Notice;
use contracts::domain::common::{ActionError, PreconditionError, ValidationError};
use contracts::system::settings::{
    AdminInfo, AdminSettings, BankInfo, StoreInfo, UpdateBankRequest, UpdateEmailRequest,
    UpdateStoreRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Email,
    Store,
    Bank,
}

/// One request of a save, executed in plan order
#[derive(Debug, Clone, PartialEq)]
pub enum SaveStep {
    Email(UpdateEmailRequest),
    Store(UpdateStoreRequest),
    Bank(UpdateBankRequest),
}

impl SaveStep {
    pub fn section(&self) -> Section {
        match self {
            SaveStep::Email(_) => Section::Email,
            SaveStep::Store(_) => Section::Store,
            SaveStep::Bank(_) => Section::Bank,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsForm {
    pub admin: AdminInfo,
    pub store: StoreInfo,
    pub bank: BankInfo,
    /// Only sent with an email change, never kept after it
    pub current_password: String,
    pub editing_email: bool,
    pub editing_store: bool,
    pub editing_bank: bool,
    pub loading: bool,
    pub saving: bool,
    pub notice: Option<Notice>,
    // last values confirmed by the backend; cancel restores them
    saved_admin: AdminInfo,
    saved_store: StoreInfo,
    saved_bank: BankInfo,
}

impl SettingsForm {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    /// Missing sections keep their empty defaults
    pub fn loaded(&mut self, settings: Option<AdminSettings>, admin: Option<AdminInfo>) {
        self.loading = false;
        if let Some(settings) = settings {
            self.saved_store = settings.store_info.clone();
            self.saved_bank = settings.bank_info.clone();
            self.store = settings.store_info;
            self.bank = settings.bank_info;
        }
        if let Some(admin) = admin {
            self.saved_admin = admin.clone();
            self.admin = admin;
        }
    }

    pub fn load_failed(&mut self, err: &ActionError) {
        self.loading = false;
        self.notice = Some(Notice::Error(format!("Failed to load settings: {}", err)));
    }

    pub fn is_editing(&self, section: Section) -> bool {
        match section {
            Section::Email => self.editing_email,
            Section::Store => self.editing_store,
            Section::Bank => self.editing_bank,
        }
    }

    /// Enter edit mode, or cancel it and restore the saved values
    pub fn toggle_edit(&mut self, section: Section) {
        if self.saving {
            return;
        }
        let editing = !self.is_editing(section);
        match section {
            Section::Email => {
                self.editing_email = editing;
                if !editing {
                    self.admin.email = self.saved_admin.email.clone();
                    self.current_password.clear();
                }
            }
            Section::Store => {
                self.editing_store = editing;
                if !editing {
                    self.store = self.saved_store.clone();
                }
            }
            Section::Bank => {
                self.editing_bank = editing;
                if !editing {
                    self.bank = self.saved_bank.clone();
                }
            }
        }
    }

    pub fn has_edits(&self) -> bool {
        self.editing_email || self.editing_store || self.editing_bank
    }

    /// Requests for every section in edit mode: email, then store, then bank
    pub fn build_save_plan(&self) -> Result<Vec<SaveStep>, ValidationError> {
        let mut plan = Vec::new();
        if self.editing_email {
            plan.push(SaveStep::Email(UpdateEmailRequest::new(
                &self.admin.email,
                &self.current_password,
            )?));
        }
        if self.editing_store {
            plan.push(SaveStep::Store(UpdateStoreRequest::from(&self.store)));
        }
        if self.editing_bank {
            plan.push(SaveStep::Bank(self.bank.clone()));
        }
        Ok(plan)
    }

    /// Validate and mark the form as saving; nothing is sent on error
    pub fn begin_save(&mut self) -> Result<Vec<SaveStep>, ActionError> {
        if self.saving {
            return Err(PreconditionError::InFlight.into());
        }
        match self.build_save_plan() {
            Ok(plan) => {
                self.notice = None;
                self.saving = !plan.is_empty();
                Ok(plan)
            }
            Err(e) => {
                let err = ActionError::from(e);
                self.notice = Some(Notice::Error(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn step_succeeded(&mut self, step: &SaveStep) {
        match step {
            SaveStep::Email(req) => {
                self.editing_email = false;
                self.current_password.clear();
                self.admin.email = req.email.clone();
                self.saved_admin.email = req.email.clone();
            }
            SaveStep::Store(_) => {
                self.editing_store = false;
                self.saved_store = self.store.clone();
            }
            SaveStep::Bank(_) => {
                self.editing_bank = false;
                self.saved_bank = self.bank.clone();
            }
        }
    }

    pub fn finished(&mut self) {
        self.saving = false;
        self.notice = Some(Notice::Success("Settings saved successfully!".to_string()));
    }

    /// Sections not yet saved stay in edit mode with their values intact
    pub fn failed(&mut self, err: &ActionError) {
        self.saving = false;
        self.notice = Some(Notice::Error(format!("Failed to save settings: {}", err)));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Auto-clear only ever drops a success notice
    pub fn expire_notice(&mut self) {
        if matches!(self.notice, Some(Notice::Success(_))) {
            self.notice = None;
        }
    }

    pub fn save_label(&self) -> &'static str {
        if self.saving {
            "Saving..."
        } else {
            "Save Changes"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_form() -> SettingsForm {
        let mut form = SettingsForm::loading();
        form.loaded(
            Some(AdminSettings {
                store_info: StoreInfo {
                    name: "Corner Shop".into(),
                    ..Default::default()
                },
                bank_info: BankInfo {
                    bank_name: "First Bank".into(),
                    ..Default::default()
                },
            }),
            Some(AdminInfo {
                email: "admin@example.com".into(),
                ..Default::default()
            }),
        );
        form
    }

    #[test]
    fn test_missing_sections_stay_empty() {
        let mut form = SettingsForm::loading();
        form.loaded(None, None);
        assert!(!form.loading);
        assert_eq!(form.store, StoreInfo::default());
        assert_eq!(form.admin.email, "");
    }

    #[test]
    fn test_plan_order_and_contents() {
        let mut form = loaded_form();
        form.toggle_edit(Section::Bank);
        form.toggle_edit(Section::Store);
        form.toggle_edit(Section::Email);
        form.admin.email = "new@example.com".into();
        form.current_password = "secret".into();

        let plan = form.build_save_plan().unwrap();
        let sections: Vec<Section> = plan.iter().map(SaveStep::section).collect();
        assert_eq!(sections, vec![Section::Email, Section::Store, Section::Bank]);
        match &plan[1] {
            SaveStep::Store(req) => assert_eq!(req.store_name, "Corner Shop"),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_email_change_needs_password() {
        let mut form = loaded_form();
        form.toggle_edit(Section::Email);
        form.toggle_edit(Section::Store);
        form.admin.email = "new@example.com".into();

        assert_eq!(form.build_save_plan(), Err(ValidationError::PasswordRequired));
        assert_eq!(
            form.begin_save(),
            Err(ActionError::Validation(ValidationError::PasswordRequired))
        );
        assert!(!form.saving);
        assert!(form.notice.as_ref().map(|n| n.is_error()).unwrap_or(false));
    }

    #[test]
    fn test_cancel_restores_saved_values() {
        let mut form = loaded_form();
        form.toggle_edit(Section::Store);
        form.store.name = "Draft".into();
        form.toggle_edit(Section::Store);
        assert!(!form.editing_store);
        assert_eq!(form.store.name, "Corner Shop");

        form.toggle_edit(Section::Email);
        form.current_password = "secret".into();
        form.toggle_edit(Section::Email);
        assert_eq!(form.current_password, "");
    }

    #[test]
    fn test_steps_leave_edit_mode_until_failure() {
        let mut form = loaded_form();
        form.toggle_edit(Section::Store);
        form.toggle_edit(Section::Bank);
        form.store.name = "Renamed".into();

        let plan = form.begin_save().unwrap();
        assert!(form.saving);
        assert!(form.begin_save().is_err());

        form.step_succeeded(&plan[0]);
        form.failed(&ActionError::Network("offline".into()));
        assert!(!form.editing_store);
        assert!(form.editing_bank);
        assert!(!form.saving);

        // store is now the saved baseline
        form.toggle_edit(Section::Store);
        form.toggle_edit(Section::Store);
        assert_eq!(form.store.name, "Renamed");
    }

    #[test]
    fn test_only_success_notice_expires() {
        let mut form = loaded_form();
        form.finished();
        form.expire_notice();
        assert_eq!(form.notice, None);

        form.failed(&ActionError::Network("offline".into()));
        form.expire_notice();
        assert!(form.notice.is_some());
    }
}
