//! Three-step booking funnel state machine.
//!
//! Steps move strictly forward and backward, each step validates only the
//! fields it owns, and entered values survive failed transitions. The
//! create-booking endpoint drives a wizard through both validation steps
//! before anything reaches the store.

use chrono::NaiveDate;
use validator::ValidateEmail;

use crate::shared::constants::{SERVICE_TYPES, TIME_SLOTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    ServiceAndTime,
    ContactDetails,
    Confirmation,
}

/// Transient draft filled in step by step.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub service_type: Option<String>,
    pub booking_date: Option<NaiveDate>,
    pub booking_time: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// Finalized record produced by a successful submit. Immutable from the
/// wizard's point of view; the caller persists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    pub service_type: String,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub struct BookingWizard {
    step: WizardStep,
    draft: BookingDraft,
    errors: Vec<FieldError>,
    submitting: bool,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::ServiceAndTime,
            draft: BookingDraft::default(),
            errors: Vec::new(),
            submitting: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut BookingDraft {
        &mut self.draft
    }

    /// Field-level messages from the last failed transition.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The submit control should be treated as disabled while this is set.
    /// Advisory only; nothing here enforces it.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Move from step 1 to step 2. Validates only the service/date/time
    /// fields; on failure the step does not change and entered values are
    /// kept.
    pub fn advance(&mut self, today: NaiveDate) -> bool {
        if self.step != WizardStep::ServiceAndTime {
            return false;
        }

        self.errors = validate_service_and_time(&self.draft, today);
        if !self.errors.is_empty() {
            return false;
        }

        self.step = WizardStep::ContactDetails;
        true
    }

    /// Move back from step 2 to step 1. Always allowed there; all entered
    /// values are preserved.
    pub fn retreat(&mut self) -> bool {
        if self.step != WizardStep::ContactDetails {
            return false;
        }
        self.step = WizardStep::ServiceAndTime;
        true
    }

    /// Validate the contact fields and produce the final record. Only
    /// callable from step 2; the wizard stays there until `complete` is
    /// called with the store's verdict. Single attempt per call, no retry.
    pub fn submit(&mut self) -> Option<BookingRecord> {
        if self.step != WizardStep::ContactDetails {
            return None;
        }

        self.errors = validate_contact(&self.draft);
        if !self.errors.is_empty() {
            return None;
        }

        self.submitting = true;

        // Step-1 fields were validated on the way here.
        Some(BookingRecord {
            service_type: self.draft.service_type.clone()?,
            booking_date: self.draft.booking_date?,
            booking_time: self.draft.booking_time.clone()?,
            name: self.draft.name.trim().to_string(),
            email: self.draft.email.trim().to_string(),
            phone: self.draft.phone.clone(),
            notes: self.draft.notes.clone(),
        })
    }

    /// Record the store's verdict for an in-flight submission. Success is
    /// terminal: the wizard reaches the confirmation step and returns the
    /// message to surface. Failure leaves it on step 2.
    pub fn complete(&mut self, persisted: bool) -> Option<String> {
        if self.step != WizardStep::ContactDetails || !self.submitting {
            return None;
        }
        self.submitting = false;

        if persisted {
            self.step = WizardStep::Confirmation;
            Some(format!(
                "Thank you! A confirmation has been sent to {}.",
                self.draft.email.trim()
            ))
        } else {
            None
        }
    }
}

fn validate_service_and_time(draft: &BookingDraft, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match draft.service_type.as_deref() {
        None | Some("") => errors.push(FieldError::new("serviceType", "Please select a service")),
        Some(service) if !SERVICE_TYPES.contains(&service) => {
            errors.push(FieldError::new("serviceType", "Unknown service"))
        }
        _ => {}
    }

    match draft.booking_date {
        None => errors.push(FieldError::new("bookingDate", "Please pick a date")),
        Some(date) if date < today => {
            errors.push(FieldError::new("bookingDate", "Date must be today or later"))
        }
        _ => {}
    }

    match draft.booking_time.as_deref() {
        None | Some("") => errors.push(FieldError::new("bookingTime", "Please pick a time slot")),
        Some(slot) if !TIME_SLOTS.contains(&slot) => {
            errors.push(FieldError::new("bookingTime", "Unknown time slot"))
        }
        _ => {}
    }

    errors
}

fn validate_contact(draft: &BookingDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !email.validate_email() {
        errors.push(FieldError::new("email", "Invalid email address"));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn filled_step1(wizard: &mut BookingWizard) {
        let draft = wizard.draft_mut();
        draft.service_type = Some("mehndi".to_string());
        draft.booking_date = Some(today());
        draft.booking_time = Some("10:00 AM".to_string());
    }

    #[test]
    fn advance_requires_all_step1_fields() {
        // Missing everything
        let mut wizard = BookingWizard::new();
        assert!(!wizard.advance(today()));
        assert_eq!(wizard.step(), WizardStep::ServiceAndTime);
        assert_eq!(wizard.errors().len(), 3);

        // Service only
        let mut wizard = BookingWizard::new();
        wizard.draft_mut().service_type = Some("rangoli".to_string());
        assert!(!wizard.advance(today()));
        assert_eq!(wizard.step(), WizardStep::ServiceAndTime);

        // All three set
        let mut wizard = BookingWizard::new();
        filled_step1(&mut wizard);
        assert!(wizard.advance(today()));
        assert_eq!(wizard.step(), WizardStep::ContactDetails);
    }

    #[test]
    fn advance_rejects_past_dates() {
        let mut wizard = BookingWizard::new();
        filled_step1(&mut wizard);
        wizard.draft_mut().booking_date = today().pred_opt();

        assert!(!wizard.advance(today()));
        assert_eq!(wizard.step(), WizardStep::ServiceAndTime);
        assert!(wizard.errors().iter().any(|e| e.field == "bookingDate"));

        // Today itself is bookable
        wizard.draft_mut().booking_date = Some(today());
        assert!(wizard.advance(today()));
    }

    #[test]
    fn advance_rejects_unknown_service_and_slot() {
        let mut wizard = BookingWizard::new();
        wizard.draft_mut().service_type = Some("origami".to_string());
        wizard.draft_mut().booking_date = Some(today());
        wizard.draft_mut().booking_time = Some("10:15 AM".to_string());

        assert!(!wizard.advance(today()));
        let fields: Vec<_> = wizard.errors().iter().map(|e| e.field).collect();
        assert!(fields.contains(&"serviceType"));
        assert!(fields.contains(&"bookingTime"));
    }

    #[test]
    fn failed_advance_keeps_entered_values() {
        let mut wizard = BookingWizard::new();
        wizard.draft_mut().service_type = Some("jewelry".to_string());
        assert!(!wizard.advance(today()));
        assert_eq!(wizard.draft().service_type.as_deref(), Some("jewelry"));
    }

    #[test]
    fn retreat_only_from_contact_step_and_preserves_values() {
        let mut wizard = BookingWizard::new();
        assert!(!wizard.retreat());

        filled_step1(&mut wizard);
        assert!(wizard.advance(today()));
        wizard.draft_mut().name = "Asha".to_string();

        assert!(wizard.retreat());
        assert_eq!(wizard.step(), WizardStep::ServiceAndTime);
        assert_eq!(wizard.draft().name, "Asha");
        assert_eq!(wizard.draft().booking_time.as_deref(), Some("10:00 AM"));
    }

    #[test]
    fn submit_is_rejected_outside_contact_step() {
        let mut wizard = BookingWizard::new();
        assert!(wizard.submit().is_none());
    }

    #[test]
    fn submit_validates_contact_fields() {
        let mut wizard = BookingWizard::new();
        filled_step1(&mut wizard);
        assert!(wizard.advance(today()));

        assert!(wizard.submit().is_none());
        assert!(wizard.errors().iter().any(|e| e.field == "name"));
        assert!(wizard.errors().iter().any(|e| e.field == "email"));

        wizard.draft_mut().name = "Asha".to_string();
        wizard.draft_mut().email = "not-an-email".to_string();
        assert!(wizard.submit().is_none());
        assert!(wizard.errors().iter().any(|e| e.field == "email"));
    }

    #[test]
    fn full_funnel_reaches_confirmation() {
        let mut wizard = BookingWizard::new();
        filled_step1(&mut wizard);
        assert!(wizard.advance(today()));

        let name: String = Name().fake();
        let email: String = SafeEmail().fake();
        wizard.draft_mut().name = name.clone();
        wizard.draft_mut().email = email.clone();

        let record = wizard.submit().expect("record");
        assert!(wizard.is_submitting());
        assert_eq!(record.name, name);
        assert_eq!(record.email, email);
        assert_eq!(record.service_type, "mehndi");

        let message = wizard.complete(true).expect("confirmation");
        assert!(message.contains(&email));
        assert_eq!(wizard.step(), WizardStep::Confirmation);
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn failed_persistence_stays_on_contact_step() {
        let mut wizard = BookingWizard::new();
        filled_step1(&mut wizard);
        assert!(wizard.advance(today()));
        wizard.draft_mut().name = "Asha".to_string();
        wizard.draft_mut().email = "asha@example.com".to_string();

        assert!(wizard.submit().is_some());
        assert!(wizard.complete(false).is_none());
        assert_eq!(wizard.step(), WizardStep::ContactDetails);
        assert!(!wizard.is_submitting());

        // A second attempt is allowed; still a single attempt per action
        assert!(wizard.submit().is_some());
    }
}
