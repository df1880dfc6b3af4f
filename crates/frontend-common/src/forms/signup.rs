//! Doctor signup form model
//!
//! The form holds raw input strings; [`DoctorSignupForm::validate`] performs
//! the local presence and pairing checks and builds the registration payload.
//! Anything deeper (email format, duplicate accounts, license validity) is
//! left to the backend.

use crate::config::SignupConfig;
use alshifa_api::types::{RegisterRequest, ScheduleMode};
use alshifa_api::{ClientError, Role};
use std::rc::Rc;
use thiserror::Error;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please select your hospital or enter its name.")]
    HospitalRequired,
    #[error("Work and break durations are required for interleaved scheduling.")]
    DurationsRequired,
    #[error("Durations must be positive whole minutes.")]
    InvalidDuration,
    #[error("Registration failed. Please try again.")]
    Rejected,
    #[error("Unable to reach the server. Please try again later.")]
    Unreachable,
}

impl From<ClientError> for SignupError {
    fn from(error: ClientError) -> Self {
        if error.is_unreachable() {
            Self::Unreachable
        } else {
            Self::Rejected
        }
    }
}

/// Which hospital the doctor belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HospitalChoice {
    #[default]
    Unset,
    /// One of the hospitals offered in the dropdown
    Listed(String),
    /// Free text typed after choosing "Other"
    Custom(String),
}

impl HospitalChoice {
    /// Dropdown value that switches to free-text entry
    pub const CUSTOM_OPTION: &'static str = "__other__";

    /// Map a dropdown value to a choice. Switching to custom starts empty.
    pub fn from_select(value: &str) -> Self {
        match value {
            "" => Self::Unset,
            Self::CUSTOM_OPTION => Self::Custom(String::new()),
            listed => Self::Listed(listed.to_string()),
        }
    }

    /// Value the dropdown should show for this choice
    pub fn select_value(&self) -> &str {
        match self {
            Self::Unset => "",
            Self::Listed(name) => name,
            Self::Custom(_) => Self::CUSTOM_OPTION,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Hospital name to submit, if one has actually been given
    pub fn resolved_name(&self) -> Option<&str> {
        match self {
            Self::Unset => None,
            Self::Listed(name) | Self::Custom(name) => {
                Some(name.trim()).filter(|name| !name.is_empty())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    Password,
    LicenseNumber,
    Specialization,
    CustomHospital,
    WorkMinutes,
    BreakMinutes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoctorSignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub hospital: HospitalChoice,
    pub license_number: String,
    pub specialization: String,
    pub schedule_mode: ScheduleMode,
    pub work_minutes: String,
    pub break_minutes: String,
    /// Name of the picked license document; shown only, never uploaded
    pub document_name: Option<String>,
}

impl Default for DoctorSignupForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            hospital: HospitalChoice::Unset,
            license_number: String::new(),
            specialization: SignupConfig::DEFAULT_SPECIALIZATION.to_string(),
            schedule_mode: ScheduleMode::Continuous,
            work_minutes: String::new(),
            break_minutes: String::new(),
            document_name: None,
        }
    }
}

fn parse_minutes(raw: &str) -> Result<u32, SignupError> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(SignupError::InvalidDuration),
        Ok(minutes) => Ok(minutes),
    }
}

impl DoctorSignupForm {
    pub fn set(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::FirstName => self.first_name = value,
            SignupField::LastName => self.last_name = value,
            SignupField::Email => self.email = value,
            SignupField::Password => self.password = value,
            SignupField::LicenseNumber => self.license_number = value,
            SignupField::Specialization => self.specialization = value,
            SignupField::CustomHospital => {
                // Typing only makes sense once "Other" is selected
                if let HospitalChoice::Custom(name) = &mut self.hospital {
                    *name = value;
                }
            }
            SignupField::WorkMinutes => self.work_minutes = value,
            SignupField::BreakMinutes => self.break_minutes = value,
        }
    }

    /// Local checks, then the payload for `POST /register`
    pub fn validate(&self) -> Result<RegisterRequest, SignupError> {
        let required = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.license_number,
        ];
        if required.iter().any(|v| v.trim().is_empty()) || self.password.is_empty() {
            return Err(SignupError::MissingFields);
        }

        let hospital_name = self
            .hospital
            .resolved_name()
            .ok_or(SignupError::HospitalRequired)?;

        let (work_duration, break_duration) = match self.schedule_mode {
            ScheduleMode::Continuous => (None, None),
            ScheduleMode::Interleaved => {
                if self.work_minutes.trim().is_empty() || self.break_minutes.trim().is_empty() {
                    return Err(SignupError::DurationsRequired);
                }
                (
                    Some(parse_minutes(&self.work_minutes)?),
                    Some(parse_minutes(&self.break_minutes)?),
                )
            }
        };

        let specialization = match self.specialization.trim() {
            "" => SignupConfig::DEFAULT_SPECIALIZATION,
            s => s,
        };

        Ok(RegisterRequest {
            email: self.email.trim().to_string(),
            full_name: format!("{} {}", self.first_name.trim(), self.last_name.trim()),
            password: self.password.clone(),
            role: Role::Doctor,
            specialization: specialization.to_string(),
            license_number: self.license_number.trim().to_string(),
            hospital_name: hospital_name.to_string(),
            scheduling_preference: self.schedule_mode,
            work_duration,
            break_duration,
            kyc_document: SignupConfig::PENDING_DOCUMENT.to_string(),
        })
    }
}

pub enum SignupAction {
    Set(SignupField, String),
    SelectHospital(String),
    SetMode(ScheduleMode),
    AttachDocument(Option<String>),
}

impl Reducible for DoctorSignupForm {
    type Action = SignupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SignupAction::Set(field, value) => next.set(field, value),
            SignupAction::SelectHospital(value) => next.hospital = HospitalChoice::from_select(&value),
            SignupAction::SetMode(mode) => next.schedule_mode = mode,
            SignupAction::AttachDocument(name) => next.document_name = name,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> DoctorSignupForm {
        DoctorSignupForm {
            first_name: "Amina".to_string(),
            last_name: "Khan".to_string(),
            email: "amina@alshifa.in".to_string(),
            password: "s3cret".to_string(),
            hospital: HospitalChoice::Listed("Al-Shifa Main Center".to_string()),
            license_number: "DCI-4471".to_string(),
            ..DoctorSignupForm::default()
        }
    }

    #[test]
    fn defaults_to_general_dentist_and_continuous() {
        let form = DoctorSignupForm::default();
        assert_eq!(form.specialization, "General Dentist");
        assert_eq!(form.schedule_mode, ScheduleMode::Continuous);
        assert_eq!(form.hospital, HospitalChoice::Unset);
    }

    #[test]
    fn builds_payload() {
        let request = filled().validate().unwrap();
        assert_eq!(request.full_name, "Amina Khan");
        assert_eq!(request.role, Role::Doctor);
        assert_eq!(request.hospital_name, "Al-Shifa Main Center");
        assert_eq!(request.specialization, "General Dentist");
        assert_eq!(request.kyc_document, "pending_upload");
        assert_eq!(request.work_duration, None);
    }

    #[test]
    fn missing_hospital_is_rejected() {
        let mut form = filled();
        form.hospital = HospitalChoice::Unset;
        let err = form.validate().unwrap_err();
        assert_eq!(err, SignupError::HospitalRequired);
        assert_eq!(
            err.to_string(),
            "Please select your hospital or enter its name."
        );
    }

    #[test]
    fn blank_custom_hospital_counts_as_missing() {
        let mut form = filled();
        form.hospital = HospitalChoice::Custom("   ".to_string());
        assert_eq!(form.validate().unwrap_err(), SignupError::HospitalRequired);
    }

    #[test]
    fn custom_hospital_is_submitted_trimmed() {
        let mut form = filled();
        form.hospital = HospitalChoice::from_select(HospitalChoice::CUSTOM_OPTION);
        form.set(SignupField::CustomHospital, "  Smile Care Clinic ".to_string());
        assert_eq!(form.validate().unwrap().hospital_name, "Smile Care Clinic");
    }

    #[test]
    fn selecting_listed_hospital_discards_custom_text() {
        let form = Rc::new(filled())
            .reduce(SignupAction::SelectHospital(HospitalChoice::CUSTOM_OPTION.into()))
            .reduce(SignupAction::Set(SignupField::CustomHospital, "Typed".into()))
            .reduce(SignupAction::SelectHospital("Al-Shifa Gachibowli".into()));
        assert_eq!(
            form.hospital,
            HospitalChoice::Listed("Al-Shifa Gachibowli".to_string())
        );
        assert_eq!(form.hospital.select_value(), "Al-Shifa Gachibowli");
    }

    #[test]
    fn custom_text_ignored_unless_other_selected() {
        let mut form = filled();
        form.set(SignupField::CustomHospital, "Ignored".to_string());
        assert_eq!(
            form.hospital,
            HospitalChoice::Listed("Al-Shifa Main Center".to_string())
        );
    }

    #[test]
    fn interleaved_requires_both_durations() {
        for (work, brk) in [("", "10"), ("45", ""), ("", ""), ("  ", "10")] {
            let mut form = filled();
            form.schedule_mode = ScheduleMode::Interleaved;
            form.work_minutes = work.to_string();
            form.break_minutes = brk.to_string();
            let err = form.validate().unwrap_err();
            assert_eq!(err, SignupError::DurationsRequired);
            assert_eq!(
                err.to_string(),
                "Work and break durations are required for interleaved scheduling."
            );
        }
    }

    #[test]
    fn interleaved_durations_are_forwarded() {
        let mut form = filled();
        form.schedule_mode = ScheduleMode::Interleaved;
        form.work_minutes = "45".to_string();
        form.break_minutes = " 10 ".to_string();
        let request = form.validate().unwrap();
        assert_eq!(request.scheduling_preference, ScheduleMode::Interleaved);
        assert_eq!(request.work_duration, Some(45));
        assert_eq!(request.break_duration, Some(10));
    }

    #[test]
    fn non_numeric_durations_are_rejected() {
        let mut form = filled();
        form.schedule_mode = ScheduleMode::Interleaved;
        form.work_minutes = "forty".to_string();
        form.break_minutes = "0".to_string();
        assert_eq!(form.validate().unwrap_err(), SignupError::InvalidDuration);
    }

    #[test]
    fn continuous_mode_drops_durations() {
        let mut form = filled();
        form.work_minutes = "45".to_string();
        form.break_minutes = "10".to_string();
        let request = form.validate().unwrap();
        assert_eq!(request.work_duration, None);
        assert_eq!(request.break_duration, None);
    }

    #[test]
    fn required_fields_checked_before_hospital() {
        let mut form = filled();
        form.license_number.clear();
        form.hospital = HospitalChoice::Unset;
        assert_eq!(form.validate().unwrap_err(), SignupError::MissingFields);
    }

    #[test]
    fn hospital_is_the_only_gap() {
        let mut form = filled();
        form.schedule_mode = ScheduleMode::Interleaved;
        form.hospital = HospitalChoice::from_select("");
        // Durations are also blank, but the hospital check comes first
        assert_eq!(form.validate().unwrap_err(), SignupError::HospitalRequired);
    }
}
