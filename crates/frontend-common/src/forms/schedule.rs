//! Doctor schedule settings form

use alshifa_api::types::ScheduleConfig;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Slot and break lengths must be positive whole minutes.")]
    InvalidMinutes,
    #[error("Working hours must be given as HH:MM.")]
    InvalidTime,
    #[error("The working day must end after it starts.")]
    EmptyDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleField {
    SlotMinutes,
    BreakMinutes,
    WorkStart,
    WorkEnd,
}

/// Raw inputs of the schedule settings panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleForm {
    pub slot_minutes: String,
    pub break_minutes: String,
    pub work_start: String,
    pub work_end: String,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self::from(&ScheduleConfig::default())
    }
}

impl From<&ScheduleConfig> for ScheduleForm {
    fn from(config: &ScheduleConfig) -> Self {
        Self {
            slot_minutes: config.slot_duration.to_string(),
            break_minutes: config.break_duration.to_string(),
            work_start: config.work_start.clone(),
            work_end: config.work_end.clone(),
        }
    }
}

/// Minutes since midnight for an `HH:MM` string
fn clock_minutes(raw: &str) -> Result<u32, ScheduleError> {
    let (hours, minutes) = raw.trim().split_once(':').ok_or(ScheduleError::InvalidTime)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(ScheduleError::InvalidTime);
    }
    let hours: u32 = hours.parse().map_err(|_| ScheduleError::InvalidTime)?;
    let minutes: u32 = minutes.parse().map_err(|_| ScheduleError::InvalidTime)?;
    if hours > 23 || minutes > 59 {
        return Err(ScheduleError::InvalidTime);
    }
    Ok(hours * 60 + minutes)
}

fn positive_minutes(raw: &str) -> Result<u32, ScheduleError> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(ScheduleError::InvalidMinutes),
        Ok(minutes) => Ok(minutes),
    }
}

impl ScheduleForm {
    pub fn set(&mut self, field: ScheduleField, value: String) {
        match field {
            ScheduleField::SlotMinutes => self.slot_minutes = value,
            ScheduleField::BreakMinutes => self.break_minutes = value,
            ScheduleField::WorkStart => self.work_start = value,
            ScheduleField::WorkEnd => self.work_end = value,
        }
    }

    /// Payload for `PUT /doctor/schedule-config`
    pub fn validate(&self) -> Result<ScheduleConfig, ScheduleError> {
        let slot_duration = positive_minutes(&self.slot_minutes)?;
        let break_duration = positive_minutes(&self.break_minutes)?;
        let start = clock_minutes(&self.work_start)?;
        let end = clock_minutes(&self.work_end)?;
        if end <= start {
            return Err(ScheduleError::EmptyDay);
        }
        Ok(ScheduleConfig {
            slot_duration,
            break_duration,
            work_start: self.work_start.trim().to_string(),
            work_end: self.work_end.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_backend_defaults() {
        let config = ScheduleForm::default().validate().unwrap();
        assert_eq!(config, ScheduleConfig::default());
    }

    #[test]
    fn minutes_must_be_positive() {
        let mut form = ScheduleForm::default();
        form.set(ScheduleField::BreakMinutes, "0".into());
        assert_eq!(form.validate().unwrap_err(), ScheduleError::InvalidMinutes);

        form.set(ScheduleField::BreakMinutes, "ten".into());
        assert_eq!(form.validate().unwrap_err(), ScheduleError::InvalidMinutes);
    }

    #[test]
    fn times_are_checked() {
        for bad in ["9:00", "24:00", "09:60", "0900", ""] {
            let mut form = ScheduleForm::default();
            form.set(ScheduleField::WorkStart, bad.into());
            assert_eq!(form.validate().unwrap_err(), ScheduleError::InvalidTime, "{bad}");
        }
    }

    #[test]
    fn day_must_not_be_empty() {
        let mut form = ScheduleForm::default();
        form.set(ScheduleField::WorkEnd, "09:00".into());
        assert_eq!(form.validate().unwrap_err(), ScheduleError::EmptyDay);
    }

    #[test]
    fn values_are_trimmed() {
        let mut form = ScheduleForm::default();
        form.set(ScheduleField::SlotMinutes, " 20 ".into());
        form.set(ScheduleField::WorkStart, " 08:30".into());
        let config = form.validate().unwrap();
        assert_eq!(config.slot_duration, 20);
        assert_eq!(config.work_start, "08:30");
    }
}
