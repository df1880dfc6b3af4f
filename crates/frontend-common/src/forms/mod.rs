//! Form models shared by the pages

pub mod login;
pub mod schedule;
pub mod signup;

pub use login::{LoginError, LoginForm};
pub use schedule::{ScheduleError, ScheduleField, ScheduleForm};
pub use signup::{DoctorSignupForm, HospitalChoice, SignupAction, SignupError, SignupField};
