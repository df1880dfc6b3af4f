//! Wire types shared with the clinic backend

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role as issued by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Doctor,
    Patient,
    Admin,
    Organization,
    Staff,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Doctor => "doctor",
            Role::Patient => "patient",
            Role::Admin => "admin",
            Role::Organization => "organization",
            Role::Staff => "staff",
            Role::Unknown => "unknown",
        }
    }

    /// Plural noun for user-facing copy ("doctors", "staff")
    pub fn plural(&self) -> &'static str {
        match self {
            Role::Doctor => "doctors",
            Role::Patient => "patients",
            Role::Admin => "admins",
            Role::Organization => "organizations",
            Role::Staff => "staff",
            Role::Unknown => "unknown users",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "doctor" => Role::Doctor,
            "patient" => Role::Patient,
            "admin" => Role::Admin,
            "organization" => Role::Organization,
            "staff" => Role::Staff,
            _ => Role::Unknown,
        })
    }
}

/// OAuth2 password-form credentials for `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub role: Role,
}

/// How a doctor's bookings are laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleMode {
    /// Back-to-back bookings
    #[default]
    Continuous,
    /// Alternating fixed work and break durations
    Interleaved,
}

/// Body of `POST /register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: Role,
    pub specialization: String,
    pub license_number: String,
    pub hospital_name: String,
    pub scheduling_preference: ScheduleMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_duration: Option<u32>,
    pub kyc_document: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserOut {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminDashboardStats {
    pub total_users: u32,
    pub total_doctors: u32,
    pub total_patients: u32,
    pub total_hospitals: u32,
    pub pending_doctor_verifications: u32,
    pub pending_hospital_verifications: u32,
}

/// Filter for the KYC verification queues
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KycStatus {
    #[default]
    Pending,
    Approved,
    All,
}

impl KycStatus {
    pub const ALL: [KycStatus; 3] = [KycStatus::Pending, KycStatus::Approved, KycStatus::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::Pending => "pending",
            KycStatus::Approved => "approved",
            KycStatus::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KycStatus::Pending => "Pending",
            KycStatus::Approved => "Approved",
            KycStatus::All => "All",
        }
    }

    /// Whether an entry with the given verification flag belongs in this view
    pub fn admits(&self, is_verified: bool) -> bool {
        match self {
            KycStatus::Pending => !is_verified,
            KycStatus::Approved => is_verified,
            KycStatus::All => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorKycRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub specialization: String,
    #[serde(default)]
    pub license_number: Option<String>,
    pub hospital: String,
    pub is_verified: bool,
    #[serde(default)]
    pub verified_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationKycRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
    pub is_verified: bool,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response to approve/reject actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycActionResponse {
    pub message: String,
    #[serde(default, alias = "doctor_id", alias = "hospital_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationDashboardStats {
    pub hospital_id: String,
    pub hospital_name: String,
    pub total_doctors: u32,
    pub total_staff: u32,
    pub total_appointments: u32,
    pub todays_appointments: u32,
    pub is_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationDoctor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub is_verified: bool,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: Option<u32>,
}

/// One row of the doctor's schedule for today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorAppointment {
    pub id: String,
    /// Local start time, `HH:MM`
    pub time: String,
    pub status: String,
    pub patient_id: String,
}

/// `GET /doctor/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorDashboard {
    pub today_count: u32,
    pub revenue: u64,
    pub active_patients: u32,
    #[serde(default)]
    pub appointments: Vec<DoctorAppointment>,
}

/// Slot layout of a doctor's working day (`/doctor/schedule-config`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Minutes per appointment slot
    pub slot_duration: u32,
    /// Minutes between slots
    pub break_duration: u32,
    pub work_start: String,
    pub work_end: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            slot_duration: 30,
            break_duration: 5,
            work_start: "09:00".to_string(),
            work_end: "17:00".to_string(),
        }
    }
}

/// Partial update for `PUT /organization/profile`; absent fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Acknowledgement returned by update endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
