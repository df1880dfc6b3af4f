//! Sample data shown while the backend is unreachable or the session lacks access

use alshifa_api::types::{
    AdminDashboardStats, DoctorAppointment, DoctorDashboard, OrganizationDashboardStats,
    OrganizationDoctor,
};

#[derive(Clone, Debug, PartialEq)]
pub struct InventoryItem {
    pub name: &'static str,
    pub category: &'static str,
    pub quantity: u32,
    pub unit: &'static str,
    /// Reorder point; untracked items carry none
    pub min_threshold: Option<u32>,
}

fn appointment(id: &str, time: &str, status: &str, patient_id: &str) -> DoctorAppointment {
    DoctorAppointment {
        id: id.to_string(),
        time: time.to_string(),
        status: status.to_string(),
        patient_id: patient_id.to_string(),
    }
}

pub fn doctor_dashboard() -> DoctorDashboard {
    let appointments = vec![
        appointment("a-101", "09:30", "completed", "P-1041"),
        appointment("a-102", "10:15", "scheduled", "P-0987"),
        appointment("a-103", "11:45", "scheduled", "P-1103"),
        appointment("a-104", "14:00", "scheduled", "P-0412"),
    ];
    DoctorDashboard {
        today_count: appointments.len() as u32,
        revenue: appointments.len() as u64 * 1500,
        active_patients: appointments.len() as u32,
        appointments,
    }
}

pub fn admin_stats() -> AdminDashboardStats {
    AdminDashboardStats {
        total_users: 1_284,
        total_doctors: 46,
        total_patients: 1_192,
        total_hospitals: 4,
        pending_doctor_verifications: 3,
        pending_hospital_verifications: 1,
    }
}

pub fn organization_stats() -> OrganizationDashboardStats {
    OrganizationDashboardStats {
        hospital_id: "h-001".to_string(),
        hospital_name: "Al-Shifa Banjara Hills".to_string(),
        total_doctors: 12,
        total_staff: 31,
        total_appointments: 864,
        todays_appointments: 27,
        is_verified: true,
    }
}

fn org_doctor(
    id: &str,
    name: &str,
    specialization: &str,
    is_verified: bool,
    rating: Option<(f64, u32)>,
) -> OrganizationDoctor {
    OrganizationDoctor {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@alshifa.in", id),
        specialization: specialization.to_string(),
        is_verified,
        avg_rating: rating.map(|(avg, _)| avg),
        total_reviews: rating.map(|(_, count)| count),
    }
}

pub fn organization_doctors() -> Vec<OrganizationDoctor> {
    vec![
        org_doctor("dr.farah", "Dr. Farah Ahmed", "Orthodontist", true, Some((4.8, 132))),
        org_doctor("dr.kiran", "Dr. Kiran Rao", "Endodontist", true, Some((4.6, 87))),
        org_doctor("dr.yusuf", "Dr. Yusuf Ali", "General Dentist", false, None),
        org_doctor("dr.meera", "Dr. Meera Iyer", "Pediatric Dentist", true, Some((4.9, 54))),
    ]
}

pub fn inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem { name: "Nitrile gloves (M)", category: "Consumables", quantity: 340, unit: "pairs", min_threshold: Some(100) },
        InventoryItem { name: "Lidocaine 2% cartridges", category: "Anaesthetics", quantity: 18, unit: "boxes", min_threshold: Some(20) },
        InventoryItem { name: "Composite resin A2", category: "Restorative", quantity: 0, unit: "syringes", min_threshold: Some(5) },
        InventoryItem { name: "Endo files 25mm", category: "Endodontics", quantity: 22, unit: "packs", min_threshold: Some(10) },
        InventoryItem { name: "Impression alginate", category: "Prosthodontics", quantity: 5, unit: "bags", min_threshold: Some(5) },
        InventoryItem { name: "Surgical masks", category: "Consumables", quantity: 0, unit: "pieces", min_threshold: None },
    ]
}
