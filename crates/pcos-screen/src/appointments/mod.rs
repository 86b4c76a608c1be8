//! Local appointment scheduler. Bookings live in memory for the lifetime of the process.

mod router;

pub use router::appointment_router;

use std::sync::{Mutex, PoisonError};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Bookable half-hour slots.
pub const TIME_SLOTS: [&str; 15] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "13:00", "13:30", "14:00", "14:30",
    "15:00", "15:30", "16:00", "16:30", "17:00",
];

pub const SPECIALIZATIONS: [&str; 6] = [
    "gynecologist",
    "endocrinologist",
    "nutritionist",
    "reproductiveSpecialist",
    "dermatologist",
    "other",
];

const MIN_FIELD_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    #[serde(default)]
    pub doctor_name: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub doctor_name: String,
    pub specialization: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Appointment {
    pub fn confirmation(&self) -> String {
        format!(
            "Your appointment with {} on {} at {} has been scheduled.",
            self.doctor_name,
            self.date.format("%B %d, %Y"),
            self.time
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub appointment: Appointment,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentError {
    #[error("doctorName: doctor name is required")]
    DoctorName,
    #[error("specialization: specialization is required")]
    Specialization,
    #[error("date: please select a date")]
    MissingDate,
    #[error("date: {date} is in the past")]
    PastDate { date: NaiveDate },
    #[error("time: {value:?} is not an available time slot")]
    TimeSlot { value: String },
    #[error("location: location is required")]
    Location,
}

impl AppointmentError {
    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            AppointmentError::DoctorName => "doctorName",
            AppointmentError::Specialization => "specialization",
            AppointmentError::MissingDate | AppointmentError::PastDate { .. } => "date",
            AppointmentError::TimeSlot { .. } => "time",
            AppointmentError::Location => "location",
        }
    }
}

impl AppointmentRequest {
    /// Checks the request against the booking rules, treating `today` as the earliest bookable day.
    pub fn validate(self, today: NaiveDate) -> Result<Appointment, AppointmentError> {
        if too_short(&self.doctor_name) {
            return Err(AppointmentError::DoctorName);
        }
        if too_short(&self.specialization) {
            return Err(AppointmentError::Specialization);
        }
        let date = self.date.ok_or(AppointmentError::MissingDate)?;
        if date < today {
            return Err(AppointmentError::PastDate { date });
        }
        if !TIME_SLOTS.contains(&self.time.as_str()) {
            return Err(AppointmentError::TimeSlot { value: self.time });
        }
        if too_short(&self.location) {
            return Err(AppointmentError::Location);
        }

        Ok(Appointment {
            doctor_name: self.doctor_name.trim().to_string(),
            specialization: self.specialization.trim().to_string(),
            date,
            time: self.time,
            location: self.location.trim().to_string(),
            notes: self.notes.filter(|notes| !notes.trim().is_empty()),
        })
    }
}

fn too_short(value: &str) -> bool {
    value.trim().chars().count() < MIN_FIELD_LEN
}

/// Appointments booked during this process, in booking order.
#[derive(Debug, Default)]
pub struct AppointmentBook {
    appointments: Mutex<Vec<Appointment>>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book(&self, request: AppointmentRequest) -> Result<BookingConfirmation, AppointmentError> {
        self.book_on(request, Local::now().date_naive())
    }

    pub fn book_on(
        &self,
        request: AppointmentRequest,
        today: NaiveDate,
    ) -> Result<BookingConfirmation, AppointmentError> {
        let appointment = request.validate(today)?;
        let message = appointment.confirmation();

        self.appointments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(appointment.clone());

        info!(
            doctor = %appointment.doctor_name,
            date = %appointment.date,
            time = %appointment.time,
            "appointment booked"
        );
        Ok(BookingConfirmation {
            appointment,
            message,
        })
    }

    pub fn list(&self) -> Vec<Appointment> {
        self.appointments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
    }

    fn request() -> AppointmentRequest {
        AppointmentRequest {
            doctor_name: "Dr. Lisa Patel".to_string(),
            specialization: "reproductiveSpecialist".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14),
            time: "10:30".to_string(),
            location: "Riverside Clinic".to_string(),
            notes: None,
        }
    }

    #[test]
    fn booking_returns_formatted_confirmation() {
        let book = AppointmentBook::new();
        let confirmation = book.book_on(request(), today()).expect("booking succeeds");

        assert_eq!(
            confirmation.message,
            "Your appointment with Dr. Lisa Patel on March 14, 2025 at 10:30 has been scheduled."
        );
        assert_eq!(book.list(), vec![confirmation.appointment]);
    }

    #[test]
    fn single_character_fields_are_rejected() {
        let mut short_name = request();
        short_name.doctor_name = " D ".to_string();
        assert_eq!(short_name.validate(today()), Err(AppointmentError::DoctorName));

        let mut short_location = request();
        short_location.location = "X".to_string();
        let err = short_location.validate(today()).unwrap_err();
        assert_eq!(err.field(), "location");
    }

    #[test]
    fn lunch_hour_is_not_a_slot() {
        let mut lunch = request();
        lunch.time = "12:00".to_string();
        let err = lunch.validate(today()).unwrap_err();
        assert_eq!(err.field(), "time");
        assert!(err.to_string().contains("12:00"));
    }

    #[test]
    fn past_and_missing_dates_are_rejected() {
        let mut past = request();
        past.date = NaiveDate::from_ymd_opt(2025, 3, 9);
        assert!(matches!(
            past.validate(today()),
            Err(AppointmentError::PastDate { .. })
        ));

        let mut missing = request();
        missing.date = None;
        assert_eq!(missing.validate(today()), Err(AppointmentError::MissingDate));

        let mut same_day = request();
        same_day.date = Some(today());
        assert!(same_day.validate(today()).is_ok());
    }

    #[test]
    fn failed_booking_leaves_book_unchanged_and_order_is_kept() {
        let book = AppointmentBook::new();
        let mut invalid = request();
        invalid.specialization = String::new();
        assert!(book.book_on(invalid, today()).is_err());
        assert!(book.list().is_empty());

        let mut second = request();
        second.doctor_name = "Dr. Michael Chen".to_string();
        book.book_on(request(), today()).expect("first booking");
        book.book_on(second, today()).expect("second booking");

        let names: Vec<String> = book.list().into_iter().map(|a| a.doctor_name).collect();
        assert_eq!(names, vec!["Dr. Lisa Patel", "Dr. Michael Chen"]);
    }

    #[test]
    fn blank_notes_are_dropped() {
        let mut with_blank_notes = request();
        with_blank_notes.notes = Some("   ".to_string());
        let appointment = with_blank_notes.validate(today()).expect("valid");
        assert_eq!(appointment.notes, None);
    }

    #[test]
    fn poisoned_lock_keeps_serving_bookings() {
        let book = std::sync::Arc::new(AppointmentBook::new());
        book.book_on(request(), today()).expect("first booking");

        let poisoner = std::sync::Arc::clone(&book);
        let joined = std::thread::spawn(move || {
            let _guard = poisoner.appointments.lock().expect("lock before panic");
            panic!("panic while holding the appointment lock");
        })
        .join();
        assert!(joined.is_err());
        assert!(book.appointments.is_poisoned());

        book.book_on(request(), today()).expect("booking after poison");
        assert_eq!(book.list().len(), 2);
    }
}
