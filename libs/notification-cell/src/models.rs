use serde::Serialize;
use uuid::Uuid;

use shared_models::documents::Booking;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailMessage {
    pub id: Uuid,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl EmailMessage {
    pub fn new(to: &str, subject: String, text: String, html: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            to: to.to_string(),
            subject,
            text,
            html,
        }
    }

    /// Reminder sent to the patient once a booking is stored.
    pub fn booking_confirmation(booking: &Booking) -> Self {
        let subject = format!(
            "Booking an appointment for {} at {} on the date {}.",
            booking.service, booking.time_slot, booking.booking_date
        );
        let reminder = format!(
            "You have booked an appointment for {}. Let me remind your time slot if you forget, it's at {}. Please make sure you attend the meeting.",
            booking.service, booking.time_slot
        );
        let text = format!("Hello, {}", reminder);
        let html = format!("<h2>Hello</h2>\n<p>{}</p>", reminder);

        Self::new(&booking.email, subject, text, html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_confirmation_content() {
        let booking = Booking::new("a@x.com", "Cleaning", "2024-01-01", "10am");
        let message = EmailMessage::booking_confirmation(&booking);

        assert_eq!(message.to, "a@x.com");
        assert_eq!(
            message.subject,
            "Booking an appointment for Cleaning at 10am on the date 2024-01-01."
        );
        assert!(message.text.starts_with("Hello,"));
        assert!(message.text.contains("it's at 10am"));
        assert!(message.html.contains("<h2>Hello</h2>"));
    }

    #[test]
    fn test_each_message_gets_its_own_id() {
        let booking = Booking::new("a@x.com", "Cleaning", "2024-01-01", "10am");
        let first = EmailMessage::booking_confirmation(&booking);
        let second = EmailMessage::booking_confirmation(&booking);

        assert_ne!(first.id, second.id);
    }
}
