//! Scripted port doubles shared by the booking handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::booking::{Booking, BookingWithRoom};
use crate::domain::enrollment::Enrollment;
use crate::domain::foundation::{
    BookingId, DomainError, EnrollmentId, ErrorCode, HotelId, RoomId, TicketId, TicketTypeId,
    Timestamp, UserId,
};
use crate::domain::hotel::Room;
use crate::domain::ticket::{Ticket, TicketStatus, TicketType};
use crate::ports::{BookingReader, BookingRepository, EnrollmentReader, RoomReader, TicketReader};

/// One double standing in for every directory and the booking store.
///
/// Each lookup returns its scripted value and records its name, so tests can
/// assert which reads a request performed and in what order.
pub struct ScriptedDirectory {
    pub enrollment: Option<Enrollment>,
    pub ticket: Option<Ticket>,
    pub room: Option<Room>,
    pub current_booking: Option<Booking>,
    pub write_error: Option<ErrorCode>,
    pub(crate) calls: Mutex<Vec<&'static str>>,
    pub(crate) writes: Mutex<Vec<Booking>>,
}

impl ScriptedDirectory {
    /// A user who passes every gate for an empty room 7 of capacity 3.
    pub fn eligible() -> Self {
        Self {
            enrollment: Some(enrollment()),
            ticket: Some(ticket(TicketStatus::Paid, false, true)),
            room: Some(room(7, 3, 0)),
            current_booking: None,
            write_error: None,
            calls: Mutex::new(Vec::new()),
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<Booking> {
        self.writes.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn write(&self, booking: Booking) -> Result<Booking, DomainError> {
        if let Some(code) = self.write_error {
            return Err(DomainError::new(code, "Simulated write failure"));
        }
        self.writes.lock().unwrap().push(booking.clone());
        Ok(booking)
    }
}

#[async_trait]
impl EnrollmentReader for ScriptedDirectory {
    async fn find_by_user(&self, _user_id: &UserId) -> Result<Option<Enrollment>, DomainError> {
        self.record("enrollment");
        Ok(self.enrollment.clone())
    }
}

#[async_trait]
impl TicketReader for ScriptedDirectory {
    async fn find_by_enrollment(
        &self,
        _enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        self.record("ticket");
        Ok(self.ticket.clone())
    }
}

#[async_trait]
impl RoomReader for ScriptedDirectory {
    async fn find_by_id(&self, _room_id: &RoomId) -> Result<Option<Room>, DomainError> {
        self.record("room");
        Ok(self.room.clone())
    }
}

#[async_trait]
impl BookingReader for ScriptedDirectory {
    async fn get_by_user(&self, _user_id: &UserId) -> Result<Option<BookingWithRoom>, DomainError> {
        self.record("booking_view");
        Ok(self.current_booking.as_ref().map(|booking| BookingWithRoom {
            id: booking.id,
            room: room(booking.room_id.as_i32(), 3, 1),
        }))
    }
}

#[async_trait]
impl BookingRepository for ScriptedDirectory {
    async fn find_by_user(&self, _user_id: &UserId) -> Result<Option<Booking>, DomainError> {
        self.record("booking");
        Ok(self.current_booking.clone())
    }

    async fn create(&self, room_id: &RoomId, user_id: &UserId) -> Result<Booking, DomainError> {
        self.record("create");
        self.write(booking(1, user_id.as_i32(), room_id.as_i32()))
    }

    async fn update_room(
        &self,
        booking_id: &BookingId,
        room_id: &RoomId,
    ) -> Result<Booking, DomainError> {
        self.record("update");
        let current = self
            .current_booking
            .clone()
            .filter(|b| b.id == *booking_id)
            .ok_or_else(|| DomainError::new(ErrorCode::BookingNotFound, "Booking not found"))?;
        self.write(Booking {
            room_id: *room_id,
            updated_at: Timestamp::now(),
            ..current
        })
    }
}

pub fn user_id() -> UserId {
    UserId::new(1).unwrap()
}

pub fn enrollment() -> Enrollment {
    Enrollment::new(EnrollmentId::new(10).unwrap(), user_id())
}

pub fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
    Ticket {
        id: TicketId::new(20).unwrap(),
        enrollment_id: EnrollmentId::new(10).unwrap(),
        status,
        ticket_type: TicketType {
            id: TicketTypeId::new(30).unwrap(),
            name: "Presential".to_string(),
            price: 600,
            is_remote,
            includes_hotel,
        },
    }
}

pub fn room(id: i32, capacity: u32, occupancy: u32) -> Room {
    Room {
        id: RoomId::new(id).unwrap(),
        name: format!("Room {}", id),
        capacity,
        hotel_id: HotelId::new(1).unwrap(),
        occupancy,
        created_at: Timestamp::now(),
        updated_at: Timestamp::now(),
    }
}

pub fn booking(id: i32, user_id: i32, room_id: i32) -> Booking {
    Booking {
        id: BookingId::new(id).unwrap(),
        user_id: UserId::new(user_id).unwrap(),
        room_id: RoomId::new(room_id).unwrap(),
        created_at: Timestamp::now(),
        updated_at: Timestamp::now(),
    }
}
