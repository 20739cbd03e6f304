//! In-memory hotel directory and booking store.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::booking::{Booking, BookingWithRoom};
use crate::domain::enrollment::Enrollment;
use crate::domain::foundation::{
    BookingId, DomainError, EnrollmentId, ErrorCode, HotelId, RoomId, TicketId, TicketTypeId,
    Timestamp, UserId, ValidationError,
};
use crate::domain::hotel::Room;
use crate::domain::ticket::{Ticket, TicketStatus, TicketType};
use crate::ports::{
    BookingReader, BookingRepository, EnrollmentReader, RoomReader, SessionStore, TicketReader,
};

/// A room as stored; occupancy is derived from the bookings on read.
#[derive(Debug, Clone)]
struct RoomRecord {
    id: RoomId,
    name: String,
    capacity: u32,
    hotel_id: HotelId,
    created_at: Timestamp,
    updated_at: Timestamp,
}

#[derive(Debug, Default)]
struct HotelState {
    enrollments: HashMap<UserId, Enrollment>,
    tickets: HashMap<EnrollmentId, Ticket>,
    hotels: HashMap<HotelId, String>,
    rooms: HashMap<RoomId, RoomRecord>,
    bookings: BTreeMap<BookingId, Booking>,
    sessions: HashMap<String, UserId>,
    last_id: i32,
}

impl HotelState {
    fn next_id<T>(&mut self) -> Result<T, DomainError>
    where
        T: TryFrom<i32, Error = ValidationError>,
    {
        self.last_id += 1;
        Ok(T::try_from(self.last_id)?)
    }

    fn occupancy(&self, room_id: &RoomId) -> u32 {
        self.bookings.values().filter(|b| b.room_id == *room_id).count() as u32
    }

    fn room(&self, room_id: &RoomId) -> Option<Room> {
        self.rooms.get(room_id).map(|record| Room {
            id: record.id,
            name: record.name.clone(),
            capacity: record.capacity,
            hotel_id: record.hotel_id,
            occupancy: self.occupancy(room_id),
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    fn booking_of(&self, user_id: &UserId) -> Option<&Booking> {
        self.bookings.values().find(|b| b.user_id == *user_id)
    }

    /// Fails unless `room_id` exists and has a free place.
    fn ensure_vacancy(&self, room_id: &RoomId) -> Result<(), DomainError> {
        let room = self.room(room_id).ok_or_else(|| room_not_found(room_id))?;
        if !room.has_vacancy() {
            return Err(DomainError::new(
                ErrorCode::RoomFull,
                format!("Room {} is full", room_id),
            ));
        }
        Ok(())
    }
}

/// Number of lookups each directory has served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadCounts {
    pub enrollments: usize,
    pub tickets: usize,
    pub rooms: usize,
    pub bookings: usize,
}

#[derive(Debug, Default)]
struct ReadCounters {
    enrollments: AtomicUsize,
    tickets: AtomicUsize,
    rooms: AtomicUsize,
    bookings: AtomicUsize,
}

/// In-memory implementation of every hotel booking port.
///
/// Capacity checks and the writes they guard run under one write lock, so
/// concurrent admissions can never overfill a room.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHotelStore {
    state: Arc<RwLock<HotelState>>,
    reads: Arc<ReadCounters>,
}

impl InMemoryHotelStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === Seeding ===

    /// Enrolls a user and returns the enrollment id.
    pub async fn add_enrollment(&self, user_id: UserId) -> Result<EnrollmentId, DomainError> {
        let mut state = self.state.write().await;
        let id = state.next_id()?;
        state.enrollments.insert(user_id, Enrollment::new(id, user_id));
        Ok(id)
    }

    /// Issues a ticket of a fresh ticket type to an enrollment.
    pub async fn add_ticket(
        &self,
        enrollment_id: EnrollmentId,
        status: TicketStatus,
        is_remote: bool,
        includes_hotel: bool,
    ) -> Result<TicketId, DomainError> {
        let mut state = self.state.write().await;
        let type_id: TicketTypeId = state.next_id()?;
        let id: TicketId = state.next_id()?;
        let ticket = Ticket {
            id,
            enrollment_id,
            status,
            ticket_type: TicketType {
                id: type_id,
                name: if is_remote { "Online" } else { "Presential" }.to_string(),
                price: if includes_hotel { 600 } else { 250 },
                is_remote,
                includes_hotel,
            },
        };
        state.tickets.insert(enrollment_id, ticket);
        Ok(id)
    }

    pub async fn add_hotel(&self, name: impl Into<String>) -> Result<HotelId, DomainError> {
        let mut state = self.state.write().await;
        let id = state.next_id()?;
        state.hotels.insert(id, name.into());
        Ok(id)
    }

    /// Adds a room to an existing hotel.
    pub async fn add_room(
        &self,
        hotel_id: HotelId,
        name: impl Into<String>,
        capacity: u32,
    ) -> Result<RoomId, DomainError> {
        let mut state = self.state.write().await;
        if !state.hotels.contains_key(&hotel_id) {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!("Unknown hotel: {}", hotel_id),
            ));
        }
        if capacity == 0 {
            return Err(ValidationError::not_positive("capacity", 0).into());
        }
        let id = state.next_id()?;
        let now = Timestamp::now();
        state.rooms.insert(
            id,
            RoomRecord {
                id,
                name: name.into(),
                capacity,
                hotel_id,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    /// Records a booking without any capacity check (fixtures only).
    pub async fn add_booking(
        &self,
        user_id: UserId,
        room_id: RoomId,
    ) -> Result<BookingId, DomainError> {
        let mut state = self.state.write().await;
        let id = state.next_id()?;
        let now = Timestamp::now();
        state.bookings.insert(
            id,
            Booking {
                id,
                user_id,
                room_id,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    /// Registers `token` as an active session of `user_id`.
    pub async fn add_session(&self, token: impl Into<String>, user_id: UserId) {
        self.state.write().await.sessions.insert(token.into(), user_id);
    }

    /// Revokes a session token.
    pub async fn remove_session(&self, token: &str) {
        self.state.write().await.sessions.remove(token);
    }

    // === Test Helpers ===

    /// Number of bookings currently referencing `room_id`.
    pub async fn occupancy(&self, room_id: &RoomId) -> u32 {
        self.state.read().await.occupancy(room_id)
    }

    pub async fn booking_count(&self) -> usize {
        self.state.read().await.bookings.len()
    }

    /// Lookups served so far by each directory.
    pub fn read_counts(&self) -> ReadCounts {
        ReadCounts {
            enrollments: self.reads.enrollments.load(Ordering::SeqCst),
            tickets: self.reads.tickets.load(Ordering::SeqCst),
            rooms: self.reads.rooms.load(Ordering::SeqCst),
            bookings: self.reads.bookings.load(Ordering::SeqCst),
        }
    }
}

#[async_trait]
impl EnrollmentReader for InMemoryHotelStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Enrollment>, DomainError> {
        self.reads.enrollments.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.read().await.enrollments.get(user_id).cloned())
    }
}

#[async_trait]
impl TicketReader for InMemoryHotelStore {
    async fn find_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        self.reads.tickets.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.read().await.tickets.get(enrollment_id).cloned())
    }
}

#[async_trait]
impl RoomReader for InMemoryHotelStore {
    async fn find_by_id(&self, room_id: &RoomId) -> Result<Option<Room>, DomainError> {
        self.reads.rooms.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.read().await.room(room_id))
    }
}

#[async_trait]
impl BookingReader for InMemoryHotelStore {
    async fn get_by_user(&self, user_id: &UserId) -> Result<Option<BookingWithRoom>, DomainError> {
        self.reads.bookings.fetch_add(1, Ordering::SeqCst);
        let state = self.state.read().await;
        let Some(booking) = state.booking_of(user_id) else {
            return Ok(None);
        };
        let room = state.room(&booking.room_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Booking {} references missing room {}", booking.id, booking.room_id),
            )
        })?;
        Ok(Some(BookingWithRoom {
            id: booking.id,
            room,
        }))
    }
}

#[async_trait]
impl BookingRepository for InMemoryHotelStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Booking>, DomainError> {
        self.reads.bookings.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.read().await.booking_of(user_id).cloned())
    }

    async fn create(&self, room_id: &RoomId, user_id: &UserId) -> Result<Booking, DomainError> {
        let mut state = self.state.write().await;
        state.ensure_vacancy(room_id)?;

        let id = state.next_id()?;
        let now = Timestamp::now();
        let booking = Booking {
            id,
            user_id: *user_id,
            room_id: *room_id,
            created_at: now,
            updated_at: now,
        };
        state.bookings.insert(id, booking.clone());
        Ok(booking)
    }

    async fn update_room(
        &self,
        booking_id: &BookingId,
        room_id: &RoomId,
    ) -> Result<Booking, DomainError> {
        let mut state = self.state.write().await;
        if !state.bookings.contains_key(booking_id) {
            return Err(DomainError::new(
                ErrorCode::BookingNotFound,
                format!("Booking not found: {}", booking_id),
            ));
        }
        state.ensure_vacancy(room_id)?;

        let booking = state.bookings.get_mut(booking_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::BookingNotFound,
                format!("Booking not found: {}", booking_id),
            )
        })?;
        booking.room_id = *room_id;
        booking.updated_at = Timestamp::now();
        Ok(booking.clone())
    }
}

#[async_trait]
impl SessionStore for InMemoryHotelStore {
    async fn is_active(&self, token: &str, user_id: &UserId) -> Result<bool, DomainError> {
        Ok(self.state.read().await.sessions.get(token) == Some(user_id))
    }
}

fn room_not_found(room_id: &RoomId) -> DomainError {
    DomainError::new(ErrorCode::RoomNotFound, format!("Room not found: {}", room_id))
        .with_detail("room_id", room_id.to_string())
}
