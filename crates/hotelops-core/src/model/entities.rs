//! Rows this layer writes
//!
//! Customer, Room and MaintenanceCompany carry operator-supplied keys.
//! The `New*` types are rows whose surrogate key is claimed by the store
//! at insert time, so they carry no id of their own.

use std::fmt;

/// Role a staff member must hold to raise a repair request
pub const MANAGER_ROLE: &str = "Manager";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerName {
    pub first: String,
    pub last: String,
}

impl CustomerName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub customer_id: i64,
    pub name: CustomerName,
    pub address: String,
    /// Digits only; kept as text so leading zeros survive
    pub phone: String,
    /// `YYYY-MM-DD`
    pub dob: String,
    pub gender: Gender,
}

/// Composite room key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomRef {
    pub hotel_id: i64,
    pub room_no: i64,
}

impl RoomRef {
    pub fn new(hotel_id: i64, room_no: i64) -> Self {
        Self { hotel_id, room_no }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub room: RoomRef,
    pub room_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceCompany {
    pub cmp_id: i64,
    pub name: String,
    pub address: String,
    pub is_certified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRepair {
    pub room: RoomRef,
    pub company_id: i64,
    pub repair_date: String,
    /// Empty when the operator skipped it, never absent
    pub description: String,
    pub repair_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub customer_id: i64,
    pub room: RoomRef,
    pub booking_date: String,
    pub no_of_people: i64,
    pub price: i64,
}

/// House-cleaning duty for one staff member on one room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    pub staff_ssn: i64,
    pub room: RoomRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRepairRequest {
    pub manager_ssn: i64,
    pub repair_id: i64,
    pub request_date: String,
    pub description: String,
}
