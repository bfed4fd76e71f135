//! Referential integrity checks
//!
//! Every create operation confirms the rows it points at before it writes
//! anything. A failed check is a domain error, never a partial insert.

use crate::errors::Result;
use crate::statement::Statement;
use crate::Client;
use hotelops_core::errors::{ExError, HotelOpsError};
use hotelops_core::model::{RoomRef, MANAGER_ROLE};

/// A row some new row is about to reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Hotel(i64),
    Room(RoomRef),
    Company(i64),
    Staff(i64),
    Repair(i64),
}

impl Reference {
    fn exists_statement(self) -> Statement {
        match self {
            Reference::Hotel(id) => {
                Statement::new("SELECT EXISTS(SELECT 1 FROM Hotel WHERE hotelID = ?1)").bind(id)
            }
            Reference::Room(room) => Statement::new(
                "SELECT EXISTS(SELECT 1 FROM Room WHERE hotelID = ?1 AND roomNo = ?2)",
            )
            .bind(room.hotel_id)
            .bind(room.room_no),
            Reference::Company(id) => Statement::new(
                "SELECT EXISTS(SELECT 1 FROM MaintenanceCompany WHERE cmpID = ?1)",
            )
            .bind(id),
            Reference::Staff(ssn) => {
                Statement::new("SELECT EXISTS(SELECT 1 FROM Staff WHERE SSN = ?1)").bind(ssn)
            }
            Reference::Repair(id) => {
                Statement::new("SELECT EXISTS(SELECT 1 FROM Repair WHERE rID = ?1)").bind(id)
            }
        }
    }

    fn not_found(self) -> HotelOpsError {
        match self {
            Reference::Hotel(hotel_id) => HotelOpsError::HotelNotFound { hotel_id },
            Reference::Room(room) => HotelOpsError::RoomNotFound {
                hotel_id: room.hotel_id,
                room_no: room.room_no,
            },
            Reference::Company(cmp_id) => HotelOpsError::CompanyNotFound { cmp_id },
            Reference::Staff(ssn) => HotelOpsError::StaffNotFound { ssn },
            Reference::Repair(repair_id) => HotelOpsError::RepairNotFound { repair_id },
        }
    }
}

/// Whether the referenced row exists
pub fn exists(client: &Client, reference: Reference) -> Result<bool> {
    let result = client.query(&reference.exists_statement())?;
    Ok(result.scalar() == Some("1"))
}

/// Role of the staff member, `None` when there is no such staff row
pub fn role_of(client: &Client, ssn: i64) -> Result<Option<String>> {
    let result = client.query(&Statement::new("SELECT role FROM Staff WHERE SSN = ?1").bind(ssn))?;
    Ok(result.scalar().map(str::to_string))
}

/// Fail with the matching not-found error unless the row exists
pub fn require(client: &Client, reference: Reference) -> Result<()> {
    if exists(client, reference)? {
        Ok(())
    } else {
        Err(ExError::from(reference.not_found()))
    }
}

/// The staff member must exist and hold exactly the manager role
pub fn require_manager(client: &Client, ssn: i64) -> Result<()> {
    match role_of(client, ssn)? {
        None => Err(HotelOpsError::StaffNotFound { ssn }.into()),
        Some(role) if role == MANAGER_ROLE => Ok(()),
        Some(role) => Err(HotelOpsError::RoleDenied {
            ssn,
            role,
            required: MANAGER_ROLE.to_string(),
        }
        .into()),
    }
}
