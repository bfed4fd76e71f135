//! SQLite statements for the hotel schema

use crate::errors::{corrupt_value, Result};
use crate::statement::Statement;
use crate::Client;
use hotelops_core::model::{
    Customer, CustomerName, MaintenanceCompany, NewAssignment, NewBooking, NewRepair,
    NewRepairRequest, Room, RoomRef,
};

pub struct SqliteRepo;

impl SqliteRepo {
    pub fn insert_customer(customer: &Customer) -> Statement {
        Statement::new(
            "INSERT INTO Customer (customerID, fName, lName, address, phno, DOB, gender)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(customer.customer_id)
        .bind(customer.name.first.clone())
        .bind(customer.name.last.clone())
        .bind(customer.address.clone())
        .bind(customer.phone.clone())
        .bind(customer.dob.clone())
        .bind(customer.gender.as_str().to_string())
    }

    pub fn select_customer(customer_id: i64) -> Statement {
        Statement::new(
            "SELECT customerID, fName, lName, address, phno, DOB, gender
             FROM Customer WHERE customerID = ?1",
        )
        .bind(customer_id)
    }

    /// Lowest customer id among exact first/last name matches
    pub fn find_customer_id(client: &Client, name: &CustomerName) -> Result<Option<i64>> {
        let result = client.query(
            &Statement::new(
                "SELECT customerID FROM Customer
                 WHERE fName = ?1 AND lName = ?2
                 ORDER BY customerID LIMIT 1",
            )
            .bind(name.first.clone())
            .bind(name.last.clone()),
        )?;

        match result.scalar() {
            None => Ok(None),
            Some(text) => text
                .parse::<i64>()
                .map(Some)
                .map_err(|_| corrupt_value("customerID", text)),
        }
    }

    pub fn insert_room(room: &Room) -> Statement {
        Statement::new("INSERT INTO Room (hotelID, roomNo, roomType) VALUES (?1, ?2, ?3)")
            .bind(room.room.hotel_id)
            .bind(room.room.room_no)
            .bind(room.room_type.clone())
    }

    pub fn select_room(room: RoomRef) -> Statement {
        Statement::new(
            "SELECT hotelID, roomNo, roomType FROM Room WHERE hotelID = ?1 AND roomNo = ?2",
        )
        .bind(room.hotel_id)
        .bind(room.room_no)
    }

    pub fn insert_company(company: &MaintenanceCompany) -> Statement {
        Statement::new(
            "INSERT INTO MaintenanceCompany (cmpID, name, address, isCertified)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(company.cmp_id)
        .bind(company.name.clone())
        .bind(company.address.clone())
        .bind(company.is_certified)
    }

    pub fn select_company(cmp_id: i64) -> Statement {
        Statement::new(
            "SELECT cmpID, name, address,
                    CASE WHEN isCertified THEN 'true' ELSE 'false' END AS isCertified
             FROM MaintenanceCompany WHERE cmpID = ?1",
        )
        .bind(cmp_id)
    }

    pub fn insert_repair(r_id: i64, repair: &NewRepair) -> Statement {
        Statement::new(
            "INSERT INTO Repair (rID, hotelID, roomNo, mCompany, repairDate, description, repairType)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(r_id)
        .bind(repair.room.hotel_id)
        .bind(repair.room.room_no)
        .bind(repair.company_id)
        .bind(repair.repair_date.clone())
        .bind(repair.description.clone())
        .bind(repair.repair_type.clone())
    }

    pub fn select_repair(r_id: i64) -> Statement {
        Statement::new(
            "SELECT rID, hotelID, roomNo, mCompany, repairDate, description, repairType
             FROM Repair WHERE rID = ?1",
        )
        .bind(r_id)
    }

    pub fn insert_booking(b_id: i64, booking: &NewBooking) -> Statement {
        Statement::new(
            "INSERT INTO Booking (bID, customer, hotelID, roomNo, bookingDate, noOfPeople, price)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(b_id)
        .bind(booking.customer_id)
        .bind(booking.room.hotel_id)
        .bind(booking.room.room_no)
        .bind(booking.booking_date.clone())
        .bind(booking.no_of_people)
        .bind(booking.price)
    }

    pub fn select_booking(b_id: i64) -> Statement {
        Statement::new(
            "SELECT bID, customer, hotelID, roomNo, bookingDate, noOfPeople, price
             FROM Booking WHERE bID = ?1",
        )
        .bind(b_id)
    }

    pub fn insert_assignment(asg_id: i64, assignment: &NewAssignment) -> Statement {
        Statement::new(
            "INSERT INTO Assigned (asgID, staffID, hotelID, roomNo) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(asg_id)
        .bind(assignment.staff_ssn)
        .bind(assignment.room.hotel_id)
        .bind(assignment.room.room_no)
    }

    pub fn select_assignment(asg_id: i64) -> Statement {
        Statement::new("SELECT asgID, staffID, hotelID, roomNo FROM Assigned WHERE asgID = ?1")
            .bind(asg_id)
    }

    pub fn insert_request(req_id: i64, request: &NewRepairRequest) -> Statement {
        Statement::new(
            "INSERT INTO Request (reqID, managerID, repairID, requestDate, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(req_id)
        .bind(request.manager_ssn)
        .bind(request.repair_id)
        .bind(request.request_date.clone())
        .bind(request.description.clone())
    }

    pub fn select_request(req_id: i64) -> Statement {
        Statement::new(
            "SELECT reqID, managerID, repairID, requestDate, description
             FROM Request WHERE reqID = ?1",
        )
        .bind(req_id)
    }
}
