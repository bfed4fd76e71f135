//! Create operations
//!
//! Every operation collects its fields in order, checks each reference as
//! soon as it has been entered, writes one row and shows it back. Rows with
//! a surrogate key go through `claim_and_insert`, so allocation and insert
//! commit together or not at all.

use crate::console::Console;
use crate::prompts;
use crate::session::Session;
use hotelops_core::errors::{ExError, HotelOpsError};
use hotelops_core::model::{
    Customer, CustomerName, MaintenanceCompany, NewAssignment, NewBooking, NewRepair,
    NewRepairRequest, Room, RoomRef,
};
use hotelops_store::integrity::{self, Reference};
use hotelops_store::{Result, SqliteRepo, SurrogateKey};

pub fn add_customer<C: Console>(session: &mut Session<C>) -> Result<()> {
    add_customer_named(session, None).map(|_| ())
}

/// Create a customer; when `name` is given its first/last name are not asked again
///
/// Returns the new customer id.
pub fn add_customer_named<C: Console>(
    session: &mut Session<C>,
    name: Option<CustomerName>,
) -> Result<i64> {
    let console = &mut session.console;
    let customer_id = prompts::numeric(console, "customer id")?;
    let name = match name {
        Some(name) => name,
        None => {
            let first = prompts::text(console, "first name")?;
            let last = prompts::text(console, "last name")?;
            CustomerName::new(first, last)
        }
    };
    let address = prompts::text(console, "address")?;
    let phone = prompts::digit_string(console, "phone number")?;
    let dob = prompts::date(console, "date of birth")?;
    let gender = prompts::gender(console)?;

    let customer = Customer {
        customer_id,
        name,
        address,
        phone,
        dob,
        gender,
    };
    session.client.execute(&SqliteRepo::insert_customer(&customer))?;

    session.console.println("Added customer");
    session.show(&SqliteRepo::select_customer(customer_id))?;
    Ok(customer_id)
}

pub fn add_room<C: Console>(session: &mut Session<C>) -> Result<()> {
    let hotel_id = prompts::hotel_id(&mut session.console)?;
    integrity::require(&session.client, Reference::Hotel(hotel_id))?;

    let room_no = prompts::room_no(&mut session.console)?;
    let room_type = prompts::text(&mut session.console, "room type")?;

    let room = Room {
        room: RoomRef::new(hotel_id, room_no),
        room_type,
    };
    session.client.execute(&SqliteRepo::insert_room(&room))?;

    session.console.println("Added room");
    session.show(&SqliteRepo::select_room(room.room))?;
    Ok(())
}

pub fn add_maintenance_company<C: Console>(session: &mut Session<C>) -> Result<()> {
    let console = &mut session.console;
    let cmp_id = prompts::numeric(console, "company id")?;
    let name = prompts::text(console, "company name")?;
    let address = prompts::text(console, "address")?;
    let is_certified = prompts::certified(console)?;

    let company = MaintenanceCompany {
        cmp_id,
        name,
        address,
        is_certified,
    };
    session.client.execute(&SqliteRepo::insert_company(&company))?;

    session.console.println("Added maintenance company");
    session.show(&SqliteRepo::select_company(cmp_id))?;
    Ok(())
}

/// Prompt for the hotel, then the room, checking each as it is entered
fn existing_room<C: Console>(session: &mut Session<C>) -> Result<RoomRef> {
    let hotel_id = prompts::hotel_id(&mut session.console)?;
    integrity::require(&session.client, Reference::Hotel(hotel_id))?;

    let room_no = prompts::room_no(&mut session.console)?;
    let room = RoomRef::new(hotel_id, room_no);
    integrity::require(&session.client, Reference::Room(room))?;
    Ok(room)
}

pub fn add_repair<C: Console>(session: &mut Session<C>) -> Result<()> {
    let room = existing_room(session)?;

    let company_id = prompts::numeric(&mut session.console, "maintenance company id")?;
    integrity::require(&session.client, Reference::Company(company_id))?;

    let console = &mut session.console;
    let repair_date = prompts::date(console, "repair date")?;
    let description = prompts::optional_text(console, "repair description")?;
    let repair_type = prompts::text(console, "repair type")?;

    let repair = NewRepair {
        room,
        company_id,
        repair_date,
        description,
        repair_type,
    };
    let r_id = session
        .client
        .claim_and_insert(SurrogateKey::Repair, |id| SqliteRepo::insert_repair(id, &repair))?;

    session.console.println("Added repair");
    session.show(&SqliteRepo::select_repair(r_id))?;
    Ok(())
}

/// Customer id for `name`, creating the customer first when nobody has that name
fn find_or_create_customer<C: Console>(
    session: &mut Session<C>,
    name: &CustomerName,
) -> Result<i64> {
    if let Some(id) = SqliteRepo::find_customer_id(&session.client, name)? {
        return Ok(id);
    }

    session
        .console
        .println("Customer not found. Adding new customer");
    add_customer_named(session, Some(name.clone()))?;

    SqliteRepo::find_customer_id(&session.client, name)?.ok_or_else(|| {
        ExError::from(HotelOpsError::CustomerNotFound {
            first_name: name.first.clone(),
            last_name: name.last.clone(),
        })
    })
}

pub fn add_booking<C: Console>(session: &mut Session<C>) -> Result<()> {
    let room = existing_room(session)?;

    let name = prompts::customer_name(&mut session.console)?;
    let customer_id = find_or_create_customer(session, &name)?;

    let console = &mut session.console;
    let booking_date = prompts::date(console, "booking date")?;
    let no_of_people = prompts::numeric(console, "number of people")?;
    let price = prompts::numeric(console, "price")?;

    let booking = NewBooking {
        customer_id,
        room,
        booking_date,
        no_of_people,
        price,
    };
    let b_id = session
        .client
        .claim_and_insert(SurrogateKey::Booking, |id| SqliteRepo::insert_booking(id, &booking))?;

    session.console.println("Added booking");
    session.show(&SqliteRepo::select_booking(b_id))?;
    Ok(())
}

pub fn assign_house_cleaning<C: Console>(session: &mut Session<C>) -> Result<()> {
    let hotel_id = prompts::hotel_id(&mut session.console)?;
    integrity::require(&session.client, Reference::Hotel(hotel_id))?;

    let staff_ssn = prompts::numeric(&mut session.console, "staff SSN")?;
    integrity::require(&session.client, Reference::Staff(staff_ssn))?;

    let room_no = prompts::room_no(&mut session.console)?;
    let room = RoomRef::new(hotel_id, room_no);
    integrity::require(&session.client, Reference::Room(room))?;

    let assignment = NewAssignment { staff_ssn, room };
    let asg_id = session
        .client
        .claim_and_insert(SurrogateKey::Assignment, |id| {
            SqliteRepo::insert_assignment(id, &assignment)
        })?;

    session.console.println("Added house cleaning assignment");
    session.show(&SqliteRepo::select_assignment(asg_id))?;
    Ok(())
}

pub fn raise_repair_request<C: Console>(session: &mut Session<C>) -> Result<()> {
    let hotel_id = prompts::hotel_id(&mut session.console)?;
    integrity::require(&session.client, Reference::Hotel(hotel_id))?;

    let manager_ssn = prompts::numeric(&mut session.console, "staff SSN")?;
    integrity::require_manager(&session.client, manager_ssn)?;

    let room_no = prompts::room_no(&mut session.console)?;
    integrity::require(
        &session.client,
        Reference::Room(RoomRef::new(hotel_id, room_no)),
    )?;

    let repair_id = prompts::numeric(&mut session.console, "repair id")?;
    integrity::require(&session.client, Reference::Repair(repair_id))?;

    let console = &mut session.console;
    let request_date = prompts::date(console, "request date")?;
    let description = prompts::optional_text(console, "description")?;

    let request = NewRepairRequest {
        manager_ssn,
        repair_id,
        request_date,
        description,
    };
    let req_id = session
        .client
        .claim_and_insert(SurrogateKey::Request, |id| {
            SqliteRepo::insert_request(id, &request)
        })?;

    session.console.println("Added repair request");
    session.show(&SqliteRepo::select_request(req_id))?;
    Ok(())
}
