//! Command dispatch
//!
//! The loop has two states. `MenuWait` shows the menu and runs one
//! command; every command except Exit comes back to `MenuWait`. Exit, or
//! the console running out of input, moves to `Terminated`.

use crate::commands::{create, reports};
use crate::console::Console;
use crate::prompts;
use crate::session::Session;
use hotelops_core::{log_op_end, log_op_error, log_op_start, Command, ExErrorKind};
use hotelops_core_types::RequestId;
use hotelops_store::Result;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    MenuWait,
    Terminated,
}

/// A domain operation
pub type Handler<C> = fn(&mut Session<C>) -> Result<()>;

/// Handler for `command`; Exit has none
pub fn handler_for<C: Console>(command: Command) -> Option<Handler<C>> {
    let handler: Handler<C> = match command {
        Command::AddCustomer => create::add_customer,
        Command::AddRoom => create::add_room,
        Command::AddMaintenanceCompany => create::add_maintenance_company,
        Command::AddRepair => create::add_repair,
        Command::AddBooking => create::add_booking,
        Command::AssignHouseCleaning => create::assign_house_cleaning,
        Command::RaiseRepairRequest => create::raise_repair_request,
        Command::AvailableRooms => reports::available_rooms,
        Command::BookedRooms => reports::booked_rooms,
        Command::WeeklyBookings => reports::weekly_bookings,
        Command::TopRoomPrices => reports::top_room_prices,
        Command::TopCustomerBookings => reports::top_customer_bookings,
        Command::CustomerTotalCost => reports::customer_total_cost,
        Command::CompanyRepairs => reports::company_repairs,
        Command::TopMaintenanceCompanies => reports::top_maintenance_companies,
        Command::RepairsPerYear => reports::repairs_per_year,
        Command::Exit => return None,
    };
    Some(handler)
}

/// Run one command and decide where the loop goes next
///
/// Operation failures are reported on the console and the loop carries
/// on. Running out of input ends it.
pub fn execute<C: Console>(session: &mut Session<C>, command: Command) -> LoopState {
    let Some(handler) = handler_for::<C>(command) else {
        return LoopState::Terminated;
    };

    let op = command.op_name();
    let request_id = RequestId::new();
    let start = Instant::now();
    log_op_start!(op, request_id = %request_id);

    match handler(session) {
        Ok(()) => {
            log_op_end!(
                op,
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %request_id
            );
            LoopState::MenuWait
        }
        Err(err) => {
            let err = err.with_op(op).with_request_id(request_id.clone());
            log_op_error!(
                op,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %request_id
            );
            if err.kind() == ExErrorKind::InputClosed {
                return LoopState::Terminated;
            }
            session.console.eprintln(err.message());
            LoopState::MenuWait
        }
    }
}

/// Show the menu, read a choice and run it
pub fn step<C: Console>(session: &mut Session<C>) -> LoopState {
    session.console.print(&Command::menu());

    let choice = match prompts::choice(&mut session.console) {
        Ok(choice) => choice,
        Err(err) if err.kind() == ExErrorKind::InputClosed => return LoopState::Terminated,
        Err(err) => {
            tracing::warn!(err_code = err.code(), "menu read failed");
            session.console.eprintln(err.message());
            return LoopState::MenuWait;
        }
    };

    match Command::from_choice(choice) {
        Some(command) => execute(session, command),
        None => {
            session.console.println("Unrecognized choice!");
            LoopState::MenuWait
        }
    }
}

/// Drive the menu until Exit or end of input
pub fn run<C: Console>(session: &mut Session<C>) {
    while step(session) == LoopState::MenuWait {}
}
