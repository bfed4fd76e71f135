//! Report operations
//!
//! Inputs go through the same prompt loops as the create operations; the
//! query itself lives in `hotelops_store::reports`.

use crate::console::Console;
use crate::prompts;
use crate::session::Session;
use hotelops_core::render::render_table;
use hotelops_store::{ReportQuery, Result};

/// Run `report` and print its table, plus the empty-result line if it has one
fn run_report<C: Console>(session: &mut Session<C>, report: ReportQuery) -> Result<usize> {
    let result = session.client.query(&report.to_statement())?;
    session.console.print(&render_table(&result));
    if result.is_empty() {
        if let Some(message) = report.empty_message() {
            session.console.println(&message);
        }
    }
    Ok(result.row_count())
}

pub fn available_rooms<C: Console>(session: &mut Session<C>) -> Result<()> {
    let hotel_id = prompts::hotel_id(&mut session.console)?;
    let date = prompts::date(&mut session.console, "date")?;
    run_report(session, ReportQuery::AvailableRooms { hotel_id, date })?;
    Ok(())
}

pub fn booked_rooms<C: Console>(session: &mut Session<C>) -> Result<()> {
    let hotel_id = prompts::hotel_id(&mut session.console)?;
    let date = prompts::date(&mut session.console, "date")?;
    run_report(session, ReportQuery::BookedRooms { hotel_id, date })?;
    Ok(())
}

pub fn weekly_bookings<C: Console>(session: &mut Session<C>) -> Result<()> {
    let hotel_id = prompts::hotel_id(&mut session.console)?;
    let start = prompts::date(&mut session.console, "start date")?;
    run_report(session, ReportQuery::WeeklyBookings { hotel_id, start })?;
    Ok(())
}

pub fn top_room_prices<C: Console>(session: &mut Session<C>) -> Result<()> {
    let console = &mut session.console;
    let start = prompts::date(console, "start date")?;
    let end = prompts::date(console, "end date")?;
    let k = prompts::top_k(console)?;
    run_report(session, ReportQuery::TopRoomPrices { start, end, k })?;
    Ok(())
}

pub fn top_customer_bookings<C: Console>(session: &mut Session<C>) -> Result<()> {
    let customer = prompts::customer_name(&mut session.console)?;
    let k = prompts::top_k(&mut session.console)?;
    run_report(session, ReportQuery::TopCustomerBookings { customer, k })?;
    Ok(())
}

pub fn customer_total_cost<C: Console>(session: &mut Session<C>) -> Result<()> {
    let console = &mut session.console;
    let hotel_id = prompts::hotel_id(console)?;
    let customer = prompts::customer_name(console)?;
    let start = prompts::date(console, "start date")?;
    let end = prompts::date(console, "end date")?;
    run_report(
        session,
        ReportQuery::CustomerTotalCost {
            hotel_id,
            customer,
            start,
            end,
        },
    )?;
    Ok(())
}

pub fn company_repairs<C: Console>(session: &mut Session<C>) -> Result<()> {
    let company_name = prompts::text(&mut session.console, "maintenance company name")?;
    run_report(session, ReportQuery::CompanyRepairs { company_name })?;
    Ok(())
}

pub fn top_maintenance_companies<C: Console>(session: &mut Session<C>) -> Result<()> {
    let k = prompts::top_k(&mut session.console)?;
    run_report(session, ReportQuery::TopMaintenanceCompanies { k })?;
    Ok(())
}

pub fn repairs_per_year<C: Console>(session: &mut Session<C>) -> Result<()> {
    let room = prompts::room(&mut session.console)?;
    run_report(session, ReportQuery::RepairsPerYear { room })?;
    Ok(())
}
