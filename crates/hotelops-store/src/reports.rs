//! Read-only report queries
//!
//! Each report is one parameterized SELECT. The engine collects and
//! validates the inputs, builds a `ReportQuery` and renders whatever comes
//! back as a table.

use crate::statement::Statement;
use hotelops_core::model::{CustomerName, RoomRef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportQuery {
    /// Rooms at the hotel not booked on `date`
    AvailableRooms { hotel_id: i64, date: String },
    /// Distinct rooms at the hotel booked on `date`
    BookedRooms { hotel_id: i64, date: String },
    /// Bookings in the seven days starting at `start`
    WeeklyBookings { hotel_id: i64, start: String },
    /// Rooms ranked by their highest booking price within `[start, end]`
    TopRoomPrices { start: String, end: String, k: i64 },
    TopCustomerBookings { customer: CustomerName, k: i64 },
    /// Sum of booking prices; zero when nothing matches
    CustomerTotalCost {
        hotel_id: i64,
        customer: CustomerName,
        start: String,
        end: String,
    },
    CompanyRepairs { company_name: String },
    /// Companies ranked by repair count, companies without repairs included
    TopMaintenanceCompanies { k: i64 },
    RepairsPerYear { room: RoomRef },
}

impl ReportQuery {
    pub fn to_statement(&self) -> Statement {
        match self {
            ReportQuery::AvailableRooms { hotel_id, date } => Statement::new(
                "SELECT (SELECT COUNT(*) FROM Room WHERE hotelID = ?1)
                      - (SELECT COUNT(DISTINCT roomNo) FROM Booking
                         WHERE hotelID = ?1 AND bookingDate = ?2) AS available_rooms",
            )
            .bind(*hotel_id)
            .bind(date.clone()),

            ReportQuery::BookedRooms { hotel_id, date } => Statement::new(
                "SELECT COUNT(DISTINCT roomNo) AS booked_rooms FROM Booking
                 WHERE hotelID = ?1 AND bookingDate = ?2",
            )
            .bind(*hotel_id)
            .bind(date.clone()),

            ReportQuery::WeeklyBookings { hotel_id, start } => Statement::new(
                "SELECT roomNo, bookingDate FROM Booking
                 WHERE hotelID = ?1
                   AND bookingDate >= ?2
                   AND bookingDate < date(?2, '+7 days')
                 ORDER BY bookingDate, roomNo",
            )
            .bind(*hotel_id)
            .bind(start.clone()),

            ReportQuery::TopRoomPrices { start, end, k } => Statement::new(
                "SELECT R.hotelID, R.roomNo, MAX(B.price) AS max_price
                 FROM Room R
                 JOIN Booking B ON R.hotelID = B.hotelID AND R.roomNo = B.roomNo
                 WHERE B.bookingDate >= ?1 AND B.bookingDate <= ?2
                 GROUP BY R.hotelID, R.roomNo
                 ORDER BY max_price DESC
                 LIMIT ?3",
            )
            .bind(start.clone())
            .bind(end.clone())
            .bind(*k),

            ReportQuery::TopCustomerBookings { customer, k } => Statement::new(
                "SELECT B.hotelID, B.roomNo, B.bookingDate, B.price
                 FROM Booking B
                 JOIN Customer C ON B.customer = C.customerID
                 WHERE C.fName = ?1 AND C.lName = ?2
                 ORDER BY B.price DESC
                 LIMIT ?3",
            )
            .bind(customer.first.clone())
            .bind(customer.last.clone())
            .bind(*k),

            ReportQuery::CustomerTotalCost {
                hotel_id,
                customer,
                start,
                end,
            } => Statement::new(
                "SELECT COALESCE(SUM(B.price), 0) AS total_cost
                 FROM Booking B
                 JOIN Customer C ON B.customer = C.customerID
                 WHERE B.hotelID = ?1
                   AND C.fName = ?2 AND C.lName = ?3
                   AND B.bookingDate >= ?4 AND B.bookingDate <= ?5",
            )
            .bind(*hotel_id)
            .bind(customer.first.clone())
            .bind(customer.last.clone())
            .bind(start.clone())
            .bind(end.clone()),

            ReportQuery::CompanyRepairs { company_name } => Statement::new(
                "SELECT R.rID, R.repairType, R.hotelID, R.roomNo, R.repairDate
                 FROM Repair R
                 JOIN MaintenanceCompany M ON R.mCompany = M.cmpID
                 WHERE M.name = ?1
                 ORDER BY R.rID",
            )
            .bind(company_name.clone()),

            ReportQuery::TopMaintenanceCompanies { k } => Statement::new(
                "SELECT M.name, COUNT(R.rID) AS repair_count
                 FROM MaintenanceCompany M
                 LEFT JOIN Repair R ON M.cmpID = R.mCompany
                 GROUP BY M.cmpID, M.name
                 ORDER BY repair_count DESC
                 LIMIT ?1",
            )
            .bind(*k),

            ReportQuery::RepairsPerYear { room } => Statement::new(
                "SELECT strftime('%Y', repairDate) AS repair_year, COUNT(rID) AS repair_count
                 FROM Repair
                 WHERE hotelID = ?1 AND roomNo = ?2
                 GROUP BY repair_year
                 ORDER BY repair_year",
            )
            .bind(room.hotel_id)
            .bind(room.room_no),
        }
    }

    /// Line printed instead of an empty table, for list-shaped reports
    pub fn empty_message(&self) -> Option<String> {
        match self {
            ReportQuery::AvailableRooms { .. }
            | ReportQuery::BookedRooms { .. }
            | ReportQuery::CustomerTotalCost { .. } => None,
            ReportQuery::WeeklyBookings { hotel_id, start } => Some(format!(
                "No rooms booked for hotel {} for the week starting {}",
                hotel_id, start
            )),
            ReportQuery::TopRoomPrices { .. } => {
                Some("No rooms found in the given date range.".to_string())
            }
            ReportQuery::TopCustomerBookings { customer, .. } => {
                Some(format!("No bookings found for customer: {}", customer))
            }
            ReportQuery::CompanyRepairs { company_name } => Some(format!(
                "No repairs found for maintenance company: {}",
                company_name
            )),
            ReportQuery::TopMaintenanceCompanies { .. } => {
                Some("No maintenance companies found.".to_string())
            }
            ReportQuery::RepairsPerYear { room } => Some(format!(
                "No repairs found for room {} at hotel {}",
                room.room_no, room.hotel_id
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_text_is_bound_not_inlined() {
        let query = ReportQuery::CompanyRepairs {
            company_name: "x' OR '1'='1".to_string(),
        };
        let statement = query.to_statement();
        assert!(!statement.sql().contains("OR '1'='1"));
        assert_eq!(statement.params().len(), 1);
    }

    #[test]
    fn test_scalar_reports_have_no_empty_message() {
        let query = ReportQuery::BookedRooms {
            hotel_id: 1,
            date: "2024-03-01".to_string(),
        };
        assert_eq!(query.empty_message(), None);
    }
}
