//! Menu command inventory
//!
//! The numbered menu is a fixed list; `Command` is its typed form. The
//! engine maps every variant to a handler with an exhaustive match, so a
//! new menu entry cannot be added without a handler.

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    AddCustomer,
    AddRoom,
    AddMaintenanceCompany,
    AddRepair,
    AddBooking,
    AssignHouseCleaning,
    RaiseRepairRequest,
    AvailableRooms,
    BookedRooms,
    WeeklyBookings,
    TopRoomPrices,
    TopCustomerBookings,
    CustomerTotalCost,
    CompanyRepairs,
    TopMaintenanceCompanies,
    RepairsPerYear,
    Exit,
}

impl Command {
    /// All commands in menu order
    pub const ALL: [Command; 17] = [
        Command::AddCustomer,
        Command::AddRoom,
        Command::AddMaintenanceCompany,
        Command::AddRepair,
        Command::AddBooking,
        Command::AssignHouseCleaning,
        Command::RaiseRepairRequest,
        Command::AvailableRooms,
        Command::BookedRooms,
        Command::WeeklyBookings,
        Command::TopRoomPrices,
        Command::TopCustomerBookings,
        Command::CustomerTotalCost,
        Command::CompanyRepairs,
        Command::TopMaintenanceCompanies,
        Command::RepairsPerYear,
        Command::Exit,
    ];

    /// Menu number of this command (1-based)
    pub fn number(self) -> i64 {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .map(|idx| idx as i64 + 1)
            .unwrap_or_default()
    }

    /// Resolve a menu number; `None` for numbers outside the menu
    pub fn from_choice(choice: i64) -> Option<Command> {
        if choice < 1 {
            return None;
        }
        Self::ALL.get((choice - 1) as usize).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::AddCustomer => "Add new customer",
            Command::AddRoom => "Add new room",
            Command::AddMaintenanceCompany => "Add new maintenance company",
            Command::AddRepair => "Add new repair",
            Command::AddBooking => "Add new booking",
            Command::AssignHouseCleaning => "Assign house cleaning staff to a room",
            Command::RaiseRepairRequest => "Raise a repair request",
            Command::AvailableRooms => "Get number of available rooms",
            Command::BookedRooms => "Get number of booked rooms",
            Command::WeeklyBookings => "Get hotel bookings for a week",
            Command::TopRoomPrices => "Get top k rooms with highest price for a date range",
            Command::TopCustomerBookings => "Get top k highest booking price for a customer",
            Command::CustomerTotalCost => {
                "Get customer total cost occurred for a given date range"
            }
            Command::CompanyRepairs => "List the repairs made by maintenance company",
            Command::TopMaintenanceCompanies => {
                "Get top k maintenance companies based on repair count"
            }
            Command::RepairsPerYear => {
                "Get number of repairs occurred per year for a given hotel room"
            }
            Command::Exit => "< EXIT",
        }
    }

    /// Stable operation name used in log events
    pub fn op_name(self) -> &'static str {
        match self {
            Command::AddCustomer => "add_customer",
            Command::AddRoom => "add_room",
            Command::AddMaintenanceCompany => "add_maintenance_company",
            Command::AddRepair => "add_repair",
            Command::AddBooking => "add_booking",
            Command::AssignHouseCleaning => "assign_house_cleaning",
            Command::RaiseRepairRequest => "raise_repair_request",
            Command::AvailableRooms => "available_rooms",
            Command::BookedRooms => "booked_rooms",
            Command::WeeklyBookings => "weekly_bookings",
            Command::TopRoomPrices => "top_room_prices",
            Command::TopCustomerBookings => "top_customer_bookings",
            Command::CustomerTotalCost => "customer_total_cost",
            Command::CompanyRepairs => "company_repairs",
            Command::TopMaintenanceCompanies => "top_maintenance_companies",
            Command::RepairsPerYear => "repairs_per_year",
            Command::Exit => "exit",
        }
    }

    /// Render the numbered menu
    pub fn menu() -> String {
        let mut output = String::from("MAIN MENU\n---------\n");
        for command in Self::ALL {
            output.push_str(&format!("{}. {}\n", command.number(), command.label()));
        }
        output
    }
}
