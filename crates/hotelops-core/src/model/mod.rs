pub mod entities;
pub mod query_result;

pub use entities::{
    Customer, CustomerName, Gender, MaintenanceCompany, NewAssignment, NewBooking, NewRepair,
    NewRepairRequest, Room, RoomRef, MANAGER_ROLE,
};
pub use query_result::QueryResult;
