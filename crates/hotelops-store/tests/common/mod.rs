#![allow(dead_code)]

use hotelops_store::Client;

/// In-memory store with one hotel, two rooms, staff of both roles and
/// one maintenance company
pub fn seeded_client() -> Client {
    let client = Client::in_memory().expect("in-memory store");
    client
        .connection()
        .execute_batch(
            "INSERT INTO Hotel (hotelID, hotelName, address) VALUES (1, 'Harbour', 'Quay 1');
             INSERT INTO Hotel (hotelID, hotelName, address) VALUES (2, 'Summit', 'Hill 2');
             INSERT INTO Room (hotelID, roomNo, roomType) VALUES (1, 101, 'Standard');
             INSERT INTO Room (hotelID, roomNo, roomType) VALUES (1, 102, 'Suite');
             INSERT INTO Room (hotelID, roomNo, roomType) VALUES (2, 201, 'Standard');
             INSERT INTO Staff (SSN, fName, lName, role, employerID)
                VALUES (500, 'Grace', 'Hopper', 'Manager', 1);
             INSERT INTO Staff (SSN, fName, lName, role, employerID)
                VALUES (600, 'Alan', 'Turing', 'HouseCleaning', 1);
             INSERT INTO MaintenanceCompany (cmpID, name, address, isCertified)
                VALUES (7, 'FixIt', 'Dock St', 1);",
        )
        .expect("fixture rows");
    client
}

pub fn count(client: &Client, table: &str) -> i64 {
    client
        .connection()
        .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })
        .expect("count")
}
