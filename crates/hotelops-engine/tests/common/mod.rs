#![allow(dead_code)]

use hotelops_engine::{ScriptedConsole, Session};
use hotelops_store::Client;

/// Two hotels, three rooms, a manager, a cleaner and one maintenance company
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

pub fn session<I, S>(lines: I) -> Session<ScriptedConsole>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Session::new(seeded_client(), ScriptedConsole::new(lines))
}

pub fn count(client: &Client, table: &str) -> i64 {
    client
        .connection()
        .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })
        .expect("count")
}

/// The line right below `header` in the console output, trailing padding removed
pub fn value_below(output: &str, header: &str) -> Option<String> {
    let mut lines = output.lines();
    lines.find(|line| line.trim_end() == header)?;
    lines.next().map(|line| line.trim_end().to_string())
}
