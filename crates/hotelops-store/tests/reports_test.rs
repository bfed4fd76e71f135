// Integration tests for report queries

mod common;

use common::seeded_client;
use hotelops_core::model::{CustomerName, RoomRef};
use hotelops_store::{Client, ReportQuery};

fn seed_bookings(client: &Client) {
    client
        .connection()
        .execute_batch(
            "INSERT INTO Customer (customerID, fName, lName, address, phno, DOB, gender)
                VALUES (1, 'Ada', 'Lovelace', '', '555', '1815-12-10', 'Female');
             INSERT INTO Customer (customerID, fName, lName, address, phno, DOB, gender)
                VALUES (2, 'Charles', 'Babbage', '', '556', '1791-12-26', 'Male');
             INSERT INTO Booking (bID, customer, hotelID, roomNo, bookingDate, noOfPeople, price)
                VALUES (1, 1, 1, 101, '2024-03-01', 2, 150);
             INSERT INTO Booking (bID, customer, hotelID, roomNo, bookingDate, noOfPeople, price)
                VALUES (2, 2, 1, 101, '2024-03-01', 1, 90);
             INSERT INTO Booking (bID, customer, hotelID, roomNo, bookingDate, noOfPeople, price)
                VALUES (3, 1, 1, 102, '2024-03-07', 2, 300);
             INSERT INTO Booking (bID, customer, hotelID, roomNo, bookingDate, noOfPeople, price)
                VALUES (4, 1, 1, 102, '2024-03-08', 2, 200);
             INSERT INTO Booking (bID, customer, hotelID, roomNo, bookingDate, noOfPeople, price)
                VALUES (5, 1, 2, 201, '2024-03-02', 2, 120);",
        )
        .unwrap();
}

fn run(client: &Client, report: ReportQuery) -> hotelops_core::QueryResult {
    client.query(&report.to_statement()).unwrap()
}

#[test]
fn test_available_and_booked_rooms_count_distinct_rooms() {
    let client = seeded_client();
    seed_bookings(&client);

    // Two bookings for room 101 on the same day still occupy one room
    let booked = run(
        &client,
        ReportQuery::BookedRooms {
            hotel_id: 1,
            date: "2024-03-01".to_string(),
        },
    );
    assert_eq!(booked.columns, vec!["booked_rooms"]);
    assert_eq!(booked.scalar(), Some("1"));

    let available = run(
        &client,
        ReportQuery::AvailableRooms {
            hotel_id: 1,
            date: "2024-03-01".to_string(),
        },
    );
    assert_eq!(available.columns, vec!["available_rooms"]);
    assert_eq!(available.scalar(), Some("1"));
}

#[test]
fn test_weekly_bookings_exclude_the_eighth_day() {
    let client = seeded_client();
    seed_bookings(&client);

    let week = run(
        &client,
        ReportQuery::WeeklyBookings {
            hotel_id: 1,
            start: "2024-03-01".to_string(),
        },
    );
    assert_eq!(week.columns, vec!["roomNo", "bookingDate"]);
    let dates: Vec<_> = week.rows.iter().map(|r| r[1].clone().unwrap()).collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-03-01", "2024-03-07"]);
}

#[test]
fn test_top_room_prices_use_max_per_room_and_limit() {
    let client = seeded_client();
    seed_bookings(&client);

    let top = run(
        &client,
        ReportQuery::TopRoomPrices {
            start: "2024-03-01".to_string(),
            end: "2024-03-08".to_string(),
            k: 2,
        },
    );
    assert_eq!(top.row_count(), 2);
    assert_eq!(top.rows[0][1].as_deref(), Some("102"));
    assert_eq!(top.rows[0][2].as_deref(), Some("300"));
    assert_eq!(top.rows[1][1].as_deref(), Some("101"));
    assert_eq!(top.rows[1][2].as_deref(), Some("150"));
}

#[test]
fn test_top_customer_bookings() {
    let client = seeded_client();
    seed_bookings(&client);

    let top = run(
        &client,
        ReportQuery::TopCustomerBookings {
            customer: CustomerName::new("Ada", "Lovelace"),
            k: 3,
        },
    );
    let prices: Vec<_> = top.rows.iter().map(|r| r[3].clone().unwrap()).collect();
    assert_eq!(prices, vec!["300", "200", "150"]);
}

#[test]
fn test_total_cost_is_zero_without_bookings() {
    let client = seeded_client();
    seed_bookings(&client);

    let total = run(
        &client,
        ReportQuery::CustomerTotalCost {
            hotel_id: 1,
            customer: CustomerName::new("Ada", "Lovelace"),
            start: "2024-03-01".to_string(),
            end: "2024-03-07".to_string(),
        },
    );
    assert_eq!(total.scalar(), Some("450"));

    let none = run(
        &client,
        ReportQuery::CustomerTotalCost {
            hotel_id: 1,
            customer: CustomerName::new("Nobody", "Here"),
            start: "2024-03-01".to_string(),
            end: "2024-03-07".to_string(),
        },
    );
    assert_eq!(none.scalar(), Some("0"));
}

#[test]
fn test_top_companies_with_tied_counts() {
    let client = seeded_client();
    let mut sql = String::from(
        "INSERT INTO MaintenanceCompany (cmpID, name, address, isCertified) VALUES (1, 'A', '', 1);
         INSERT INTO MaintenanceCompany (cmpID, name, address, isCertified) VALUES (2, 'B', '', 0);
         INSERT INTO MaintenanceCompany (cmpID, name, address, isCertified) VALUES (3, 'C', '', 1);",
    );
    let mut r_id = 0;
    for (cmp_id, repairs) in [(1, 5), (2, 3), (3, 3)] {
        for _ in 0..repairs {
            r_id += 1;
            sql.push_str(&format!(
                "INSERT INTO Repair (rID, hotelID, roomNo, mCompany, repairDate, repairType)
                 VALUES ({}, 1, 101, {}, '2024-01-01', 'paint');",
                r_id, cmp_id
            ));
        }
    }
    client.connection().execute_batch(&sql).unwrap();

    let top = run(&client, ReportQuery::TopMaintenanceCompanies { k: 3 });
    let names: Vec<_> = top.rows.iter().map(|r| r[0].clone().unwrap()).collect();
    assert_eq!(names[0], "A");
    assert!(names.contains(&"B".to_string()));
    assert!(names.contains(&"C".to_string()));

    let top_two = run(&client, ReportQuery::TopMaintenanceCompanies { k: 2 });
    assert_eq!(top_two.row_count(), 2);
    assert_eq!(top_two.rows[0][0].as_deref(), Some("A"));
}

#[test]
fn test_companies_without_repairs_are_listed() {
    let client = seeded_client();
    let top = run(&client, ReportQuery::TopMaintenanceCompanies { k: 5 });
    assert_eq!(top.columns, vec!["name", "repair_count"]);
    assert_eq!(top.rows, vec![vec![Some("FixIt".to_string()), Some("0".to_string())]]);
}

#[test]
fn test_company_repairs_and_repairs_per_year() {
    let client = seeded_client();
    client
        .connection()
        .execute_batch(
            "INSERT INTO Repair (rID, hotelID, roomNo, mCompany, repairDate, repairType)
                VALUES (1, 1, 101, 7, '2022-05-01', 'paint');
             INSERT INTO Repair (rID, hotelID, roomNo, mCompany, repairDate, repairType)
                VALUES (2, 1, 101, 7, '2023-02-01', 'plumbing');
             INSERT INTO Repair (rID, hotelID, roomNo, mCompany, repairDate, repairType)
                VALUES (3, 1, 101, 7, '2023-09-01', 'wiring');",
        )
        .unwrap();

    let repairs = run(
        &client,
        ReportQuery::CompanyRepairs {
            company_name: "FixIt".to_string(),
        },
    );
    assert_eq!(
        repairs.columns,
        vec!["rID", "repairType", "hotelID", "roomNo", "repairDate"]
    );
    assert_eq!(repairs.row_count(), 3);

    let per_year = run(
        &client,
        ReportQuery::RepairsPerYear {
            room: RoomRef::new(1, 101),
        },
    );
    assert_eq!(
        per_year.rows,
        vec![
            vec![Some("2022".to_string()), Some("1".to_string())],
            vec![Some("2023".to_string()), Some("2".to_string())],
        ]
    );
}
