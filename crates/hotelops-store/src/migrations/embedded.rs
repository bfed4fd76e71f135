use sha2::{Digest, Sha256};

/// One compiled-in schema step
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

impl Migration {
    /// Lowercase hex SHA-256 of the SQL text
    pub fn checksum(&self) -> String {
        hex::encode(Sha256::digest(self.sql.as_bytes()))
    }
}

/// Applied in slice order
pub const MIGRATIONS: &[Migration] = &[Migration {
    id: "001_hotel_schema",
    sql: include_str!("../../migrations/001_hotel_schema.sql"),
}];
