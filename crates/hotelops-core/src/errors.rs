use hotelops_core_types::RequestId;
use thiserror::Error;

/// Result type alias using HotelOpsError
pub type Result<T> = std::result::Result<T, HotelOpsError>;

/// Failure classes the command loop distinguishes
///
/// `Connection` is fatal at startup and `InputClosed` ends the loop. Every
/// other kind is printed on the console and the menu comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    Connection,
    /// Input did not satisfy its field rule
    InvalidInput,
    /// A hotel, room, company, staff member, repair or customer is missing
    NotFound,
    /// Staff member exists but has the wrong role
    RoleDenied,
    /// Rejected by the store (constraint, syntax, lock)
    Statement,
    Migration,
    InputClosed,
    Io,
    Internal,
}

impl ExErrorKind {
    /// Stable `ERR_*` code, logged as `err_code`
    pub fn code(&self) -> &'static str {
        use ExErrorKind::*;
        match self {
            Connection => "ERR_CONNECTION",
            InvalidInput => "ERR_INVALID_INPUT",
            NotFound => "ERR_NOT_FOUND",
            RoleDenied => "ERR_ROLE_DENIED",
            Statement => "ERR_STATEMENT",
            Migration => "ERR_MIGRATION",
            InputClosed => "ERR_INPUT_CLOSED",
            Io => "ERR_IO",
            Internal => "ERR_INTERNAL",
        }
    }
}

/// Error value that crosses crate boundaries
///
/// `message` is what the operator sees; the remaining context only goes
/// to the log.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    message: String,
    op: Option<String>,
    entity: Option<&'static str>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            message: String::new(),
            op: None,
            entity: None,
            entity_id: None,
            request_id: None,
        }
    }

    /// Operation that was running when the error surfaced
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Table the error refers to
    pub fn with_entity(mut self, entity: &'static str) -> Self {
        self.entity = Some(entity);
        self
    }

    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    fn missing(entity: &'static str, id: impl ToString, message: String) -> Self {
        Self::new(ExErrorKind::NotFound)
            .with_entity(entity)
            .with_entity_id(id.to_string())
            .with_message(message)
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())?;
        if let Some(op) = &self.op {
            write!(f, " during {}", op)?;
        }
        if let (Some(entity), Some(id)) = (self.entity, &self.entity_id) {
            write!(f, " [{} {}]", entity, id)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

/// Domain failures raised by the command layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HotelOpsError {
    // referential integrity
    #[error("Hotel id: {hotel_id} not found")]
    HotelNotFound { hotel_id: i64 },

    #[error("Room {room_no} not found in hotel {hotel_id}")]
    RoomNotFound { hotel_id: i64, room_no: i64 },

    #[error("Company id: {cmp_id} not found")]
    CompanyNotFound { cmp_id: i64 },

    #[error("Staff with ssn: {ssn} not found")]
    StaffNotFound { ssn: i64 },

    #[error("Repair id: {repair_id} not found")]
    RepairNotFound { repair_id: i64 },

    #[error("Customer {first_name} {last_name} not found")]
    CustomerNotFound {
        first_name: String,
        last_name: String,
    },

    /// Staff member exists but does not hold the required role
    #[error("Only managers can raise a repair request (staff {ssn} is '{role}')")]
    RoleDenied {
        ssn: i64,
        role: String,
        required: String,
    },

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Input closed")]
    InputClosed,

    #[error("Console I/O failed: {message}")]
    Io { message: String },
}

impl From<HotelOpsError> for ExError {
    fn from(err: HotelOpsError) -> Self {
        let message = err.to_string();
        match err {
            HotelOpsError::HotelNotFound { hotel_id } => Self::missing("Hotel", hotel_id, message),
            HotelOpsError::RoomNotFound { hotel_id, room_no } => {
                Self::missing("Room", format!("{}/{}", hotel_id, room_no), message)
            }
            HotelOpsError::CompanyNotFound { cmp_id } => {
                Self::missing("MaintenanceCompany", cmp_id, message)
            }
            HotelOpsError::StaffNotFound { ssn } => Self::missing("Staff", ssn, message),
            HotelOpsError::RepairNotFound { repair_id } => {
                Self::missing("Repair", repair_id, message)
            }
            HotelOpsError::CustomerNotFound {
                first_name,
                last_name,
            } => Self::missing("Customer", format!("{} {}", first_name, last_name), message),
            HotelOpsError::RoleDenied { ssn, .. } => Self::new(ExErrorKind::RoleDenied)
                .with_entity("Staff")
                .with_entity_id(ssn.to_string())
                .with_message(message),
            HotelOpsError::InvalidInput { .. } => {
                Self::new(ExErrorKind::InvalidInput).with_message(message)
            }
            HotelOpsError::InputClosed => Self::new(ExErrorKind::InputClosed).with_message(message),
            HotelOpsError::Io { .. } => Self::new(ExErrorKind::Io).with_message(message),
        }
    }
}

impl From<std::io::Error> for HotelOpsError {
    fn from(err: std::io::Error) -> Self {
        HotelOpsError::Io {
            message: err.to_string(),
        }
    }
}
