//! Operation logging macros
//!
//! A dispatched command emits `start`, then exactly one of `end` or
//! `end_error`. Each event carries `component`, `op` and `event`; extra
//! `key = value` fields are passed straight through to `tracing`.
//!
//! Callers must depend on `hotelops-core-types` and `tracing`.

#[doc(hidden)]
#[macro_export]
macro_rules! __op_event {
    ($level:ident, $op:expr, $event:ident $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = hotelops_core_types::schema::$event
            $(, $($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use hotelops_core::log_op_start;
/// log_op_start!("add_room");
/// log_op_start!("add_room", hotel_id = 1);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(info, $op, EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of an operation; `duration_ms` is required
///
/// ```
/// # use hotelops_core::log_op_end;
/// log_op_end!("add_room", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(info, $op, EVENT_END, duration_ms = $duration $(, $($field)*)?)
    };
}

/// Log a failed operation
///
/// `$err` is anything convertible into `ExError`; its kind and code are
/// added to the event.
///
/// ```
/// # use hotelops_core::{log_op_error, errors::HotelOpsError};
/// let err = HotelOpsError::HotelNotFound { hotel_id: 9 };
/// log_op_error!("add_room", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = ::core::convert::Into::into($err);
        $crate::__op_event!(
            error,
            $op,
            EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
