//! Prompt loops
//!
//! Each prompt prints its question, reads a line and runs the matching
//! parser from `hotelops_core::rules`. A line that does not parse is not
//! an error: the operator is asked again until the line fits. Only the
//! end of input escapes the loop.

use crate::console::Console;
use hotelops_core::model::{CustomerName, Gender, RoomRef};
use hotelops_core::rules;
use hotelops_store::Result;

const DATE_RETRY: &str = "Date format YYYY-MM-DD, please enter again: ";

fn ask_until<C, T, F>(console: &mut C, prompt: &str, retry: &str, parse: F) -> Result<T>
where
    C: Console + ?Sized,
    F: Fn(&str) -> hotelops_core::Result<T>,
{
    console.print(prompt);
    loop {
        let line = console.read_line()?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::debug!(reason = %err, "input rejected");
                console.print(retry);
            }
        }
    }
}

/// Menu selection; any integer is accepted here, mapping happens later
pub fn choice<C: Console + ?Sized>(console: &mut C) -> Result<i64> {
    ask_until(
        console,
        "Please make your choice: ",
        "Your input is invalid!\nPlease make your choice: ",
        rules::parse_choice,
    )
}

/// Digits-only identifier or count
pub fn numeric<C: Console + ?Sized>(console: &mut C, what: &str) -> Result<i64> {
    ask_until(
        console,
        &format!("Enter {}: ", what),
        &format!("Enter {} (only number): ", what),
        |line| rules::parse_numeric(what, line),
    )
}

/// Digits kept as text, for phone numbers
pub fn digit_string<C: Console + ?Sized>(console: &mut C, what: &str) -> Result<String> {
    ask_until(
        console,
        &format!("Enter {}: ", what),
        &format!("Enter {} (only number): ", what),
        |line| rules::parse_digit_string(what, line),
    )
}

pub fn date<C: Console + ?Sized>(console: &mut C, what: &str) -> Result<String> {
    ask_until(
        console,
        &format!("Enter {} (YYYY-MM-DD): ", what),
        DATE_RETRY,
        |line| rules::parse_date(what, line),
    )
}

/// Free text, trimmed; anything goes
pub fn text<C: Console + ?Sized>(console: &mut C, what: &str) -> Result<String> {
    console.print(&format!("Enter {}: ", what));
    Ok(rules::parse_optional_text(&console.read_line()?))
}

/// Free text that may be skipped; skipping stores an empty string
pub fn optional_text<C: Console + ?Sized>(console: &mut C, what: &str) -> Result<String> {
    console.print(&format!("Enter {} (press ENTER to skip): ", what));
    Ok(rules::parse_optional_text(&console.read_line()?))
}

pub fn gender<C: Console + ?Sized>(console: &mut C) -> Result<Gender> {
    console.print("Enter gender (M/F/Other): ");
    Ok(rules::parse_gender(&console.read_line()?))
}

pub fn certified<C: Console + ?Sized>(console: &mut C) -> Result<bool> {
    ask_until(
        console,
        "Is the company certified? (y/n): ",
        "Please answer y or n: ",
        rules::parse_certified,
    )
}

pub fn customer_name<C: Console + ?Sized>(console: &mut C) -> Result<CustomerName> {
    let first = text(console, "customer first name")?;
    let last = text(console, "customer last name")?;
    Ok(CustomerName::new(first, last))
}

pub fn hotel_id<C: Console + ?Sized>(console: &mut C) -> Result<i64> {
    numeric(console, "hotel id")
}

pub fn room_no<C: Console + ?Sized>(console: &mut C) -> Result<i64> {
    numeric(console, "room number")
}

/// Hotel id then room number, with no check in between
pub fn room<C: Console + ?Sized>(console: &mut C) -> Result<RoomRef> {
    let hotel_id = hotel_id(console)?;
    let room_no = room_no(console)?;
    Ok(RoomRef::new(hotel_id, room_no))
}

pub fn top_k<C: Console + ?Sized>(console: &mut C) -> Result<i64> {
    numeric(console, "K")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use hotelops_core::ExErrorKind;

    #[test]
    fn test_numeric_reprompts_until_digits() {
        let mut console = ScriptedConsole::new(["abc", "-4", " 12 "]);
        assert_eq!(numeric(&mut console, "hotel id").unwrap(), 12);
        assert_eq!(
            console.output(),
            "Enter hotel id: abc\nEnter hotel id (only number): -4\nEnter hotel id (only number):  12 \n"
        );
    }

    #[test]
    fn test_date_reprompts_on_short_month() {
        let mut console = ScriptedConsole::new(["2024-1-05", "2024-01-05"]);
        assert_eq!(date(&mut console, "booking date").unwrap(), "2024-01-05");
        assert!(console.output().contains(DATE_RETRY));
    }

    #[test]
    fn test_choice_reports_invalid_input() {
        let mut console = ScriptedConsole::new(["nine", "9"]);
        assert_eq!(choice(&mut console).unwrap(), 9);
        assert!(console.output().contains("Your input is invalid!"));
    }

    #[test]
    fn test_certified_is_case_insensitive() {
        let mut console = ScriptedConsole::new(["maybe", "Y"]);
        assert!(certified(&mut console).unwrap());
    }

    #[test]
    fn test_optional_text_accepts_empty() {
        let mut console = ScriptedConsole::new([""]);
        assert_eq!(optional_text(&mut console, "description").unwrap(), "");
    }

    #[test]
    fn test_gender_falls_back_to_other() {
        let mut console = ScriptedConsole::new(["m"]);
        assert_eq!(gender(&mut console).unwrap(), Gender::Other);
    }

    #[test]
    fn test_end_of_input_escapes_the_loop() {
        let mut console = ScriptedConsole::new(["x", "y"]);
        let err = numeric(&mut console, "price").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InputClosed);
    }
}
