pub mod validation;

pub use validation::{
    parse_certified, parse_choice, parse_date, parse_digit_string, parse_gender, parse_numeric,
    parse_optional_text,
};
