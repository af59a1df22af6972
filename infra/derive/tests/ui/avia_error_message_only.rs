use avia_derive::avia_error;
use std::borrow::Cow;

#[avia_error]
pub enum SeatError {
    #[error("No seats left on {flight}{}", format_context(.context))]
    Full { flight: String, context: Option<Cow<'static, str>> },

    #[error("Unknown seat {row}")]
    Unknown { row: u32 },
}

fn main() {
    let full: Result<(), SeatError> = Err(SeatError::Full { flight: "AB123".to_owned(), context: None });
    let err = full.context("Boarding").unwrap_err();
    assert_eq!(err.to_string(), "No seats left on AB123 (Boarding)");

    let unknown: Result<(), SeatError> = Err(SeatError::Unknown { row: 4 });
    assert_eq!(unknown.context("ignored").unwrap_err().to_string(), "Unknown seat 4");
}
