use avia_derive::avia_error;
use std::borrow::Cow;

#[avia_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("boom")).context("Reading demo file")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading demo file): boom");

    let internal: DemoError = "broken".into();
    assert_eq!(internal.to_string(), "Internal error: broken");
}
