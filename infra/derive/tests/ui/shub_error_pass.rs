use shub_derive::shub_error;
use std::borrow::Cow;

#[shub_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("disk gone")).context("Reading artifact")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading artifact): disk gone");

    let err: DemoError = "plain".into();
    assert_eq!(err.to_string(), "Internal error: plain");

    let err = Err::<(), _>(DemoError::from(format!("code {}", 7))).context("late").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (late): code 7");
}
