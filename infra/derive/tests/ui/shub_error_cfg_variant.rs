use std::borrow::Cow;

#[shub_derive::shub_error]
pub enum GatedError {
    #[cfg(any())]
    #[error("Never compiled{}: {source}", format_context(.context))]
    Never { source: std::fmt::Error, context: Option<Cow<'static, str>> },

    #[error("Validation failed{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = GatedError::Validation { message: "empty".into(), context: None };
    assert_eq!(err.to_string(), "Validation failed: empty");
}
