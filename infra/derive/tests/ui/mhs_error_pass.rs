use mhs_derive::mhs_error;
use std::borrow::Cow;

#[mhs_error]
#[derive(Debug)]
pub enum SeedError {
    #[error("Seed file error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Seed rejected{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: SeedError = "boom".into();
    let _ = err.to_string();
}
