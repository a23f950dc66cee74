use natded::szs::{self, NoSuccessKind};
use natded::{eval, parse, proof};

pub struct Error(NoSuccessKind, Option<Box<dyn std::error::Error>>);

impl Error {
    pub fn new(k: NoSuccessKind, e: Box<dyn std::error::Error>) -> Self {
        Self(k, Some(e))
    }

    pub fn get_kind(&self) -> NoSuccessKind {
        self.0
    }

    pub fn get_error(&self) -> &Option<Box<dyn std::error::Error>> {
        &self.1
    }
}

impl From<NoSuccessKind> for Error {
    fn from(k: NoSuccessKind) -> Self {
        Self(k, None)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(szs::OsError, e.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(szs::OsError, e.into())
    }
}

impl From<natded::Error> for Error {
    fn from(e: natded::Error) -> Self {
        Self::new(e.kind(), e.into())
    }
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        natded::Error::from(e).into()
    }
}

impl From<eval::Error> for Error {
    fn from(e: eval::Error) -> Self {
        natded::Error::from(e).into()
    }
}

impl From<proof::Failed> for Error {
    fn from(e: proof::Failed) -> Self {
        natded::Error::from(e).into()
    }
}

#[test]
fn kinds() {
    let e = Error::from(parse::Error::Trailing(1));
    assert_eq!(e.get_kind(), szs::SyntaxError);
    let msg = e.get_error().as_ref().unwrap().to_string();
    assert_eq!(msg, "parse error: unexpected input at offset 1");

    let e = Error::from(proof::Failed { incomplete: true });
    assert_eq!(e.get_kind(), szs::ResourceOut);
    assert!(Error::from(szs::GaveUp).get_error().is_none());
}
