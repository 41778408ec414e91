pub mod middleware;
pub mod status;
mod translate;

#[cfg(test)]
mod tests;

pub use status::{Kind, StatusError};
pub use translate::{translate, Options, Translate, TranslateExt, Unmapped};

use std::convert::Infallible;

#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    #[error(transparent)]
    Status(StatusError),
    #[error(transparent)]
    Failure(E),
}

impl<E> Error<E> {
    pub fn status_error(&self) -> Option<&StatusError> {
        match self {
            Self::Status(e) => Some(e),
            Self::Failure(_) => None,
        }
    }

    pub fn into_failure(self) -> Result<E, StatusError> {
        match self {
            Self::Status(e) => Err(e),
            Self::Failure(e) => Ok(e),
        }
    }
}

/// A failed request that may carry an HTTP status.
///
/// `None` means the failure happened before any status was received (a
/// connection error, a body error, ...). Such failures are never translated.
pub trait Failure {
    fn status(&self) -> Option<u16>;
}

impl Failure for http::StatusCode {
    fn status(&self) -> Option<u16> {
        Some(self.as_u16())
    }
}

impl<B> Failure for http::Response<B> {
    fn status(&self) -> Option<u16> {
        Some(http::Response::status(self).as_u16())
    }
}

impl Failure for Infallible {
    fn status(&self) -> Option<u16> {
        match *self {}
    }
}
