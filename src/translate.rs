use crate::status::{self, StatusError};
use crate::{Error, Failure};
use futures::TryFuture;
use std::borrow::Cow;
use std::future::Future;
use std::mem;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

/// What to do with a failure whose status has no registry entry.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum Unmapped {
    /// Return the original failure untouched.
    #[default]
    Propagate,
    /// Return a [`StatusError`] named `HttpError`.
    Synthesize,
}

#[derive(Clone, Debug, Default)]
pub struct Options {
    message: Option<Cow<'static, str>>,
    unmapped: Unmapped,
}

impl Options {
    pub fn message<M>(mut self, message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        self.message = Some(message.into());
        self
    }

    pub fn unmapped(mut self, unmapped: Unmapped) -> Self {
        self.unmapped = unmapped;
        self
    }

    pub fn map_failure<E>(self, failure: E) -> Error<E>
    where
        E: Failure,
    {
        let Self { message, unmapped } = self;
        let Some(code) = failure.status() else {
            tracing::debug!("request failed without a status");
            return Error::Failure(failure);
        };
        let e = match (status::lookup(code), unmapped) {
            (Some(kind), _) => StatusError::with_message(kind, message),
            (None, Unmapped::Synthesize) => StatusError::unmapped(code, message),
            (None, Unmapped::Propagate) => {
                tracing::debug!(status = code, "request failed with an unmapped status");
                return Error::Failure(failure);
            }
        };
        tracing::debug!(status = code, name = e.name(), "request failed");
        Error::Status(e)
    }
}

pub fn translate<F, M>(request: F, message: Option<M>) -> Translate<F>
where
    M: Into<Cow<'static, str>>,
{
    let options = Options {
        message: message.map(Into::into),
        ..Options::default()
    };
    Translate::new(request, options)
}

#[pin_project::pin_project]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Translate<F> {
    #[pin]
    f: F,
    options: Options,
}

impl<F> Translate<F> {
    pub fn new(f: F, options: Options) -> Self {
        Self { f, options }
    }

    pub fn message<M>(mut self, message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        self.options = self.options.message(message);
        self
    }

    pub fn unmapped(mut self, unmapped: Unmapped) -> Self {
        self.options = self.options.unmapped(unmapped);
        self
    }
}

impl<F, R, E> Future for Translate<F>
where
    F: Future<Output = Result<R, E>>,
    E: Failure,
{
    type Output = Result<R, Error<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match ready!(this.f.poll(cx)) {
            Ok(response) => Poll::Ready(Ok(response)),
            Err(e) => Poll::Ready(Err(mem::take(this.options).map_failure(e))),
        }
    }
}

pub trait TranslateExt: TryFuture + Sized {
    fn translate(self) -> Translate<Self> {
        Translate::new(self, Options::default())
    }

    fn translate_with<M>(self, message: M) -> Translate<Self>
    where
        M: Into<Cow<'static, str>>,
    {
        Translate::new(self, Options::default().message(message))
    }
}

impl<F> TranslateExt for F
where
    F: TryFuture,
    F::Error: Failure,
{
}
