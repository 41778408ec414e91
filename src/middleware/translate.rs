use crate::translate::{Options, Translate, Unmapped};
use crate::{Error, Failure};
use std::borrow::Cow;
use std::task::{Context, Poll};

#[derive(Clone, Debug, Default)]
pub struct Layer {
    options: Options,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message<M>(self, message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            options: self.options.message(message),
        }
    }

    pub fn unmapped(self, unmapped: Unmapped) -> Self {
        Self {
            options: self.options.unmapped(unmapped),
        }
    }
}

impl From<Options> for Layer {
    fn from(options: Options) -> Self {
        Self { options }
    }
}

impl<S> tower::Layer<S> for Layer {
    type Service = Service<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Service {
            inner,
            options: self.options.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Service<S> {
    inner: S,
    options: Options,
}

impl<S, T> tower::Service<T> for Service<S>
where
    S: tower::Service<T>,
    S::Error: Failure,
{
    type Response = S::Response;
    type Error = Error<S::Error>;
    type Future = Translate<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner
            .poll_ready(cx)
            .map_err(|e| self.options.clone().map_failure(e))
    }

    fn call(&mut self, request: T) -> Self::Future {
        Translate::new(self.inner.call(request), self.options.clone())
    }
}
