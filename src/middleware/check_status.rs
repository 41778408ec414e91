use bytes::Bytes;
use http_body_util::BodyExt;
use std::future;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

#[derive(Debug, thiserror::Error)]
pub enum Error<S, B> {
    #[error(transparent)]
    Service(S),
    #[error(transparent)]
    Body(B),
    #[error("unsuccessful response: {}", .0.status())]
    Status(http::Response<Bytes>),
}

impl<S, B> crate::Failure for Error<S, B> {
    fn status(&self) -> Option<u16> {
        match self {
            Self::Status(response) => Some(response.status().as_u16()),
            Self::Service(_) | Self::Body(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Layer;

impl<S> tower::Layer<S> for Layer {
    type Service = Service<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Service { inner }
    }
}

#[derive(Clone, Debug)]
pub struct Service<S> {
    inner: S,
}

impl<S, T, U> tower::Service<http::Request<T>> for Service<S>
where
    S: tower::Service<http::Request<T>, Response = http::Response<U>>,
    U: http_body::Body,
{
    type Response = http::Response<U>;
    type Error = Error<S::Error, U::Error>;
    type Future = Future<S::Future, U>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Error::Service)
    }

    fn call(&mut self, request: http::Request<T>) -> Self::Future {
        Future(State::S0(self.inner.call(request)))
    }
}

#[pin_project::pin_project]
pub struct Future<F, U>(#[pin] State<F, U>)
where
    U: http_body::Body;

#[pin_project::pin_project(project = StateProj)]
#[allow(clippy::large_enum_variant)]
enum State<F, U>
where
    U: http_body::Body,
{
    S0(#[pin] F),
    S1(
        #[pin] http_body_util::combinators::Collect<U>,
        Option<http::response::Parts>,
    ),
}

impl<F, U, E> future::Future for Future<F, U>
where
    F: future::Future<Output = Result<http::Response<U>, E>>,
    U: http_body::Body,
{
    type Output = Result<http::Response<U>, Error<E, U::Error>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        loop {
            match this.0.as_mut().project() {
                StateProj::S0(f) => {
                    let response = ready!(f.poll(cx)).map_err(Error::Service)?;
                    if response.status().is_success() {
                        break Poll::Ready(Ok(response));
                    }
                    let (parts, body) = response.into_parts();
                    this.0.set(State::S1(body.collect(), Some(parts)));
                }
                StateProj::S1(f, state) => {
                    let body = ready!(f.poll(cx)).map_err(Error::Body)?;
                    let parts = state.take().unwrap();
                    break Poll::Ready(Err(Error::Status(http::Response::from_parts(
                        parts,
                        body.to_bytes(),
                    ))));
                }
            }
        }
    }
}
