use crate::middleware::check_status;
use crate::{middleware, translate, Error, Kind, TranslateExt, Unmapped};
use bytes::Bytes;
use http::{Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use std::convert::Infallible;
use tower::{Layer, ServiceBuilder, ServiceExt};

type Body = Full<Bytes>;

fn service(
    status: u16,
    body: &'static str,
) -> impl tower::Service<Request<()>, Response = Response<Body>, Error = Infallible> + Clone {
    tower::service_fn(move |_: Request<()>| async move {
        Ok::<_, Infallible>(
            Response::builder()
                .status(status)
                .body(Full::new(Bytes::from_static(body.as_bytes())))
                .unwrap(),
        )
    })
}

fn request() -> Request<()> {
    Request::get("http://example.test/").body(()).unwrap()
}

fn assert_status<S, B>(e: Error<check_status::Error<S, B>>, kind: Kind, message: &str) {
    if let Error::Status(e) = e {
        assert_eq!(e.kind(), Some(kind));
        assert_eq!(e.message(), message);
        assert_eq!(e.name(), kind.name());
        assert_eq!(e.status(), kind.as_u16());
        assert_eq!(e.status_code(), kind.as_u16());
    } else {
        panic!();
    }
}

#[tokio::test]
async fn test_request_success() {
    let req = check_status::Layer.layer(service(200, "OK")).oneshot(request());
    let response = translate(req, Some("my custom")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_not_found() {
    let req = check_status::Layer.layer(service(404, "HEHE!")).oneshot(request());
    let e = translate(req, None::<String>).await.unwrap_err();
    assert_status(e, Kind::NotFound, "Not Found");
}

#[tokio::test]
async fn test_not_found_custom_message() {
    let req = check_status::Layer.layer(service(404, "HEHE!")).oneshot(request());
    let e = translate(req, Some("custom")).await.unwrap_err();
    assert_status(e, Kind::NotFound, "custom");
}

#[tokio::test]
async fn test_too_many_requests() {
    let req = check_status::Layer.layer(service(429, "")).oneshot(request());
    let e = translate(req, Some("slow down")).await.unwrap_err();
    assert_status(e, Kind::TooManyRequests, "slow down");
}

#[tokio::test]
async fn test_unmapped() {
    let req = check_status::Layer.layer(service(599, "HEHE!")).oneshot(request());
    let e = translate(req, Some("custom")).await.unwrap_err();
    let Error::Failure(check_status::Error::Status(response)) = e else {
        panic!();
    };
    assert_eq!(response.status(), 599);
    assert_eq!(response.body(), "HEHE!");
}

#[tokio::test]
async fn test_unmapped_synthesize() {
    let e = ServiceBuilder::new()
        .layer(middleware::translate::Layer::new().unmapped(Unmapped::Synthesize))
        .layer(check_status::Layer)
        .service(service(599, "HEHE!"))
        .oneshot(request())
        .await
        .unwrap_err();
    let Error::Status(e) = e else { panic!() };
    assert_eq!(e.kind(), None);
    assert_eq!(e.name(), "HttpError");
    assert_eq!(e.message(), "Unknown Status");
    assert_eq!(e.status(), 599);
    assert_eq!(e.status_code(), 599);
}

#[tokio::test]
async fn test_transport_failure() {
    let service = tower::service_fn(|_: Request<()>| async {
        Err::<Response<Body>, _>(std::io::Error::other("connection refused"))
    });
    let e = middleware::layer()
        .layer(service)
        .oneshot(request())
        .await
        .unwrap_err();
    assert!(matches!(e, Error::Failure(check_status::Error::Service(_))));
    assert_eq!(e.to_string(), "connection refused");
}

#[tokio::test]
async fn test_every_kind() {
    for &kind in Kind::ALL {
        let service = middleware::layer().layer(service(kind.as_u16(), "HEHE!"));
        let e = service.oneshot(request()).await.unwrap_err();
        assert_status(e, kind, kind.default_message());

        let req = check_status::Layer
            .layer(self::service(kind.as_u16(), "HEHE!"))
            .oneshot(request());
        let e = req.translate_with("my custom message").await.unwrap_err();
        assert_status(e, kind, "my custom message");
    }
}

#[tokio::test]
async fn test_success_ignores_status() {
    // without check_status the collaborator resolves, so nothing is translated
    let response = ServiceBuilder::new()
        .layer(middleware::translate::Layer::new().message("ignored"))
        .service(service(404, "HEHE!"))
        .oneshot(request())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent() {
    let futures = Kind::ALL.iter().map(|&kind| async move {
        let req = check_status::Layer
            .layer(service(kind.as_u16(), ""))
            .oneshot(request());
        (kind, translate(req, Some(kind.name())).await)
    });
    for (kind, result) in futures::future::join_all(futures).await {
        assert_status(result.unwrap_err(), kind, kind.name());
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_serialize() {
    let req = check_status::Layer.layer(service(404, "HEHE!")).oneshot(request());
    let e = translate(req, Some("custom")).await.unwrap_err();
    let Error::Status(e) = e else { panic!() };
    assert_eq!(
        serde_json::to_value(&e).unwrap(),
        serde_json::json!({
            "message": "custom",
            "name": "NotFoundError",
            "status": 404,
            "statusCode": 404,
        }),
    );
}
