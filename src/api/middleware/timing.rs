//! HTTP timing middleware
//!
//! Emits one log line per finished request with status, latency and the
//! request id assigned by [`RequestIdMiddleware`](super::RequestIdMiddleware).
//! Client errors are logged at `info`, server errors at `warn`.

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::RequestId;

/// HTTP timing middleware factory
#[derive(Clone, Default)]
pub struct TimingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for TimingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TimingService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TimingService {
            service: Rc::new(service),
        }))
    }
}

pub struct TimingService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TimingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_string();

        Box::pin(async move {
            let result = srv.call(req).await;
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            match &result {
                Ok(response) => {
                    let status = response.status().as_u16();
                    // 内层中间件写入的 request id，未挂载时为 "-"
                    let request_id = response
                        .request()
                        .extensions()
                        .get::<RequestId>()
                        .map(|id| id.0.clone())
                        .unwrap_or_else(|| "-".to_string());

                    if response.status().is_server_error() {
                        warn!(%request_id, "{} {} -> {} ({:.2}ms)", method, path, status, elapsed_ms);
                    } else if response.status().is_client_error() {
                        info!(%request_id, "{} {} -> {} ({:.2}ms)", method, path, status, elapsed_ms);
                    } else {
                        debug!(%request_id, "{} {} -> {} ({:.2}ms)", method, path, status, elapsed_ms);
                    }
                }
                Err(e) => {
                    warn!("{} {} failed after {:.2}ms: {}", method, path, elapsed_ms, e);
                }
            }

            result
        })
    }
}
