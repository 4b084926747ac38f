use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};

use crate::cv::adapter::outgoing::DEFAULT_CV_DATA_PATH;

/// Local stand-in for the static file host serving `cv-data.json`.
///
/// Must be started from an actix runtime (`#[actix_web::test]`).
pub struct StaticHost {
    base_url: String,
    hits: Arc<AtomicUsize>,
    handle: ServerHandle,
}

impl StaticHost {
    pub fn serve(status: StatusCode, body: &'static str) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let server = HttpServer::new(move || {
            let counter = Arc::clone(&counter);
            App::new().route(
                DEFAULT_CV_DATA_PATH,
                web::get().to(move || {
                    let counter = Arc::clone(&counter);
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        HttpResponse::build(status)
                            .content_type("application/json")
                            .body(body)
                    }
                }),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind static host");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://{}", addr),
            hits,
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}
