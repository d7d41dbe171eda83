use crate::{
    config::Config,
    gemini::{ImageClient, ImageGenerator},
    models::{GenerationRequest, GenerationResponse, ProductCategory},
    service::PosterService,
};
use actix_web::{error::InternalError, middleware::Logger, web, App, HttpResponse, HttpServer};
use serde_json::json;

pub const INVALID_BODY_ERROR: &str = "Invalid request body";

async fn generate_poster<G: ImageGenerator + 'static>(
    service: web::Data<PosterService<G>>,
    body: web::Json<GenerationRequest>,
) -> HttpResponse {
    // Failures are reported in the body; the status stays 200.
    HttpResponse::Ok().json(service.handle(body.into_inner()).await)
}

async fn categories() -> HttpResponse {
    let catalogue: Vec<_> = ProductCategory::ALL.iter().map(|c| c.info()).collect();
    HttpResponse::Ok().json(catalogue)
}

async fn health<G: ImageGenerator + 'static>(
    service: web::Data<PosterService<G>>,
) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "credentialConfigured": service.generator().is_configured(),
    }))
}

pub fn configure<G: ImageGenerator + 'static>(
    cfg: &mut web::ServiceConfig,
    service: web::Data<PosterService<G>>,
    max_body_bytes: usize,
) {
    let json_config = web::JsonConfig::default()
        .limit(max_body_bytes)
        .error_handler(|err, _req| {
            log::warn!("Rejected request body: {}", err);
            let response =
                HttpResponse::BadRequest().json(GenerationResponse::failure(INVALID_BODY_ERROR));
            InternalError::from_response(err, response).into()
        });

    cfg.app_data(service)
        .app_data(json_config)
        .route("/api/generate-poster", web::post().to(generate_poster::<G>))
        .route("/api/categories", web::get().to(categories))
        .route("/health", web::get().to(health::<G>));
}

pub async fn run(config: Config) -> std::io::Result<()> {
    let service = web::Data::new(
        PosterService::new(ImageClient::new(config.gemini.clone()))
            .with_parallel_variants(config.gemini.parallel_variants),
    );
    let max_body_bytes = config.max_body_bytes();

    HttpServer::new(move || {
        let service = service.clone();
        App::new()
            .wrap(Logger::new("%a \"%r\" %s %Dms"))
            .configure(|cfg| configure(cfg, service, max_body_bytes))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::GENERIC_FAILURE,
        gemini::testing::{FakeGenerator, FakeOutcome},
        service::MISSING_FIELDS_ERROR,
    };
    use actix_web::{http::header::ContentType, http::StatusCode, test};

    const LIMIT: usize = 1024 * 1024;

    macro_rules! app {
        ($generator:expr) => {{
            let service = web::Data::new(PosterService::new($generator));
            let app = test::init_service(
                App::new().configure(|cfg| configure(cfg, service.clone(), LIMIT)),
            )
            .await;
            (app, service)
        }};
    }

    #[actix_web::test]
    async fn generates_three_posters() {
        let (app, _service) = app!(FakeGenerator::all_images());
        let req = test::TestRequest::post()
            .uri("/api/generate-poster")
            .set_json(json!({ "productImage": "cHJvZHVjdA==", "category": "footwear" }))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 3);
        let images = body["images"].as_array().unwrap();
        assert_eq!(images[0]["version"], 1);
        assert_eq!(images[2]["version"], 3);
        assert!(images[0]["imageUrl"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,"));
        assert!(images[1]["filename"]
            .as_str()
            .unwrap()
            .starts_with("marketing-poster-v2-"));
    }

    #[actix_web::test]
    async fn missing_product_image_is_rejected_with_200() {
        let (app, service) = app!(FakeGenerator::all_images());
        let req = test::TestRequest::post()
            .uri("/api/generate-poster")
            .set_json(json!({ "category": "clothing" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;

        assert_eq!(
            body,
            json!({ "success": false, "error": MISSING_FIELDS_ERROR })
        );
        assert_eq!(service.generator().call_count(), 0);
    }

    #[actix_web::test]
    async fn null_fields_are_rejected_like_missing_ones() {
        let (app, service) = app!(FakeGenerator::all_images());

        for payload in [
            json!({ "productImage": null, "category": "clothing" }),
            json!({ "productImage": "cHJvZHVjdA==", "category": null }),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/generate-poster")
                .set_json(payload)
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(
                body,
                json!({ "success": false, "error": MISSING_FIELDS_ERROR })
            );
        }
        assert_eq!(service.generator().call_count(), 0);
    }

    #[actix_web::test]
    async fn provider_failure_returns_generic_error() {
        let (app, _service) = app!(FakeGenerator::new(vec![
            FakeOutcome::Image(b"one"),
            FakeOutcome::Fail,
        ]));
        let req = test::TestRequest::post()
            .uri("/api/generate-poster")
            .set_json(json!({ "productImage": "cHJvZHVjdA==", "category": "home" }))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], false);
        assert_eq!(body["error"], GENERIC_FAILURE);
        assert!(body.get("images").is_none());
    }

    #[actix_web::test]
    async fn malformed_json_is_a_bad_request() {
        let (app, _service) = app!(FakeGenerator::all_images());
        let req = test::TestRequest::post()
            .uri("/api/generate-poster")
            .insert_header(ContentType::json())
            .set_payload("{ not json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], INVALID_BODY_ERROR);
    }

    #[actix_web::test]
    async fn lists_categories_in_order() {
        let (app, _service) = app!(FakeGenerator::all_images());
        let req = test::TestRequest::get().uri("/api/categories").to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec![
                "clothing",
                "footwear",
                "accessories",
                "electronics",
                "beauty",
                "home",
                "sports",
                "other"
            ]
        );
    }

    #[actix_web::test]
    async fn health_reports_credential() {
        let (app, _service) = app!(FakeGenerator::unconfigured());
        let req = test::TestRequest::get().uri("/health").to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["credentialConfigured"], false);
    }
}
