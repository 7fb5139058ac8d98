//! `/api/library` and `/health` integration tests

#[cfg(test)]
mod tests {
    use crate::common::{ClickTrackLoader, ScriptedTranslator, TestContext, generate_body};
    use actix_web::test;
    use beatflow::server::HttpServer;
    use serde_json::Value;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_missing_storage_dir_is_empty_library() {
        let ctx = TestContext::new();
        assert!(!ctx.storage_dir().exists());

        let app = test::init_service(HttpServer::create_app(ctx.state(
            Arc::new(ClickTrackLoader::new(120.0)),
            Arc::new(ScriptedTranslator::unconfigured()),
        )))
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/library").to_request())
                .await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({"files": []}));
    }

    #[actix_web::test]
    async fn test_library_lists_generated_clips_newest_first() {
        let ctx = TestContext::new();
        let app = test::init_service(HttpServer::create_app(ctx.state(
            Arc::new(ClickTrackLoader::new(120.0)),
            Arc::new(ScriptedTranslator::unconfigured()),
        )))
        .await;

        let mut generated = Vec::new();
        for prompt in ["first", "second"] {
            let req = test::TestRequest::post()
                .uri("/api/generate")
                .set_json(generate_body(prompt, "ambient", 1, "en"))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            generated.push(body["audioPath"].as_str().unwrap().to_string());
        }

        // Make the first clip clearly older and drop in a file that is not audio.
        let old = std::time::SystemTime::now() - std::time::Duration::from_secs(600);
        std::fs::File::options()
            .write(true)
            .open(&generated[0])
            .unwrap()
            .set_modified(old)
            .unwrap();
        std::fs::write(ctx.storage_dir().join("notes.txt"), b"not audio").unwrap();

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/library").to_request(),
        )
        .await;

        let files = body["files"].as_array().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0]["path"], generated[1].as_str());
        assert_eq!(files[1]["path"], generated[0].as_str());

        let first = &files[0];
        assert!(first["filename"].as_str().unwrap().starts_with("musicgen_"));
        assert!(first["size"].as_u64().unwrap() > 44);
        assert!(first["created"].as_f64().unwrap() > 0.0);
        assert!(first["modified"].as_f64().unwrap() >= files[1]["modified"].as_f64().unwrap());
    }

    #[actix_web::test]
    async fn test_health_check() {
        let mut ctx = TestContext::new();
        ctx.config.music.model = "facebook/musicgen-large".to_string();
        let app = test::init_service(HttpServer::create_app(ctx.state(
            Arc::new(ClickTrackLoader::new(120.0)),
            Arc::new(ScriptedTranslator::unconfigured()),
        )))
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(resp.headers().get("server").unwrap(), "BeatFlow");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({"status": "ok", "model": "facebook/musicgen-large"}));
    }

    #[actix_web::test]
    async fn test_request_id_is_echoed() {
        let ctx = TestContext::new();
        let app = test::init_service(HttpServer::create_app(ctx.state(
            Arc::new(ClickTrackLoader::new(120.0)),
            Arc::new(ScriptedTranslator::unconfigured()),
        )))
        .await;

        let req = test::TestRequest::get()
            .uri("/api/library")
            .insert_header(("x-request-id", "trace-42"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-42");
    }
}
