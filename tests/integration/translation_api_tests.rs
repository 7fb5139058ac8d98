//! `/api/translate` integration tests against a mocked Lingo.dev server

#[cfg(test)]
mod tests {
    use crate::common::{ClickTrackLoader, TestContext};
    use actix_web::test;
    use beatflow::core::translation::{LingoTranslator, Translator};
    use beatflow::server::HttpServer;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn translator(ctx: &mut TestContext, server: &MockServer, api_key: Option<&str>) -> Arc<dyn Translator> {
        ctx.config.translation.api_url = format!("{}/v1/translate", server.uri());
        ctx.config.translation.api_key = api_key.map(str::to_string);
        Arc::new(LingoTranslator::new(&ctx.config.translation).unwrap())
    }

    async fn post_translate(ctx: &TestContext, translator: Arc<dyn Translator>, body: Value) -> (u16, Value) {
        let app = test::init_service(HttpServer::create_app(
            ctx.state(Arc::new(ClickTrackLoader::new(120.0)), translator),
        ))
        .await;
        let req = test::TestRequest::post()
            .uri("/api/translate")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_translate_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/translate"))
            .and(header("authorization", "Bearer lingo-key"))
            .and(body_partial_json(json!({
                "text": "piano calme",
                "sourceLocale": "fr",
                "targetLocale": "en",
                "fast": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "calm piano"})))
            .expect(1)
            .mount(&server)
            .await;

        let mut ctx = TestContext::new();
        let translator = translator(&mut ctx, &server, Some("lingo-key"));
        let (status, body) = post_translate(
            &ctx,
            translator,
            json!({"text": "  piano calme ", "sourceLocale": "fr"}),
        )
        .await;

        assert_eq!(status, 200, "body: {}", body);
        assert_eq!(
            body,
            json!({
                "text": "piano calme",
                "translatedText": "calm piano",
                "sourceLocale": "fr",
                "targetLocale": "en",
                "applied": true
            })
        );
    }

    #[actix_web::test]
    async fn test_locale_fallback_and_explicit_target() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/translate"))
            .and(body_partial_json(json!({"sourceLocale": "es", "targetLocale": "de"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!("ruhiges Klavier")))
            .expect(1)
            .mount(&server)
            .await;

        let mut ctx = TestContext::new();
        let translator = translator(&mut ctx, &server, Some("lingo-key"));
        let (status, body) = post_translate(
            &ctx,
            translator,
            json!({"text": "piano tranquilo", "locale": "es", "targetLocale": "de"}),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["translatedText"], "ruhiges Klavier");
        assert_eq!(body["targetLocale"], "de");
    }

    #[actix_web::test]
    async fn test_unchanged_text_is_not_applied() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/translate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
            .mount(&server)
            .await;

        let mut ctx = TestContext::new();
        let translator = translator(&mut ctx, &server, Some("lingo-key"));
        let (status, body) =
            post_translate(&ctx, translator, json!({"text": "ピアノ"})).await;

        assert_eq!(status, 200);
        assert_eq!(body["sourceLocale"], "auto");
        assert_eq!(body["translatedText"], "ピアノ");
        assert_eq!(body["applied"], false);
    }

    #[actix_web::test]
    async fn test_missing_text_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut ctx = TestContext::new();
        let translator = translator(&mut ctx, &server, Some("lingo-key"));
        let (status, body) = post_translate(&ctx, translator.clone(), json!({"text": "   "})).await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], "MISSING_TEXT");
        assert_eq!(body["error"], "Text is required");

        let (status, body) = post_translate(&ctx, translator, json!({"text": null})).await;
        assert_eq!(status, 400);
        assert_eq!(body["code"], "MISSING_TEXT");
    }

    #[actix_web::test]
    async fn test_translation_disabled_without_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut ctx = TestContext::new();
        let translator = translator(&mut ctx, &server, None);
        let (status, body) =
            post_translate(&ctx, translator, json!({"text": "piano calme", "locale": "fr"})).await;

        assert_eq!(status, 503);
        assert_eq!(body["code"], "TRANSLATION_DISABLED");
        assert_eq!(body["error"], "Lingo translation is not configured");
    }

    #[actix_web::test]
    async fn test_provider_failure_is_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/translate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let mut ctx = TestContext::new();
        let translator = translator(&mut ctx, &server, Some("lingo-key"));
        let (status, body) =
            post_translate(&ctx, translator, json!({"text": "piano calme", "locale": "fr"})).await;

        assert_eq!(status, 502);
        assert_eq!(body["code"], "TRANSLATION_FAILED");
        assert_eq!(
            body["error"],
            "Translation provider returned 500: upstream exploded"
        );
    }
}
