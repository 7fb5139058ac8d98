//! MusicGen sidecar client tests against a wiremock server

#[cfg(test)]
mod tests {
    use crate::common::ScriptedTranslator;
    use beatflow::config::MusicConfig;
    use beatflow::core::music::{
        Device, EncodedPrompt, GenerationError, ModelLoader, MusicService, RemoteModelLoader,
    };
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn loader(server: &MockServer) -> RemoteModelLoader {
        RemoteModelLoader::new(&MusicConfig {
            inference_url: server.uri(),
            timeout_secs: 5,
            ..MusicConfig::default()
        })
        .unwrap()
    }

    async fn mount_devices(server: &MockServer, accelerators: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/v1/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "accelerators": accelerators
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_load_prefers_cuda() {
        let server = MockServer::start().await;
        mount_devices(&server, json!(["cuda:0"])).await;
        Mock::given(method("POST"))
            .and(path("/v1/models/load"))
            .and(body_json(json!({"model": "facebook/musicgen-small", "device": "cuda"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model": "facebook/musicgen-small",
                "device": "cuda",
                "sampling_rate": 32000
            })))
            .expect(1)
            .mount(&server)
            .await;

        let bundle = loader(&server).load("facebook/musicgen-small").await.unwrap();
        assert_eq!(bundle.model.device(), Device::Cuda);
        assert_eq!(bundle.model.sampling_rate(), Some(32000));
    }

    #[tokio::test]
    async fn test_probe_failure_falls_back_to_cpu() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/devices"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/models/load"))
            .and(body_partial_json(json!({"device": "cpu"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model": "facebook/musicgen-small"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let bundle = loader(&server).load("facebook/musicgen-small").await.unwrap();
        assert_eq!(bundle.model.device(), Device::Cpu);
        assert_eq!(bundle.model.sampling_rate(), None);
    }

    #[tokio::test]
    async fn test_load_failure_carries_status() {
        let server = MockServer::start().await;
        mount_devices(&server, json!([])).await;
        Mock::given(method("POST"))
            .and(path("/v1/models/load"))
            .respond_with(ResponseTemplate::new(404).set_body_string("unknown model"))
            .mount(&server)
            .await;

        let err = loader(&server).load("nope/model").await.unwrap_err();
        match err {
            GenerationError::ModelLoad(message) => {
                assert!(message.contains("404"), "{}", message);
                assert!(message.contains("unknown model"), "{}", message);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_encode_and_generate_protocol() {
        let server = MockServer::start().await;
        mount_devices(&server, json!(["cpu"])).await;
        Mock::given(method("POST"))
            .and(path("/v1/models/load"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"device": "cpu"})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/encode"))
            .and(body_json(json!({
                "model": "facebook/musicgen-small",
                "text": ["calm piano"],
                "padding": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "input_ids": [[71, 8, 2]],
                "attention_mask": [[1, 1, 1]]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/generate"))
            .and(body_json(json!({
                "model": "facebook/musicgen-small",
                "input_ids": [[71, 8, 2]],
                "attention_mask": [[1, 1, 1]],
                "max_new_tokens": 300
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "shape": [1, 1, 4],
                "data": [0.0, 0.25, -0.5, 0.1]
            })))
            .mount(&server)
            .await;

        let bundle = loader(&server).load("facebook/musicgen-small").await.unwrap();
        let encoded = bundle.encoder.encode(&["calm piano".to_string()]).await.unwrap();
        assert_eq!(
            encoded,
            EncodedPrompt {
                input_ids: vec![vec![71, 8, 2]],
                attention_mask: vec![vec![1, 1, 1]],
            }
        );

        let tensor = bundle.model.generate(&encoded, 300).await.unwrap();
        assert_eq!(tensor.shape, vec![1, 1, 4]);
        assert_eq!(tensor.data, vec![0.0, 0.25, -0.5, 0.1]);
    }

    #[tokio::test]
    async fn test_inference_error_is_generation_failure() {
        let server = MockServer::start().await;
        mount_devices(&server, json!([])).await;
        Mock::given(method("POST"))
            .and(path("/v1/models/load"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/encode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "input_ids": [[1]],
                "attention_mask": [[1]]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/generate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("CUDA out of memory"))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let service = MusicService::new(
            "facebook/musicgen-small",
            dir.path(),
            "en",
            Arc::new(loader(&server)),
            Arc::new(ScriptedTranslator::unconfigured()),
        );

        let err = service.generate_clip("calm piano", "ambient", 2).await.unwrap_err();
        assert!(matches!(err, GenerationError::Inference(_)));
        assert!(err.to_string().contains("CUDA out of memory"));
        assert!(service.is_model_loaded());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_service_writes_clip_from_sidecar_output() {
        let server = MockServer::start().await;
        mount_devices(&server, json!([])).await;
        Mock::given(method("POST"))
            .and(path("/v1/models/load"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sampling_rate": 16000})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/encode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "input_ids": [[1]],
                "attention_mask": [[1]]
            })))
            .mount(&server)
            .await;

        let frames = 16_000;
        let data: Vec<f32> = (0..frames * 2)
            .map(|i| if i % 2 == 0 { 0.5 } else { -0.25 })
            .collect();
        Mock::given(method("POST"))
            .and(path("/v1/generate"))
            .and(body_partial_json(json!({"max_new_tokens": 100})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "shape": [1, 2, frames],
                "data": data
            })))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let service = MusicService::new(
            "facebook/musicgen-small",
            dir.path(),
            "en",
            Arc::new(loader(&server)),
            Arc::new(ScriptedTranslator::unconfigured()),
        );

        let result = service.generate_clip("stereo pad", "ambient", 1).await.unwrap();
        let reader = hound::WavReader::open(&result.audio_path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 2);
        assert_eq!(spec.sample_rate, 16_000);
        assert_eq!(reader.duration(), frames as u32);
        assert_eq!(result.duration_seconds, 1);
        assert_eq!(result.prompt, "stereo pad");
    }
}
