#[cfg(test)]
mod request_dispatcher {

    use std::io::Write;
    use std::sync::Arc;

    use tempfile::NamedTempFile;
    use url::Url;

    use http_status_probe::http_client::error::Error;
    use http_status_probe::http_client::http_client::HttpClient;
    use http_status_probe::http_client::hyper_http_client::HyperHttpClient;
    use http_status_probe::http_client::reqwest_http_client::ReqwestHttpClient;
    use http_status_probe::request_dispatcher::dispatch_error::DispatchError;
    use http_status_probe::request_dispatcher::http_response_status::HttpResponseStatus;
    use http_status_probe::request_dispatcher::request_dispatcher::RequestDispatcher;
    use http_status_probe::status_classifier::status_category::StatusCategory;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backends() -> Vec<(&'static str, Arc<dyn HttpClient>)> {
        vec![
            ("reqwest", Arc::new(ReqwestHttpClient::default())),
            ("hyper", Arc::new(HyperHttpClient::default())),
        ]
    }

    #[tokio::test]
    async fn should_classify_a_live_success_with_a_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&mock_server)
            .await;

        for (name, http_client) in backends() {
            let dispatcher = RequestDispatcher::new(http_client);

            let status = dispatcher.probe(Some(mock_server.uri().as_str())).await.unwrap();

            assert_eq!(status.code(), Some(200), "{name}");
            assert_eq!(status.category(), Some(StatusCategory::Success), "{name}");
            assert!(status.has_body(), "{name}");
        }
    }

    #[tokio::test]
    async fn should_produce_identical_results_on_every_backend() {
        let mock_server = MockServer::start().await;

        let codes: [u16; 12] = [200, 204, 302, 400, 401, 402, 403, 404, 418, 500, 503, 599];

        for code in codes {
            Mock::given(method("GET"))
                .and(path(format!("/status/{}", code)))
                .respond_with(ResponseTemplate::new(code))
                .mount(&mock_server)
                .await;
        }

        for code in codes {
            let url = format!("{}/status/{}", mock_server.uri(), code);
            let mut results: Vec<HttpResponseStatus> = Vec::new();

            for (_, http_client) in backends() {
                let dispatcher = RequestDispatcher::new(http_client);
                results.push(dispatcher.probe(Some(url.as_str())).await.unwrap());
            }

            assert_eq!(results[0], results[1], "status {code}");
            assert_eq!(results[0], HttpResponseStatus::classified(code, false));
        }
    }

    #[tokio::test]
    async fn should_surface_connection_refused_as_a_transport_error() {
        for (name, http_client) in backends() {
            let dispatcher = RequestDispatcher::new(http_client);

            let error = dispatcher
                .probe(Some("http://127.0.0.1:1/"))
                .await
                .unwrap_err();

            assert!(
                matches!(error, DispatchError::Transport(Error::Network(_))),
                "{name}: {error:?}"
            );
        }
    }

    #[tokio::test]
    async fn should_refuse_unfetchable_schemes_the_same_way_on_every_backend() {
        for (name, http_client) in backends() {
            let dispatcher = RequestDispatcher::new(http_client);

            let error = dispatcher
                .probe(Some("ftp://127.0.0.1/pub"))
                .await
                .unwrap_err();

            assert!(
                matches!(error, DispatchError::Transport(Error::InvalidRequest(_))),
                "{name}: {error:?}"
            );
        }
    }

    #[tokio::test]
    async fn should_read_local_files_whatever_the_backend() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"<html></html>").unwrap();
        let url = Url::from_file_path(file.path()).unwrap();

        for (name, http_client) in backends() {
            let dispatcher = RequestDispatcher::new(http_client);

            let status = dispatcher.probe(Some(url.as_str())).await.unwrap();

            assert_eq!(status, HttpResponseStatus::unclassified(true), "{name}");
        }
    }

    #[tokio::test]
    async fn should_reject_bad_input_before_any_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let dispatcher = RequestDispatcher::new(Arc::new(ReqwestHttpClient::default()));

        assert!(matches!(
            dispatcher.probe(None).await.unwrap_err(),
            DispatchError::EmptyInput
        ));
        assert!(matches!(
            dispatcher.probe(Some("")).await.unwrap_err(),
            DispatchError::EmptyInput
        ));
        assert!(matches!(
            dispatcher.probe(Some("not a url")).await.unwrap_err(),
            DispatchError::InvalidUrl(_)
        ));
    }
}
