use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::StatusCode;
use oauthsign_core::{Context, Error, ErrorKind, HttpSend, Result, StaticEnv};
use oauthsign_oauth1::{
    Client, Config, Parameters, RequestMethod, RequestSigner, SigningContext,
};
use pretty_assertions::assert_eq;

use super::fixed_signer;

/// Records every request and answers with `200 OK`.
#[derive(Debug, Clone, Default)]
struct RecordingHttpSend {
    requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

#[async_trait]
impl HttpSend for RecordingHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.requests.lock().unwrap().push(req);
        Ok(http::Response::new(Bytes::from_static(b"ok")))
    }
}

#[derive(Debug)]
struct FailingHttpSend;

#[async_trait]
impl HttpSend for FailingHttpSend {
    async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::transport("connection refused"))
    }
}

const GOLDEN_SIGNATURE: &str = "oauth_signature=\"FjLtiERgimbzKQ%2FuaVhJZAOriXY%3D\"";

fn signer() -> Result<RequestSigner> {
    let signing = SigningContext::builder()
        .consumer_key("ck")
        .consumer_secret("cs")
        .build()?;
    fixed_signer(signing, 1_000_000_000, &"N".repeat(44))
}

fn client(ctx: Context, method: RequestMethod) -> Result<Client> {
    client_for(ctx, method, "http://example.com/resource")
}

fn client_for(ctx: Context, method: RequestMethod, url: &str) -> Result<Client> {
    Ok(Client::new(ctx, signer()?, method, url))
}

fn authorization(req: &http::Request<Bytes>) -> &str {
    req.headers()
        .get(AUTHORIZATION)
        .expect("must be signed")
        .to_str()
        .expect("must be ascii")
}

fn params() -> Parameters {
    Parameters::from([
        ("a".to_string(), "1".to_string()),
        ("b".to_string(), "2".to_string()),
    ])
}

#[tokio::test]
async fn test_get_sends_query_string() -> Result<()> {
    let http = RecordingHttpSend::default();
    let client = client(Context::new().with_http_send(http.clone()), RequestMethod::Get)?;

    let resp = client.send(&params()).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let requests = http.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method(), http::Method::GET);
    assert_eq!(req.uri().to_string(), "http://example.com/resource?a=1&b=2");
    assert!(req.body().is_empty());

    assert!(req.headers()[AUTHORIZATION].is_sensitive());
    assert!(authorization(req).ends_with(GOLDEN_SIGNATURE));
    Ok(())
}

#[tokio::test]
async fn test_post_sends_form_body() -> Result<()> {
    let http = RecordingHttpSend::default();
    let client = client(Context::new().with_http_send(http.clone()), RequestMethod::Post)?;

    let mut params = params();
    params.insert("status".to_string(), "hello world".to_string());
    client.send(&params).await?;

    let requests = http.requests.lock().unwrap();
    let req = &requests[0];
    assert_eq!(req.method(), http::Method::POST);
    assert_eq!(req.uri().to_string(), "http://example.com/resource");
    assert_eq!(
        req.headers().get(CONTENT_TYPE).unwrap(),
        "application/x-www-form-urlencoded"
    );
    assert_eq!(req.body().as_ref(), b"a=1&b=2&status=hello+world");
    assert!(req
        .headers()
        .get(AUTHORIZATION)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("OAuth oauth_consumer_key=\"ck\""));
    Ok(())
}

#[test]
fn test_get_drops_fragment() -> Result<()> {
    let client = client_for(
        Context::new(),
        RequestMethod::Get,
        "http://example.com/resource#top",
    )?;

    let req = client.build_request(&params())?;
    assert_eq!(req.uri().to_string(), "http://example.com/resource?a=1&b=2");
    assert!(authorization(&req).ends_with(GOLDEN_SIGNATURE));
    Ok(())
}

#[test]
fn test_get_signs_url_query() -> Result<()> {
    let client = client_for(
        Context::new(),
        RequestMethod::Get,
        "http://example.com/resource?a=1",
    )?;

    let extra = Parameters::from([("b".to_string(), "2".to_string())]);
    let req = client.build_request(&extra)?;
    assert_eq!(req.uri().to_string(), "http://example.com/resource?a=1&b=2");
    assert!(authorization(&req).ends_with(GOLDEN_SIGNATURE));
    Ok(())
}

#[test]
fn test_post_signs_url_query_and_body() -> Result<()> {
    let client = client_for(
        Context::new(),
        RequestMethod::Post,
        "http://example.com/resource?a=1",
    )?;

    let extra = Parameters::from([("b".to_string(), "2".to_string())]);
    let req = client.build_request(&extra)?;
    assert_eq!(req.uri().to_string(), "http://example.com/resource?a=1");
    assert_eq!(req.body().as_ref(), b"b=2");

    let expected = signer()?.sign(
        RequestMethod::Post,
        "http://example.com/resource",
        &params(),
    );
    assert_eq!(authorization(&req), expected.authorization_value());
    Ok(())
}

#[test]
fn test_parameter_repeated_in_url_query_is_rejected() -> Result<()> {
    let client = client_for(
        Context::new(),
        RequestMethod::Get,
        "http://example.com/resource?a=1",
    )?;

    let err = client.build_request(&params()).expect_err("a is repeated");
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    Ok(())
}

#[tokio::test]
async fn test_transport_error_is_returned() -> Result<()> {
    let client = client(Context::new().with_http_send(FailingHttpSend), RequestMethod::Put)?;

    let err = client.send(&params()).await.expect_err("transport must fail");
    assert_eq!(err.kind(), ErrorKind::Transport);
    Ok(())
}

#[tokio::test]
async fn test_missing_transport_is_transport_error() -> Result<()> {
    let client = client(Context::new(), RequestMethod::Get)?;

    let err = client.send(&params()).await.expect_err("no transport configured");
    assert_eq!(err.kind(), ErrorKind::Transport);
    Ok(())
}

#[test]
fn test_from_config_with_env() -> Result<()> {
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([
            ("OAUTH_CONSUMER_KEY".to_string(), "ck".to_string()),
            ("OAUTH_CONSUMER_SECRET".to_string(), "cs".to_string()),
            (
                "OAUTH_REQUEST_URL".to_string(),
                "https://api.example.com/1/statuses/update.%format%".to_string(),
            ),
            ("OAUTH_FORMAT".to_string(), "json".to_string()),
            ("OAUTH_HTTP_METHOD".to_string(), "POST".to_string()),
        ]),
    });

    let config = Config::new().from_env(&ctx);
    let client = Client::from_config(ctx, &config)?;
    assert_eq!(client.method(), RequestMethod::Post);
    assert_eq!(client.url(), "https://api.example.com/1/statuses/update.json");
    Ok(())
}

#[test]
fn test_from_config_rejects_delete_before_signing() {
    let config = Config::new()
        .with_consumer_key("ck")
        .with_consumer_secret("cs")
        .with_request_url("http://example.com/resource")
        .with_method("DELETE");

    let err = Client::from_config(Context::new(), &config).expect_err("DELETE must be rejected");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

#[test]
fn test_from_config_rejects_malformed_url_before_signing() {
    let config = Config::new()
        .with_consumer_key("ck")
        .with_consumer_secret("cs")
        .with_request_url("http://example.com/a b.%format%")
        .with_format("json");

    let err = Client::from_config(Context::new(), &config).expect_err("url is malformed");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

#[test]
fn test_from_config_requires_request_url() {
    let config = Config::new()
        .with_consumer_key("ck")
        .with_consumer_secret("cs");

    let err = Client::from_config(Context::new(), &config).expect_err("url is required");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

#[test]
fn test_from_config_requires_consumer_secret() {
    let config = Config::new()
        .with_consumer_key("ck")
        .with_request_url("http://example.com/resource");

    let err = Client::from_config(Context::new(), &config).expect_err("secret is required");
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}
