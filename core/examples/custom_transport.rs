use async_trait::async_trait;
use bytes::Bytes;
use oauthsign_core::{Context, Error, HttpSend, Result, StaticEnv};
use std::collections::HashMap;

// A transport that answers every request locally, handy for dry runs.
#[derive(Debug)]
struct DryRunHttpSend;

#[async_trait]
impl HttpSend for DryRunHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let auth = req
            .headers()
            .get(http::header::AUTHORIZATION)
            .ok_or_else(|| Error::request_invalid("request is not signed"))?;

        println!("Would send {} {}", req.method(), req.uri());
        println!("  with authorization of {} bytes", auth.len());

        Ok(http::Response::new(Bytes::from_static(b"dry run")))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new()
        .with_http_send(DryRunHttpSend)
        .with_env(StaticEnv {
            envs: HashMap::from([("OAUTH_FORMAT".to_string(), "json".to_string())]),
        });

    println!("format from env: {:?}", ctx.env_var("OAUTH_FORMAT"));

    let req = http::Request::get("https://example.com/resource.json")
        .header(http::header::AUTHORIZATION, "OAuth oauth_signature=\"demo\"")
        .body(Bytes::new())?;

    let resp = ctx.http_send_as_string(req).await?;
    println!("Response: {}", resp.body());

    let unsigned = http::Request::get("https://example.com/resource.json").body(Bytes::new())?;
    if let Err(e) = ctx.http_send(unsigned).await {
        println!("Unsigned request rejected: {e}");
    }

    Ok(())
}
