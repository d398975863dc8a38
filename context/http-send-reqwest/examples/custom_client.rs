use anyhow::Result;
use oauthsign_core::{Context, OsEnv};
use oauthsign_http_send_reqwest::ReqwestHttpSend;
use oauthsign_oauth1::{Client, Config, Parameters};
use reqwest::Client as HttpClient;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Timeouts belong to the transport, signing has none.
    let http = HttpClient::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("oauthsign-example/1.0")
        .build()?;

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::new(http))
        .with_env(OsEnv);

    // Reads OAUTH_CONSUMER_KEY, OAUTH_CONSUMER_SECRET, OAUTH_TOKEN, ...
    let config = Config::new()
        .with_request_url("https://httpbin.org/anything/statuses.%format%")
        .with_format("json")
        .from_env(&ctx);

    let client = match Client::from_config(ctx, &config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return Ok(());
        }
    };

    let params = Parameters::from([("status".to_string(), "hello world".to_string())]);
    println!("Sending {} {}", client.method(), client.url());

    match client.send(&params).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("{}", String::from_utf8_lossy(resp.body()));
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    Ok(())
}
