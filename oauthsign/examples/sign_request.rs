use anyhow::Result;
use oauthsign::oauth1::{Client, Config, Parameters, RequestMethod, RequestSigner, SigningContext};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    // Only sign: produce the header and hand it to any transport.
    let ctx = SigningContext::builder()
        .consumer_key("dpf43f3p2l4k3l03")
        .consumer_secret("kd94hf93k423kf44")
        .token("nnch734d00sl2jdk")
        .token_secret("pfkkdhi9sl3r4s00")
        .build()?;
    let signer = RequestSigner::new(ctx);

    let params = Parameters::from([
        ("file".to_string(), "vacation.jpg".to_string()),
        ("size".to_string(), "original".to_string()),
    ]);
    let signed = signer.sign(RequestMethod::Get, "http://photos.example.net/photos", &params);
    println!("base string: {}", signed.base_string);
    println!("{}", signed.authorization);

    // Sign and send through the default reqwest transport.
    let ctx = oauthsign::default_context();
    let config = Config::new()
        .with_consumer_key("dpf43f3p2l4k3l03")
        .with_consumer_secret("kd94hf93k423kf44")
        .with_request_url("https://httpbin.org/anything/photos.%format%")
        .with_format("json")
        .from_env(&ctx);

    let client = Client::from_config(ctx, &config)?;
    match client.send(&params).await {
        Ok(resp) => println!("Response status: {}", resp.status()),
        Err(e) => eprintln!("Request failed: {e}"),
    }

    Ok(())
}
