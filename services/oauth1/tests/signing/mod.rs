use super::fixed_signer;
use oauthsign_core::{ErrorKind, Result};
use oauthsign_oauth1::{Parameters, RequestMethod, SigningContext};
use percent_encoding::percent_decode_str;
use pretty_assertions::assert_eq;

fn params<const N: usize>(pairs: [(&str, &str); N]) -> Parameters {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_reference_vector() -> Result<()> {
    let ctx = SigningContext::builder()
        .consumer_key("ck")
        .consumer_secret("cs")
        .build()?;
    let signer = fixed_signer(ctx, 1_000_000_000, &"N".repeat(44))?;

    let signed = signer.sign(
        RequestMethod::Get,
        "http://example.com/resource",
        &params([("a", "1"), ("b", "2")]),
    );

    assert_eq!(
        signed.base_string,
        "GET&http%3A%2F%2Fexample.com%2Fresource&a%3D1%26b%3D2\
         %26oauth_consumer_key%3Dck\
         %26oauth_nonce%3DNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNN\
         %26oauth_signature_method%3DHMAC-SHA1\
         %26oauth_timestamp%3D1000000000%26oauth_version%3D1.0"
    );
    assert_eq!(signed.signature, "FjLtiERgimbzKQ/uaVhJZAOriXY=");
    Ok(())
}

#[test]
fn test_photos_example_vector() -> Result<()> {
    let ctx = SigningContext::builder()
        .consumer_key("dpf43f3p2l4k3l03")
        .consumer_secret("kd94hf93k423kf44")
        .token("nnch734d00sl2jdk")
        .token_secret("pfkkdhi9sl3r4s00")
        .build()?;
    let signer = fixed_signer(ctx, 1_191_242_096, "kllo9940pd9333jh")?;

    let signed = signer.sign(
        RequestMethod::Get,
        "http://photos.example.net/photos",
        &params([("file", "vacation.jpg"), ("size", "original")]),
    );

    assert_eq!(signed.signature, "tR3+Ty81lMeYAr/Fid0kMTYa/WM=");
    assert_eq!(
        signed.authorization,
        "Authorization: OAuth oauth_consumer_key=\"dpf43f3p2l4k3l03\", \
         oauth_nonce=\"kllo9940pd9333jh\", oauth_signature_method=\"HMAC-SHA1\", \
         oauth_timestamp=\"1191242096\", oauth_token=\"nnch734d00sl2jdk\", \
         oauth_version=\"1.0\", oauth_signature=\"tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D\""
    );
    Ok(())
}

#[test]
fn test_post_with_reserved_characters() -> Result<()> {
    let ctx = SigningContext::builder()
        .consumer_key("ck")
        .consumer_secret("cs")
        .token("tk")
        .token_secret("ts")
        .build()?;
    let signer = fixed_signer(ctx, 1_000_000_000, &"N".repeat(44))?;

    let signed = signer.sign(
        RequestMethod::Post,
        "https://api.example.com/1/statuses/update.json",
        &params([(
            "status",
            "Hello Ladies + Gentlemen, a signed OAuth request!",
        )]),
    );

    assert!(signed.base_string.starts_with(
        "POST&https%3A%2F%2Fapi.example.com%2F1%2Fstatuses%2Fupdate.json&oauth_consumer_key%3Dck"
    ));
    assert!(signed.base_string.ends_with(
        "%26status%3DHello%2520Ladies%2520%252B%2520Gentlemen%252C%2520a%2520signed%2520OAuth%2520request%2521"
    ));
    Ok(())
}

#[test]
fn test_multi_valued_header_vector() -> Result<()> {
    let ctx = SigningContext::builder()
        .consumer_key("ck")
        .consumer_secret("cs")
        .header("x_extra", "b", false)
        .header("x_extra", "a", false)
        .build()?;
    let signer = fixed_signer(ctx, 1_000_000_000, &"N".repeat(44))?;

    let signed = signer.sign(
        RequestMethod::Get,
        "http://example.com/resource",
        &Parameters::new(),
    );

    assert!(signed
        .base_string
        .ends_with("%26oauth_version%3D1.0%26x_extra%3Da%26x_extra%3Db"));
    assert_eq!(signed.signature, "z6rRxke756OdcMfgnFQnrhOrjs0=");
    assert!(signed
        .authorization
        .contains("x_extra=\"a\", x_extra=\"b\", oauth_signature="));
    Ok(())
}

#[test]
fn test_token_secret_changes_signature() -> Result<()> {
    let build = |secret: Option<&str>| -> Result<String> {
        let mut builder = SigningContext::builder()
            .consumer_key("ck")
            .consumer_secret("cs")
            .token("tk");
        if let Some(secret) = secret {
            builder = builder.token_secret(secret);
        }
        let signer = fixed_signer(builder.build()?, 1_000_000_000, "nonce")?;
        Ok(signer
            .sign(RequestMethod::Get, "http://example.com/", &Parameters::new())
            .signature)
    };

    assert_ne!(build(None)?, build(Some("ts"))?);
    assert_eq!(build(Some("ts"))?, build(Some("ts"))?);
    Ok(())
}

#[test]
fn test_base_uri_round_trip() -> Result<()> {
    let ctx = SigningContext::builder()
        .consumer_key("ck")
        .consumer_secret("cs")
        .build()?;
    let signer = fixed_signer(ctx, 1_000_000_000, "nonce")?;
    let uri = "https://api.example.com:8443/v1/a path/~user/file.json";

    let signed = signer.sign(RequestMethod::Put, uri, &params([("k", "v")]));
    let segment = signed
        .base_string
        .split('&')
        .nth(1)
        .expect("base uri segment must exist");

    assert_eq!(percent_decode_str(segment).decode_utf8_lossy(), uri);
    Ok(())
}

#[test]
fn test_delete_is_rejected() -> Result<()> {
    let ctx = SigningContext::builder()
        .consumer_key("ck")
        .consumer_secret("cs")
        .build()?;
    let signer = fixed_signer(ctx, 1_000_000_000, "nonce")?;

    let err = signer
        .authorization_header("DELETE", "http://example.com/resource", &Parameters::new())
        .expect_err("DELETE must be rejected");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    Ok(())
}

#[test]
fn test_missing_consumer_secret_is_rejected() {
    let err = SigningContext::builder()
        .consumer_key("ck")
        .token("tk")
        .token_secret("ts")
        .build()
        .expect_err("consumer secret is required");
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}
