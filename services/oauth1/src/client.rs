//! Hand-off of signed requests to the transport.
use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::HeaderValue;
use log::debug;
use oauthsign_core::{Context, Error, Result};

use crate::base_string::Parameters;
use crate::config::Config;
use crate::constants::*;
use crate::context::SigningContext;
use crate::method::RequestMethod;
use crate::sign_request::RequestSigner;

/// Client signs requests for one endpoint and sends them through the
/// [`Context`] transport.
///
/// Parameters travel as a query string for `GET` and as a
/// `application/x-www-form-urlencoded` body for `POST` and `PUT`.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    signer: RequestSigner,
    method: RequestMethod,
    url: String,
}

impl Client {
    /// Create a new client.
    ///
    /// `url` is the resolved request url, see [`resolve_url`].
    pub fn new(
        ctx: Context,
        signer: RequestSigner,
        method: RequestMethod,
        url: impl Into<String>,
    ) -> Self {
        Self {
            ctx,
            signer,
            method,
            url: url.into(),
        }
    }

    /// Create a client from config.
    ///
    /// The method and url are validated here, before any request is signed.
    pub fn from_config(ctx: Context, config: &Config) -> Result<Self> {
        let method = match &config.method {
            Some(v) => v.parse()?,
            None => RequestMethod::Get,
        };
        let template = config
            .request_url
            .as_deref()
            .ok_or_else(|| Error::config_invalid("request url is required"))?;
        let url = resolve_url(template, config.format.as_deref())?;
        let signer = RequestSigner::new(SigningContext::from_config(config)?);

        Ok(Self::new(ctx, signer, method, url))
    }

    /// Replace the request signer.
    pub fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    /// HTTP method requests are sent with.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// Resolved request url.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build a signed request without sending it.
    ///
    /// Pairs already present in the url query are signed together with
    /// `params`; a name given in both is rejected. The fragment is never
    /// sent.
    pub fn build_request(&self, params: &Parameters) -> Result<http::Request<Bytes>> {
        let (base, query) = split_url(&self.url);
        let signed_params = signed_parameters(query, params)?;
        let signed = self.signer.sign(self.method, base, &signed_params);

        let mut builder = http::Request::builder().method(http::Method::from(self.method));
        let body = if self.method.has_form_body() {
            let uri = match query {
                Some(query) => format!("{base}?{query}"),
                None => base.to_string(),
            };
            builder = builder.uri(uri).header(CONTENT_TYPE, FORM_URLENCODED);
            Bytes::from(form_encode(params))
        } else {
            let encoded = form_encode(&signed_params);
            let uri = if encoded.is_empty() {
                base.to_string()
            } else {
                format!("{base}?{encoded}")
            };
            builder = builder.uri(uri);
            Bytes::new()
        };

        let mut req = builder.body(body)?;
        req.headers_mut().insert(AUTHORIZATION, {
            let mut value: HeaderValue = signed.authorization_value().parse()?;
            value.set_sensitive(true);

            value
        });

        Ok(req)
    }

    /// Sign and send a request, returning the response.
    ///
    /// Transport failures are returned verbatim, nothing is retried.
    pub async fn send(&self, params: &Parameters) -> Result<http::Response<Bytes>> {
        let req = self.build_request(params)?;
        let resp = self.ctx.http_send(req).await?;
        debug!("got response: {}", resp.status());

        Ok(resp)
    }
}

/// Replace the `%format%` placeholder of a url template.
///
/// A template containing the placeholder requires a format, and the
/// result must be an absolute url.
pub fn resolve_url(template: &str, format: Option<&str>) -> Result<String> {
    let url = if template.contains(FORMAT_PLACEHOLDER) {
        let format = format.ok_or_else(|| {
            Error::config_invalid(format!("request url {template} requires a format"))
        })?;
        template.replace(FORMAT_PLACEHOLDER, format)
    } else {
        template.to_string()
    };

    let uri = http::Uri::try_from(url.as_str()).map_err(|e| {
        Error::config_invalid(format!("request url {url} is invalid")).with_source(e)
    })?;
    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(Error::config_invalid(format!(
            "request url {url} must be absolute"
        )));
    }

    Ok(url)
}

/// The url used in the signature base string: query and fragment removed.
pub fn base_uri(url: &str) -> &str {
    split_url(url).0
}

/// Split a url into its base and query, dropping the fragment.
fn split_url(url: &str) -> (&str, Option<&str>) {
    let url = url.split_once('#').map_or(url, |(url, _)| url);
    match url.split_once('?') {
        Some((base, query)) if !query.is_empty() => (base, Some(query)),
        Some((base, _)) => (base, None),
        None => (url, None),
    }
}

/// Url query pairs merged with `params`.
fn signed_parameters(query: Option<&str>, params: &Parameters) -> Result<Parameters> {
    let mut merged = params.clone();
    let Some(query) = query else {
        return Ok(merged);
    };

    for (name, value) in form_urlencoded::parse(query.as_bytes()) {
        if merged.contains_key(&*name) {
            return Err(Error::request_invalid(format!(
                "parameter {name} is given more than once"
            )));
        }
        merged.insert(name.into_owned(), value.into_owned());
    }

    Ok(merged)
}

fn form_encode(params: &Parameters) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}
