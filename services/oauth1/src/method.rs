use std::fmt::{Display, Formatter};
use std::str::FromStr;

use oauthsign_core::{Error, Result};

/// HTTP methods a request can be signed and sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    /// `GET`, parameters travel in the query string.
    Get,
    /// `POST`, parameters travel in a form body.
    Post,
    /// `PUT`, parameters travel in a form body.
    Put,
}

impl RequestMethod {
    /// Upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
        }
    }

    /// Returns true if parameters are sent as the request body.
    pub fn has_form_body(&self) -> bool {
        !matches!(self, RequestMethod::Get)
    }
}

impl Display for RequestMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(RequestMethod::Get),
            "POST" => Ok(RequestMethod::Post),
            "PUT" => Ok(RequestMethod::Put),
            v => Err(Error::config_invalid(format!(
                "unknown http request type: {v}"
            ))),
        }
    }
}

impl TryFrom<&http::Method> for RequestMethod {
    type Error = Error;

    fn try_from(method: &http::Method) -> Result<Self> {
        method.as_str().parse()
    }
}

impl From<RequestMethod> for http::Method {
    fn from(method: RequestMethod) -> Self {
        match method {
            RequestMethod::Get => http::Method::GET,
            RequestMethod::Post => http::Method::POST,
            RequestMethod::Put => http::Method::PUT,
        }
    }
}
