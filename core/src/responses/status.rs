#![deny(missing_docs)]

//! # HTTP Status
//!
//! Symbolic status constants and the resolved status of a response.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

macro_rules! statuses {
    ($($variant:ident = $code:literal, $name:literal, $reason:literal;)*) => {
        /// Known symbolic HTTP statuses.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StatusSymbol {
            $(
                #[doc = $reason]
                $variant,
            )*
        }

        impl StatusSymbol {
            /// Every known status, in code order.
            pub const ALL: &'static [StatusSymbol] = &[$(StatusSymbol::$variant),*];

            /// Numeric code.
            pub fn code(self) -> u16 {
                match self {
                    $(StatusSymbol::$variant => $code,)*
                }
            }

            /// Symbolic constant name (e.g. `NOT_FOUND`).
            pub fn name(self) -> &'static str {
                match self {
                    $(StatusSymbol::$variant => $name,)*
                }
            }

            /// Reason phrase (e.g. `Not Found`).
            pub fn reason(self) -> &'static str {
                match self {
                    $(StatusSymbol::$variant => $reason,)*
                }
            }
        }
    };
}

statuses! {
    Ok = 200, "OK", "OK";
    Created = 201, "CREATED", "Created";
    Accepted = 202, "ACCEPTED", "Accepted";
    NoContent = 204, "NO_CONTENT", "No Content";
    ResetContent = 205, "RESET_CONTENT", "Reset Content";
    PartialContent = 206, "PARTIAL_CONTENT", "Partial Content";
    MovedPermanently = 301, "MOVED_PERMANENTLY", "Moved Permanently";
    Found = 302, "FOUND", "Found";
    SeeOther = 303, "SEE_OTHER", "See Other";
    NotModified = 304, "NOT_MODIFIED", "Not Modified";
    UseProxy = 305, "USE_PROXY", "Use Proxy";
    TemporaryRedirect = 307, "TEMPORARY_REDIRECT", "Temporary Redirect";
    PermanentRedirect = 308, "PERMANENT_REDIRECT", "Permanent Redirect";
    BadRequest = 400, "BAD_REQUEST", "Bad Request";
    Unauthorized = 401, "UNAUTHORIZED", "Unauthorized";
    PaymentRequired = 402, "PAYMENT_REQUIRED", "Payment Required";
    Forbidden = 403, "FORBIDDEN", "Forbidden";
    NotFound = 404, "NOT_FOUND", "Not Found";
    MethodNotAllowed = 405, "METHOD_NOT_ALLOWED", "Method Not Allowed";
    NotAcceptable = 406, "NOT_ACCEPTABLE", "Not Acceptable";
    ProxyAuthenticationRequired = 407, "PROXY_AUTHENTICATION_REQUIRED", "Proxy Authentication Required";
    RequestTimeout = 408, "REQUEST_TIMEOUT", "Request Timeout";
    Conflict = 409, "CONFLICT", "Conflict";
    Gone = 410, "GONE", "Gone";
    LengthRequired = 411, "LENGTH_REQUIRED", "Length Required";
    PreconditionFailed = 412, "PRECONDITION_FAILED", "Precondition Failed";
    RequestEntityTooLarge = 413, "REQUEST_ENTITY_TOO_LARGE", "Request Entity Too Large";
    RequestUriTooLong = 414, "REQUEST_URI_TOO_LONG", "Request-URI Too Long";
    UnsupportedMediaType = 415, "UNSUPPORTED_MEDIA_TYPE", "Unsupported Media Type";
    RequestedRangeNotSatisfiable = 416, "REQUESTED_RANGE_NOT_SATISFIABLE", "Requested Range Not Satisfiable";
    ExpectationFailed = 417, "EXPECTATION_FAILED", "Expectation Failed";
    PreconditionRequired = 428, "PRECONDITION_REQUIRED", "Precondition Required";
    TooManyRequests = 429, "TOO_MANY_REQUESTS", "Too Many Requests";
    RequestHeaderFieldsTooLarge = 431, "REQUEST_HEADER_FIELDS_TOO_LARGE", "Request Header Fields Too Large";
    InternalServerError = 500, "INTERNAL_SERVER_ERROR", "Internal Server Error";
    NotImplemented = 501, "NOT_IMPLEMENTED", "Not Implemented";
    BadGateway = 502, "BAD_GATEWAY", "Bad Gateway";
    ServiceUnavailable = 503, "SERVICE_UNAVAILABLE", "Service Unavailable";
    GatewayTimeout = 504, "GATEWAY_TIMEOUT", "Gateway Timeout";
    HttpVersionNotSupported = 505, "HTTP_VERSION_NOT_SUPPORTED", "HTTP Version Not Supported";
    NetworkAuthenticationRequired = 511, "NETWORK_AUTHENTICATION_REQUIRED", "Network Authentication Required";
}

impl StatusSymbol {
    /// The symbolic status of a numeric code, if one is known.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }
}

impl fmt::Display for StatusSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatusSymbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown status `{}`", s))
    }
}

impl<'de> Deserialize<'de> for StatusSymbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The status a response ends up documented under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedStatus {
    /// A known symbolic status.
    Known(StatusSymbol),
    /// A code without a symbolic constant; legitimate, just unnamed.
    NonStandard(u16),
}

impl ResolvedStatus {
    /// Numeric code.
    pub fn code(self) -> u16 {
        match self {
            ResolvedStatus::Known(symbol) => symbol.code(),
            ResolvedStatus::NonStandard(code) => code,
        }
    }

    /// Symbolic name, if any.
    pub fn name(self) -> Option<&'static str> {
        match self {
            ResolvedStatus::Known(symbol) => Some(symbol.name()),
            ResolvedStatus::NonStandard(_) => None,
        }
    }

    /// Reason phrase, if any.
    pub fn reason(self) -> Option<&'static str> {
        match self {
            ResolvedStatus::Known(symbol) => Some(symbol.reason()),
            ResolvedStatus::NonStandard(_) => None,
        }
    }

    /// Key of the response map (`"201"`).
    pub fn key(self) -> String {
        self.code().to_string()
    }

    /// Resolves a numeric code, falling back to a non-standard status.
    pub fn from_code(code: u16) -> Self {
        StatusSymbol::from_code(code)
            .map(ResolvedStatus::Known)
            .unwrap_or(ResolvedStatus::NonStandard(code))
    }
}

impl From<StatusSymbol> for ResolvedStatus {
    fn from(symbol: StatusSymbol) -> Self {
        ResolvedStatus::Known(symbol)
    }
}
