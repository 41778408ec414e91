mod error;

pub use error::StatusError;

use std::fmt;

pub const fn lookup(code: u16) -> Option<Kind> {
    Kind::from_u16(code)
}

macro_rules! kinds {
    ($($variant:ident = ($code:literal, $name:literal, $message:literal),)+) => {
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum Kind {
            $($variant,)+
        }

        impl Kind {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            pub const fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub const fn as_u16(self) -> u16 {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            pub const fn default_message(self) -> &'static str {
                match self {
                    $(Self::$variant => $message,)+
                }
            }
        }
    };
}

kinds! {
    BadRequest = (400, "BadRequestError", "Bad Request"),
    Unauthorized = (401, "UnauthorizedError", "Unauthorized"),
    PaymentRequired = (402, "PaymentRequiredError", "Payment Required"),
    Forbidden = (403, "ForbiddenError", "Forbidden"),
    NotFound = (404, "NotFoundError", "Not Found"),
    MethodNotAllowed = (405, "MethodNotAllowedError", "Method Not Allowed"),
    NotAcceptable = (406, "NotAcceptableError", "Not Acceptable"),
    ProxyAuthenticationRequired = (407, "ProxyAuthenticationRequiredError", "Proxy Authentication Required"),
    RequestTimeout = (408, "RequestTimeoutError", "Request Timeout"),
    Conflict = (409, "ConflictError", "Conflict"),
    Gone = (410, "GoneError", "Gone"),
    LengthRequired = (411, "LengthRequiredError", "Length Required"),
    PreconditionFailed = (412, "PreconditionFailedError", "Precondition Failed"),
    PayloadTooLarge = (413, "PayloadTooLargeError", "Payload Too Large"),
    UriTooLong = (414, "URITooLongError", "URI Too Long"),
    UnsupportedMediaType = (415, "UnsupportedMediaTypeError", "Unsupported Media Type"),
    RangeNotSatisfiable = (416, "RangeNotSatisfiableError", "Range Not Satisfiable"),
    ExpectationFailed = (417, "ExpectationFailedError", "Expectation Failed"),
    ImATeapot = (418, "ImATeapotError", "I'm a teapot"),
    MisdirectedRequest = (421, "MisdirectedRequestError", "Misdirected Request"),
    UnprocessableEntity = (422, "UnprocessableEntityError", "Unprocessable Entity"),
    Locked = (423, "LockedError", "Locked"),
    FailedDependency = (424, "FailedDependencyError", "Failed Dependency"),
    UnorderedCollection = (425, "UnorderedCollectionError", "Unordered Collection"),
    UpgradeRequired = (426, "UpgradeRequiredError", "Upgrade Required"),
    PreconditionRequired = (428, "PreconditionRequiredError", "Precondition Required"),
    TooManyRequests = (429, "TooManyRequestsError", "Too Many Requests"),
    RequestHeaderFieldsTooLarge = (431, "RequestHeaderFieldsTooLargeError", "Request Header Fields Too Large"),
    UnavailableForLegalReasons = (451, "UnavailableForLegalReasonsError", "Unavailable For Legal Reasons"),
    InternalServerError = (500, "InternalServerError", "Internal Server Error"),
    NotImplemented = (501, "NotImplementedError", "Not Implemented"),
    BadGateway = (502, "BadGatewayError", "Bad Gateway"),
    ServiceUnavailable = (503, "ServiceUnavailableError", "Service Unavailable"),
    GatewayTimeout = (504, "GatewayTimeoutError", "Gateway Timeout"),
    HttpVersionNotSupported = (505, "HTTPVersionNotSupportedError", "HTTP Version Not Supported"),
    VariantAlsoNegotiates = (506, "VariantAlsoNegotiatesError", "Variant Also Negotiates"),
    InsufficientStorage = (507, "InsufficientStorageError", "Insufficient Storage"),
    LoopDetected = (508, "LoopDetectedError", "Loop Detected"),
    BandwidthLimitExceeded = (509, "BandwidthLimitExceededError", "Bandwidth Limit Exceeded"),
    NotExtended = (510, "NotExtendedError", "Not Extended"),
    NetworkAuthenticationRequired = (511, "NetworkAuthenticationRequiredError", "Network Authentication Required"),
}

impl Kind {
    pub fn status_code(self) -> http::StatusCode {
        // registry codes are all within 400..=599
        http::StatusCode::from_u16(self.as_u16()).unwrap()
    }

    pub const fn is_client_error(self) -> bool {
        matches!(self.as_u16(), 400..=499)
    }

    pub const fn is_server_error(self) -> bool {
        matches!(self.as_u16(), 500..=599)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Kind> for u16 {
    fn from(value: Kind) -> Self {
        value.as_u16()
    }
}

impl TryFrom<u16> for Kind {
    type Error = UnmappedStatus;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_u16(value).ok_or(UnmappedStatus(value))
    }
}

impl TryFrom<http::StatusCode> for Kind {
    type Error = UnmappedStatus;

    fn try_from(value: http::StatusCode) -> Result<Self, Self::Error> {
        Self::try_from(value.as_u16())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("status {0} has no registry entry")]
pub struct UnmappedStatus(pub u16);
