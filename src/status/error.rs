use super::Kind;
use std::borrow::Cow;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct StatusError {
    kind: Option<Kind>,
    status: u16,
    message: Cow<'static, str>,
}

impl StatusError {
    pub const UNMAPPED_NAME: &'static str = "HttpError";

    pub fn new(kind: Kind) -> Self {
        Self::with_message(kind, None::<&'static str>)
    }

    /// An empty message counts as no message.
    pub fn with_message<M>(kind: Kind, message: Option<M>) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            kind: Some(kind),
            status: kind.as_u16(),
            message: non_empty(message).unwrap_or(Cow::Borrowed(kind.default_message())),
        }
    }

    pub fn unmapped<M>(status: u16, message: Option<M>) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        let message = non_empty(message).unwrap_or_else(|| {
            Cow::Borrowed(
                http::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|status| status.canonical_reason())
                    .unwrap_or("Unknown Status"),
            )
        });
        Self {
            kind: Kind::from_u16(status),
            status,
            message,
        }
    }

    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.map_or(Self::UNMAPPED_NAME, Kind::name)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    pub fn expose(&self) -> bool {
        self.status < 500
    }
}

fn non_empty<M>(message: Option<M>) -> Option<Cow<'static, str>>
where
    M: Into<Cow<'static, str>>,
{
    message.map(Into::into).filter(|message| !message.is_empty())
}

#[cfg(feature = "serde")]
impl serde::Serialize for StatusError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("StatusError", 4)?;
        state.serialize_field("message", self.message())?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("statusCode", &self.status)?;
        state.end()
    }
}
