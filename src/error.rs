//! This module implements `TemporalError`.

use alloc::borrow::Cow;
use core::fmt;

/// `TemporalError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// TypeError
    Type,
    /// RangeError
    Range,
    /// SyntaxError
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Type => "TypeError",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
        }
        .fmt(f)
    }
}

/// The error type for `temporal_instant`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalError {
    kind: ErrorKind,
    msg: ErrorMessage,
}

impl TemporalError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessage::None,
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a type error.
    #[inline]
    #[must_use]
    pub const fn r#type() -> Self {
        Self::new(ErrorKind::Type)
    }

    /// Create a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = ErrorMessage::Custom(msg.into());
        self
    }

    /// Add a well-known message to the error.
    #[inline]
    #[must_use]
    pub(crate) fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        self.msg.to_str()
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        match self.msg {
            ErrorMessage::Custom(msg) => msg,
            msg => Cow::Borrowed(msg.to_static_str()),
        }
    }
}

impl fmt::Display for TemporalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.to_str();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for TemporalError {}

/// The stable diagnostic messages raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ErrorMessage {
    // Range
    InstantOutOfRange,
    EpochValueOutOfRange,
    #[cfg(feature = "sys")]
    SystemTimeBeforeEpoch,

    // Type
    NotAnInstant,
    NotConvertibleToBigInt,

    // Syntax
    InvalidBigIntLiteral,

    // Other
    None,
    Custom(Cow<'static, str>),
}

impl ErrorMessage {
    fn to_str(&self) -> &str {
        match self {
            Self::Custom(msg) => msg.as_ref(),
            msg => msg.to_static_str(),
        }
    }

    fn to_static_str(&self) -> &'static str {
        match self {
            Self::InstantOutOfRange => "Instant nanoseconds are not within a valid epoch range.",
            Self::EpochValueOutOfRange => "Epoch value exceeds the representable range.",
            #[cfg(feature = "sys")]
            Self::SystemTimeBeforeEpoch => "System time is before the Unix epoch.",
            Self::NotAnInstant => "Not a Temporal.Instant",
            Self::NotConvertibleToBigInt => "Value cannot be converted to a BigInt.",
            Self::InvalidBigIntLiteral => "Invalid BigInt literal.",
            Self::None | Self::Custom(_) => "",
        }
    }
}
