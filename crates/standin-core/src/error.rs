use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Every domain error below folds into this shape before it crosses the
/// facade boundary.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_undefined_member(&self) -> bool {
        matches!(
            (self.class, self.origin),
            (ErrorClass::NotFound, ErrorOrigin::Dispatch)
        )
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// MemberError
///
/// Raised when a member is read on a receiver that does not define it.
/// Null objects and real records raise the same variant, so callers can
/// treat both uniformly.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MemberError {
    #[error("undefined member '{member}' for {receiver}")]
    Undefined { receiver: String, member: String },
}

impl MemberError {
    pub fn undefined(receiver: impl Into<String>, member: impl Into<String>) -> Self {
        Self::Undefined {
            receiver: receiver.into(),
            member: member.into(),
        }
    }

    #[must_use]
    pub fn member(&self) -> &str {
        match self {
            Self::Undefined { member, .. } => member,
        }
    }

    #[must_use]
    pub fn receiver(&self) -> &str {
        match self {
            Self::Undefined { receiver, .. } => receiver,
        }
    }

    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::Undefined { .. } => ErrorClass::NotFound,
        }
    }
}

impl From<MemberError> for InternalError {
    fn from(err: MemberError) -> Self {
        Self::new(err.class(), ErrorOrigin::Dispatch, err.to_string())
    }
}

///
/// RegistryError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RegistryError {
    #[error("invalid null object type name '{0}'")]
    InvalidName(String),

    #[error("null object type '{path}' already mimics '{existing}', cannot mimic '{requested}'")]
    MimicsConflict {
        path: String,
        existing: &'static str,
        requested: &'static str,
    },

    #[error("null object type '{0}' is not declared")]
    NotDeclared(String),
}

impl RegistryError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidName(_) => ErrorClass::InvalidInput,
            Self::MimicsConflict { .. } => ErrorClass::Conflict,
            Self::NotDeclared(_) => ErrorClass::NotFound,
        }
    }
}

impl From<RegistryError> for InternalError {
    fn from(err: RegistryError) -> Self {
        Self::new(err.class(), ErrorOrigin::Registry, err.to_string())
    }
}

///
/// ConfigError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(String),

    #[error("invalid type suffix '{0}': must be empty or an identifier fragment")]
    InvalidTypeSuffix(String),
}

impl ConfigError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::Parse(_) | Self::InvalidTypeSuffix(_) => ErrorClass::InvalidInput,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.message().to_string())
    }
}

impl From<ConfigError> for InternalError {
    fn from(err: ConfigError) -> Self {
        Self::new(err.class(), ErrorOrigin::Config, err.to_string())
    }
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    NotFound,
    Conflict,
    InvalidInput,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::InvalidInput => "invalid_input",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Dispatch,
    Registry,
    Config,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Dispatch => "dispatch",
            Self::Registry => "registry",
            Self::Config => "config",
        };
        write!(f, "{label}")
    }
}
