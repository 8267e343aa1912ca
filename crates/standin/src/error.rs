use derive_more::Display;
use serde::{Deserialize, Serialize};
use standin_core::error::{
    ConfigError, ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError, MemberError,
    RegistryError,
};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_undefined_member(&self) -> bool {
        self.kind == ErrorKind::UndefinedMember
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match (err.class, err.origin) {
            (ErrorClass::NotFound, CoreErrorOrigin::Dispatch) => ErrorKind::UndefinedMember,
            (ErrorClass::NotFound, _) => ErrorKind::NotDeclared,
            (ErrorClass::Conflict, _) => ErrorKind::Conflict,
            (ErrorClass::InvalidInput, _) => ErrorKind::InvalidInput,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

impl From<MemberError> for Error {
    fn from(err: MemberError) -> Self {
        InternalError::from(err).into()
    }
}

impl From<RegistryError> for Error {
    fn from(err: RegistryError) -> Self {
        InternalError::from(err).into()
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        InternalError::from(err).into()
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum ErrorKind {
    /// A type path is already taken by another model.
    Conflict,

    /// Malformed config or type name.
    InvalidInput,

    /// No type is declared under the requested path.
    NotDeclared,

    /// The receiver does not define the member.
    UndefinedMember,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum ErrorOrigin {
    Config,
    Dispatch,
    Registry,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Config => Self::Config,
            CoreErrorOrigin::Dispatch => Self::Dispatch,
            CoreErrorOrigin::Registry => Self::Registry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_errors_map_to_undefined_member() {
        let err: Error = MemberError::undefined("OrderNullObject", "nope").into();

        assert!(err.is_undefined_member());
        assert_eq!(err.origin, ErrorOrigin::Dispatch);
        assert_eq!(err.to_string(), "undefined member 'nope' for OrderNullObject");
    }

    #[test]
    fn registry_errors_keep_their_kind() {
        let missing: Error = RegistryError::NotDeclared("Ghost".to_string()).into();
        assert_eq!(missing.kind, ErrorKind::NotDeclared);
        assert_eq!(missing.origin, ErrorOrigin::Registry);

        let invalid: Error = RegistryError::InvalidName(String::new()).into();
        assert_eq!(invalid.kind, ErrorKind::InvalidInput);

        let conflict: Error = RegistryError::MimicsConflict {
            path: "OrderNullObject".to_string(),
            existing: "shop::Order",
            requested: "shop::Customer",
        }
        .into();
        assert_eq!(conflict.kind, ErrorKind::Conflict);
    }

    #[test]
    fn config_errors_are_invalid_input() {
        let err: Error = ConfigError::Parse("bad".to_string()).into();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
        assert_eq!(err.origin.to_string(), "Config");
    }

    #[test]
    fn errors_serialize_with_kind_and_origin() {
        let err: Error = MemberError::undefined("Order", "nope").into();
        let json = serde_json::to_value(&err).expect("serialize");

        assert_eq!(json["kind"], "UndefinedMember");
        assert_eq!(json["origin"], "Dispatch");
        assert_eq!(json["message"], "undefined member 'nope' for Order");

        let back: Error = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, err);
    }
}
