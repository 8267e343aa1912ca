#[macro_use]
mod macros;

use std::{fmt, str::FromStr};

///
/// ColumnType
///
/// Declared type of a reflected column, as reported by the host schema.
/// Every type routes its raw default string through one `DefaultCoercion`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum ColumnType {
    Binary,
    Boolean,
    Date,
    Datetime,
    Decimal,
    Float,
    Integer,
    Json,
    String,
    Text,
    Time,
    Uuid,
}

impl ColumnType {
    /// Return the full metadata descriptor for one column type.
    #[must_use]
    pub const fn metadata(self) -> ColumnTypeMetadata {
        column_type_registry!(metadata_from_registry, self)
    }

    /// Return how a raw default string of this type is coerced.
    #[must_use]
    pub const fn coercion(self) -> DefaultCoercion {
        self.metadata().coercion
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.metadata().is_numeric
    }

    #[must_use]
    pub const fn is_temporal(self) -> bool {
        self.metadata().is_temporal
    }

    #[must_use]
    pub const fn is_textual(self) -> bool {
        self.metadata().is_textual
    }

    /// Canonical host type name (the first registered name).
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.metadata().names[0]
    }

    ///
    /// Resolve a host or SQL type name.
    ///
    /// Matching is case-insensitive and ignores a trailing size/precision
    /// suffix, so `VARCHAR(255)` and `decimal(10, 2)` both resolve.
    ///
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let base = name.split('(').next().unwrap_or(name).trim();
        if base.is_empty() {
            return None;
        }

        ALL_COLUMN_TYPES.into_iter().find(|ty| {
            ty.metadata()
                .names
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(base))
        })
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnType {
    type Err = UnknownColumnType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownColumnType(s.to_string()))
    }
}

///
/// UnknownColumnType
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownColumnType(pub String);

impl fmt::Display for UnknownColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown column type '{}'", self.0)
    }
}

impl std::error::Error for UnknownColumnType {}

///
/// ColumnTypeMetadata
///
/// Capability metadata shared across reflection and resolution layers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnTypeMetadata {
    pub coercion: DefaultCoercion,
    pub is_numeric: bool,
    pub is_temporal: bool,
    pub is_textual: bool,
    pub names: &'static [&'static str],
}

///
/// DefaultCoercion
///
/// How a raw column default string becomes a typed value.
/// `Verbatim` hands the raw string back unchanged.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefaultCoercion {
    Integer,
    Float,
    Decimal,
    DateTime,
    Boolean,
    Verbatim,
}

/// Ordered list of all column types in registry order.
pub const ALL_COLUMN_TYPES: [ColumnType; 12] = column_type_registry!(all_types_from_registry);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_variant_once() {
        for (i, ty) in ALL_COLUMN_TYPES.iter().enumerate() {
            assert_eq!(
                ALL_COLUMN_TYPES.iter().filter(|other| *other == ty).count(),
                1,
                "column type {ty} at position {i} should be registered once"
            );
        }
    }

    #[test]
    fn only_five_types_coerce() {
        let coercing: Vec<_> = ALL_COLUMN_TYPES
            .into_iter()
            .filter(|ty| ty.coercion() != DefaultCoercion::Verbatim)
            .collect();

        assert_eq!(
            coercing,
            vec![
                ColumnType::Boolean,
                ColumnType::Datetime,
                ColumnType::Decimal,
                ColumnType::Float,
                ColumnType::Integer,
            ]
        );
    }

    #[test]
    fn date_and_time_are_verbatim() {
        assert_eq!(ColumnType::Date.coercion(), DefaultCoercion::Verbatim);
        assert_eq!(ColumnType::Time.coercion(), DefaultCoercion::Verbatim);
        assert!(ColumnType::Date.is_temporal());
    }

    #[test]
    fn sql_aliases_resolve() {
        assert_eq!(ColumnType::from_name("BIGINT"), Some(ColumnType::Integer));
        assert_eq!(
            ColumnType::from_name("varchar(255)"),
            Some(ColumnType::String)
        );
        assert_eq!(
            ColumnType::from_name("decimal(10, 2)"),
            Some(ColumnType::Decimal)
        );
        assert_eq!(
            ColumnType::from_name("timestamp with time zone"),
            Some(ColumnType::Datetime)
        );
        assert_eq!(ColumnType::from_name("jsonb"), Some(ColumnType::Json));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(ColumnType::from_name(""), None);
        assert_eq!(ColumnType::from_name("geometry"), None);

        let err = "geometry".parse::<ColumnType>().expect_err("unknown type");
        assert_eq!(err.to_string(), "unknown column type 'geometry'");
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(ColumnType::Datetime.to_string(), "datetime");
        assert_eq!(
            "double precision".parse::<ColumnType>(),
            Ok(ColumnType::Float)
        );
    }
}
