#[macro_export]
macro_rules! column_type_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Binary,
                Verbatim,
                is_numeric = false,
                is_temporal = false,
                is_textual = false,
                names = ["binary", "blob", "bytea", "varbinary"]
            ),
            (
                Boolean,
                Boolean,
                is_numeric = false,
                is_temporal = false,
                is_textual = false,
                names = ["boolean", "bool"]
            ),
            (
                Date,
                Verbatim,
                is_numeric = false,
                is_temporal = true,
                is_textual = false,
                names = ["date"]
            ),
            (
                Datetime,
                DateTime,
                is_numeric = false,
                is_temporal = true,
                is_textual = false,
                names = [
                    "datetime",
                    "timestamp",
                    "timestamptz",
                    "timestamp without time zone",
                    "timestamp with time zone"
                ]
            ),
            (
                Decimal,
                Decimal,
                is_numeric = true,
                is_temporal = false,
                is_textual = false,
                names = ["decimal", "numeric", "money"]
            ),
            (
                Float,
                Float,
                is_numeric = true,
                is_temporal = false,
                is_textual = false,
                names = ["float", "double", "double precision", "real", "float4", "float8"]
            ),
            (
                Integer,
                Integer,
                is_numeric = true,
                is_temporal = false,
                is_textual = false,
                names = [
                    "integer",
                    "int",
                    "bigint",
                    "smallint",
                    "int2",
                    "int4",
                    "int8",
                    "serial",
                    "bigserial"
                ]
            ),
            (
                Json,
                Verbatim,
                is_numeric = false,
                is_temporal = false,
                is_textual = false,
                names = ["json", "jsonb"]
            ),
            (
                String,
                Verbatim,
                is_numeric = false,
                is_temporal = false,
                is_textual = true,
                names = ["string", "varchar", "character varying", "char", "character", "citext"]
            ),
            (
                Text,
                Verbatim,
                is_numeric = false,
                is_temporal = false,
                is_textual = true,
                names = ["text"]
            ),
            (
                Time,
                Verbatim,
                is_numeric = false,
                is_temporal = true,
                is_textual = false,
                names = ["time"]
            ),
            (
                Uuid,
                Verbatim,
                is_numeric = false,
                is_temporal = false,
                is_textual = false,
                names = ["uuid"]
            ),
        }
    };
}

#[macro_export]
macro_rules! column_type_registry {
    ($macro:ident) => {
        $crate::column_type_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::column_type_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($ty:ident, $coercion:ident, is_numeric = $is_numeric:expr, is_temporal = $is_temporal:expr, is_textual = $is_textual:expr, names = [$($name:literal),+ $(,)?]) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ColumnType::$ty => $crate::ColumnTypeMetadata {
                    coercion: $crate::DefaultCoercion::$coercion,
                    is_numeric: $is_numeric,
                    is_temporal: $is_temporal,
                    is_textual: $is_textual,
                    names: &[$($name),+],
                },
            )*
        }
    };
}

macro_rules! all_types_from_registry {
    ( @entries $( ($ty:ident, $($rest:tt)*) ),* $(,)? ) => {
        [ $( $crate::ColumnType::$ty ),* ]
    };
}
