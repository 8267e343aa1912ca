use standin_primitives::ColumnType;

///
/// ColumnModel
/// Runtime column metadata as reported by the host schema.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnModel {
    /// Column name as stored.
    pub name: &'static str,
    /// Declared type; selects the default coercion.
    pub ty: ColumnType,
    /// `true` when the column accepts NULL.
    pub null: bool,
    /// Raw default text, before coercion.
    pub default: Option<&'static str>,
}

impl ColumnModel {
    /// Nullable column without a default.
    #[must_use]
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            null: true,
            default: None,
        }
    }

    #[must_use]
    pub const fn not_null(self) -> Self {
        Self { null: false, ..self }
    }

    #[must_use]
    pub const fn with_default(self, raw: &'static str) -> Self {
        Self {
            default: Some(raw),
            ..self
        }
    }

    /// NOT NULL at the storage level.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        !self.null
    }
}
