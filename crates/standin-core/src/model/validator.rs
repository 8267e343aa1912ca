///
/// ValidatorKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValidatorKind {
    Absence,
    Acceptance,
    Confirmation,
    Custom(&'static str),
    Exclusion,
    Format,
    Inclusion,
    Length,
    Numericality,
    Presence,
    Uniqueness,
}

///
/// ValidatorOption
///
/// Any option makes a validator conditional or lenient.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValidatorOption {
    AllowBlank,
    AllowNil,
    If(&'static str),
    Message(&'static str),
    On(&'static str),
    Strict,
    Unless(&'static str),
}

///
/// ValidatorModel
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValidatorModel {
    pub attribute: &'static str,
    pub kind: ValidatorKind,
    pub options: &'static [ValidatorOption],
}

impl ValidatorModel {
    #[must_use]
    pub const fn new(attribute: &'static str, kind: ValidatorKind) -> Self {
        Self {
            attribute,
            kind,
            options: &[],
        }
    }

    #[must_use]
    pub const fn presence(attribute: &'static str) -> Self {
        Self::new(attribute, ValidatorKind::Presence)
    }

    #[must_use]
    pub const fn with_options(self, options: &'static [ValidatorOption]) -> Self {
        Self { options, ..self }
    }

    #[must_use]
    pub const fn is_unconditional(&self) -> bool {
        self.options.is_empty()
    }

    /// Unconditional presence check: the only kind that guarantees a value.
    #[must_use]
    pub const fn guarantees_presence(&self) -> bool {
        matches!(self.kind, ValidatorKind::Presence) && self.is_unconditional()
    }
}
