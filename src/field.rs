//! Field-registration tables binding settings keys to record fields.
//!
//! Each description type exposes a static table of [`Field`] entries. Loading,
//! programmatic overrides and diagnostics all walk the table, so the record
//! types themselves stay plain data.

use crate::{
    config::SectionSource,
    error::{Error, Result},
    validate::{self, Issue, ValidationPolicy},
};
use tracing::{info, warn};

/// A value type that can be read from and rendered to a settings string.
pub trait FieldValue: Sized {
    fn parse_value(raw: &str) -> Result<Self, String>;
    fn render(&self) -> String;
}

impl FieldValue for u32 {
    fn parse_value(raw: &str) -> Result<Self, String> {
        raw.trim().parse().map_err(|err| format!("{err}"))
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for f32 {
    fn parse_value(raw: &str) -> Result<Self, String> {
        let value: f32 = raw.trim().parse().map_err(|err| format!("{err}"))?;
        if !value.is_finite() {
            return Err("value must be finite".to_string());
        }
        Ok(value)
    }

    fn render(&self) -> String {
        format!("{self:?}")
    }
}

/// Accepts the spellings an INI reader usually understands as booleans.
impl FieldValue for bool {
    fn parse_value(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err("expected a boolean".to_string()),
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

/// One entry of a field table: the settings key plus typed accessors.
pub struct Field<T> {
    pub key: &'static str,
    apply: fn(&mut T, &str) -> Result<(), String>,
    render: fn(&T) -> String,
}

impl<T> Field<T> {
    pub const fn new(
        key: &'static str,
        apply: fn(&mut T, &str) -> Result<(), String>,
        render: fn(&T) -> String,
    ) -> Self {
        Self { key, apply, render }
    }

    /// Parses `raw` and stores it. The target is left untouched on error.
    pub fn apply(&self, target: &mut T, raw: &str) -> Result<()> {
        (self.apply)(target, raw).map_err(|reason| Error::InvalidValue {
            key: self.key.to_string(),
            value: raw.to_string(),
            reason,
        })
    }

    pub fn render(&self, target: &T) -> String {
        (self.render)(target)
    }
}

/// Builds a [`Field`] entry for `$ty` bound to the (possibly nested) field path.
macro_rules! field {
    ($ty:ty, $key:literal => $($path:ident).+) => {
        $crate::field::Field::new(
            $key,
            |target: &mut $ty, raw: &str| -> ::std::result::Result<(), String> {
                target.$($path).+ = $crate::field::FieldValue::parse_value(raw)?;
                Ok(())
            },
            |target: &$ty| -> String { $crate::field::FieldValue::render(&target.$($path).+) },
        )
    };
}
pub(crate) use field;

/// A record whose fields are bound through a static field table.
pub trait Configurable: Sized + 'static {
    /// Name used in log lines and validation errors.
    const SUBJECT: &'static str;

    fn fields() -> &'static [Field<Self>];

    /// Lists every constraint the current values violate.
    fn check(&self) -> Vec<Issue> {
        Vec::new()
    }

    /// Overwrites each field whose key is present in `section`.
    ///
    /// Missing keys keep the current value. A malformed value is reported and
    /// the current value is kept as well. Keys without a field are ignored.
    fn load(&mut self, source: &dyn SectionSource, section: &str) {
        for field in Self::fields() {
            let Some(raw) = source.get(section, field.key) else {
                continue;
            };
            if let Err(err) = field.apply(self, raw) {
                warn!(
                    "[{section}] {err}. Keeping {} = {}",
                    field.key,
                    field.render(self)
                );
            }
        }
    }

    /// Sets a single field by key, case-insensitively.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let field = Self::fields()
            .iter()
            .find(|field| field.key.eq_ignore_ascii_case(key))
            .ok_or_else(|| Error::UnknownKey(key.to_string()))?;
        field.apply(self, value)
    }

    /// Reports violated constraints and applies `policy` to them.
    fn validate(&self, policy: ValidationPolicy) -> Result<Vec<Issue>> {
        validate::enforce(Self::SUBJECT, self.check(), policy)
    }

    fn describe(&self) -> Vec<(&'static str, String)> {
        Self::fields()
            .iter()
            .map(|field| (field.key, field.render(self)))
            .collect()
    }

    fn log(&self) {
        for (key, value) in self.describe() {
            info!("{} {key} = {value}", Self::SUBJECT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Probe {
        count: u32,
        ratio: f32,
        enabled: bool,
    }

    static PROBE_FIELDS: &[Field<Probe>] = &[
        field!(Probe, "Count" => count),
        field!(Probe, "Ratio" => ratio),
        field!(Probe, "Enabled" => enabled),
    ];

    impl Configurable for Probe {
        const SUBJECT: &'static str = "probe";

        fn fields() -> &'static [Field<Self>] {
            PROBE_FIELDS
        }
    }

    #[test]
    fn bool_spellings() {
        for raw in ["true", "True", "YES", "on", "1"] {
            assert_eq!(bool::parse_value(raw), Ok(true), "{raw}");
        }
        for raw in ["false", "FALSE", "no", "off", "0"] {
            assert_eq!(bool::parse_value(raw), Ok(false), "{raw}");
        }
        assert!(bool::parse_value("maybe").is_err());
    }

    #[test]
    fn float_rejects_non_finite() {
        assert!(f32::parse_value("nan").is_err());
        assert!(f32::parse_value("inf").is_err());
        assert_eq!(f32::parse_value(" 2.5 "), Ok(2.5));
    }

    #[test]
    fn set_is_case_insensitive() {
        let mut probe = Probe::default();
        probe.set("count", "7").unwrap();
        probe.set("RATIO", "0.25").unwrap();
        probe.set("Enabled", "yes").unwrap();
        assert_eq!(probe.count, 7);
        assert_eq!(probe.ratio, 0.25);
        assert!(probe.enabled);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut probe = Probe::default();
        let err = probe.set("Missing", "1").unwrap_err();
        assert!(matches!(err, Error::UnknownKey(key) if key == "Missing"));
    }

    #[test]
    fn failed_set_keeps_value() {
        let mut probe = Probe {
            count: 3,
            ..Probe::default()
        };
        let err = probe.set("Count", "-4").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref key, .. } if key == "Count"));
        assert_eq!(probe.count, 3);
    }

    #[test]
    fn describe_follows_table_order() {
        let probe = Probe {
            count: 1,
            ratio: 1.0,
            enabled: false,
        };
        assert_eq!(
            probe.describe(),
            vec![
                ("Count", "1".to_string()),
                ("Ratio", "1.0".to_string()),
                ("Enabled", "false".to_string()),
            ]
        );
    }
}
