//! Option dispatch table
//!
//! Maps every recognized option name to its value kind and a setter that
//! writes into [`GcConfig`]. The table is the single source of truth for the
//! accepted names; `help` is handled by the parser and is not listed here.

use std::fmt;

use crate::config::GcConfig;
use crate::error::FieldError;
use crate::field;

/// Value kind of an option, selects the field parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `0|n|N` or `1|y|Y`
    Bool,
    /// Small decimal integer
    Level,
    /// Unsigned decimal size
    Size,
    /// Decimal or exponential float
    Float,
}

impl ValueKind {
    /// Wording used in the "Expecting ..." diagnostic
    pub fn description(self) -> &'static str {
        match self {
            ValueKind::Bool => "'0/n/N' or '1/y/Y'",
            ValueKind::Level | ValueKind::Size => "a number",
            ValueKind::Float => "a float",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Typed setter for one record field
#[derive(Clone, Copy)]
pub enum FieldSetter {
    /// Boolean field
    Bool(fn(&mut GcConfig, bool)),
    /// Small integer field
    Level(fn(&mut GcConfig, u8)),
    /// Size field
    Size(fn(&mut GcConfig, usize)),
    /// Float field
    Float(fn(&mut GcConfig, f64)),
}

impl fmt::Debug for FieldSetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldSetter::{:?}", self.kind())
    }
}

impl FieldSetter {
    /// Kind of value this setter accepts
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldSetter::Bool(_) => ValueKind::Bool,
            FieldSetter::Level(_) => ValueKind::Level,
            FieldSetter::Size(_) => ValueKind::Size,
            FieldSetter::Float(_) => ValueKind::Float,
        }
    }
}

/// One recognized option
#[derive(Debug, Clone, Copy)]
pub struct GcOption {
    /// Option name as written in the option string
    pub name: &'static str,
    setter: FieldSetter,
}

impl GcOption {
    const fn new(name: &'static str, setter: FieldSetter) -> Self {
        Self { name, setter }
    }

    /// Kind of value the option takes
    pub fn kind(&self) -> ValueKind {
        self.setter.kind()
    }

    /// Parse a value from the start of `value` and store it in `config`.
    ///
    /// Returns the unconsumed remainder. `config` is untouched on failure.
    ///
    /// # Errors
    ///
    /// The field parser's failure for this option's kind.
    pub fn apply<'a>(&self, config: &mut GcConfig, value: &'a str) -> Result<&'a str, FieldError> {
        let rest = match self.setter {
            FieldSetter::Bool(set) => {
                let (v, rest) = field::parse_bool(value)?;
                set(config, v);
                rest
            }
            FieldSetter::Level(set) => {
                let (v, rest) = field::parse_level(value)?;
                set(config, v);
                rest
            }
            FieldSetter::Size(set) => {
                let (v, rest) = field::parse_size(value)?;
                set(config, v);
                rest
            }
            FieldSetter::Float(set) => {
                let (v, rest) = field::parse_float(value)?;
                set(config, v);
                rest
            }
        };
        Ok(rest)
    }
}

/// All record fields, in help order
pub static OPTIONS: [GcOption; 9] = [
    GcOption::new("disable", FieldSetter::Bool(|c: &mut GcConfig, v| c.disable = v)),
    GcOption::new("profile", FieldSetter::Level(|c: &mut GcConfig, v| c.profile = v)),
    GcOption::new("precise", FieldSetter::Bool(|c: &mut GcConfig, v| c.precise = v)),
    GcOption::new("concurrent", FieldSetter::Bool(|c: &mut GcConfig, v| c.concurrent = v)),
    GcOption::new("initReserve", FieldSetter::Size(|c: &mut GcConfig, v| c.init_reserve = v)),
    GcOption::new("minPoolSize", FieldSetter::Size(|c: &mut GcConfig, v| c.min_pool_size = v)),
    GcOption::new("maxPoolSize", FieldSetter::Size(|c: &mut GcConfig, v| c.max_pool_size = v)),
    GcOption::new("incPoolSize", FieldSetter::Size(|c: &mut GcConfig, v| c.inc_pool_size = v)),
    GcOption::new(
        "heapSizeFactor",
        FieldSetter::Float(|c: &mut GcConfig, v| c.heap_size_factor = v),
    ),
];

/// Find the option called `name`; names are case sensitive.
pub fn lookup(name: &str) -> Option<&'static GcOption> {
    OPTIONS.iter().find(|opt| opt.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("disable").map(GcOption::kind), Some(ValueKind::Bool));
        assert_eq!(lookup("profile").map(GcOption::kind), Some(ValueKind::Level));
        assert_eq!(lookup("maxPoolSize").map(GcOption::kind), Some(ValueKind::Size));
        assert_eq!(lookup("heapSizeFactor").map(GcOption::kind), Some(ValueKind::Float));
        assert!(lookup("help").is_none());
        assert!(lookup("MaxPoolSize").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in OPTIONS.iter().enumerate() {
            for b in &OPTIONS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_apply_writes_only_its_field() {
        let mut config = GcConfig::default();
        let rest = lookup("incPoolSize").unwrap().apply(&mut config, "9 x").unwrap();
        assert_eq!(rest, " x");
        assert_eq!(
            config,
            GcConfig {
                inc_pool_size: 9,
                ..GcConfig::default()
            }
        );
    }

    #[test]
    fn test_apply_failure_leaves_record() {
        let mut config = GcConfig::default();
        let err = lookup("precise").unwrap().apply(&mut config, "maybe").unwrap_err();
        assert_eq!(err, FieldError::InvalidBoolean);
        assert_eq!(config, GcConfig::default());
    }

    #[test]
    fn test_kind_description() {
        assert_eq!(ValueKind::Size.to_string(), "a number");
        assert_eq!(ValueKind::Level.to_string(), "a number");
        assert_eq!(ValueKind::Bool.to_string(), "'0/n/N' or '1/y/Y'");
        assert_eq!(ValueKind::Float.to_string(), "a float");
    }
}
