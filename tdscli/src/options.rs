use std::fmt;

/// A single option value. Keeping this a closed enum means every value
/// has a defined command-line form; there is no stringification hole to
/// validate at spawn time.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Str(String),
    Bool(bool),
    Number(f64),
    List(Vec<String>),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Bool(b) => write!(f, "{}", b),
            // Integral values print without a fraction, as the tool expects
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 => {
                write!(f, "{}", *n as i64)
            }
            Self::Number(n) => write!(f, "{}", n),
            Self::List(items) => write!(f, "{}", items.join(";")),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.iter().map(|s| (*s).to_owned()).collect())
    }
}

/// Key the invoker consumes itself; never forwarded to the jar.
pub(crate) const WORKSPACE_KEY: &str = "workspace";

/// Insertion-ordered option map. The jar is order-sensitive for some
/// flags, so iteration order must match the order keys were set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvocationOptions {
    entries: Vec<(String, OptionValue)>,
}

impl InvocationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`. An existing key is replaced in place, keeping its
    /// original position in the serialization order.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Coercions the jar expects, applied before serialization:
    /// `serverType` is forced to `4GL` unless it already reads `ADVPL`
    /// (case-insensitive), and a boolean `recompile` becomes `t`/`f`.
    pub fn normalize(&mut self) {
        let force_4gl = self
            .get(SERVER_TYPE_KEY)
            .is_some_and(|value| value.to_string().to_uppercase() != "ADVPL");
        if force_4gl {
            self.set(SERVER_TYPE_KEY, "4GL");
        }

        let recompile_flag = match self.get(RECOMPILE_KEY) {
            Some(OptionValue::Bool(true)) => Some("t"),
            Some(OptionValue::Bool(false)) => Some("f"),
            _ => None,
        };
        if let Some(flag) = recompile_flag {
            self.set(RECOMPILE_KEY, flag);
        }
    }
}

const SERVER_TYPE_KEY: &str = "serverType";
const RECOMPILE_KEY: &str = "recompile";
