mod error;
mod parser;
mod trace;

pub use error::{Error, Result};
pub use stoml::{Array, Table, Value};

use std::collections::BTreeMap;
use std::env;

use parser::{atoi, canonical_name, interpret_bool, negated_name, parse_strict_int};
use trace::trace_soft_set;

/// Parsed command-line flags
///
/// Maps a flag name (always with one leading `-`) to every value it was given,
/// in order. Lookups read the first value only. Tokens that are not flags are
/// kept aside in [`remaining`](ArgTable::remaining).
///
/// Lookup names may be written as `-x`, `--x` or `x`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgTable {
    /// Flag name to recorded values
    values: BTreeMap<String, Vec<String>>,
    /// Non-flag tokens in input order
    remaining: Vec<String>,
}

impl ArgTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse argument tokens, not including the program path
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parser::parse(args)
    }

    /// Parse a full argv, discarding the program path at index 0
    pub fn from_argv<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse(argv.into_iter().skip(1))
    }

    /// Parse the arguments of the current process
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn from_env() -> Self {
        Self::from_argv(env::args_os().map(|a| a.to_string_lossy().into_owned()))
    }

    /// Replace the whole table with a fresh parse of `args`
    pub fn reparse<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        *self = Self::parse(args);
    }

    fn first(&self, canonical: &str) -> Option<&str> {
        self.values
            .get(canonical)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// Check if a flag was provided
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(&canonical_name(name))
    }

    /// Get a boolean flag
    ///
    /// `-x` wins over `-nox` whenever both are present. With only `-x`, the
    /// flag is false just for the value `0`. With only `-nox`, the result is
    /// the negation of that same reading. Otherwise `default`.
    pub fn get_bool_arg(&self, name: &str, default: bool) -> bool {
        let name = canonical_name(name);
        if let Some(value) = self.first(&name) {
            return interpret_bool(value);
        }
        match self.first(&negated_name(&name)) {
            Some(value) => !interpret_bool(value),
            None => default,
        }
    }

    /// Get a string value, or `default` if the flag is absent
    ///
    /// A bare flag yields the empty string.
    pub fn get_arg(&self, name: &str, default: &str) -> String {
        self.first(&canonical_name(name))
            .unwrap_or(default)
            .to_string()
    }

    /// Get an integer value, or `default` if the flag is absent
    ///
    /// A present flag is read leniently: the leading digits count and a value
    /// without any yields 0, not `default`.
    pub fn get_int_arg(&self, name: &str, default: i64) -> i64 {
        self.first(&canonical_name(name)).map_or(default, atoi)
    }

    /// Get every value given for a flag (empty if absent)
    pub fn get_args(&self, name: &str) -> &[String] {
        self.values
            .get(&canonical_name(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Get a value that must be present
    pub fn require_arg(&self, name: &str) -> Result<&str> {
        let name = canonical_name(name);
        self.first(&name).ok_or(Error::MissingRequired { name })
    }

    /// Get an integer value, rejecting anything that is not a whole number
    ///
    /// Absent flags yield `Ok(None)`.
    pub fn try_get_int_arg(&self, name: &str) -> Result<Option<i64>> {
        let name = canonical_name(name);
        match self.first(&name) {
            None => Ok(None),
            Some("") => Err(Error::MissingValue { name }),
            Some(value) => match parse_strict_int(value) {
                Some(n) => Ok(Some(n)),
                None => Err(Error::InvalidValue {
                    value: value.to_string(),
                    name,
                    expected: "an integer",
                }),
            },
        }
    }

    /// Set a value unless the flag was already provided
    ///
    /// Returns true if the value was set.
    pub fn soft_set_arg(&mut self, name: &str, value: impl Into<String>) -> bool {
        let name = canonical_name(name);
        let value = value.into();
        let applied = !self.values.contains_key(&name);
        trace_soft_set(&name, &value, applied);
        if applied {
            self.values.insert(name, vec![value]);
        }
        applied
    }

    /// Set a boolean flag (`1` or `0`) unless it was already provided
    pub fn soft_set_bool_arg(&mut self, name: &str, value: bool) -> bool {
        self.soft_set_arg(name, if value { "1" } else { "0" })
    }

    /// Iterate over flags and their values in name order
    pub fn flags(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of distinct flags
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no flag was provided
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get tokens that were not flags
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// Convert to a Table (useful for printing or merging with other TOML)
    ///
    /// Keys lose their leading dash. Repeated flags become arrays of strings.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        for (name, values) in &self.values {
            let key = name.strip_prefix('-').unwrap_or(name).to_string();
            let value = match values.as_slice() {
                [single] => Value::String(single.clone()),
                many => {
                    let mut arr = Array::new();
                    for v in many {
                        arr.push(Value::String(v.clone()));
                    }
                    Value::Array(arr)
                }
            };
            table.insert(key, value);
        }
        table
    }
}

/// Convenience function to parse argument tokens
#[inline]
pub fn parse<I, S>(args: I) -> ArgTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ArgTable::parse(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_names_are_normalized() {
        let table = ArgTable::parse(["-kmw=3"]);
        assert!(table.contains("-kmw"));
        assert!(table.contains("--kmw"));
        assert!(table.contains("kmw"));
        assert_eq!(table.get_int_arg("kmw", 0), 3);
        assert_eq!(table.get_arg("--kmw", ""), "3");
    }

    #[test]
    fn soft_set_only_fills_gaps() {
        let mut table = ArgTable::parse(["-listen=0"]);
        assert!(!table.soft_set_bool_arg("-listen", true));
        assert!(!table.get_bool_arg("-listen", true));

        assert!(table.soft_set_arg("-port", "8333"));
        assert_eq!(table.get_int_arg("-port", 0), 8333);
        assert!(!table.soft_set_arg("-port", "18333"));
        assert_eq!(table.get_args("-port"), ["8333"]);
    }

    #[test]
    fn soft_set_positive_overrides_negation() {
        let mut table = ArgTable::parse(["-nodiscover"]);
        assert!(!table.get_bool_arg("-discover", true));
        assert!(table.soft_set_bool_arg("-discover", true));
        assert!(table.get_bool_arg("-discover", false));
    }

    #[test]
    fn strict_int_lookup() {
        let table = ArgTable::parse(["-a=12", "-b=12abc", "-c"]);
        assert_eq!(table.try_get_int_arg("-a"), Ok(Some(12)));
        assert_eq!(table.try_get_int_arg("-missing"), Ok(None));
        assert_eq!(
            table.try_get_int_arg("-b"),
            Err(Error::InvalidValue {
                name: "-b".to_string(),
                value: "12abc".to_string(),
                expected: "an integer",
            })
        );
        assert_eq!(
            table.try_get_int_arg("c"),
            Err(Error::MissingValue {
                name: "-c".to_string()
            })
        );
        // the lenient reading still takes the digits
        assert_eq!(table.get_int_arg("-b", 5), 12);
    }

    #[test]
    fn require_arg_reports_canonical_name() {
        let table = ArgTable::parse(["-datadir=/tmp/node"]);
        assert_eq!(table.require_arg("--datadir"), Ok("/tmp/node"));
        let err = table.require_arg("conf").unwrap_err();
        assert_eq!(err.name(), "-conf");
    }

    #[test]
    fn flags_iterate_in_name_order() {
        let table = ArgTable::parse(["-b=2", "-a", "-b=3"]);
        let names: Vec<&str> = table.flags().map(|(name, _)| name).collect();
        assert_eq!(names, ["-a", "-b"]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert!(ArgTable::new().is_empty());
    }

    #[test]
    fn to_table_exports_values() {
        let table = ArgTable::parse(["-kmw=11", "-bar", "-connect=a", "-connect=b"]);
        let toml = table.to_table();
        assert_eq!(toml.get("kmw").and_then(|v| v.as_str()), Some("11"));
        assert_eq!(toml.get("bar").and_then(|v| v.as_str()), Some(""));
        assert!(matches!(toml.get("connect"), Some(Value::Array(_))));
        assert!(toml.get("-kmw").is_none());
    }
}
