use crate::error;
use crate::lang::Error;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Bindings are created by the first store and never removed except by
/// [`Var::clear`]. Every successful [`Var::fetch`] is counted in the
/// [`RuntimeStats`].

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, i32>,
    stats: RuntimeStats,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
        self.stats.clear();
    }

    pub fn is_defined(&self, var_name: &str) -> bool {
        self.vars.contains_key(var_name)
    }

    /// Reads a binding without counting it.
    pub fn get(&self, var_name: &str) -> Option<i32> {
        self.vars.get(var_name).copied()
    }

    pub fn fetch(&mut self, var_name: &Rc<str>) -> Result<i32> {
        match self.vars.get(var_name) {
            Some(val) => {
                self.stats.record(var_name);
                Ok(*val)
            }
            None => Err(error!(UndefinedVariable; var_name)),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: i32) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn stats(&self) -> &RuntimeStats {
        &self.stats
    }
}

/// How many times each variable was read during evaluation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RuntimeStats {
    uses: BTreeMap<Rc<str>, u32>,
}

impl RuntimeStats {
    pub fn uses(&self, var_name: &str) -> u32 {
        self.uses.get(var_name).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.uses.iter().map(|(k, v)| (k.as_ref(), *v))
    }

    fn record(&mut self, var_name: &Rc<str>) {
        *self.uses.entry(var_name.clone()).or_insert(0) += 1;
    }

    fn clear(&mut self) {
        self.uses.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_counts_reads() {
        let mut var = Var::new();
        let x: Rc<str> = "X".into();
        var.store(&x, 5);
        var.store(&x, 7);
        assert_eq!(var.stats().uses("X"), 0);
        assert_eq!(var.fetch(&x), Ok(7));
        assert_eq!(var.fetch(&x), Ok(7));
        assert_eq!(var.stats().uses("X"), 2);
        assert_eq!(var.get("X"), Some(7));
        assert_eq!(var.stats().uses("X"), 2);
    }

    #[test]
    fn test_undefined() {
        let mut var = Var::new();
        let y: Rc<str> = "Y".into();
        let e = var.fetch(&y).unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::UndefinedVariable);
        assert_eq!(e.text(), "Y");
        assert_eq!(var.stats().uses("Y"), 0);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut var = Var::new();
        var.store(&"abc".into(), 1);
        assert!(var.is_defined("abc"));
        assert!(!var.is_defined("ABC"));
        var.clear();
        assert!(var.is_empty());
    }
}
