use std::collections::HashMap;

/// A context to use when evaluating an expression, binding variable names to values.
///
/// Looking up a name that was never bound yields `0.0`, not an error. This means a misspelled
/// variable name is indistinguishable from a variable that is bound to zero; use
/// [`Ctxt::get_var`] or [`Ctxt::unbound`] when that distinction matters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Returns this context with the given variable added.
    pub fn with_var(mut self, name: &str, value: f64) -> Self {
        self.add_var(name, value);
        self
    }

    /// Get the value of a variable in the context, or [`None`] if it is not bound.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Get the value of a variable in the context, or `0.0` if it is not bound.
    pub fn value_of(&self, name: &str) -> f64 {
        match self.get_var(name) {
            Some(value) => value,
            None => {
                log::trace!("variable `{}` is not bound, using 0", name);
                0.0
            },
        }
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Returns the names in `names` that are not bound in this context.
    pub fn unbound<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        names.into_iter()
            .filter(|name| !self.vars.contains_key(*name))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Ctxt {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}
