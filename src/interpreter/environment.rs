use std::collections::HashMap;

/// The variable table of an evaluation session.
///
/// Maps each assigned name to its most recent value. A name has no entry
/// until it is assigned; reading it before that is an error rather than a
/// default of zero. The table is only written by successful assignments and
/// is never cleared on its own.
///
/// # Example
/// ```
/// use reckon::Environment;
///
/// let mut environment = Environment::new();
/// assert_eq!(environment.get("x"), None);
///
/// environment.set("x", 1.0);
/// environment.set("x", 2.0);
/// assert_eq!(environment.get("x"), Some(2.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value last assigned to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        log::debug!("binding {name} = {value}");
        self.variables.insert(name, value);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns every binding ordered by name.
    #[must_use]
    pub fn bindings(&self) -> Vec<(&str, f64)> {
        let mut bindings: Vec<_> = self.variables
                                       .iter()
                                       .map(|(name, value)| (name.as_str(), *value))
                                       .collect();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}
