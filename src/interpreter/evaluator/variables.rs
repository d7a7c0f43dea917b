use std::{
    collections::{BTreeMap, HashMap, hash_map::Entry},
    hash::BuildHasher,
};

use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, utils::check_variable_name},
};

/// Supplies values for the variables of an expression.
///
/// Implemented for the standard maps, for [`Variables`] and, through
/// [`Lookup`], for any closure. The reserved names `E`, `PI` and `rand` are
/// resolved before a source is consulted, so a source never sees them.
pub trait VariableSource {
    /// Returns the value bound to `name`, if any.
    fn resolve(&self, name: &str) -> Option<f64>;

    /// Validates the bound names before evaluation starts.
    ///
    /// Sources that enumerate their names reject reserved ones here. The
    /// default accepts everything, which suits sources that cannot list
    /// their names.
    fn check_names(&self) -> EvalResult<()> {
        Ok(())
    }
}

impl<T: VariableSource + ?Sized> VariableSource for &T {
    fn resolve(&self, name: &str) -> Option<f64> {
        (**self).resolve(name)
    }

    fn check_names(&self) -> EvalResult<()> {
        (**self).check_names()
    }
}

/// No bindings at all.
impl VariableSource for () {
    fn resolve(&self, _name: &str) -> Option<f64> {
        None
    }
}

impl<S: BuildHasher> VariableSource for HashMap<String, f64, S> {
    fn resolve(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }

    fn check_names(&self) -> EvalResult<()> {
        self.keys().try_for_each(|name| check_variable_name(name))
    }
}

impl<S: BuildHasher> VariableSource for HashMap<&str, f64, S> {
    fn resolve(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }

    fn check_names(&self) -> EvalResult<()> {
        self.keys().try_for_each(|name| check_variable_name(name))
    }
}

impl VariableSource for BTreeMap<String, f64> {
    fn resolve(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }

    fn check_names(&self) -> EvalResult<()> {
        self.keys().try_for_each(|name| check_variable_name(name))
    }
}

/// Adapts a closure into a [`VariableSource`].
///
/// The closure returns `None` for names it does not know, which makes the
/// evaluation fail with [`EvalError::UnknownVariable`].
///
/// # Example
/// ```
/// use revpol::interpreter::evaluator::variables::{Lookup, VariableSource};
///
/// let source = Lookup(|name: &str| -> Option<f64> {
///     name.strip_prefix('k').and_then(|n| n.parse().ok())
/// });
///
/// assert_eq!(source.resolve("k12"), Some(12.0));
/// assert_eq!(source.resolve("x"), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Lookup<F>(pub F);

impl<F: Fn(&str) -> Option<f64>> VariableSource for Lookup<F> {
    fn resolve(&self, name: &str) -> Option<f64> {
        (self.0)(name)
    }
}

/// An owned set of variable bindings.
///
/// Names are validated on insertion, so a `Variables` value never holds a
/// reserved name.
///
/// # Example
/// ```
/// use revpol::{error::EvalError, interpreter::evaluator::variables::Variables};
///
/// let vars = Variables::new().with("x", 2.0)
///                            .unwrap()
///                            .with("ratio", 0.5_f32)
///                            .unwrap();
/// assert_eq!(vars.get("ratio"), Some(0.5));
///
/// let err = Variables::new().with("PI", 3.0).unwrap_err();
/// assert_eq!(err, EvalError::ReservedName { name: "PI".to_string() });
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: HashMap<String, f64>,
}

impl Variables {
    /// Creates an empty binding set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects `(name, value)` pairs, rejecting reserved and repeated
    /// names.
    ///
    /// # Errors
    /// Returns [`EvalError::ReservedName`] or
    /// [`EvalError::DuplicateVariable`] for the first offending pair.
    ///
    /// # Example
    /// ```
    /// use revpol::interpreter::evaluator::variables::Variables;
    ///
    /// let vars = Variables::from_pairs([("a", 1.0), ("b", 2.0)]).unwrap();
    /// assert_eq!(vars.len(), 2);
    ///
    /// assert!(Variables::from_pairs([("a", 1.0), ("a", 2.0)]).is_err());
    /// assert!(Variables::from_pairs([("max", 1.0)]).is_err());
    /// ```
    pub fn from_pairs<N, V, I>(pairs: I) -> EvalResult<Self>
        where I: IntoIterator<Item = (N, V)>,
              N: Into<String>,
              V: Into<f64>
    {
        let mut values = HashMap::new();
        for (name, value) in pairs {
            let name = name.into();
            check_variable_name(&name)?;
            match values.entry(name) {
                Entry::Occupied(entry) => {
                    return Err(EvalError::DuplicateVariable { name: entry.key().clone() });
                },
                Entry::Vacant(entry) => {
                    entry.insert(value.into());
                },
            }
        }
        Ok(Self { values })
    }

    /// Binds `name` to `value`, returning the previous value if there was
    /// one.
    ///
    /// # Errors
    /// Returns [`EvalError::ReservedName`] if `name` is a builtin constant or
    /// function name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<f64>) -> EvalResult<Option<f64>> {
        let name = name.into();
        check_variable_name(&name)?;
        Ok(self.values.insert(name, value.into()))
    }

    /// Builder form of [`Variables::insert`].
    ///
    /// # Errors
    /// Returns [`EvalError::ReservedName`] if `name` is reserved.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<f64>) -> EvalResult<Self> {
        self.insert(name, value)?;
        Ok(self)
    }

    /// Moves every binding of `other` into `self`.
    ///
    /// # Errors
    /// Returns [`EvalError::DuplicateVariable`] if both sets bind the same
    /// name; `self` is left unchanged in that case.
    ///
    /// # Example
    /// ```
    /// use revpol::{error::EvalError, interpreter::evaluator::variables::Variables};
    ///
    /// let mut a = Variables::new().with("x", 1.0).unwrap();
    /// let b = Variables::new().with("y", 2.0).unwrap();
    /// a.merge(b).unwrap();
    /// assert_eq!(a.len(), 2);
    ///
    /// let c = Variables::new().with("x", 3.0).unwrap();
    /// assert_eq!(a.merge(c),
    ///            Err(EvalError::DuplicateVariable { name: "x".to_string() }));
    /// assert_eq!(a.get("x"), Some(1.0));
    /// ```
    pub fn merge(&mut self, other: Self) -> EvalResult<()> {
        if let Some(name) = other.values.keys().find(|name| self.values.contains_key(*name)) {
            return Err(EvalError::DuplicateVariable { name: name.clone() });
        }
        self.values.extend(other.values);
        Ok(())
    }

    /// The value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl VariableSource for Variables {
    fn resolve(&self, name: &str) -> Option<f64> {
        self.get(name)
    }
}
