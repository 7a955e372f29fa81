//! Typed parameter store for effects.
//!
//! Effects declare their parameters once (defaults, ranges, labels, in
//! presentation order); the host owns the resulting [`ParamSet`], shows it,
//! mutates values, and hands it back at cook time. Ranges and labels are
//! declared metadata for the host — setters check the value kind, not the
//! range.

use crate::error::{EffectError, EffectResult};

/// One parameter value of a fixed kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Toggle.
    Bool(bool),
    /// Integer triple (for example per-axis division counts).
    Int3([i64; 3]),
}

impl ParamValue {
    /// Kind name used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Int3(_) => "int3",
        }
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<[i64; 3]> for ParamValue {
    fn from(value: [i64; 3]) -> Self {
        Self::Int3(value)
    }
}

/// One declared parameter: current value plus presentation metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Stable name used by getters and setters.
    pub name: &'static str,
    /// Optional display label; hosts fall back to the name.
    pub label: Option<&'static str>,
    /// Current value.
    pub value: ParamValue,
    /// Declared default.
    pub default: ParamValue,
    /// Declared `(lo, hi)` range, if any.
    pub range: Option<(ParamValue, ParamValue)>,
}

/// Parameters in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSet {
    params: Vec<Param>,
}

impl ParamSet {
    /// An empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Declares an integer parameter.
    pub fn declare_int(&mut self, name: &'static str, default: i64) -> ParamBuilder<'_> {
        self.declare(name, ParamValue::Int(default))
    }

    /// Declares a float parameter.
    pub fn declare_float(&mut self, name: &'static str, default: f64) -> ParamBuilder<'_> {
        self.declare(name, ParamValue::Float(default))
    }

    /// Declares a toggle parameter.
    pub fn declare_bool(&mut self, name: &'static str, default: bool) -> ParamBuilder<'_> {
        self.declare(name, ParamValue::Bool(default))
    }

    /// Declares an integer-triple parameter.
    pub fn declare_int3(&mut self, name: &'static str, default: [i64; 3]) -> ParamBuilder<'_> {
        self.declare(name, ParamValue::Int3(default))
    }

    fn declare(&mut self, name: &'static str, default: ParamValue) -> ParamBuilder<'_> {
        let index = self.params.len();
        self.params.push(Param {
            name,
            label: None,
            value: default,
            default,
            range: None,
        });
        ParamBuilder { set: self, index }
    }

    /// The declared parameters, in declaration order.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of declared parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// `true` when nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Looks a parameter up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|param| param.name == name)
    }

    /// Current value of an integer parameter.
    ///
    /// # Errors
    ///
    /// [`EffectError::UnknownParam`] when `name` was never declared,
    /// [`EffectError::ParamKind`] when it holds a different kind.
    pub fn get_int(&self, name: &str) -> EffectResult<i64> {
        match self.lookup(name)?.value {
            ParamValue::Int(value) => Ok(value),
            other => Err(kind_error(name, "int", other)),
        }
    }

    /// Current value of a float parameter.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ParamSet::get_int`].
    pub fn get_float(&self, name: &str) -> EffectResult<f64> {
        match self.lookup(name)?.value {
            ParamValue::Float(value) => Ok(value),
            other => Err(kind_error(name, "float", other)),
        }
    }

    /// Current value of a toggle parameter.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ParamSet::get_int`].
    pub fn get_bool(&self, name: &str) -> EffectResult<bool> {
        match self.lookup(name)?.value {
            ParamValue::Bool(value) => Ok(value),
            other => Err(kind_error(name, "bool", other)),
        }
    }

    /// Current value of an integer-triple parameter.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ParamSet::get_int`].
    pub fn get_int3(&self, name: &str) -> EffectResult<[i64; 3]> {
        match self.lookup(name)?.value {
            ParamValue::Int3(value) => Ok(value),
            other => Err(kind_error(name, "int3", other)),
        }
    }

    /// Overwrites a parameter's value, keeping its declared kind.
    ///
    /// # Errors
    ///
    /// [`EffectError::UnknownParam`] when `name` was never declared,
    /// [`EffectError::ParamKind`] when `value` is of a different kind than
    /// the declaration.
    pub fn set(&mut self, name: &str, value: impl Into<ParamValue>) -> EffectResult<()> {
        let value = value.into();
        let param = self
            .params
            .iter_mut()
            .find(|param| param.name == name)
            .ok_or_else(|| EffectError::UnknownParam(name.to_string()))?;

        if param.value.kind() != value.kind() {
            return Err(EffectError::ParamKind {
                name: name.to_string(),
                expected: param.value.kind(),
                found: value.kind(),
            });
        }

        param.value = value;
        Ok(())
    }

    fn lookup(&self, name: &str) -> EffectResult<&Param> {
        self.get(name)
            .ok_or_else(|| EffectError::UnknownParam(name.to_string()))
    }
}

fn kind_error(name: &str, expected: &'static str, found: ParamValue) -> EffectError {
    EffectError::ParamKind {
        name: name.to_string(),
        expected,
        found: found.kind(),
    }
}

/// Attaches metadata to the parameter just declared.
pub struct ParamBuilder<'a> {
    set: &'a mut ParamSet,
    index: usize,
}

// Declaration chains end by dropping the builder
#[allow(clippy::return_self_must_use)]
impl ParamBuilder<'_> {
    /// Declares the `(lo, hi)` range the host should offer.
    pub fn range(self, lo: impl Into<ParamValue>, hi: impl Into<ParamValue>) -> Self {
        if let Some(param) = self.set.params.get_mut(self.index) {
            param.range = Some((lo.into(), hi.into()));
        }
        self
    }

    /// Declares the display label the host should show.
    pub fn label(self, label: &'static str) -> Self {
        if let Some(param) = self.set.params.get_mut(self.index) {
            param.label = Some(label);
        }
        self
    }
}
