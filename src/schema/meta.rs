//! Per-field metadata registered on an [`Object`].
//!
//! [`Object`]: super::Object

use std::{
    any::{self, Any},
    sync::OnceLock,
};

use arcstr::ArcStr;
use derive_more::{Debug, Display, Error};
use serde::Serialize;

/// Whether a field is deprecated, with context.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub enum DeprecationStatus {
    /// The field is not deprecated.
    #[default]
    Current,
    /// The field is deprecated, with an optional reason.
    Deprecated(Option<ArcStr>),
}

impl DeprecationStatus {
    /// If this deprecation status indicates the field is deprecated.
    pub fn is_deprecated(&self) -> bool {
        match self {
            Self::Current => false,
            Self::Deprecated(_) => true,
        }
    }

    /// An optional reason for the deprecation, or none if `Current`.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Current => None,
            Self::Deprecated(rsn) => rsn.as_deref(),
        }
    }
}

/// Calling convention of a field function, as discovered by the schema
/// compiler when it introspects the function.
///
/// The full shape is
/// `fn([context], [receiver], [arguments]) -> Result | (Result, Error)`,
/// where every bracketed part is optional.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct CallingConvention {
    /// Function takes a leading context parameter.
    pub context: bool,
    /// Function takes the object itself.
    pub receiver: bool,
    /// Function takes a trailing arguments struct.
    pub args: bool,
    /// Function may return an error.
    pub returns_error: bool,
}

impl CallingConvention {
    /// Convention of a function taking nothing and returning a plain value.
    pub const fn new() -> Self {
        Self {
            context: false,
            receiver: false,
            args: false,
            returns_error: false,
        }
    }

    /// Marks the convention as taking a leading context parameter.
    #[must_use]
    pub const fn with_context(mut self) -> Self {
        self.context = true;
        self
    }

    /// Marks the convention as taking the object as receiver.
    #[must_use]
    pub const fn with_receiver(mut self) -> Self {
        self.receiver = true;
        self
    }

    /// Marks the convention as taking a trailing arguments struct.
    #[must_use]
    pub const fn with_args(mut self) -> Self {
        self.args = true;
        self
    }

    /// Marks the convention as returning a trailing error.
    #[must_use]
    pub const fn with_error(mut self) -> Self {
        self.returns_error = true;
        self
    }
}

/// Error of binding a [`CallingConvention`] to a [`FieldFn`].
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum BindError {
    /// A convention has already been bound to the function.
    #[display("calling convention of `{function}` is already bound to {existing:?}")]
    AlreadyBound {
        /// Type name of the field function.
        function: &'static str,
        /// The convention bound first.
        existing: CallingConvention,
    },
}

/// Opaque handle to a host-supplied field function.
///
/// Any `Send + Sync + 'static` value is accepted: closures, function
/// pointers, or function objects. Its shape is not inspected here; the schema
/// compiler recovers the concrete value with [`FieldFn::downcast_ref()`] and
/// records what it found with [`FieldFn::bind()`].
#[derive(Debug)]
pub struct FieldFn {
    #[debug(skip)]
    func: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
    convention: OnceLock<CallingConvention>,
}

impl FieldFn {
    /// Wraps the provided function value.
    pub fn new<F>(func: F) -> Self
    where
        F: Any + Send + Sync,
    {
        Self {
            func: Box::new(func),
            type_name: any::type_name::<F>(),
            convention: OnceLock::new(),
        }
    }

    /// Name of the wrapped value's type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Checks whether the wrapped value is of type `F`.
    pub fn is<F: Any>(&self) -> bool {
        self.func.is::<F>()
    }

    /// Returns the wrapped value if it is of type `F`.
    pub fn downcast_ref<F: Any>(&self) -> Option<&F> {
        self.func.downcast_ref::<F>()
    }

    /// Records the [`CallingConvention`] discovered for this function.
    ///
    /// # Errors
    ///
    /// If a convention has already been bound. The first binding is kept.
    pub fn bind(&self, convention: CallingConvention) -> Result<(), BindError> {
        self.convention
            .set(convention)
            .map_err(|_| BindError::AlreadyBound {
                function: self.type_name,
                existing: self.convention.get().copied().unwrap_or_default(),
            })
    }

    /// The bound [`CallingConvention`], if any.
    pub fn convention(&self) -> Option<CallingConvention> {
        self.convention.get().copied()
    }
}

/// Metadata for a field function registered on an object.
#[derive(Debug)]
pub struct Field {
    func: FieldFn,
    non_nullable: bool,
    description: Option<ArcStr>,
    deprecation_status: DeprecationStatus,
}

impl Field {
    /// Builds a new [`Field`] around the provided function handle.
    ///
    /// Nothing is overridden: the field is nullable if its function's return
    /// shape says so, undocumented and not deprecated.
    pub fn new(func: FieldFn) -> Self {
        Self {
            func,
            non_nullable: false,
            description: None,
            deprecation_status: DeprecationStatus::Current,
        }
    }

    /// Handle to the field function.
    pub fn func(&self) -> &FieldFn {
        &self.func
    }

    /// Whether the field result must be treated as non-nullable, regardless
    /// of the function's return shape.
    pub fn is_non_nullable(&self) -> bool {
        self.non_nullable
    }

    /// Description of the field.
    pub fn description(&self) -> Option<&ArcStr> {
        self.description.as_ref()
    }

    /// Deprecation status of the field.
    pub fn deprecation_status(&self) -> &DeprecationStatus {
        &self.deprecation_status
    }

    /// Sets the non-nullable override of this [`Field`].
    pub fn set_non_nullable(&mut self, non_nullable: bool) {
        self.non_nullable = non_nullable;
    }

    /// Sets the `description` of this [`Field`].
    ///
    /// Overwrites any previously set description.
    pub fn set_description(&mut self, description: ArcStr) {
        self.description = Some(description);
    }

    /// Sets this [`Field`] as deprecated with an optional `reason`.
    ///
    /// Overwrites any previously set deprecation reason.
    pub fn set_deprecated(&mut self, reason: Option<ArcStr>) {
        self.deprecation_status = DeprecationStatus::Deprecated(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::{BindError, CallingConvention, DeprecationStatus, Field, FieldFn};

    fn full_name(first: &str, last: &str) -> String {
        format!("{first} {last}")
    }

    #[test]
    fn downcasts_to_wrapped_function() {
        let f = FieldFn::new(full_name as fn(&str, &str) -> String);

        assert!(f.is::<fn(&str, &str) -> String>());
        assert!(!f.is::<fn() -> String>());

        let func = f.downcast_ref::<fn(&str, &str) -> String>().unwrap();
        assert_eq!(func("Ada", "Lovelace"), "Ada Lovelace");
    }

    #[test]
    fn wraps_closures() {
        let offset = 10;
        let f = FieldFn::new(move |x: i32| x + offset);

        assert!(f.type_name().contains("closure"));
        assert!(f.downcast_ref::<i32>().is_none());
    }

    #[test]
    fn binds_convention_once() {
        let f = FieldFn::new(|| 42);
        assert_eq!(f.convention(), None);

        let convention = CallingConvention::new().with_receiver().with_error();
        f.bind(convention).unwrap();
        assert_eq!(f.convention(), Some(convention));

        let err = f.bind(CallingConvention::new().with_context()).unwrap_err();
        assert_eq!(
            err,
            BindError::AlreadyBound {
                function: f.type_name(),
                existing: convention,
            },
        );
        assert_eq!(f.convention(), Some(convention));
    }

    #[test]
    fn new_field_has_no_overrides() {
        let field = Field::new(FieldFn::new(|| "x"));

        assert!(!field.is_non_nullable());
        assert_eq!(field.description(), None);
        assert_eq!(field.deprecation_status(), &DeprecationStatus::Current);
    }

    #[test]
    fn deprecation_status() {
        let mut field = Field::new(FieldFn::new(|| "x"));
        field.set_deprecated(Some("use `y`".into()));

        assert!(field.deprecation_status().is_deprecated());
        assert_eq!(field.deprecation_status().reason(), Some("use `y`"));
        assert!(DeprecationStatus::Deprecated(None).reason().is_none());
    }
}
