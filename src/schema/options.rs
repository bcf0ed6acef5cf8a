//! Options applied to a [`Field`] while it is being registered.
//!
//! An option is a value wrapping a function over `&mut Field`. Options are
//! applied in the order given, so when two options touch the same attribute,
//! the last one wins.

use std::{fmt, sync::Arc};

use arcstr::ArcStr;

use super::meta::Field;

/// Option configuring a [`Field`] at registration time.
///
/// Custom options are created with [`FieldFuncOption::new()`]:
///
/// ```
/// use juniper_schemabuilder::{FieldFuncOption, Object};
///
/// struct User;
///
/// let internal = FieldFuncOption::new(|field| {
///     field.set_description("Not part of the public API.".into());
/// });
///
/// let mut user = Object::new::<User>();
/// user.field_func_with("token", |_: &User| String::new(), [internal]);
///
/// assert!(user.field("token").unwrap().description().is_some());
/// ```
#[derive(Clone)]
pub struct FieldFuncOption(Arc<dyn Fn(&mut Field) + Send + Sync>);

impl FieldFuncOption {
    /// Wraps the provided function into an option.
    pub fn new<F>(option: F) -> Self
    where
        F: Fn(&mut Field) + Send + Sync + 'static,
    {
        Self(Arc::new(option))
    }

    /// Applies this option to the provided `field`.
    pub fn apply(&self, field: &mut Field) {
        (self.0)(field)
    }
}

impl fmt::Debug for FieldFuncOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldFuncOption(..)")
    }
}

/// Marks the field's result as required, even if the field function returns
/// an [`Option`].
pub fn non_nullable() -> FieldFuncOption {
    FieldFuncOption::new(|field| field.set_non_nullable(true))
}

/// Documents the field with the provided `description`.
pub fn description(description: impl Into<ArcStr>) -> FieldFuncOption {
    let description = description.into();
    FieldFuncOption::new(move |field| field.set_description(description.clone()))
}

/// Marks the field as deprecated, with an optional `reason`.
pub fn deprecated(reason: Option<&str>) -> FieldFuncOption {
    let reason = reason.map(ArcStr::from);
    FieldFuncOption::new(move |field| field.set_deprecated(reason.clone()))
}

#[cfg(test)]
mod tests {
    use super::{FieldFuncOption, deprecated, description, non_nullable};
    use crate::schema::meta::{Field, FieldFn};

    fn field() -> Field {
        Field::new(FieldFn::new(|| 1))
    }

    #[test]
    fn non_nullable_sets_override() {
        let mut f = field();
        non_nullable().apply(&mut f);

        assert!(f.is_non_nullable());
    }

    #[test]
    fn last_option_wins() {
        let nullable = FieldFuncOption::new(|field| field.set_non_nullable(false));

        let mut f = field();
        for opt in [non_nullable(), nullable.clone()] {
            opt.apply(&mut f);
        }
        assert!(!f.is_non_nullable());

        let mut f = field();
        for opt in [description("first"), description("second")] {
            opt.apply(&mut f);
        }
        assert_eq!(f.description().map(|d| d.as_str()), Some("second"));
    }

    #[test]
    fn option_is_reusable() {
        let opt = deprecated(Some("gone"));

        let (mut a, mut b) = (field(), field());
        opt.apply(&mut a);
        opt.apply(&mut b);

        assert_eq!(a.deprecation_status().reason(), Some("gone"));
        assert_eq!(b.deprecation_status().reason(), Some("gone"));
    }
}
