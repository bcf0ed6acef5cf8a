//! Mappings between GraphQL enum values and native values.

use std::any::Any;

use arcstr::ArcStr;
use derive_more::Debug;
use indexmap::IndexMap;

use crate::native::NativeType;

/// Mapping of GraphQL enum value names to values of a native type.
#[derive(Debug)]
pub struct EnumMapping {
    name: ArcStr,
    native_type: NativeType,
    #[debug(skip)]
    values: IndexMap<ArcStr, Box<dyn Any + Send + Sync>>,
}

impl EnumMapping {
    /// Builds a new [`EnumMapping`] of the native type `T`.
    ///
    /// # Panics
    ///
    /// If a value name or a value appears twice.
    #[track_caller]
    pub fn new<T, N>(name: impl Into<ArcStr>, values: impl IntoIterator<Item = (N, T)>) -> Self
    where
        T: Any + PartialEq + Send + Sync,
        N: Into<ArcStr>,
    {
        let name = name.into();
        let mut seen = Vec::<(ArcStr, T)>::new();
        for (value_name, value) in values {
            let value_name = value_name.into();
            if seen.iter().any(|(n, _)| *n == value_name) {
                panic!("Duplicate value name `{value_name}` in enum `{name}`");
            }
            if let Some((other, _)) = seen.iter().find(|(_, v)| *v == value) {
                panic!("Values `{other}` and `{value_name}` of enum `{name}` are equal");
            }
            seen.push((value_name, value));
        }

        Self {
            name,
            native_type: NativeType::of::<T>(),
            values: seen
                .into_iter()
                .map(|(n, v)| (n, Box::new(v) as Box<dyn Any + Send + Sync>))
                .collect(),
        }
    }

    /// Name of the enum.
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// Native type of the enum values.
    pub fn native_type(&self) -> NativeType {
        self.native_type
    }

    /// Value names, in registration order.
    pub fn value_names(&self) -> impl Iterator<Item = &ArcStr> {
        self.values.keys()
    }

    /// Native value registered under `name`, if `T` is the enum's type.
    pub fn value<T: Any>(&self, name: &str) -> Option<&T> {
        self.values.get(name)?.downcast_ref::<T>()
    }

    /// Name under which `value` is registered.
    pub fn name_of<T: Any + PartialEq>(&self, value: &T) -> Option<&ArcStr> {
        self.values
            .iter()
            .find(|(_, v)| v.downcast_ref::<T>() == Some(value))
            .map(|(n, _)| n)
    }
}
