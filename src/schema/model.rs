//! Collection of all descriptors of a schema.

use std::any::{self, Any};

use arcstr::ArcStr;
use derive_more::Deref;
use indexmap::{IndexMap, map::Entry};

use super::{
    enums::EnumMapping,
    object::{Object, PaginationObject},
    options::FieldFuncOption,
    union::UnionObject,
};
use crate::native::NativeType;

/// Native type backing the root query object of a [`Schema`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Query;

/// Native type backing the root mutation object of a [`Schema`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Mutation;

/// [`Object`] owned by a [`Schema`], open for registering fields.
///
/// The object keeps the name it is registered under in the [`Schema`], so
/// renaming it is not possible from here:
///
/// ```compile_fail
/// # use juniper_schemabuilder::Schema;
/// # struct User;
/// let mut schema = Schema::new();
/// schema.object::<User>("User").set_name("Viewer");
/// ```
#[derive(Debug, Deref)]
#[deref(forward)]
pub struct ObjectBuilder<'a>(&'a mut Object);

impl ObjectBuilder<'_> {
    /// See [`Object::field_func()`].
    ///
    /// # Panics
    ///
    /// If `name` is empty or a field with this `name` is already registered.
    #[track_caller]
    pub fn field_func<F>(&mut self, name: impl Into<ArcStr>, func: F) -> &mut Self
    where
        F: Any + Send + Sync,
    {
        self.0.field_func(name, func);
        self
    }

    /// See [`Object::field_func_with()`].
    ///
    /// # Panics
    ///
    /// If `name` is empty or a field with this `name` is already registered.
    #[track_caller]
    pub fn field_func_with<F>(
        &mut self,
        name: impl Into<ArcStr>,
        func: F,
        options: impl IntoIterator<Item = FieldFuncOption>,
    ) -> &mut Self
    where
        F: Any + Send + Sync,
    {
        self.0.field_func_with(name, func, options);
        self
    }

    /// See [`Object::paginated_field_func()`].
    pub fn paginated_field_func<F>(&mut self, name: impl Into<ArcStr>, func: F) -> &mut Self
    where
        F: Any + Send + Sync,
    {
        self.0.paginated_field_func(name, func);
        self
    }

    /// See [`Object::push_paginated_field()`].
    pub fn push_paginated_field(&mut self, field: PaginationObject) -> &mut Self {
        self.0.push_paginated_field(field);
        self
    }

    /// See [`Object::key()`].
    pub fn key(&mut self, field_name: impl Into<ArcStr>) -> &mut Self {
        self.0.key(field_name);
        self
    }

    /// See [`Object::set_description()`].
    pub fn set_description(&mut self, description: impl Into<ArcStr>) -> &mut Self {
        self.0.set_description(description);
        self
    }
}

/// Collection of descriptors making up a GraphQL schema.
///
/// This is what gets handed to the schema compiler. Nothing here is compiled
/// or validated beyond the uniqueness of names.
#[derive(Debug, Default)]
pub struct Schema {
    objects: IndexMap<ArcStr, Object>,
    unions: IndexMap<ArcStr, UnionObject>,
    enums: IndexMap<ArcStr, EnumMapping>,
}

impl Schema {
    /// Creates an empty [`Schema`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the [`Object`] named `name`, registering it for the native
    /// type `T` if it doesn't exist yet.
    ///
    /// The object is handed out as an [`ObjectBuilder`], which keeps its name
    /// in line with the one it's registered under.
    ///
    /// # Panics
    ///
    /// If `name` is empty or already registered for another native type.
    #[track_caller]
    pub fn object<T: Any>(&mut self, name: impl Into<ArcStr>) -> ObjectBuilder<'_> {
        let name = name.into();
        if name.is_empty() {
            panic!("Object names must not be empty");
        }

        let native_type = NativeType::of::<T>();
        let described_elsewhere = self
            .objects
            .iter()
            .any(|(n, o)| o.native_type() == native_type && *n != name);
        if described_elsewhere {
            __schemabuilder_trace_warn!(
                native_type = native_type.type_name(),
                object = %name,
                "native type is described by more than one object"
            );
        }

        let object = match self.objects.entry(name) {
            Entry::Occupied(e) => {
                if e.get().native_type() != native_type {
                    panic!(
                        "Object `{}` registered with type `{}`, but is already bound to `{}`",
                        e.key(),
                        any::type_name::<T>(),
                        e.get().native_type(),
                    );
                }
                e.into_mut()
            }
            Entry::Vacant(e) => {
                __schemabuilder_trace_debug!(
                    object = %e.key(),
                    native_type = native_type.type_name(),
                    "registered object"
                );
                let object = Object::for_native_type(native_type).with_name(e.key().clone());
                e.insert(object)
            }
        };
        ObjectBuilder(object)
    }

    /// Root query [`Object`], named `Query`.
    pub fn query(&mut self) -> ObjectBuilder<'_> {
        self.object::<Query>("Query")
    }

    /// Root mutation [`Object`], named `Mutation`.
    pub fn mutation(&mut self) -> ObjectBuilder<'_> {
        self.object::<Mutation>("Mutation")
    }

    /// Declares the native type `T` as a union named `name`.
    ///
    /// Declaring the same type under the same name again returns the existing
    /// declaration.
    ///
    /// # Panics
    ///
    /// If `name` is empty or already declared for another native type, or if
    /// `T` is already declared under another name.
    #[track_caller]
    pub fn union<T: Any>(&mut self, name: impl Into<ArcStr>) -> &mut UnionObject {
        let name = name.into();
        if name.is_empty() {
            panic!("Union names must not be empty");
        }

        let native_type = NativeType::of::<T>();
        if let Some(other) = self
            .unions
            .values()
            .find(|u| u.native_type() == native_type && *u.name() != name)
        {
            panic!(
                "Type `{native_type}` is already declared as union `{}`",
                other.name(),
            );
        }

        match self.unions.entry(name) {
            Entry::Occupied(e) => {
                if e.get().native_type() != native_type {
                    panic!(
                        "Union `{}` declared with type `{native_type}`, but is already bound to `{}`",
                        e.key(),
                        e.get().native_type(),
                    );
                }
                e.into_mut()
            }
            Entry::Vacant(e) => {
                __schemabuilder_trace_debug!(
                    union = %e.key(),
                    native_type = native_type.type_name(),
                    "declared union"
                );
                let union = UnionObject::new(e.key().clone(), native_type);
                e.insert(union)
            }
        }
    }

    /// Checks whether the native type `T` is declared as a union.
    pub fn is_union<T: Any>(&self) -> bool {
        self.unions.values().any(|u| u.native_type().is::<T>())
    }

    /// Registers a GraphQL enum named `name`, mapping value names to native
    /// values of type `T`.
    ///
    /// # Panics
    ///
    /// If `name` is empty or already registered, or if the mapping contains a
    /// value name or a value twice.
    #[track_caller]
    pub fn enum_type<T, N>(
        &mut self,
        name: impl Into<ArcStr>,
        values: impl IntoIterator<Item = (N, T)>,
    ) -> &EnumMapping
    where
        T: Any + PartialEq + Send + Sync,
        N: Into<ArcStr>,
    {
        let name = name.into();
        if name.is_empty() {
            panic!("Enum names must not be empty");
        }

        match self.enums.entry(name) {
            Entry::Occupied(e) => panic!("Duplicate enum `{}`", e.key()),
            Entry::Vacant(e) => {
                let mapping = EnumMapping::new(e.key().clone(), values);
                __schemabuilder_trace_debug!(
                    enum_type = %mapping.name(),
                    values = mapping.value_names().count(),
                    "registered enum"
                );
                e.insert(mapping)
            }
        }
    }

    /// Registered objects, in registration order.
    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.values()
    }

    /// Looks up an [`Object`] by its name.
    pub fn get_object(&self, name: &str) -> Option<&Object> {
        self.objects.get(name)
    }

    /// Declared unions, in declaration order.
    pub fn unions(&self) -> impl Iterator<Item = &UnionObject> {
        self.unions.values()
    }

    /// Registered enums, in registration order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumMapping> {
        self.enums.values()
    }
}
