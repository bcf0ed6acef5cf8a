//! Descriptor of a native type exposed as a GraphQL object.

use std::{any::Any, iter};

use arcstr::ArcStr;
use derive_more::{Deref, IntoIterator};
use fnv::FnvHashMap;

use super::{
    meta::{Field, FieldFn},
    options::FieldFuncOption,
};
use crate::native::NativeType;

/// Set of field functions exposed on an [`Object`], keyed by field name.
#[derive(Debug, Default, Deref, IntoIterator)]
#[into_iterator(owned, ref)]
pub struct Methods(FnvHashMap<ArcStr, Field>);

/// Paginated field function, kept apart from the ordinary [`Methods`] since
/// it is bound differently by the schema compiler.
#[derive(Debug)]
pub struct PaginationObject {
    /// Name of the field.
    pub name: ArcStr,
    /// Handle to the paginated field function.
    pub func: FieldFn,
}

impl PaginationObject {
    /// Builds a new [`PaginationObject`] from the provided `name` and
    /// function.
    pub fn new<F>(name: impl Into<ArcStr>, func: F) -> Self
    where
        F: Any + Send + Sync,
    {
        Self {
            name: name.into(),
            func: FieldFn::new(func),
        }
    }
}

/// Native type and the set of its functions to be exposed as an object in a
/// GraphQL schema.
///
/// Field functions may take a number of optional parameters and return an
/// optional error:
///
/// ```text
/// fn([context], [&Type], [args]) -> Result | Result<Result, Error>
/// ```
///
/// Which of those a function uses is worked out by the schema compiler. This
/// descriptor only collects the functions under their field names.
///
/// ```
/// use juniper_schemabuilder::{Object, non_nullable};
///
/// struct User {
///     first_name: String,
///     last_name: String,
///     age: Option<i32>,
/// }
///
/// let mut user = Object::new::<User>();
/// user.field_func("fullName", |u: &User| {
///     format!("{} {}", u.first_name, u.last_name)
/// });
/// user.field_func_with("age", |u: &User| u.age, [non_nullable()]);
/// user.key("fullName");
///
/// assert_eq!(user.methods().len(), 2);
/// assert!(user.field("age").unwrap().is_non_nullable());
/// assert_eq!(user.key_field().map(|k| k.as_str()), Some("fullName"));
/// ```
#[derive(Debug)]
pub struct Object {
    name: Option<ArcStr>,
    description: Option<ArcStr>,
    native_type: NativeType,
    methods: Methods,
    paginated_fields: Vec<PaginationObject>,
    key: Option<ArcStr>,
}

impl Object {
    /// Builds a new [`Object`] describing the native type `T`.
    pub fn new<T: Any>() -> Self {
        Self::for_native_type(NativeType::of::<T>())
    }

    /// Builds a new [`Object`] describing the provided native type.
    pub fn for_native_type(native_type: NativeType) -> Self {
        Self {
            name: None,
            description: None,
            native_type,
            methods: Methods::default(),
            paginated_fields: vec![],
            key: None,
        }
    }

    /// Sets the display `name` of this [`Object`].
    ///
    /// An empty `name` leaves the name unset, so the schema compiler derives
    /// it from the native type.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<ArcStr>) -> Self {
        self.set_name(name);
        self
    }

    /// Sets the `description` of this [`Object`].
    #[must_use]
    pub fn with_description(mut self, description: impl Into<ArcStr>) -> Self {
        self.set_description(description);
        self
    }

    /// Sets the display `name` of this [`Object`], in place.
    ///
    /// Overwrites any previously set name.
    pub fn set_name(&mut self, name: impl Into<ArcStr>) {
        let name = name.into();
        self.name = (!name.is_empty()).then_some(name);
    }

    /// Sets the `description` of this [`Object`], in place.
    ///
    /// Overwrites any previously set description.
    pub fn set_description(&mut self, description: impl Into<ArcStr>) {
        self.description = Some(description.into());
    }

    /// Display name of this [`Object`], if any was set.
    pub fn name(&self) -> Option<&ArcStr> {
        self.name.as_ref()
    }

    /// Description of this [`Object`].
    pub fn description(&self) -> Option<&ArcStr> {
        self.description.as_ref()
    }

    /// Native type described by this [`Object`].
    pub fn native_type(&self) -> NativeType {
        self.native_type
    }

    /// Ordinary fields registered on this [`Object`].
    pub fn methods(&self) -> &Methods {
        &self.methods
    }

    /// Looks up an ordinary field by its name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.methods.get(name)
    }

    /// Paginated fields, in registration order.
    pub fn paginated_fields(&self) -> &[PaginationObject] {
        &self.paginated_fields
    }

    /// Name of the field identifying this [`Object`], if one was set with
    /// [`Object::key()`].
    pub fn key_field(&self) -> Option<&ArcStr> {
        self.key.as_ref()
    }

    /// Exposes a field on this [`Object`].
    ///
    /// See [`Object::field_func_with()`].
    ///
    /// # Panics
    ///
    /// If `name` is empty or a field with this `name` is already registered.
    #[track_caller]
    pub fn field_func<F>(&mut self, name: impl Into<ArcStr>, func: F)
    where
        F: Any + Send + Sync,
    {
        self.field_func_with(name, func, iter::empty());
    }

    /// Exposes a field on this [`Object`], configured by the provided
    /// `options`.
    ///
    /// Options are applied in order, so the last one wins when several set
    /// the same attribute.
    ///
    /// # Panics
    ///
    /// If `name` is empty or a field with this `name` is already registered.
    /// The already registered fields stay untouched.
    #[track_caller]
    pub fn field_func_with<F>(
        &mut self,
        name: impl Into<ArcStr>,
        func: F,
        options: impl IntoIterator<Item = FieldFuncOption>,
    ) where
        F: Any + Send + Sync,
    {
        let name = name.into();
        if name.is_empty() {
            panic!(
                "Field names must not be empty, found one on object `{}`",
                self.display_name(),
            );
        }
        if self.methods.contains_key(&name) {
            panic!(
                "Duplicate field `{name}` on object `{}`",
                self.display_name(),
            );
        }

        let mut field = Field::new(FieldFn::new(func));
        for option in options {
            option.apply(&mut field);
        }

        __schemabuilder_trace!(
            object = %self.display_name(),
            field = %name,
            function = field.func().type_name(),
            non_nullable = field.is_non_nullable(),
            "registered field"
        );
        self.methods.0.insert(name, field);
    }

    /// Exposes a paginated field on this [`Object`].
    ///
    /// Paginated fields are appended in registration order. Their names are
    /// not checked for uniqueness.
    pub fn paginated_field_func<F>(&mut self, name: impl Into<ArcStr>, func: F)
    where
        F: Any + Send + Sync,
    {
        self.push_paginated_field(PaginationObject::new(name, func));
    }

    /// Appends an already built [`PaginationObject`] to this [`Object`].
    pub fn push_paginated_field(&mut self, field: PaginationObject) {
        __schemabuilder_trace!(
            object = %self.display_name(),
            field = %field.name,
            "registered paginated field"
        );
        self.paginated_fields.push(field);
    }

    /// Registers the key field of this [`Object`].
    ///
    /// The field is specified by its GraphQL name, as passed to
    /// [`Object::field_func()`], not by the name of a native struct member.
    /// For a `User` with a `user_key` member exposed as `userKey`:
    ///
    /// ```
    /// # use juniper_schemabuilder::Object;
    /// struct User {
    ///     user_key: i64,
    /// }
    ///
    /// let mut user = Object::new::<User>();
    /// user.key("userKey");
    /// user.field_func("userKey", |u: &User| u.user_key);
    /// ```
    ///
    /// Whether the name refers to an existing field is checked by the schema
    /// compiler. Calling this again replaces the previous key.
    pub fn key(&mut self, field_name: impl Into<ArcStr>) {
        let field_name = field_name.into();
        if self.key.is_some() {
            __schemabuilder_trace_debug!(
                object = %self.display_name(),
                previous = ?self.key,
                key = %field_name,
                "replacing key field"
            );
        }
        self.key = Some(field_name);
    }

    /// Name used to refer to this [`Object`] in diagnostics.
    pub(crate) fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.native_type.short_name())
    }
}
