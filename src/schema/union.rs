//! Union declarations.

use std::any::{Any, TypeId};

use arcstr::ArcStr;
use serde::Serialize;

use crate::native::NativeType;

/// Marker that can be embedded into a struct to denote that it should be
/// treated as a GraphQL union.
///
/// For example, a return value that may be an `Asset` or a `Vehicle`:
///
/// ```
/// use juniper_schemabuilder::{Schema, Union};
///
/// struct Asset;
/// struct Vehicle;
///
/// struct GatewayUnion {
///     _union: Union,
///     asset: Option<Asset>,
///     vehicle: Option<Vehicle>,
/// }
///
/// let mut schema = Schema::new();
/// schema.union::<GatewayUnion>("Gateway");
///
/// assert!(schema.is_union::<GatewayUnion>());
/// assert!(Union::is_marker::<Union>());
/// assert!(!Union::is_marker::<Asset>());
/// ```
///
/// Fields returning a union are expected to return it one-hot: only one of
/// `asset` or `vehicle` is set. Every member other than the marker is a
/// variant. Members are discovered by the schema compiler, which tells the
/// marker apart with [`Union::is_marker()`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct Union;

impl Union {
    /// Checks whether `T` is the [`Union`] marker itself.
    pub fn is_marker<T: Any + ?Sized>() -> bool {
        TypeId::of::<T>() == TypeId::of::<Union>()
    }
}

/// Declaration of a native type as a GraphQL union.
#[derive(Debug)]
pub struct UnionObject {
    name: ArcStr,
    description: Option<ArcStr>,
    native_type: NativeType,
}

impl UnionObject {
    pub(crate) fn new(name: ArcStr, native_type: NativeType) -> Self {
        Self {
            name,
            description: None,
            native_type,
        }
    }

    /// Name of the union.
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// Description of the union.
    pub fn description(&self) -> Option<&ArcStr> {
        self.description.as_ref()
    }

    /// Native type declared as union.
    pub fn native_type(&self) -> NativeType {
        self.native_type
    }

    /// Sets the `description` of this [`UnionObject`].
    ///
    /// Overwrites any previously set description.
    pub fn set_description(&mut self, description: impl Into<ArcStr>) -> &mut Self {
        self.description = Some(description.into());
        self
    }
}
