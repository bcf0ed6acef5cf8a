//! Identity of the native Rust types described by a schema.

use std::{
    any::{self, Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
};

/// Opaque handle to the native type an [`Object`] describes.
///
/// Two handles are equal when they refer to the same [`TypeId`]. The type
/// name is kept around for diagnostics and for deriving a display name, which
/// is left to the schema compiler.
///
/// [`Object`]: crate::Object
#[derive(Clone, Copy)]
pub struct NativeType {
    id: TypeId,
    name: &'static str,
}

impl NativeType {
    /// Returns the handle for `T`.
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    /// Checks whether this handle refers to `T`.
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// [`TypeId`] of the described type.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified name of the described type, as reported by
    /// [`any::type_name()`].
    pub fn type_name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of [`NativeType::type_name()`], with generic
    /// parameters stripped.
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl PartialEq for NativeType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NativeType {}

impl Hash for NativeType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeType").field(&self.name).finish()
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
