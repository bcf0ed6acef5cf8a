#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

#[doc(hidden)]
pub use static_assertions as sa;
#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing;

#[macro_use]
mod macros;
mod native;
pub mod schema;

pub use crate::{
    native::NativeType,
    schema::{
        enums::EnumMapping,
        meta::{BindError, CallingConvention, DeprecationStatus, Field, FieldFn},
        model::{Mutation, ObjectBuilder, Query, Schema},
        object::{Methods, Object, PaginationObject},
        options::{FieldFuncOption, deprecated, description, non_nullable},
        summary::{EnumSummary, FieldSummary, ObjectSummary, SchemaSummary, UnionSummary},
        union::{Union, UnionObject},
    },
};

// Descriptors are built on one thread and then shared read-only.
sa::assert_impl_all!(Object: Send, Sync);
sa::assert_impl_all!(Schema: Send, Sync);
sa::assert_impl_all!(FieldFuncOption: Send, Sync, Clone);
sa::assert_eq_size!(Union, ());
