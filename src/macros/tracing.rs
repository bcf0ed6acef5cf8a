// Macros to emit registration events.
//
// All of them compile to nothing unless the `tracing` feature is enabled.

macro_rules! __schemabuilder_trace_internal {
    ($trace_type:ident; $($element:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            $crate::tracing::$trace_type!($($element)*);
        }
    }};
}

macro_rules! __schemabuilder_trace {
    ($($element:tt)*) => {{
        __schemabuilder_trace_internal!(trace; $($element)*)
    }};
}

macro_rules! __schemabuilder_trace_debug {
    ($($element:tt)*) => {{
        __schemabuilder_trace_internal!(debug; $($element)*)
    }};
}

macro_rules! __schemabuilder_trace_warn {
    ($($element:tt)*) => {{
        __schemabuilder_trace_internal!(warn; $($element)*)
    }};
}
