//! Registration events, emitted with the `tracing` feature:
//! `cargo test --features tracing`.

#![cfg(feature = "tracing")]

use std::{
    io,
    sync::{Arc, Mutex},
};

use juniper_schemabuilder::{Schema, non_nullable};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn output(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

struct Person;

fn capture(build: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(captured.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, build);
    captured.output()
}

#[test]
fn emits_registration_events() {
    let out = capture(|| {
        let mut schema = Schema::new();
        schema
            .object::<Person>("Person")
            .field_func_with("age", |_: &Person| 42, [non_nullable()])
            .paginated_field_func("friends", |_: &Person| Vec::<String>::new())
            .key("age")
            .key("name");
    });

    assert!(out.contains("registered object"), "{out}");
    assert!(out.contains("registered field"), "{out}");
    assert!(out.contains("object=Person"), "{out}");
    assert!(out.contains("field=age"), "{out}");
    assert!(out.contains("non_nullable=true"), "{out}");
    assert!(out.contains("registered paginated field"), "{out}");
    assert!(out.contains("replacing key field"), "{out}");
}

#[test]
fn warns_on_type_backing_several_objects() {
    let out = capture(|| {
        let mut schema = Schema::new();
        schema.object::<Person>("Person");
        schema.object::<Person>("Member");
    });

    assert!(out.contains("WARN"), "{out}");
    assert!(
        out.contains("native type is described by more than one object"),
        "{out}",
    );
}

#[test]
fn silent_without_registrations() {
    let out = capture(|| {
        Schema::new();
    });

    assert_eq!(out, "");
}
