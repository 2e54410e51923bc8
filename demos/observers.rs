//! # Example: observers
//!
//! Demonstrates attaching observers to typed events and routing diagnostics.
//!
//! Shows how to:
//! - Define events with `impl Event for T {}`.
//! - Implement the [`Observer`] trait and discriminate with `downcast_ref`.
//! - Attach, notify and detach through a [`Subject`].
//! - Route diagnostics to `tracing` (default) or to the stdout [`LogWriter`].
//!
//! ## Flow
//! ```text
//! Subject::attach::<Door>(console) / attach::<Alarm>(console, siren)
//!     ├─► notify(&Door)   ──► console.on_notify()
//!     ├─► notify(&Alarm)  ──► console.on_notify() ──► siren.on_notify()
//!     ├─► attach::<Alarm>(siren) again   ──► [redundant-attach]
//!     └─► detach everything ──► registry released
//! ```
//!
//! ## Run
//! Requires the `logging` feature to export [`LogWriter`].
//! ```bash
//! RUST_LOG=eventvisor=warn cargo run --example observers --features logging
//! ```

use std::cell::Cell;
use std::rc::Rc;

use eventvisor::{Config, Event, LogWriter, Observer, Subject};
use tracing_subscriber::EnvFilter;

/// A door changed state.
struct Door {
    open: bool,
}

/// An alarm was raised in a zone.
struct Alarm {
    zone: &'static str,
}

impl Event for Door {}
impl Event for Alarm {}

/// Prints every event it receives.
struct Console;

impl Observer for Console {
    fn on_notify(&self, ev: &dyn Event) {
        if let Some(door) = ev.downcast_ref::<Door>() {
            println!("[console] door {}", if door.open { "opened" } else { "closed" });
        } else if let Some(alarm) = ev.downcast_ref::<Alarm>() {
            println!("[console] alarm in zone={}", alarm.zone);
        } else {
            println!("[console] unhandled event {}", ev.type_name());
        }
    }

    fn on_init(&self) {
        println!("[console] init");
    }

    fn on_destroy(&self) {
        println!("[console] destroy");
    }

    fn name(&self) -> &'static str {
        "console"
    }
}

/// Counts alarms.
#[derive(Default)]
struct Siren {
    rings: Cell<u32>,
}

impl Observer for Siren {
    fn on_notify(&self, _ev: &dyn Event) {
        self.rings.set(self.rings.get() + 1);
        println!("[siren] ring #{}", self.rings.get());
    }

    fn on_init(&self) {}

    fn on_destroy(&self) {}

    fn name(&self) -> &'static str {
        "siren"
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("observers demo (run with --features logging)\n");

    // Diagnostics through `tracing` (shown with RUST_LOG=eventvisor=warn).
    let traced = Subject::with_config(Config::verbose());
    let console = Rc::new(Console);
    console.on_init();
    traced.detach::<Door>(&console);

    // Diagnostics printed to stdout.
    let subject = Subject::builder(Config::verbose())
        .with_sink(Rc::new(LogWriter::new()))
        .build();
    let siren = Rc::new(Siren::default());

    subject.attach::<Door>(&console);
    subject.attach::<Alarm>(&console);
    subject.attach::<Alarm>(&siren);

    subject.notify(&Door { open: true });
    subject.notify(&Alarm { zone: "lobby" });
    subject.notify(&Door { open: false });

    subject.attach::<Alarm>(&siren);

    subject.detach::<Door>(&console);
    subject.detach::<Alarm>(&console);
    subject.detach::<Alarm>(&siren);
    subject.detach::<Alarm>(&siren);
    console.on_destroy();

    subject.notify(&Alarm { zone: "vault" });
    println!(
        "\nfinished: rings={} registry_active={}",
        siren.rings.get(),
        subject.is_active()
    );
}
