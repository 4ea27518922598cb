//! Progress demo - live task rows that become scrollback once finished.
//!
//! Run with: cargo run --example progress
//! Set RUST_LOG=spark_document=debug to see frame commits on stderr.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::thread;
use std::time::Duration;

use crossterm::style::Color;
use spark_document::{
    CancellationToken, Component, Context, Document, Element, Finalizer, Output, TextStyle,
    layout, styled, text,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// One download with a percentage updated from a worker thread.
struct Task {
    name: &'static str,
    percent: AtomicU16,
    done: AtomicBool,
}

impl Task {
    fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            percent: AtomicU16::new(0),
            done: AtomicBool::new(false),
        })
    }
}

impl Component for Task {
    fn body(&self, _cx: &Context) -> Element {
        let percent = self.percent.load(Ordering::Relaxed);
        let filled = usize::from(percent / 5);
        let bar = format!("[{}{}]", "#".repeat(filled), " ".repeat(20 - filled));

        let status = if self.done.load(Ordering::Relaxed) {
            text("done").fg(Color::Green)
        } else {
            text(format!("{percent:>3}%"))
        };

        layout(vec![
            text(self.name).bold().into(),
            text(bar).into(),
            status.into(),
        ])
        .row()
        .gap(1)
        .into()
    }

    fn as_finalizer(&self) -> Option<&dyn Finalizer> {
        Some(self)
    }
}

impl Finalizer for Task {
    fn finalize(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let doc = Arc::new(Document::new());
    doc.set_output(Output::stdout());
    doc.add([styled(
        TextStyle::new().dim(),
        text("fetching packages…"),
    )]);

    let token = CancellationToken::new();
    let handle = doc.spawn(token.clone())?;

    for (i, name) in ["alpha", "bravo", "charlie"].into_iter().enumerate() {
        let task = Task::new(name);
        let step = 4 + i as u16 * 3;
        doc.add([Element::Component(task.clone())]);

        let mut percent = 0;
        while percent < 100 {
            percent = (percent + step).min(100);
            task.percent.store(percent, Ordering::Relaxed);
            thread::sleep(Duration::from_millis(40));
        }
    }

    thread::sleep(Duration::from_millis(200));
    token.cancel();
    handle.join().ok();
    // Final frame: every task is finalized and shows "done".
    doc.close();
    Ok(())
}
