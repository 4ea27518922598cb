//! Layout demo - flex rows, padding and inherited styles in one frame.
//!
//! Run with: cargo run --example layout

use crossterm::style::Color;
use spark_document::{
    Document, Edges, Element, JustifyContent, Output, TextStyle, TextWrap, fragment, layout,
    styled, text,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn row(label: &str, value: &str) -> Element {
    layout(vec![
        text(label).bold().into(),
        text(value).wrap(TextWrap::Truncate).into(),
    ])
    .row()
    .justify(JustifyContent::SpaceBetween)
    .width(40u16)
    .into()
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let doc = Document::new();
    doc.set_output(Output::stdout());

    doc.add([
        styled(TextStyle::new().fg(Color::Cyan), text("Build summary")),
        layout(fragment([
            row("crate", "spark-document"),
            row("profile", "release"),
            row("target", "x86_64-unknown-linux-gnu"),
        ]))
        .padding(Edges::new(0, 0, 0, 2))
        .into(),
        text("A long note that wraps across several lines once it runs past the terminal width.")
            .italic()
            .into(),
    ]);

    doc.render_frame();
    doc.close();
}
