//! Interactive counter page in the terminal.
//!
//! The header reads its count through the provider scope, the page body
//! drives a dispatch store. Commands on stdin: `+`/`i` increment,
//! `-`/`d` decrement, `q` quits. Set `RUST_LOG=tally=debug` to watch the
//! store at work.

use std::io::{self, BufRead, Write};

use tally::message::{self, DECREMENT_LABEL, FOOTER, INCREMENT_LABEL, TITLE};
use tally::{use_count, AppStore, CountProvider, CounterError, CounterStore};
use tracing_subscriber::EnvFilter;

fn render_header() -> Result<String, CounterError> {
    let count = use_count()?;
    Ok(message::header_line(count.value()))
}

fn render_page(store: &AppStore) -> Result<String, CounterError> {
    let value = store.value();
    Ok(format!(
        "{}\n{}\n\n{}\n\n{}\n{}",
        render_header()?,
        TITLE,
        message::status_line(value),
        value,
        FOOTER
    ))
}

fn run(store: &AppStore) -> Result<(), Box<dyn std::error::Error>> {
    // Keep the header's counter in step with the page store
    let header_count = use_count()?;
    let _mirror = store.subscribe(move |value| {
        while header_count.value() < value {
            header_count.increment();
        }
        while header_count.value() > value {
            header_count.decrement();
        }
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}\n", render_page(store)?)?;

    for line in stdin.lock().lines() {
        match line?.trim() {
            "+" | "i" => store.increment(),
            "-" | "d" => store.decrement(),
            "q" => break,
            other => {
                writeln!(
                    stdout,
                    "unknown command {other:?}: '+' {INCREMENT_LABEL}, '-' {DECREMENT_LABEL}, 'q' quit"
                )?;
                continue;
            }
        }
        writeln!(stdout, "{}\n", render_page(store)?)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let store = AppStore::new();
    CountProvider::scope(|| run(&store))
}
