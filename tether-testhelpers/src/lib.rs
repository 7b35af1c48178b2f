#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

use std::sync::LazyLock;
use std::time::Instant;

use tether_value::{VObject, Value};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

struct Uptime;

impl FormatTime for Uptime {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let elapsed = START_TIME.elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    let _ = *START_TIME;

    color_backtrace::install();

    let filter = std::env::var("TETHER_LOG")
        .ok()
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::TRACE));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_timer(Uptime)
                .with_target(false)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
});

/// Set up tracing and backtraces for a test.
///
/// Safe to call from every test; the subscriber is installed once per
/// process. Output goes through the test writer, so it only shows up for
/// failing tests unless `--nocapture` is passed.
pub fn setup() {
    #[allow(clippy::let_unit_value)]
    let _ = *SUBSCRIBER_INIT;
}

/// Decode a JSON fixture into a tree.
///
/// # Panics
///
/// Panics if the fixture is not a JSON object; fixtures are test input.
#[track_caller]
pub fn tree(json: &str) -> VObject {
    match VObject::from_json_str(json) {
        Ok(tree) => tree,
        Err(err) => panic!("bad fixture: {err}\n{json}"),
    }
}

/// Read the value at a dotted key such as `a.b.c`.
///
/// Returns `None` if any segment is missing or an intermediate value is
/// not an object.
pub fn dig(tree: &VObject, dotted: &str) -> Option<Value> {
    let mut segments = dotted.split('.');
    let last = segments.next_back()?;
    let mut current = tree.clone();
    for segment in segments {
        current = match current.get(segment)? {
            Value::Object(obj) => obj,
            _ => return None,
        };
    }
    current.get(last)
}
