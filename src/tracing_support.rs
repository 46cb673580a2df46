//! Tracing support for the engines.
//!
//! This module provides tracing functionality when the `tracing` feature is enabled,
//! and provides no-op implementations when it's disabled.  Engines open a
//! span per call with [`engine_span!`] and report notable outcomes with
//! [`debug_event!`].

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, filter::LevelFilter, layer::Context, layer::SubscriberExt,
        registry::LookupSpan, util::SubscriberInitExt,
    };

    thread_local! {
        static TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    /// Accumulates the wall-clock time spent in each span, keyed by span name.
    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    TIMINGS.with(|totals| {
                        let mut totals = totals.borrow_mut();
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    });
                }
            }
        }
    }

    /// Installs the global subscriber: a timing layer plus a stderr formatter
    /// that shows `DEBUG` events when `verbose` is set and only warnings
    /// otherwise.  Only the first call has any effect.
    pub fn init_tracing(verbose: bool) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let level = if verbose {
                LevelFilter::DEBUG
            } else {
                LevelFilter::WARN
            };
            let fmt = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(level);
            let _ = Registry::default().with(TimingLayer).with(fmt).try_init();
        });
    }

    /// Returns the accumulated span timings recorded on the current thread as
    /// `(span name, total time, number of calls)`, slowest first.
    pub fn engine_timings() -> Vec<(&'static str, Duration, usize)> {
        TIMINGS.with(|totals| {
            let mut entries = totals
                .borrow()
                .iter()
                .map(|(&name, &(duration, count))| (name, duration, count))
                .collect::<Vec<_>>();
            entries.sort_by(|a, b| b.1.cmp(&a.1));
            entries
        })
    }

    /// Clears the span timings recorded on the current thread.
    pub fn reset_engine_timings() {
        TIMINGS.with(|totals| totals.borrow_mut().clear());
    }

    macro_rules! engine_span {
        ($name:expr $(, $($fields:tt)*)?) => {
            ::tracing::debug_span!($name $(, $($fields)*)?).entered()
        };
    }

    macro_rules! debug_event {
        ($($arg:tt)*) => {
            ::tracing::debug!($($arg)*)
        };
    }

    pub(crate) use {debug_event, engine_span};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::time::Duration;

    pub fn init_tracing(_verbose: bool) {
        // No-op when tracing is disabled
    }

    pub fn engine_timings() -> Vec<(&'static str, Duration, usize)> {
        Vec::new()
    }

    pub fn reset_engine_timings() {
        // No-op when tracing is disabled
    }

    macro_rules! engine_span {
        ($($args:tt)*) => {
            ()
        };
    }

    macro_rules! debug_event {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use {debug_event, engine_span};
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(feature = "tracing")]
pub(crate) use enabled::{debug_event, engine_span};

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug_event, engine_span};
