//! Kept in its own test binary: the scoped subscriber below must not race with
//! callsite registration from other tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn warnings_for(e: f64) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(count.clone()));
    tracing::subscriber::with_default(subscriber, || {
        rollgear::generate(25.0, 3.0, e, 10, 200).expect("advisory is not fatal");
    });
    count.load(Ordering::SeqCst)
}

#[test]
fn advisory_is_logged_once_iff_eccentricity_reaches_half_b() {
    assert_eq!(warnings_for(1.2), 0);
    assert_eq!(warnings_for(1.5), 1);
    assert_eq!(warnings_for(2.9), 1);
}
