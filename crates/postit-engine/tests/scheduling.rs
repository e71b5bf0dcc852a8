use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use postit_engine::{ParseOptions, ParseScheduler, parse};
use pretty_assertions::assert_eq;

/// Types `text` one character at a time, requesting a parse per keystroke.
fn type_out(scheduler: &ParseScheduler, text: &str) {
    for end in text.char_indices().map(|(i, c)| i + c.len_utf8()) {
        scheduler.request(&text[..end]);
    }
}

#[test]
fn burst_of_edits_settles_on_the_final_text() {
    let scheduler = ParseScheduler::default();
    let note = "# Shopping\n- **milk**\n- eggs\n---\n```\nraw\n```\nsee https://example.com";
    type_out(&scheduler, note);

    let last = scheduler.wait_idle().expect("final result");
    assert_eq!(last.generation, note.chars().count() as u64);
    assert_eq!(last.blocks, parse(note));
    assert_eq!(scheduler.latest_delivered(), scheduler.latest_requested());
}

#[test]
fn delivered_generations_only_move_forward() {
    let delivered = Arc::new(Mutex::new(Vec::new()));
    let scheduler = {
        let delivered = delivered.clone();
        ParseScheduler::with_notify(ParseOptions::default(), move |generation| {
            delivered.lock().push(generation);
        })
    };

    type_out(&scheduler, &"*word* ".repeat(40));
    scheduler.wait_idle();

    let delivered = delivered.lock();
    assert!(delivered.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(delivered.last().copied(), Some(scheduler.latest_requested()));
    assert!(delivered.len() as u64 <= scheduler.latest_requested());
}

#[test]
fn requests_from_many_threads_settle() {
    let scheduler = ParseScheduler::default();

    thread::scope(|scope| {
        for worker in 0..4 {
            let scheduler = &scheduler;
            scope.spawn(move || {
                for i in 0..50 {
                    scheduler.request(format!("- worker {worker} edit {i}"));
                }
            });
        }
    });

    assert_eq!(scheduler.latest_requested(), 200);
    let last = scheduler.wait_idle().expect("final result");
    assert_eq!(last.generation, 200);
    assert!(!scheduler.is_busy());
}

#[test]
fn waiting_with_nothing_requested_returns_nothing() {
    let scheduler = ParseScheduler::default();
    assert!(scheduler.wait_idle().is_none());
    assert_eq!(scheduler.latest_delivered(), 0);
}
