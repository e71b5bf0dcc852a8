//! # Background Parsing
//!
//! [`ParseScheduler`] runs [`parse_with`] off the caller's thread so an
//! editor can re-parse on every keystroke without blocking.
//!
//! At most one parse is in flight and at most one waits behind it. A new
//! request while the worker is busy replaces the waiting one, so a burst of
//! edits costs two parses at most: the one already running and the newest.
//! Results land in a single-slot mailbox that only ever moves forward in
//! generation order.

use std::sync::Arc;

use parking_lot::{Condvar, Mutex};
use serde::Serialize;

use crate::parsing::{Block, ParseOptions, parse_with};

/// Monotonic request number. The first request is generation 1.
pub type Generation = u64;

/// Callback fired on the worker thread after each accepted delivery.
pub type Notify = dyn Fn(Generation) + Send + Sync;

/// Blocks produced for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    pub generation: Generation,
    pub blocks: Vec<Block>,
}

struct Request {
    generation: Generation,
    text: String,
    options: ParseOptions,
}

#[derive(Default)]
struct State {
    running: bool,
    queued: Option<Request>,
    options: ParseOptions,
    latest_requested: Generation,
    latest_delivered: Generation,
    mailbox: Option<ParseResult>,
}

struct Shared {
    state: Mutex<State>,
    idle: Condvar,
    notify: Option<Box<Notify>>,
}

impl Shared {
    /// Puts `result` in the mailbox unless something newer was already
    /// delivered. Returns whether it was accepted.
    fn deliver(&self, result: ParseResult) -> bool {
        let mut state = self.state.lock();
        if result.generation <= state.latest_delivered {
            log::debug!(
                "Discarding stale parse result {} (latest {})",
                result.generation,
                state.latest_delivered
            );
            return false;
        }
        state.latest_delivered = result.generation;
        state.mailbox = Some(result);
        true
    }

    fn run(self: Arc<Self>, first: Request) {
        let mut request = first;
        loop {
            let generation = request.generation;
            let blocks = parse_with(&request.text, &request.options);
            log::trace!("Parsed generation {generation} into {} blocks", blocks.len());

            if self.deliver(ParseResult { generation, blocks })
                && let Some(notify) = &self.notify
            {
                notify(generation);
            }

            let mut state = self.state.lock();
            match state.queued.take() {
                Some(next) => request = next,
                None => {
                    state.running = false;
                    drop(state);
                    self.idle.notify_all();
                    return;
                }
            }
        }
    }
}

/// Schedules parses of successive versions of one note.
pub struct ParseScheduler {
    shared: Arc<Shared>,
}

impl ParseScheduler {
    pub fn new(options: ParseOptions) -> Self {
        Self::build(options, None)
    }

    /// Like [`ParseScheduler::new`], calling `notify` with the generation of
    /// every accepted result. The callback runs on a pool thread.
    pub fn with_notify(
        options: ParseOptions,
        notify: impl Fn(Generation) + Send + Sync + 'static,
    ) -> Self {
        Self::build(options, Some(Box::new(notify)))
    }

    fn build(options: ParseOptions, notify: Option<Box<Notify>>) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    options,
                    ..State::default()
                }),
                idle: Condvar::new(),
                notify,
            }),
        }
    }

    /// Asks for `text` to be parsed and returns the generation assigned to
    /// it. Never blocks on parsing.
    pub fn request(&self, text: impl Into<String>) -> Generation {
        let mut state = self.shared.state.lock();
        state.latest_requested += 1;
        let request = Request {
            generation: state.latest_requested,
            text: text.into(),
            options: state.options,
        };
        let generation = request.generation;

        if state.running {
            if let Some(superseded) = state.queued.replace(request) {
                log::debug!(
                    "Parse request {} superseded by {generation}",
                    superseded.generation
                );
            }
            return generation;
        }

        state.running = true;
        drop(state);

        let shared = Arc::clone(&self.shared);
        rayon::spawn(move || shared.run(request));
        generation
    }

    /// Options applied to requests made from now on.
    pub fn set_options(&self, options: ParseOptions) {
        self.shared.state.lock().options = options;
    }

    pub fn options(&self) -> ParseOptions {
        self.shared.state.lock().options
    }

    /// Takes the newest undelivered result, if any.
    pub fn try_take(&self) -> Option<ParseResult> {
        self.shared.state.lock().mailbox.take()
    }

    /// Blocks until nothing is running or queued, then takes the mailbox.
    pub fn wait_idle(&self) -> Option<ParseResult> {
        let mut state = self.shared.state.lock();
        while state.running {
            self.shared.idle.wait(&mut state);
        }
        state.mailbox.take()
    }

    pub fn latest_requested(&self) -> Generation {
        self.shared.state.lock().latest_requested
    }

    pub fn latest_delivered(&self) -> Generation {
        self.shared.state.lock().latest_delivered
    }

    pub fn is_busy(&self) -> bool {
        self.shared.state.lock().running
    }
}

impl Default for ParseScheduler {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

impl std::fmt::Debug for ParseScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("ParseScheduler")
            .field("running", &state.running)
            .field("queued", &state.queued.as_ref().map(|r| r.generation))
            .field("latest_requested", &state.latest_requested)
            .field("latest_delivered", &state.latest_delivered)
            .finish()
    }
}
