//! Application runtime: terminal lifecycle, background workers and the
//! event loop.

/// Runtime event loop and the resolver worker.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;

// Re-exported so flow tests can drive batch completion directly.
pub use runtime::apply_resolve_done;
