//! Purpose: Shared library crate used by the `jobsift` CLI and tests.
//! Exports: `store` (dataset model, source decoding, load-once store, errors).
//! Role: Internal library backing the binary; not a stable public SDK.
//! Invariants: Treat the crate API as internal until a dedicated library release.
//! Invariants: Store modules prefer explicit inputs/outputs over hidden state.
pub mod store;
