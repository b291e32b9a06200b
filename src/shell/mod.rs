// Composition root for the activities service.
//
// - Read settings from the command line and environment.
// - Instantiate the in-memory activity store.
// - Wire the store into the use case handlers and the HTTP router.

pub mod config;
pub mod errors;
pub mod http;
pub mod state;
