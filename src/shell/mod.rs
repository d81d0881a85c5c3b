// Composition root for the employees service.
//
// Responsibilities
// - Hold the fixed listen configuration.
// - Instantiate the store and share it with the HTTP handlers.
// - Assemble the router.

pub mod config;
pub mod http;
pub mod state;
