// Composition root for the cats service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory store and id generator.
// - Wire them into the use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
