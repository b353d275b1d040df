pub mod index_enumerator;
pub mod query_builder;
pub mod renderer;
pub mod search_runner;
