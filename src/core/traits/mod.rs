pub mod search_backend;
