pub mod criteria;
pub mod event;
pub mod page;
pub mod query;
