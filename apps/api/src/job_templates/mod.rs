// Job templates: built-in default, PostgreSQL store, CRUD handlers.

pub mod defaults;
pub mod handlers;
pub mod store;
