pub mod aggregate;
pub mod fetch;
pub mod loader;
pub mod output;
pub mod record;
