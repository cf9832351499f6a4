pub mod add;
pub mod analyze;
pub mod archive;
pub mod dashboard;
pub mod dispatch;
pub mod schema;
pub mod shared;
