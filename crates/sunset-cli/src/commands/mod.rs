pub mod alerts;
pub mod dependents;
pub mod dispatch;
pub mod export;
pub mod models;
pub mod permissions;
pub mod scan;
pub mod schema;
pub mod session;
