pub mod execute;
pub mod schema;
pub mod validate;
pub mod workflows;
