pub mod chain;
pub mod compose;
pub mod corpus;
pub mod engine;
pub mod topic;
pub mod walk;
