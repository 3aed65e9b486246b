pub mod commit_history;
pub mod summarize;
