pub mod commit_history;
pub mod language_model;

#[cfg(test)]
pub mod fakes;

pub use commit_history::CommitHistoryService;
pub use language_model::LanguageModelService;
