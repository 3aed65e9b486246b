pub mod commit;
pub mod prompt;
