pub mod gemini;
pub mod github;

#[cfg(test)]
pub mod stub_server;
