pub mod config;
pub mod error;
pub mod flow;
pub mod graph;
pub mod input;
pub mod summary;

#[cfg(test)]
mod test;
