pub mod cli;
pub mod data;
pub mod error;
pub mod games;
pub mod session;
pub mod shuffle;
pub mod terminal;
pub mod words;
