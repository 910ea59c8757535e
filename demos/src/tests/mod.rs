mod amplitude;
mod checker;

pub use test_runner::run;
