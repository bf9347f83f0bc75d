pub mod commands;
pub mod completions;
pub mod progress;
pub mod report;
pub mod run;
