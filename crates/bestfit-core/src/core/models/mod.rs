pub mod report;
pub mod solution;
