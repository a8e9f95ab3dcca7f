pub mod interface;
pub mod mask;
pub mod report;
