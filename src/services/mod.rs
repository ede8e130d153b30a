pub mod archive;
pub mod ingestion;
pub mod report;
pub mod server;
pub mod standings;
pub mod submission;
