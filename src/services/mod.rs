pub mod poll_service;
pub mod vote_service;
pub mod export_service;

// Re-export services for convenience
pub use poll_service::PollService;
pub use vote_service::VoteService;
pub use export_service::ExportService;
