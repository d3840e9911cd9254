pub mod errors; // Shared error types
pub mod utils; // Shared utilities (logging, validation)
