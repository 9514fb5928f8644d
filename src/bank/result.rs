/// Convenience alias so plumbing code can stay on one error type while
/// ledger operations override `E` with their typed rejections
pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
