//! Exit code constants for the promptcraft CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, empty input, unknown project)
//! - 2: Completion API unavailable (network, auth, rate limit)
//! - 3: Completion API returned a response that could not be interpreted
//! - 4: Local storage failure (projects file, config, event log)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, empty context, or unknown project.
pub const USER_ERROR: i32 = 1;

/// The hosted completion service could not be reached or refused the request.
pub const COMPLETION_UNAVAILABLE: i32 = 2;

/// The completion service answered, but not in the required structured shape.
pub const MALFORMED_RESPONSE: i32 = 3;

/// Reading or writing local state failed.
pub const STORAGE_FAILURE: i32 = 4;
