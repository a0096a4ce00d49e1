// error module
mod error;
// explorer module
mod explorer;
// session module
mod session;

// access module
pub mod access;
// connectivity module
pub mod connectivity;
// validator module
pub mod validator;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the path modules.
//─────────────────────────────────────────────────────────────────────────────
pub use access::AccessMatrix;
pub use connectivity::is_connected;
pub use error::{CheckError, MoveError, ReplayError};
pub use explorer::{count_valid_walks, count_walks};
pub use session::{replay_route, PlaySession, StepOutcome};
pub use validator::{validate, Preconditions};
