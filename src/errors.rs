pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_NOT_A_MEMBER: &str = "Not a member";
pub const ERR_ALREADY_MEMBER: &str = "Already a member";
pub const ERR_INVALID_ENTRY_ID: &str = "Invalid entry id";
pub const ERR_ENTRY_NOT_PENDING: &str = "Entry is not pending";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_INSUFFICIENT_AMOUNT: &str = "Insufficient amount";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be greater than zero";
pub const ERR_PAUSED: &str = "Contract is paused";
pub const ERR_INVALID_CONFIGURATION: &str = "Invalid configuration";
pub const ERR_REENTRANT_CALL: &str = "Reentrant call";
