// Validation
pub const ERR_FINGERPRINT_EMPTY: &str = "Fingerprint must have non 0 characters";
pub const ERR_FINGERPRINT_TOO_LONG: &str = "Fingerprint must have 40 or less characters";
pub const ERR_ZERO_AMOUNT: &str = "Non-zero amount required";
pub const ERR_STAKE_TOO_SMALL: &str = "Insufficient amount for staking";
pub const ERR_ZERO_LOCK_SIZE: &str = "Lock size must be greater than 0";
pub const ERR_ZERO_MIN_STAKE_SIZE: &str = "Minimum stake size must be greater than 0";
pub const ERR_INVALID_LOCK_DURATION: &str = "Invalid duration for locking";
pub const ERR_INVALID_STAKE_DURATION: &str = "Invalid duration for staking";
pub const ERR_INVALID_GOVERNANCE_DURATION: &str = "Invalid duration for governance";

// State conflict
pub const ERR_DUPLICATE_LOCK: &str = "Lock already exists for the fingerprint";
pub const ERR_NO_SUCH_LOCK: &str = "No lock found for the fingerprint";
pub const ERR_NO_SUCH_STAKE: &str = "No stake found for the delegate";
pub const ERR_ALREADY_VOTER: &str = "Account is already a voter";

// Lifecycle
pub const ERR_VERSION_NOT_INCREASING: &str =
    "New implementation version must be greater than current version";

// Operational
pub const ERR_PAUSED: &str = "Contract is paused";
pub const ERR_ALREADY_PAUSED: &str = "Contract is already paused";
pub const ERR_NOT_PAUSED: &str = "Contract is not paused";

// External dependency
pub const ERR_TOKEN_TRANSFER_FAILED: &str = "Token transfer failed";
