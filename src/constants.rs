pub const USER_TABLE: &str = "userdata";

pub const VOICE_FILE_FIELD: &str = "file";
pub const USERNAME_FIELD: &str = "username";
pub const MAX_USERNAME_BYTES: usize = 256;
