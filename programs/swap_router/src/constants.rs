pub const FORWARD_DEADLINE_SECS: i64 = 30;
