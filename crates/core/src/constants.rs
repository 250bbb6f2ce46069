/// Question count used by the exam preview when the caller does not supply one
pub const DEFAULT_QUESTION_COUNT: u32 = 40;

/// Upper bound accepted for a requested question count
pub const MAX_QUESTION_COUNT: u32 = 1000;

/// Lower bound accepted for a requested question count
pub const MIN_QUESTION_COUNT: u32 = 1;
