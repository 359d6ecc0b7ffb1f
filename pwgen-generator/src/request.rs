use serde::{Deserialize, Serialize};

/// Default number of characters per generated string.
pub const DEFAULT_LENGTH: usize = 16;

/// Default number of strings per request.
pub const DEFAULT_COUNT: usize = 1;

/// Largest length a caller should request. Not enforced by the generator.
pub const MAX_LENGTH: usize = 100;

/// Largest count a caller should request. Not enforced by the generator.
pub const MAX_COUNT: usize = 1000;

/// Parameters for a single generation call.
///
/// When `custom_character_set` contains anything besides whitespace it is used
/// verbatim as the alphabet and the four inclusion flags are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub length: usize,
    pub count: usize,
    pub include_lower_case: bool,
    pub include_upper_case: bool,
    pub include_numbers: bool,
    pub include_special_characters: bool,
    pub custom_character_set: String,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            count: DEFAULT_COUNT,
            include_lower_case: true,
            include_upper_case: true,
            include_numbers: true,
            include_special_characters: true,
            custom_character_set: String::new(),
        }
    }
}

impl GenerationRequest {
    /// Request for `count` strings of `length` characters over the default classes.
    pub fn new(length: usize, count: usize) -> Self {
        Self { length, count, ..Self::default() }
    }

    pub fn with_classes(mut self, lower: bool, upper: bool, numbers: bool, special: bool) -> Self {
        self.include_lower_case = lower;
        self.include_upper_case = upper;
        self.include_numbers = numbers;
        self.include_special_characters = special;
        self
    }

    pub fn with_custom_character_set(mut self, set: impl Into<String>) -> Self {
        self.custom_character_set = set.into();
        self
    }

    /// Returns the custom set if it should override the flags.
    pub fn custom_set(&self) -> Option<&str> {
        if self.custom_character_set.trim().is_empty() {
            None
        } else {
            Some(&self.custom_character_set)
        }
    }

    /// Caps `length` and `count` at [`MAX_LENGTH`] and [`MAX_COUNT`].
    ///
    /// Returns true if either value was lowered.
    pub fn clamp_to_limits(&mut self) -> bool {
        let clamped = self.length > MAX_LENGTH || self.count > MAX_COUNT;
        self.length = self.length.min(MAX_LENGTH);
        self.count = self.count.min(MAX_COUNT);
        clamped
    }
}
