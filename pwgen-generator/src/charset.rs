use crate::error::{Error, InvalidConfiguration};
use crate::request::GenerationRequest;

pub const LOWER_CASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPER_CASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SPECIAL_CHARACTERS: &str = r#"~!@#$%^&*_-+=`|\(){}[]:;"'<>,.?/"#;

/// The alphabet a request draws from.
///
/// Characters keep their order and duplicates are kept, so a character listed
/// twice in a custom set is twice as likely to be picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    chars: Vec<char>,
}

impl CharacterSet {
    /// Resolves the alphabet for a request.
    ///
    /// A custom set wins over the flags whenever it is not blank.
    pub fn resolve(request: &GenerationRequest) -> Result<Self, Error> {
        let set = match request.custom_set() {
            Some(custom) => Self::from_custom(custom),
            None => Self::from_flags(
                request.include_lower_case,
                request.include_upper_case,
                request.include_numbers,
                request.include_special_characters,
            ),
        };

        if set.is_empty() {
            return Err(InvalidConfiguration::EmptyCharacterSet.into());
        }
        Ok(set)
    }

    pub fn from_custom(custom: &str) -> Self {
        Self { chars: custom.chars().collect() }
    }

    /// Concatenates the selected classes in a fixed order:
    /// lower case, upper case, numbers, special characters.
    pub fn from_flags(lower: bool, upper: bool, numbers: bool, special: bool) -> Self {
        let classes = [
            (lower, LOWER_CASE_LETTERS),
            (upper, UPPER_CASE_LETTERS),
            (numbers, NUMBERS),
            (special, SPECIAL_CHARACTERS),
        ];

        let chars = classes
            .into_iter()
            .filter(|(selected, _)| *selected)
            .flat_map(|(_, class)| class.chars())
            .collect();

        Self { chars }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_sizes() {
        assert_eq!(LOWER_CASE_LETTERS.len(), 26);
        assert_eq!(UPPER_CASE_LETTERS.len(), 26);
        assert_eq!(NUMBERS.len(), 10);
        assert_eq!(SPECIAL_CHARACTERS.len(), 32);
        assert!(SPECIAL_CHARACTERS.contains('\\'));
        assert!(SPECIAL_CHARACTERS.contains('"'));
        assert!(SPECIAL_CHARACTERS.contains('`'));
    }

    #[test]
    fn test_from_flags_order() {
        let set = CharacterSet::from_flags(true, true, true, true);
        let expected: String =
            [LOWER_CASE_LETTERS, UPPER_CASE_LETTERS, NUMBERS, SPECIAL_CHARACTERS].concat();
        assert_eq!(set.as_slice().iter().collect::<String>(), expected);
        assert_eq!(set.len(), 94);

        let set = CharacterSet::from_flags(false, true, true, false);
        assert_eq!(set.get(0), Some('A'));
        assert_eq!(set.get(26), Some('0'));
        assert_eq!(set.len(), 36);
    }

    #[test]
    fn test_from_flags_none_selected() {
        assert!(CharacterSet::from_flags(false, false, false, false).is_empty());
    }

    #[test]
    fn test_custom_set_overrides_flags() {
        let request = GenerationRequest::default()
            .with_classes(false, false, false, false)
            .with_custom_character_set("xyz");
        let set = CharacterSet::resolve(&request).unwrap();
        assert_eq!(set.as_slice(), &['x', 'y', 'z']);

        let request = GenerationRequest::default().with_custom_character_set("AB");
        let set = CharacterSet::resolve(&request).unwrap();
        assert_eq!(set.len(), 2);
        assert!(!set.contains('a'));
    }

    #[test]
    fn test_custom_set_kept_verbatim() {
        let request = GenerationRequest::default().with_custom_character_set(" aab ");
        let set = CharacterSet::resolve(&request).unwrap();
        assert_eq!(set.as_slice(), &[' ', 'a', 'a', 'b', ' ']);
    }

    #[test]
    fn test_custom_set_counts_chars_not_bytes() {
        let set = CharacterSet::from_custom("äöü€");
        assert_eq!(set.len(), 4);
        assert_eq!(set.get(3), Some('€'));
    }

    #[test]
    fn test_blank_custom_set_falls_back_to_flags() {
        let request = GenerationRequest::default()
            .with_classes(false, false, true, false)
            .with_custom_character_set("   ");
        let set = CharacterSet::resolve(&request).unwrap();
        assert_eq!(set.as_slice().iter().collect::<String>(), NUMBERS);
    }

    #[test]
    fn test_empty_resolution_is_rejected() {
        let request = GenerationRequest::default().with_classes(false, false, false, false);
        let err = CharacterSet::resolve(&request).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfiguration(InvalidConfiguration::EmptyCharacterSet)
        ));
    }
}
