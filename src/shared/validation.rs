use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for category `href` slugs.
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "mehndi-art", "rangoli", "nail-art-2024"
    /// - Invalid: "-mehndi", "mehndi-", "mehndi--art", "Mehndi", "mehndi_art"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    /// Regex for time-slot labels ("10:00 AM", "02:30 PM").
    /// Minutes are restricted to :00 and :30.
    pub static ref TIME_SLOT_REGEX: Regex =
        Regex::new(r"^(0[1-9]|1[0-2]):(00|30) (AM|PM)$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::TIME_SLOTS;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("mehndi-art"));
        assert!(SLUG_REGEX.is_match("rangoli"));
        assert!(SLUG_REGEX.is_match("nail-art-2024"));
        assert!(SLUG_REGEX.is_match("a"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-mehndi")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("mehndi-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("mehndi--art")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Mehndi")); // uppercase
        assert!(!SLUG_REGEX.is_match("mehndi_art")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_time_slot_regex() {
        assert!(TIME_SLOT_REGEX.is_match("10:00 AM"));
        assert!(TIME_SLOT_REGEX.is_match("02:30 PM"));
        assert!(!TIME_SLOT_REGEX.is_match("14:00")); // 24h format
        assert!(!TIME_SLOT_REGEX.is_match("10:15 AM")); // quarter hour
        assert!(!TIME_SLOT_REGEX.is_match("13:00 PM")); // out of range
    }

    #[test]
    fn test_all_configured_slots_match() {
        for slot in TIME_SLOTS {
            assert!(TIME_SLOT_REGEX.is_match(slot), "bad slot label: {}", slot);
        }
    }
}
