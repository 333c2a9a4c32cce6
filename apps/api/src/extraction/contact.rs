//! Pattern-based contact extractors. Each scans the whole text once and returns the
//! first match.

use crate::extraction::patterns::{
    EMAIL, LINKEDIN, PHONE, TELEGRAM_HANDLE, TELEGRAM_URL, WHATSAPP,
};

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// Fewer digits than this is layout noise (page numbers, room numbers, spacing).
const MIN_PHONE_DIGITS: usize = 7;

/// Deliberately permissive: favours recall, so date ranges or IDs of the right shape
/// can be reported as phone numbers.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE
        .find_iter(text)
        .map(|m| m.as_str().trim_end())
        .find(|candidate| candidate.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS)
        .map(String::from)
}

pub fn extract_linkedin(text: &str) -> Option<String> {
    LINKEDIN.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_whatsapp(text: &str) -> Option<String> {
    WHATSAPP.find(text).map(|m| m.as_str().to_string())
}

/// A `t.me` / `telegram.me` URL if present, otherwise the first `@handle` that is not
/// part of an email address.
pub fn extract_telegram(text: &str) -> Option<String> {
    if let Some(url) = TELEGRAM_URL.find(text) {
        return Some(url.as_str().to_string());
    }

    TELEGRAM_HANDLE
        .captures_iter(text)
        .filter(|caps| caps.get(2).is_none())
        .find_map(|caps| caps.get(1).map(|handle| handle.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_found_in_sentence() {
        assert_eq!(
            extract_email("reach me at jane.doe@example.com today").as_deref(),
            Some("jane.doe@example.com")
        );
    }

    #[test]
    fn test_email_absent_without_at_sign() {
        assert_eq!(extract_email("reach me at jane.doe.example.com today"), None);
    }

    #[test]
    fn test_email_first_match_wins() {
        assert_eq!(
            extract_email("a@first.io, b@second.io").as_deref(),
            Some("a@first.io")
        );
    }

    #[test]
    fn test_email_requires_alphabetic_tld() {
        assert_eq!(extract_email("user@host.1"), None);
    }

    #[test]
    fn test_phone_with_country_code() {
        assert_eq!(
            extract_phone("Phone: +1 (555) 123-4567\nEmail: x@y.com").as_deref(),
            Some("+1 (555) 123-4567")
        );
    }

    #[test]
    fn test_phone_without_country_code() {
        assert_eq!(
            extract_phone("call 020 7946 0958 anytime").as_deref(),
            Some("020 7946 0958")
        );
    }

    #[test]
    fn test_phone_ignores_short_numbers_and_whitespace_runs() {
        assert_eq!(extract_phone("room 42            floor 3"), None);
    }

    #[test]
    fn test_linkedin_variants() {
        assert_eq!(
            extract_linkedin("see https://www.linkedin.com/in/jane-doe_1/ for more").as_deref(),
            Some("https://www.linkedin.com/in/jane-doe_1")
        );
        assert_eq!(
            extract_linkedin("LinkedIn.com/JaneDoe").as_deref(),
            Some("LinkedIn.com/JaneDoe")
        );
        assert_eq!(extract_linkedin("linkedin profile on request"), None);
    }

    #[test]
    fn test_whatsapp_hosts() {
        assert_eq!(
            extract_whatsapp("WhatsApp: https://wa.me/15551234567 (evenings)").as_deref(),
            Some("https://wa.me/15551234567")
        );
        assert_eq!(
            extract_whatsapp("api.whatsapp.com/send?phone=4915112345678").as_deref(),
            Some("api.whatsapp.com/send?phone=4915112345678")
        );
        assert_eq!(extract_whatsapp("no messenger listed"), None);
    }

    #[test]
    fn test_telegram_prefers_url() {
        assert_eq!(
            extract_telegram("contact t.me/johndoe").as_deref(),
            Some("t.me/johndoe")
        );
        assert_eq!(
            extract_telegram("@someone or https://telegram.me/johndoe").as_deref(),
            Some("https://telegram.me/johndoe")
        );
    }

    #[test]
    fn test_telegram_handle_when_no_url() {
        assert_eq!(
            extract_telegram("ping @johndoe for info").as_deref(),
            Some("@johndoe")
        );
        assert_eq!(extract_telegram("@johndoe").as_deref(), Some("@johndoe"));
    }

    #[test]
    fn test_telegram_ignores_email_addresses() {
        assert_eq!(extract_telegram("email john@doe.com"), None);
        assert_eq!(extract_telegram("mail to @doe.com please"), None);
    }

    #[test]
    fn test_telegram_skips_email_domain_and_finds_later_handle() {
        assert_eq!(
            extract_telegram("write @corp.io or ping @jane_d").as_deref(),
            Some("@jane_d")
        );
    }

    #[test]
    fn test_telegram_url_not_matched_inside_other_hosts() {
        assert_eq!(extract_telegram("chat.me/room"), None);
    }
}
