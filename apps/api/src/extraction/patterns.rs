//! Precompiled patterns shared by the pattern-based extractors.
//! Compiled once per process; `Regex` is `Sync`, so concurrent use needs no locking.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Local part must not start with a digit; TLD is at least two letters.
    pub static ref EMAIL: Regex =
        Regex::new(r"[A-Za-z._%+-][A-Za-z0-9._%+-]*@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();

    /// Optional `+CC`, then 10–20 digits, dashes, parentheses or spaces. The body must
    /// start with a digit or `(`.
    pub static ref PHONE: Regex =
        Regex::new(r"(?:\+\d{1,3}[ -]?)?[\d(][\d\-() ]{9,19}").unwrap();

    pub static ref LINKEDIN: Regex = Regex::new(
        r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/(?:in/)?[A-Za-z0-9_-]+"
    )
    .unwrap();

    pub static ref WHATSAPP: Regex = Regex::new(
        r"(?i)(?:https?://)?\b(?:wa\.me|api\.whatsapp\.com)/[^\s]+"
    )
    .unwrap();

    pub static ref TELEGRAM_URL: Regex = Regex::new(
        r"(?i)(?:https?://)?\b(?:t|telegram)\.me/[A-Za-z0-9_]+"
    )
    .unwrap();

    /// `@handle` not preceded by a word character or dot. Group 2 captures a trailing
    /// `.word`, which marks an email domain rather than a handle.
    pub static ref TELEGRAM_HANDLE: Regex =
        Regex::new(r"(?:^|[^\w.])(@[A-Za-z0-9_]+)(\.\w)?").unwrap();

    /// Symbol, amount with optional thousands commas and 1–2 decimals, up to three
    /// spaces, an optional second symbol and an optional pay-period keyword.
    pub static ref SALARY: Regex = Regex::new(
        r"(?i)(?P<symbol>[$€£]) ?(?P<amount>\d{1,3}(?:,\d{3})+(?:\.\d{1,2})?|\d+(?:\.\d{1,2})?) {0,3}(?P<trailing_symbol>[$€£])? ?(?:per year|annually|per annum|per month)?"
    )
    .unwrap();
}
