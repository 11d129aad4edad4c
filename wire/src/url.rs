//! URL-safe spelling of passwords.
//!
//! Eight alphabet symbols are awkward in URLs. They are swapped for the six
//! characters the alphabet leaves out plus `-` and `_`, so the mapping is a
//! bijection on valid passwords.

const SUBSTITUTIONS: [(char, char); 8] = [
    ('#', '0'),
    ('%', '1'),
    ('+', 'I'),
    ('=', 'O'),
    ('&', 'l'),
    ('$', 'o'),
    ('!', '-'),
    ('?', '_'),
];

/// Rewrites URL-unsafe symbols into their URL-safe stand-ins.
#[must_use]
pub fn password_to_url(password: &str) -> String {
    password
        .chars()
        .map(|ch| {
            SUBSTITUTIONS
                .iter()
                .find(|(unsafe_ch, _)| *unsafe_ch == ch)
                .map_or(ch, |&(_, safe)| safe)
        })
        .collect()
}

/// Restores a password from its URL-safe form.
#[must_use]
pub fn url_to_password(url: &str) -> String {
    url.chars()
        .map(|ch| {
            SUBSTITUTIONS
                .iter()
                .find(|(_, safe)| *safe == ch)
                .map_or(ch, |&(unsafe_ch, _)| unsafe_ch)
        })
        .collect()
}
