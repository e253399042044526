use crate::cookies::canonicalcookie::CanonicalCookie;
use std::fmt;

/// An ordered, duplicate-preserving collection of cookies.
///
/// Order is the order records were parsed in. Two cookies with the same name are
/// both kept; there is no jar behaviour (no matching, expiry or overwrite).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CookieList {
    cookies: Vec<CanonicalCookie>,
}

impl CookieList {
    pub fn new() -> Self {
        Self {
            cookies: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cookies: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn push(&mut self, cookie: CanonicalCookie) {
        self.cookies.push(cookie);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CanonicalCookie> {
        self.cookies.iter()
    }

    pub fn as_slice(&self) -> &[CanonicalCookie] {
        &self.cookies
    }

    pub fn into_vec(self) -> Vec<CanonicalCookie> {
        self.cookies
    }

    /// First cookie named `name`.
    pub fn get(&self, name: &str) -> Option<&CanonicalCookie> {
        self.cookies.iter().find(|c| c.name == name)
    }

    /// Every cookie named `name`, in collection order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CanonicalCookie> + 'a {
        self.cookies.iter().filter(move |c| c.name == name)
    }

    /// Render as a request `Cookie` header value: `a=1; b=2`.
    pub fn to_header_value(&self) -> String {
        self.cookies
            .iter()
            .map(CanonicalCookie::pair)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for CookieList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_header_value())
    }
}

impl From<Vec<CanonicalCookie>> for CookieList {
    fn from(cookies: Vec<CanonicalCookie>) -> Self {
        Self { cookies }
    }
}

impl FromIterator<CanonicalCookie> for CookieList {
    fn from_iter<I: IntoIterator<Item = CanonicalCookie>>(iter: I) -> Self {
        Self {
            cookies: iter.into_iter().collect(),
        }
    }
}

impl Extend<CanonicalCookie> for CookieList {
    fn extend<I: IntoIterator<Item = CanonicalCookie>>(&mut self, iter: I) {
        self.cookies.extend(iter);
    }
}

impl IntoIterator for CookieList {
    type Item = CanonicalCookie;
    type IntoIter = std::vec::IntoIter<CanonicalCookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.into_iter()
    }
}

impl<'a> IntoIterator for &'a CookieList {
    type Item = &'a CanonicalCookie;
    type IntoIter = std::slice::Iter<'a, CanonicalCookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CookieList {
        vec![
            CanonicalCookie::new("a", "1"),
            CanonicalCookie::new("b", "2"),
            CanonicalCookie::new("a", "3"),
        ]
        .into()
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let list = sample();
        assert_eq!(list.len(), 3);

        let values: Vec<_> = list.get_all("a").map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["1", "3"]);
    }

    #[test]
    fn test_get_returns_first_match() {
        let list = sample();
        assert_eq!(list.get("a").unwrap().value, "1");
        assert!(list.get("missing").is_none());
    }

    #[test]
    fn test_header_value() {
        assert_eq!(sample().to_header_value(), "a=1; b=2; a=3");
        assert_eq!(CookieList::new().to_string(), "");
    }

    #[test]
    fn test_collect_and_extend() {
        let mut list: CookieList = std::iter::once(CanonicalCookie::new("x", "")).collect();
        list.extend(sample());
        assert_eq!(list.len(), 4);
        assert_eq!(list.as_slice()[0].name, "x");
    }
}
