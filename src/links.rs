use urlencoding::{decode, encode};

/// Click-to-call href. Punctuation and spaces are dropped, a leading `+` survives.
pub fn tel_href(number: &str) -> String {
    let mut digits = String::with_capacity(number.len());
    for (i, c) in number.trim().chars().enumerate() {
        if c.is_ascii_digit() || (i == 0 && c == '+') {
            digits.push(c);
        }
    }
    format!("tel:{}", digits)
}

pub fn mailto_href(address: &str, subject: &str, body: &str) -> String {
    let mut params = Vec::new();
    if !subject.is_empty() {
        params.push(format!("subject={}", encode(subject)));
    }
    if !body.is_empty() {
        params.push(format!("body={}", encode(body)));
    }

    if params.is_empty() {
        format!("mailto:{}", address)
    } else {
        format!("mailto:{}?{}", address, params.join("&"))
    }
}

/// Appends the non-empty pairs to `path` as an encoded query string.
pub fn with_query<K, V>(path: &str, pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let query = pairs
        .iter()
        .filter(|(_, v)| !v.as_ref().is_empty())
        .map(|(k, v)| format!("{}={}", encode(k.as_ref()), encode(v.as_ref())))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        path.to_string()
    } else if path.contains('?') {
        format!("{}&{}", path, query)
    } else {
        format!("{}?{}", path, query)
    }
}

pub fn parse_query(search: &str) -> Vec<(String, String)> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((k, v)) => (decode_component(k), decode_component(v)),
            None => (decode_component(part), String::new()),
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_href_strips_formatting() {
        assert_eq!(tel_href("(818) 123-4567"), "tel:8181234567");
        assert_eq!(tel_href("1-800-656-4673"), "tel:18006564673");
        assert_eq!(tel_href(" +1 818 123 4567"), "tel:+18181234567");
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let href = mailto_href(
            "info@trembachlawfirm.com",
            "Benzene Exposure Case Inquiry",
            "Name: Jane & John\nDate: 2024-01-01",
        );
        assert_eq!(
            href,
            "mailto:info@trembachlawfirm.com?subject=Benzene%20Exposure%20Case%20Inquiry&body=Name%3A%20Jane%20%26%20John%0ADate%3A%202024-01-01"
        );
    }

    #[test]
    fn mailto_without_params_is_bare() {
        assert_eq!(
            mailto_href("confidential@trembachlawfirm.com", "", ""),
            "mailto:confidential@trembachlawfirm.com"
        );
        assert_eq!(mailto_href("a@b.c", "", "hi"), "mailto:a@b.c?body=hi");
    }

    #[test]
    fn with_query_skips_empty_values() {
        let url = with_query(
            "/elder-abuse-case-evaluation",
            &[("firstName", "Mary"), ("lastName", ""), ("email", "m@x.com")],
        );
        assert_eq!(url, "/elder-abuse-case-evaluation?firstName=Mary&email=m%40x.com");
        assert_eq!(with_query::<&str, &str>("/x", &[]), "/x");
        assert_eq!(with_query("/x?a=1", &[("b", "2")]), "/x?a=1&b=2");
    }

    #[test]
    fn parse_query_reverses_with_query() {
        let url = with_query("/p", &[("note", "a b&c=d"), ("phone", "555-1234")]);
        let (_, search) = url.split_once('?').unwrap();
        assert_eq!(
            parse_query(search),
            vec![
                ("note".to_string(), "a b&c=d".to_string()),
                ("phone".to_string(), "555-1234".to_string()),
            ]
        );
    }

    #[test]
    fn parse_query_handles_plus_and_bare_keys() {
        assert_eq!(
            parse_query("?service=elder+abuse&flag"),
            vec![
                ("service".to_string(), "elder abuse".to_string()),
                ("flag".to_string(), String::new()),
            ]
        );
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }
}
