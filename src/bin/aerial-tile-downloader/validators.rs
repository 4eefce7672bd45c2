use std::str::FromStr;

pub fn is_integer(v: String) -> Result<(), String> {
    v.parse::<i64>()
        .map(|_| ())
        .map_err(|_| "must be an integer".to_owned())
}

pub fn is_numeric<T: FromStr>(v: String) -> Result<(), String> {
    v.parse::<T>()
        .map(|_| ())
        .map_err(|_| "must be numeric".to_owned())
}

pub fn is_http_url(v: String) -> Result<(), String> {
    if v.starts_with("http://") || v.starts_with("https://") {
        Ok(())
    } else {
        Err("must be an http:// or https:// URL".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert!(is_integer("880000".into()).is_ok());
        assert!(is_integer("-5".into()).is_ok());
        assert!(is_integer("880000.5".into()).is_err());
        assert!(is_integer("west".into()).is_err());
    }

    #[test]
    fn timeouts() {
        assert!(is_numeric::<u64>("0".into()).is_ok());
        assert!(is_numeric::<u64>("-1".into()).is_err());
    }

    #[test]
    fn urls() {
        assert!(is_http_url("http://localhost:8080".into()).is_ok());
        assert!(is_http_url("ftp://example.org".into()).is_err());
    }
}
