use http::Version;

use crate::error::MapError;

// Version token as it appears after the "HTTP/" prefix, e.g. "1.1".

pub fn token(version: Version) -> Result<&'static str, MapError> {
    match version {
        Version::HTTP_09 => Ok("0.9"),
        Version::HTTP_10 => Ok("1.0"),
        Version::HTTP_11 => Ok("1.1"),
        Version::HTTP_2 => Ok("2"),
        Version::HTTP_3 => Ok("3"),
        other => Err(MapError::InvalidVersion(format!("{other:?}"))),
    }
}

pub fn from_token(token: &str) -> Result<Version, MapError> {
    match token {
        "0.9" => Ok(Version::HTTP_09),
        "1.0" => Ok(Version::HTTP_10),
        "1.1" => Ok(Version::HTTP_11),
        "2" => Ok(Version::HTTP_2),
        "3" => Ok(Version::HTTP_3),
        other => Err(MapError::InvalidVersion(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_token_both_ways() {
        for (version, expected) in [
            (Version::HTTP_09, "0.9"),
            (Version::HTTP_10, "1.0"),
            (Version::HTTP_11, "1.1"),
            (Version::HTTP_2, "2"),
            (Version::HTTP_3, "3"),
        ] {
            assert_eq!(token(version).unwrap(), expected);
            assert_eq!(from_token(expected).unwrap(), version);
        }
    }

    #[test]
    fn test_version_from_token_unknown() {
        assert!(matches!(
            from_token("9.9"),
            Err(MapError::InvalidVersion(t)) if t == "9.9"
        ));
    }
}
