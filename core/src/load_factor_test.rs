#[cfg(test)]
mod tests {
    use crate::load_factor::{ITERATIONS_PER_LOAD, InvalidReason, LoadFactor};

    #[test]
    fn test_parse_accepts_positive_integers() {
        let load = LoadFactor::parse("100").expect("100 is a valid load factor");
        assert_eq!(load.get(), 100);
        assert_eq!(load.matrix_dim(), 100);
        assert_eq!(load.iterations(), 100 * ITERATIONS_PER_LOAD);
    }

    #[test]
    fn test_parse_accepts_explicit_plus_sign() {
        assert_eq!(LoadFactor::parse("+7").map(LoadFactor::get), Ok(7));
    }

    #[test]
    fn test_parse_accepts_u32_max() {
        let load = LoadFactor::parse("4294967295").expect("u32::MAX fits");
        assert_eq!(load.get(), u32::MAX);
        assert_eq!(load.iterations(), u64::from(u32::MAX) * 100_000);
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = LoadFactor::parse("").unwrap_err();
        assert_eq!(err.reason(), InvalidReason::Empty);
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        for raw in ["abc", "1.5", "12abc", " 12", "12 ", "0x10", "-", "+"] {
            let err = LoadFactor::parse(raw).unwrap_err();
            assert_eq!(err.reason(), InvalidReason::NotInteger, "input {raw:?}");
            assert_eq!(err.input(), raw);
        }
    }

    #[test]
    fn test_parse_rejects_zero_and_negative() {
        for raw in ["0", "-0", "-1", "-500", "-99999999999999999999999"] {
            let err = LoadFactor::parse(raw).unwrap_err();
            assert_eq!(err.reason(), InvalidReason::NotPositive, "input {raw:?}");
        }
        assert!(LoadFactor::parse("-3").unwrap_err().to_string().contains("must be positive"));
    }

    #[test]
    fn test_parse_rejects_values_above_u32() {
        for raw in ["4294967296", "99999999999999999999999"] {
            let err = LoadFactor::parse(raw).unwrap_err();
            assert_eq!(err.reason(), InvalidReason::TooLarge, "input {raw:?}");
        }
    }

    #[test]
    fn test_from_str_matches_parse() {
        let load: LoadFactor = "42".parse().expect("should parse");
        assert_eq!(load, LoadFactor::from_u32(42).unwrap());
        assert!("nope".parse::<LoadFactor>().is_err());
    }

    #[test]
    fn test_from_u32_rejects_zero() {
        assert!(LoadFactor::from_u32(0).is_none());
        assert_eq!(LoadFactor::from_u32(3).unwrap().to_string(), "3");
    }
}
