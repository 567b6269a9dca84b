#[cfg(test)]
mod value_tests {
    use narlang as nar;

    use nar::value::Value;

    #[test]
    fn test_display_formatting() {
        assert_eq!(Value::Number(5.0).to_string(), "5");
        assert_eq!(Value::Number(-3.0).to_string(), "-3");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(Value::String("hi there".into()).to_string(), "hi there");
        assert_eq!(Value::Unit.to_string(), "none");
    }

    #[test]
    fn test_non_finite_numbers_display() {
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_equality_requires_same_tag() {
        assert_ne!(Value::Number(1.0), Value::String("1".into()));
        assert_ne!(Value::Boolean(false), Value::Unit);
        assert_ne!(Value::Number(0.0), Value::Boolean(false));
        assert_eq!(Value::Unit, Value::Unit);
        assert_eq!(Value::String("a".into()), Value::String("a".into()));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Number(4.0).as_number(), Some(4.0));
        assert_eq!(Value::Boolean(true).as_number(), None);
        assert_eq!(Value::Boolean(true).as_boolean(), Some(true));
        assert_eq!(Value::String("true".into()).as_boolean(), None);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from(1.0).type_name(), "number");
        assert_eq!(Value::from(true).type_name(), "boolean");
        assert_eq!(Value::from("s").type_name(), "string");
        assert_eq!(Value::Unit.type_name(), "none");
    }
}
