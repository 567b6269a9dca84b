#[cfg(test)]
mod environment_tests {
    use narlang as nar;

    use nar::environment::Environment;
    use nar::error::ErrorKind;
    use nar::value::Value;

    #[test]
    fn test_declare_binds_unit() {
        let mut env = Environment::new();
        env.declare("x");

        assert_eq!(env.get("x"), Ok(Value::Unit));
    }

    #[test]
    fn test_lookup_of_undeclared_fails() {
        let env = Environment::new();
        let err = env.get("missing").unwrap_err();

        assert_eq!(err.kind, ErrorKind::UndefinedVariable);
        assert!(
            err.message.contains("missing"),
            "Error message should name the variable, got: {}",
            err.message
        );
    }

    #[test]
    fn test_lookup_walks_outward() {
        let mut env = Environment::new();
        env.define("x", Value::Number(1.0));

        env.scoped(|env| {
            env.scoped(|env| {
                assert_eq!(env.get("x"), Ok(Value::Number(1.0)));
                assert_eq!(env.depth(), 3);
            })
        });
        assert_eq!(env.depth(), 1);
    }

    #[test]
    fn test_shadowing_is_discarded_on_pop() {
        let mut env = Environment::new();
        env.define("x", Value::Number(1.0));

        env.scoped(|env| {
            env.define("x", Value::String("inner".into()));
            assert_eq!(env.get("x"), Ok(Value::String("inner".into())));
        });

        assert_eq!(env.get("x"), Ok(Value::Number(1.0)));
    }

    #[test]
    fn test_assign_rebinds_where_found() {
        let mut env = Environment::new();
        env.define("x", Value::Number(1.0));

        env.scoped(|env| env.assign("x", Value::Number(2.0))).unwrap();

        assert_eq!(env.get("x"), Ok(Value::Number(2.0)));
    }

    #[test]
    fn test_assign_never_creates_binding() {
        let mut env = Environment::new();
        let err = env.assign("y", Value::Boolean(true)).unwrap_err();

        assert_eq!(err.kind, ErrorKind::UndefinedVariable);
        assert!(env.get("y").is_err());
    }

    #[test]
    fn test_redeclare_in_same_scope_resets_to_unit() {
        let mut env = Environment::new();
        env.define("x", Value::Number(7.0));
        env.declare("x");

        assert_eq!(env.get("x"), Ok(Value::Unit));
    }

    #[test]
    fn test_scoped_pops_on_error() {
        let mut env = Environment::new();

        let result: Result<(), nar::RuntimeError> = env.scoped(|env| {
            env.declare("temp");
            assert_eq!(env.depth(), 2);
            env.get("nope").map(|_| ())
        });

        assert!(result.is_err());
        assert_eq!(env.depth(), 1);
        assert!(env.get("temp").is_err());
    }

    #[test]
    fn test_scoped_returns_closure_value() {
        let mut env = Environment::new();
        env.define("x", Value::Number(3.0));

        let seen = env.scoped(|env| {
            env.declare("x");
            env.get("x")
        });

        assert_eq!(seen, Ok(Value::Unit));
        assert_eq!(env.get("x"), Ok(Value::Number(3.0)));
    }
}
