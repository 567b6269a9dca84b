#[cfg(test)]
mod tree_tests {
    use narlang as nar;

    use nar::ast::{BinaryOp, Node};
    use nar::ast_printer::AstPrinter;
    use nar::environment::Environment;
    use nar::error::NarError;
    use nar::value::Value;

    const PROGRAM: &str = r#"{
        "Block": [
            { "Var": "x" },
            { "Assign": {
                "target": { "Identifier": "x" },
                "value": { "Literal": { "Number": 5 } }
            } },
            { "Print": { "Identifier": "x" } }
        ]
    }"#;

    #[test]
    fn test_load_program_from_json() {
        let root = nar::load_tree(PROGRAM.as_bytes()).unwrap();

        let expected = Node::block(vec![
            Node::var("x"),
            Node::assign(Node::identifier("x"), Node::number(5.0)),
            Node::print(Node::identifier("x")),
        ]);
        assert_eq!(root.node(), &expected);

        let mut env = Environment::new();
        let mut out: Vec<u8> = Vec::new();
        assert!(root.run_with(&mut env, &mut out).is_success());
        assert_eq!(String::from_utf8(out).unwrap(), "5\n");
    }

    #[test]
    fn test_if_without_else_in_json() {
        let source = r#"{ "If": {
            "condition": { "Literal": { "Boolean": false } },
            "body": { "Literal": "Unit" }
        } }"#;
        let root = nar::load_tree(source.as_bytes()).unwrap();

        assert_eq!(
            root.node(),
            &Node::if_then(Node::boolean(false), Node::unit())
        );
    }

    #[test]
    fn test_binary_operator_in_json() {
        let source = r#"{ "BinaryOperator": {
            "op": "Equal",
            "left": { "Literal": { "Number": 1 } },
            "right": { "Literal": { "String": "1" } }
        } }"#;
        let root = nar::load_tree(source.as_bytes()).unwrap();

        let mut env = Environment::new();
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(
            root.run_with(&mut env, &mut out).value(),
            Some(&Value::Boolean(false))
        );
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = nar::load_tree(br#"{ "Print": }"#).unwrap_err();
        assert!(matches!(err, NarError::Json(_)), "got: {}", err);

        let err = nar::load_tree(br#"{ "Goto": "label" }"#).unwrap_err();
        assert!(
            err.to_string().contains("Malformed syntax tree"),
            "got: {}",
            err
        );
    }

    #[test]
    fn test_read_tree_from_file() {
        let path = std::env::temp_dir().join(format!("narlang-tree-{}.json", std::process::id()));
        std::fs::write(&path, PROGRAM).unwrap();

        let root = nar::read_tree(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(root.unwrap().node().kind(), "Block");
    }

    #[test]
    fn test_read_tree_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("narlang-no-such-tree.json");
        let err = nar::read_tree(&path).unwrap_err();

        assert!(matches!(err, NarError::Io(_)), "got: {}", err);
        assert!(
            err.to_string().contains("Failed to read syntax tree"),
            "got: {}",
            err
        );
    }

    #[test]
    fn test_printer_prefix_form() {
        let node = Node::block(vec![
            Node::var("x"),
            Node::assign(Node::identifier("x"), Node::number(5.0)),
            Node::print(Node::identifier("x")),
        ]);
        assert_eq!(AstPrinter::print(&node), "(block (var x) (= x 5) (print x))");

        let node = Node::while_loop(
            Node::binary(BinaryOp::Less, Node::identifier("i"), Node::number(2.5)),
            Node::if_else(
                Node::binary(BinaryOp::And, Node::boolean(true), Node::boolean(false)),
                Node::debug_get_value(Node::string("yes")),
                Node::unit(),
            ),
        );
        assert_eq!(
            AstPrinter::print(&node),
            r#"(while (< i 2.5) (if (and true false) (debug "yes") none))"#
        );
    }
}
