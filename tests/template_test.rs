//! Template language integration tests.
//!
//! These exercise the public parse → evaluate pipeline end to end,
//! including the built-in function set.

use std::sync::Arc;

use sling::eval::evaluate;
use sling::picker::MockPicker;
use sling::registry::{Arity, Registry, TemplateFunction, Value};
use sling::template::{escape, parse, Particle};
use sling::SlingError;

fn builtin_registry() -> Registry {
    Registry::with_builtins(Arc::new(MockPicker::new(b"picked".to_vec())))
}

#[test]
fn literal_text_is_a_single_particle() {
    let expr = parse("Hello world!").unwrap();
    assert_eq!(expr.particles(), &[Particle::Text("Hello world!".into())]);
}

#[tokio::test]
async fn literal_text_evaluates_to_its_utf8() {
    let registry = Registry::new();
    let expr = parse("Hello world!").unwrap();
    assert_eq!(
        evaluate(&expr, &registry).await.unwrap(),
        "Hello world!".as_bytes()
    );
}

#[tokio::test]
async fn escape_round_trips_arbitrary_text() {
    let registry = Registry::new();
    for original in ["plain", "costs $5", "back\\slash", "both $ and \\ mixed", "☃"] {
        let expr = parse(&escape(original)).unwrap();
        let bytes = evaluate(&expr, &registry).await.unwrap();
        assert_eq!(bytes, original.as_bytes(), "round trip of {original:?}");
    }
}

#[test]
fn parse_error_position_is_exact() {
    match parse("${foo(,456)}") {
        Err(SlingError::InvalidTemplateExpression {
            expected,
            remainder,
            position,
            ..
        }) => {
            assert_eq!(expected, vec!["an argument", "\")\""]);
            assert_eq!(remainder, ",456)}");
            assert_eq!(position, "${foo(".len());
        }
        other => panic!("expected InvalidTemplateExpression, got {:?}", other),
    }
}

#[tokio::test]
async fn concatenation_order_survives_async_functions() {
    struct SlowBang;
    impl TemplateFunction for SlowBang {
        fn names(&self) -> &'static [&'static str] {
            &["slow"]
        }
        fn summary(&self) -> &'static str {
            "test helper"
        }
        fn usage(&self) -> &'static str {
            "${slow()}"
        }
        fn arity(&self) -> Arity {
            Arity::exactly(0)
        }
        fn run<'a>(
            &'a self,
            _args: &'a [String],
            _registry: &'a Registry,
        ) -> futures_util::future::BoxFuture<'a, sling::Result<Value>> {
            Box::pin(async {
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
                Ok(Value::Text("!".into()))
            })
        }
    }

    let mut registry = Registry::new();
    registry.register(Arc::new(SlowBang));
    let expr = parse("a${slow()}b").unwrap();
    let bytes = evaluate(&expr, &registry).await.unwrap();
    assert_eq!(bytes, b"a!b");
}

#[tokio::test]
async fn byte_escapes_are_exact() {
    let registry = Registry::new();
    let expr = parse("\\x00\\xff").unwrap();
    assert_eq!(
        expr.particles(),
        &[Particle::Byte(0x00), Particle::Byte(0xff)]
    );
    assert_eq!(evaluate(&expr, &registry).await.unwrap(), vec![0x00, 0xff]);
}

#[tokio::test]
async fn codepoint_escape_emits_four_utf8_bytes() {
    let registry = Registry::new();
    let expr = parse("\\u{1f375}").unwrap();
    let bytes = evaluate(&expr, &registry).await.unwrap();
    assert_eq!(bytes, "\u{1f375}".as_bytes());
    assert_eq!(bytes.len(), 4);
}

#[tokio::test]
async fn hex_function_drops_trailing_odd_char() {
    let registry = builtin_registry();
    let expr = parse("${hex(abc)}").unwrap();
    assert_eq!(evaluate(&expr, &registry).await.unwrap(), vec![0xab]);
}

#[tokio::test]
async fn unknown_variable_raises() {
    let registry = Registry::new();
    let expr = parse("${nope}").unwrap();
    match evaluate(&expr, &registry).await {
        Err(SlingError::UnknownVariable { variable }) => assert_eq!(variable, "nope"),
        other => panic!("expected UnknownVariable, got {:?}", other),
    }
}

#[tokio::test]
async fn byte_range_defaults_to_256_ascending_bytes() {
    let registry = builtin_registry();
    let expr = parse("${byteRange()}").unwrap();
    let bytes = evaluate(&expr, &registry).await.unwrap();
    assert_eq!(bytes.len(), 256);
    for (i, b) in bytes.iter().enumerate() {
        assert_eq!(*b as usize, i);
    }
}

#[tokio::test]
async fn file_function_uses_the_injected_picker() {
    let registry = builtin_registry();
    let expr = parse("<${file()}>").unwrap();
    assert_eq!(evaluate(&expr, &registry).await.unwrap(), b"<picked>");
}

#[tokio::test]
async fn stored_variables_flow_through_templates() {
    let mut registry = builtin_registry();
    registry.set_variable("token", Value::Bytes(vec![0xaa, 0xbb]));
    let expr = parse("AUTH ${bin(token)}\\r\\n").unwrap();
    let bytes = evaluate(&expr, &registry).await.unwrap();
    assert_eq!(bytes, [b'A', b'U', b'T', b'H', b' ', 0xaa, 0xbb, b'\r', b'\n']);
}

#[tokio::test]
async fn alias_now_matches_time() {
    let registry = builtin_registry();
    let time_expr = parse("${time()}").unwrap();
    let now_expr = parse("${now()}").unwrap();

    let a = evaluate(&time_expr, &registry).await.unwrap();
    let b = evaluate(&now_expr, &registry).await.unwrap();

    let a: i64 = String::from_utf8(a).unwrap().parse().unwrap();
    let b: i64 = String::from_utf8(b).unwrap().parse().unwrap();
    assert!((a - b).abs() <= 1);
}

#[tokio::test]
async fn random_functions_honor_counts() {
    let registry = builtin_registry();

    let bytes = evaluate(&parse("${randomBytes(32)}").unwrap(), &registry)
        .await
        .unwrap();
    assert_eq!(bytes.len(), 32);

    let chars = evaluate(&parse("${randomChars(8)}").unwrap(), &registry)
        .await
        .unwrap();
    let text = String::from_utf8(chars).expect("randomChars output is valid UTF-8");
    assert_eq!(text.chars().count(), 8);
}

#[tokio::test]
async fn char_range_defaults_to_printable_ascii() {
    let registry = builtin_registry();
    let expr = parse("${charRange()}").unwrap();
    let bytes = evaluate(&expr, &registry).await.unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text.chars().next(), Some(' '));
    assert_eq!(text.chars().last(), Some('~'));
    assert_eq!(text.chars().count(), 95);
}

#[tokio::test]
async fn mixed_template_preserves_overall_order() {
    let mut registry = builtin_registry();
    registry.set_variable("who", Value::Text("world".into()));
    let expr = parse("hello ${who}\\x21${hex(0a)}").unwrap();
    let bytes = evaluate(&expr, &registry).await.unwrap();
    assert_eq!(bytes, b"hello world!\n");
}

#[tokio::test]
async fn type_errors_surface_from_readers() {
    let mut registry = builtin_registry();
    registry.set_variable("greeting", Value::Text("hi".into()));
    let expr = parse("${bin(greeting)}").unwrap();
    match evaluate(&expr, &registry).await {
        Err(SlingError::InvalidDataType { variable, expected }) => {
            assert_eq!(variable, "greeting");
            assert_eq!(expected, vec!["binary"]);
        }
        other => panic!("expected InvalidDataType, got {:?}", other),
    }
}
