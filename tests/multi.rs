use token_di::{DepSpec, InjectError, Injector, Provider, StaticInjector, Token};
use std::sync::Arc;

#[test]
fn test_multi_provider_aggregation_preserves_order() {
    let handlers = Token::new("HANDLERS");

    let injector = StaticInjector::create(
        vec![
            Provider::value(handlers.clone(), 1i32).multi(),
            Provider::value(handlers.clone(), 2i32).multi(),
            Provider::value(handlers.clone(), 3i32).multi(),
        ],
        None,
    )
    .unwrap();

    let all = injector.get_all(&handlers).unwrap();
    let values: Vec<i32> = all
        .iter()
        .map(|v| *v.downcast_ref::<i32>().unwrap())
        .collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_multi_sequence_is_cached() {
    let plugins = Token::new("PLUGINS");

    let injector = StaticInjector::create(
        vec![
            Provider::value(plugins.clone(), "a").multi(),
            Provider::value(plugins.clone(), "b").multi(),
        ],
        None,
    )
    .unwrap();

    let first = injector.get(&plugins).unwrap();
    let second = injector.get(&plugins).unwrap();
    assert!(Arc::ptr_eq(&first, &second)); // Same aggregated sequence
}

#[test]
fn test_multi_contributions_may_have_dependencies() {
    let prefix = Token::new("PREFIX");
    let lines = Token::new("LINES");

    let injector = StaticInjector::create(
        vec![
            Provider::value(prefix.clone(), ">> ".to_string()),
            Provider::factory(
                lines.clone(),
                vec![DepSpec::of(prefix.clone())],
                |deps| format!("{}one", deps[0].downcast_ref::<String>().unwrap()),
            )
            .multi(),
            Provider::factory(
                lines.clone(),
                vec![DepSpec::of(prefix.clone())],
                |deps| format!("{}two", deps[0].downcast_ref::<String>().unwrap()),
            )
            .multi(),
        ],
        None,
    )
    .unwrap();

    let all = injector.get_all(&lines).unwrap();
    let values: Vec<String> = all
        .iter()
        .map(|v| v.downcast_ref::<String>().unwrap().clone())
        .collect();
    assert_eq!(values, vec![">> one".to_string(), ">> two".to_string()]);
}

#[test]
fn test_regular_after_multi_is_a_build_error() {
    let token = Token::new("M");

    let result = StaticInjector::create(
        vec![
            Provider::value(token.clone(), 1i32).multi(),
            Provider::value(token.clone(), 2i32).multi(),
            Provider::value(token.clone(), 3i32).multi(),
            Provider::value(token.clone(), 4i32),
        ],
        None,
    );

    match result {
        Err(InjectError::MixedMultiProvider { token }) => assert_eq!(token, "M"),
        _ => panic!("expected MixedMultiProvider at build time"),
    }
}

#[test]
fn test_multi_after_regular_is_a_build_error() {
    let token = Token::new("M");

    let result = StaticInjector::create(
        vec![
            Provider::value(token.clone(), 1i32),
            Provider::value(token.clone(), 2i32).multi(),
        ],
        None,
    );

    assert!(matches!(
        result,
        Err(InjectError::MixedMultiProvider { token: "M" })
    ));
}

#[test]
fn test_mixed_multi_error_display() {
    let token = Token::new("Hooks");

    let err = StaticInjector::create(
        vec![
            Provider::value(token.clone(), 1i32),
            Provider::value(token.clone(), 2i32).multi(),
        ],
        None,
    )
    .err()
    .unwrap();

    assert_eq!(
        format!("{}", err),
        "Cannot mix multi providers and regular providers for Hooks"
    );
}

#[test]
fn test_multi_tokens_do_not_interfere() {
    let first = Token::new("FIRST");
    let second = Token::new("SECOND");

    let injector = StaticInjector::create(
        vec![
            Provider::value(first.clone(), 1i32).multi(),
            Provider::value(second.clone(), 10i32).multi(),
            Provider::value(first.clone(), 2i32).multi(),
            Provider::value(second.clone(), 20i32).multi(),
        ],
        None,
    )
    .unwrap();

    let firsts: Vec<i32> = injector
        .get_all(&first)
        .unwrap()
        .iter()
        .map(|v| *v.downcast_ref::<i32>().unwrap())
        .collect();
    let seconds: Vec<i32> = injector
        .get_all(&second)
        .unwrap()
        .iter()
        .map(|v| *v.downcast_ref::<i32>().unwrap())
        .collect();

    assert_eq!(firsts, vec![1, 2]);
    assert_eq!(seconds, vec![10, 20]);
}

#[test]
fn test_existing_provider_can_contribute_to_multi() {
    let shared = Token::new("Shared");
    let sinks = Token::new("SINKS");

    let injector = StaticInjector::create(
        vec![
            Provider::value(shared.clone(), "stdout".to_string()),
            Provider::existing(sinks.clone(), shared.clone()).multi(),
            Provider::value(sinks.clone(), "file".to_string()).multi(),
        ],
        None,
    )
    .unwrap();

    let all = injector.get_all(&sinks).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].downcast_ref::<String>().unwrap(), "stdout");
    assert_eq!(all[1].downcast_ref::<String>().unwrap(), "file");

    // The alias contribution shares the instance registered under Shared.
    let shared_value = injector.get(&shared).unwrap();
    assert!(Arc::ptr_eq(&all[0], &shared_value));
}

#[test]
fn test_get_all_on_single_provider_is_type_mismatch() {
    let token = Token::new("Single");
    let injector =
        StaticInjector::create(vec![Provider::value(token.clone(), 5i32)], None).unwrap();

    assert!(matches!(
        injector.get_all(&token),
        Err(InjectError::TypeMismatch { .. })
    ));
}
