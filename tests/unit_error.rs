/// Unit tests for InjectError and InjectResult types

use token_di::{InjectError, InjectResult};
use std::error::Error;

#[test]
fn test_error_display_not_found_with_path() {
    let error = InjectError::NotFound {
        token: "TokenB",
        path: vec!["TokenA", "TokenB"],
    };
    let display_str = format!("{}", error);
    assert_eq!(
        display_str,
        "NoProviderError[TokenA -> TokenB]: No provider for TokenB!"
    );

    assert!(display_str.contains("TokenA -> TokenB"));
    assert!(display_str.contains("No provider"));
}

#[test]
fn test_error_display_not_found_without_path() {
    let error = InjectError::NotFound {
        token: "Service",
        path: vec![],
    };
    assert_eq!(format!("{}", error), "No provider for Service!");
}

#[test]
fn test_error_display_circular() {
    let error = InjectError::Circular {
        path: vec!["ServiceA", "ServiceB", "ServiceA"],
    };
    let display_str = format!("{}", error);
    assert_eq!(
        display_str,
        "Circular dependency: ServiceA -> ServiceB -> ServiceA"
    );

    assert!(display_str.contains("ServiceA -> ServiceB -> ServiceA"));
    assert!(display_str.contains("Circular dependency"));
}

#[test]
fn test_error_display_empty_circular_path() {
    let error = InjectError::Circular { path: vec![] };
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Circular dependency: ");

    // Should still show the prefix even with empty path
    assert!(display_str.contains("Circular dependency"));
}

#[test]
fn test_error_display_mixed_multi_provider() {
    let error = InjectError::MixedMultiProvider { token: "HOOKS" };
    assert_eq!(
        format!("{}", error),
        "Cannot mix multi providers and regular providers for HOOKS"
    );
}

#[test]
fn test_error_display_type_mismatch() {
    let error = InjectError::TypeMismatch {
        expected: "std::string::String",
    };
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Type mismatch for: std::string::String");

    assert!(display_str.contains("std::string::String"));
    assert!(display_str.contains("mismatch"));
}

#[test]
fn test_inject_result_ok() {
    let result: InjectResult<String> = Ok("resolved".to_string());
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "resolved");
}

#[test]
fn test_inject_result_err() {
    let result: InjectResult<String> = Err(InjectError::NotFound {
        token: "TestService",
        path: vec!["TestService"],
    });
    assert!(result.is_err());

    match result {
        Err(InjectError::NotFound { token, path }) => {
            assert_eq!(token, "TestService");
            assert_eq!(path, vec!["TestService"]);
        }
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_error_debug_format() {
    let error = InjectError::NotFound {
        token: "TestService",
        path: vec![],
    };
    let debug_str = format!("{:?}", error);

    // Debug format should contain the variant name and field
    assert!(debug_str.contains("NotFound"));
    assert!(debug_str.contains("TestService"));
}

#[test]
fn test_error_clone() {
    let error = InjectError::Circular {
        path: vec!["A", "B", "A"],
    };
    let cloned = error.clone();

    // Both should format the same way
    assert_eq!(format!("{}", error), format!("{}", cloned));
}

#[test]
fn test_error_as_std_error() {
    let error = InjectError::MixedMultiProvider { token: "T" };

    // Should implement std::error::Error
    let _: &dyn std::error::Error = &error;

    // Should have a source (None in our case)
    assert!(error.source().is_none());
}
