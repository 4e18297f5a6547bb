//! Error types for the dependency injection container.

use std::fmt;

/// Dependency injection errors
///
/// Table-build errors (`MixedMultiProvider`) surface synchronously from
/// injector construction and abort it; resolution errors (`NotFound`,
/// `Circular`) fail a single `get` call and carry the chain of tokens
/// visited, innermost first, so the message reads as a resolution path.
///
/// # Examples
///
/// ```rust
/// use token_di::{InjectError, Provider, StaticInjector, Injector, Token};
///
/// let injector = StaticInjector::create(Vec::<Provider>::new(), None).unwrap();
/// let missing = Token::new("Missing");
/// match injector.get(&missing) {
///     Err(InjectError::NotFound { token, .. }) => assert_eq!(token, "Missing"),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub enum InjectError {
    /// Token absent from the injector chain and no fallback rescued it
    NotFound {
        /// Display name of the token that could not be resolved
        token: &'static str,
        /// Tokens visited on the way to the failure, innermost first
        path: Vec<&'static str>,
    },
    /// A record was revisited while its construction was still in progress
    Circular {
        /// The cycle, innermost first, ending on the revisited token
        path: Vec<&'static str>,
    },
    /// A token carries both `multi` and regular registrations
    MixedMultiProvider {
        /// Display name of the conflicted token
        token: &'static str,
    },
    /// Typed accessor downcast failed
    TypeMismatch {
        /// Name of the type the caller asked for
        expected: &'static str,
    },
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectError::NotFound { token, path } => {
                if path.is_empty() {
                    write!(f, "No provider for {}!", token)
                } else {
                    write!(
                        f,
                        "NoProviderError[{}]: No provider for {}!",
                        path.join(" -> "),
                        token
                    )
                }
            }
            InjectError::Circular { path } => {
                write!(f, "Circular dependency: {}", path.join(" -> "))
            }
            InjectError::MixedMultiProvider { token } => {
                write!(f, "Cannot mix multi providers and regular providers for {}", token)
            }
            InjectError::TypeMismatch { expected } => {
                write!(f, "Type mismatch for: {}", expected)
            }
        }
    }
}

impl std::error::Error for InjectError {}

/// Result type for DI operations
pub type InjectResult<T> = Result<T, InjectError>;
