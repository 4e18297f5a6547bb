//! Injector traits: the object-safe resolution core and the ergonomic
//! facade built on top of it.

use std::any::Any;
use std::sync::Arc;

use crate::deps::DepOptions;
use crate::error::{InjectError, InjectResult};
use crate::token::Token;
use crate::value::AnyArc;

/// Core injector trait for object-safe token resolution.
///
/// This is the low-level entry the resolution engine recurses through,
/// including across injector boundaries: parent delegation calls straight
/// into the parent's `resolve_token` with the same path accumulator, so a
/// failure anywhere in the chain is reported with the full token path,
/// decorated exactly once, at the point the error is created.
///
/// Most users should use the [`Injector`] trait instead.
pub trait InjectorCore: Send + Sync {
    /// Resolves one token.
    ///
    /// `options` carries the scoping flags of the requesting dependency
    /// entry (default for top-level lookups). `not_found` is the value to
    /// return instead of failing when the token is absent from the chain;
    /// `None` means absence is an error. `path` accumulates the display
    /// names of tokens visited, innermost first, for error decoration.
    fn resolve_token(
        &self,
        token: &Token,
        options: DepOptions,
        not_found: Option<&AnyArc>,
        path: &mut Vec<&'static str>,
    ) -> InjectResult<AnyArc>;
}

/// The externally visible injection surface.
///
/// `get` either returns the (cached, singleton-per-injector) value for a
/// token or fails with an error carrying the resolution path. All methods
/// are synchronous and complete before returning; a provider function may
/// reentrantly call back into the injector while being constructed.
///
/// # Examples
///
/// ```rust
/// use token_di::{Injector, Provider, StaticInjector, Token};
///
/// let port = Token::new("PORT");
/// let injector = StaticInjector::create(
///     vec![Provider::value(port.clone(), 8080u16)],
///     None,
/// )
/// .unwrap();
///
/// let value = injector.get_as::<u16>(&port).unwrap();
/// assert_eq!(*value, 8080);
/// ```
pub trait Injector: InjectorCore {
    /// Resolves `token`, failing with [`InjectError::NotFound`] when it is
    /// absent from this injector and every ancestor.
    fn get(&self, token: &Token) -> InjectResult<AnyArc> {
        self.resolve_token(token, DepOptions::DEFAULT, None, &mut Vec::new())
    }

    /// Resolves `token`, returning `not_found` instead of failing when the
    /// token is absent. Other failures (circular dependencies, missing
    /// transitive dependencies) still propagate.
    fn get_or(&self, token: &Token, not_found: AnyArc) -> InjectResult<AnyArc> {
        self.resolve_token(token, DepOptions::DEFAULT, Some(&not_found), &mut Vec::new())
    }

    /// Full-fidelity lookup: explicit scoping flags and an optional
    /// fallback. `DepOptions::CHECK_PARENT` alone skips this injector's own
    /// table; `DepOptions::CHECK_SELF` alone refuses parent delegation.
    fn get_with(
        &self,
        token: &Token,
        options: DepOptions,
        not_found: Option<AnyArc>,
    ) -> InjectResult<AnyArc> {
        self.resolve_token(token, options, not_found.as_ref(), &mut Vec::new())
    }

    /// Resolves an aggregated multi-provider sequence for `token`, in
    /// declaration order.
    fn get_all(&self, token: &Token) -> InjectResult<Vec<AnyArc>> {
        self.get(token)?
            .downcast::<Vec<AnyArc>>()
            .map(|seq| (*seq).clone())
            .map_err(|_| InjectError::TypeMismatch {
                expected: std::any::type_name::<Vec<AnyArc>>(),
            })
    }

    /// Resolves `token` and downcasts the value to `T`.
    fn get_as<T: Any + Send + Sync>(&self, token: &Token) -> InjectResult<Arc<T>>
    where
        Self: Sized,
    {
        self.get(token)?
            .downcast::<T>()
            .map_err(|_| InjectError::TypeMismatch {
                expected: std::any::type_name::<T>(),
            })
    }

    /// Resolves `token` and downcasts to `T`, returning `not_found` when
    /// the token is absent from the chain.
    fn get_as_or<T: Any + Send + Sync>(
        &self,
        token: &Token,
        not_found: Arc<T>,
    ) -> InjectResult<Arc<T>>
    where
        Self: Sized,
    {
        self.get_or(token, not_found as AnyArc)?
            .downcast::<T>()
            .map_err(|_| InjectError::TypeMismatch {
                expected: std::any::type_name::<T>(),
            })
    }
}
