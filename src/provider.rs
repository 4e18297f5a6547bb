//! Provider descriptions: the declarative input an injector is built from.
//!
//! A provider tells the container how to produce the value for one token.
//! The five shapes are a closed set, so a description that matches none of
//! them cannot be expressed at all; shape dispatch is an exhaustive match,
//! never a runtime default branch.

use std::any::Any;
use std::sync::Arc;

use crate::deps::DepSpec;
use crate::token::{token_of, Token};
use crate::value::AnyArc;

/// Provider function invoked with the resolved dependency list.
pub type FactoryFn = Arc<dyn Fn(&[AnyArc]) -> AnyArc + Send + Sync>;

/// A token position that may be deferred behind a forward reference.
///
/// Forward references are unwrapped exactly once, at table-build time,
/// before any resolution begins; the stored record never holds the thunk.
#[derive(Clone)]
pub enum TokenRef {
    /// The token itself
    Direct(Token),
    /// A zero-argument accessor producing the token on demand
    Forward(Arc<dyn Fn() -> Token + Send + Sync>),
}

impl TokenRef {
    pub(crate) fn resolve(&self) -> Token {
        match self {
            TokenRef::Direct(token) => token.clone(),
            TokenRef::Forward(thunk) => thunk(),
        }
    }
}

impl From<Token> for TokenRef {
    fn from(token: Token) -> TokenRef {
        TokenRef::Direct(token)
    }
}

/// Wraps a token accessor for use in a provider declared before the token
/// it refers to exists.
///
/// ```rust
/// use token_di::{forward_ref, Provider, StaticInjector, Injector, Token};
///
/// let target = Token::new("Target");
/// let deferred = {
///     let target = target.clone();
///     forward_ref(move || target.clone())
/// };
///
/// let injector = StaticInjector::create(
///     vec![
///         Provider::existing(Token::new("Alias"), deferred),
///         Provider::value(target, 7i32),
///     ],
///     None,
/// )
/// .unwrap();
/// # let _ = injector;
/// ```
pub fn forward_ref(thunk: impl Fn() -> Token + Send + Sync + 'static) -> TokenRef {
    TokenRef::Forward(Arc::new(thunk))
}

/// Declarative description of how to produce the value for one token.
///
/// Constructed through the associated functions below; chain [`Provider::multi`]
/// to contribute to an aggregated sequence instead of replacing the token's
/// value.
pub enum Provider {
    /// The literal value itself; no invocation ever happens
    Value {
        /// Token the value is registered under
        provide: TokenRef,
        /// The literal, stored pre-resolved
        value: AnyArc,
        /// Append to an aggregated sequence instead of replacing
        multi: bool,
    },
    /// Alias: resolves to whatever `source` resolves to
    Existing {
        /// Token the alias is registered under
        provide: TokenRef,
        /// Token whose resolved value is shared
        source: TokenRef,
        /// Append to an aggregated sequence instead of replacing
        multi: bool,
    },
    /// Constructor invoked with the resolved dependency list
    Class {
        /// Token the instance is registered under
        provide: TokenRef,
        /// The constructor
        ctor: FactoryFn,
        /// Dependency declarations, resolved left to right
        deps: Vec<DepSpec>,
        /// Append to an aggregated sequence instead of replacing
        multi: bool,
    },
    /// Constructor form where the constructed type is its own token
    Construct {
        /// Token derived from the constructed type
        provide: Token,
        /// The constructor
        ctor: FactoryFn,
        /// Dependency declarations, resolved left to right
        deps: Vec<DepSpec>,
        /// Append to an aggregated sequence instead of replacing
        multi: bool,
    },
    /// Plain function invoked with the resolved dependency list
    Factory {
        /// Token the result is registered under
        provide: TokenRef,
        /// The factory
        factory: FactoryFn,
        /// Dependency declarations, resolved left to right
        deps: Vec<DepSpec>,
        /// Append to an aggregated sequence instead of replacing
        multi: bool,
    },
}

impl Provider {
    /// Registers `value` itself under `provide`. Never invoked, never
    /// re-created; `get` returns the identical value on every call.
    pub fn value<T: Any + Send + Sync>(provide: impl Into<TokenRef>, value: T) -> Provider {
        Provider::Value {
            provide: provide.into(),
            value: Arc::new(value),
            multi: false,
        }
    }

    /// Like [`Provider::value`] but takes an already type-erased value.
    pub fn value_arc(provide: impl Into<TokenRef>, value: AnyArc) -> Provider {
        Provider::Value {
            provide: provide.into(),
            value,
            multi: false,
        }
    }

    /// Registers `provide` as an alias for `source`: both tokens resolve
    /// to the same instance.
    pub fn existing(provide: impl Into<TokenRef>, source: impl Into<TokenRef>) -> Provider {
        Provider::Existing {
            provide: provide.into(),
            source: source.into(),
            multi: false,
        }
    }

    /// Registers a constructor for `provide`. Dependencies are resolved in
    /// declaration order and passed as the argument slice.
    pub fn class<T, F>(provide: impl Into<TokenRef>, deps: Vec<DepSpec>, ctor: F) -> Provider
    where
        T: Any + Send + Sync,
        F: Fn(&[AnyArc]) -> T + Send + Sync + 'static,
    {
        Provider::Class {
            provide: provide.into(),
            ctor: Arc::new(move |args| Arc::new(ctor(args)) as AnyArc),
            deps,
            multi: false,
        }
    }

    /// Constructor form where the constructed type is its own token:
    /// `get(token_of::<T>())` yields the instance.
    pub fn construct<T, F>(deps: Vec<DepSpec>, ctor: F) -> Provider
    where
        T: Any + Send + Sync,
        F: Fn(&[AnyArc]) -> T + Send + Sync + 'static,
    {
        Provider::Construct {
            provide: token_of::<T>(),
            ctor: Arc::new(move |args| Arc::new(ctor(args)) as AnyArc),
            deps,
            multi: false,
        }
    }

    /// Registers a plain factory function for `provide`.
    pub fn factory<T, F>(provide: impl Into<TokenRef>, deps: Vec<DepSpec>, factory: F) -> Provider
    where
        T: Any + Send + Sync,
        F: Fn(&[AnyArc]) -> T + Send + Sync + 'static,
    {
        Provider::Factory {
            provide: provide.into(),
            factory: Arc::new(move |args| Arc::new(factory(args)) as AnyArc),
            deps,
            multi: false,
        }
    }

    /// Like [`Provider::factory`] but the factory hands back an already
    /// type-erased value (useful for sharing pre-built `Arc`s).
    pub fn factory_arc(
        provide: impl Into<TokenRef>,
        deps: Vec<DepSpec>,
        factory: impl Fn(&[AnyArc]) -> AnyArc + Send + Sync + 'static,
    ) -> Provider {
        Provider::Factory {
            provide: provide.into(),
            factory: Arc::new(factory),
            deps,
            multi: false,
        }
    }

    /// Marks this provider as one contribution to the ordered sequence
    /// aggregated under its token, rather than the token's single value.
    pub fn multi(mut self) -> Provider {
        match &mut self {
            Provider::Value { multi, .. }
            | Provider::Existing { multi, .. }
            | Provider::Class { multi, .. }
            | Provider::Construct { multi, .. }
            | Provider::Factory { multi, .. } => *multi = true,
        }
        self
    }

    pub(crate) fn is_multi(&self) -> bool {
        match self {
            Provider::Value { multi, .. }
            | Provider::Existing { multi, .. }
            | Provider::Class { multi, .. }
            | Provider::Construct { multi, .. }
            | Provider::Factory { multi, .. } => *multi,
        }
    }

    /// The token this provider registers, with forward references unwrapped.
    pub(crate) fn token(&self) -> Token {
        match self {
            Provider::Value { provide, .. }
            | Provider::Existing { provide, .. }
            | Provider::Class { provide, .. }
            | Provider::Factory { provide, .. } => provide.resolve(),
            Provider::Construct { provide, .. } => provide.clone(),
        }
    }
}

/// Recursive provider list: the input shape accepted by injector
/// construction. Nested lists are flattened in order; skipped entries are
/// ignored.
pub enum ProviderList {
    /// A single provider
    One(Provider),
    /// A nested list, flattened in order
    Many(Vec<ProviderList>),
    /// An entry to ignore (the rendering of a null/absent slot)
    Skip,
}

impl From<Provider> for ProviderList {
    fn from(provider: Provider) -> ProviderList {
        ProviderList::One(provider)
    }
}

impl From<Vec<Provider>> for ProviderList {
    fn from(providers: Vec<Provider>) -> ProviderList {
        ProviderList::Many(providers.into_iter().map(ProviderList::One).collect())
    }
}

impl From<Vec<ProviderList>> for ProviderList {
    fn from(lists: Vec<ProviderList>) -> ProviderList {
        ProviderList::Many(lists)
    }
}

impl From<Option<Provider>> for ProviderList {
    fn from(provider: Option<Provider>) -> ProviderList {
        match provider {
            Some(p) => ProviderList::One(p),
            None => ProviderList::Skip,
        }
    }
}
