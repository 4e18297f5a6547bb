//! Dependency declarations and the compiler that normalizes them.
//!
//! A provider declares its dependencies as a list of [`DepSpec`] entries:
//! a token plus optional scoping modifiers. The compiler lowers each entry
//! into the flag-bearing form the resolution engine consumes.

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::provider::TokenRef;
use crate::token::Token;
use crate::value::AnyArc;

bitflags! {
    /// Scoping flags controlling how one dependency entry is looked up.
    ///
    /// The default is `CHECK_SELF | CHECK_PARENT`: consult the requesting
    /// injector's own table first, then delegate up the parent chain, and
    /// fail if neither has the token. A `SkipSelf` declaration clears
    /// `CHECK_SELF`; a `Self`-only declaration clears `CHECK_PARENT`;
    /// `OPTIONAL` turns a lookup failure into the [`Null`](crate::Null)
    /// marker instead of an error.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DepOptions: u8 {
        /// Consult the requesting injector's own provider table
        const CHECK_SELF = 1 << 0;
        /// Delegate to the parent chain when the token is absent locally
        const CHECK_PARENT = 1 << 1;
        /// Missing token resolves to the null marker instead of failing
        const OPTIONAL = 1 << 2;
    }
}

impl DepOptions {
    /// Check self, then check parent, fail if neither has the token.
    pub const DEFAULT: DepOptions = DepOptions::CHECK_SELF.union(DepOptions::CHECK_PARENT);
}

/// One raw dependency declaration: a token with scoping modifiers, or an
/// inline literal injected verbatim.
///
/// # Examples
///
/// ```rust
/// use token_di::{DepSpec, Token};
///
/// let logger = Token::new("Logger");
/// let deps = vec![
///     DepSpec::of(logger.clone()),               // plain lookup
///     DepSpec::of(logger.clone()).optional(),    // null when missing
///     DepSpec::of(logger).skip_self(),           // ancestors only
///     DepSpec::literal(8080u16),                 // injected as-is
/// ];
/// # let _ = deps;
/// ```
#[derive(Clone)]
pub struct DepSpec {
    target: DepTarget,
    optional: bool,
    skip_self: bool,
    self_only: bool,
}

#[derive(Clone)]
enum DepTarget {
    Token(TokenRef),
    Literal(AnyArc),
}

impl DepSpec {
    /// Declares a dependency on `token` with default scoping.
    pub fn of(token: impl Into<TokenRef>) -> DepSpec {
        DepSpec {
            target: DepTarget::Token(token.into()),
            optional: false,
            skip_self: false,
            self_only: false,
        }
    }

    /// Declares an inline literal: the value is passed to the provider
    /// function verbatim, with no table lookup.
    pub fn literal<T: std::any::Any + Send + Sync>(value: T) -> DepSpec {
        DepSpec {
            target: DepTarget::Literal(std::sync::Arc::new(value)),
            optional: false,
            skip_self: false,
            self_only: false,
        }
    }

    /// Missing token resolves to the null marker instead of failing.
    pub fn optional(mut self) -> DepSpec {
        self.optional = true;
        self
    }

    /// Do not consult the requesting injector's own table; start the
    /// search at its parent.
    pub fn skip_self(mut self) -> DepSpec {
        self.skip_self = true;
        self
    }

    /// Do not delegate to the parent chain; fail (or resolve to null if
    /// also optional) when the token is absent locally.
    pub fn self_only(mut self) -> DepSpec {
        self.self_only = true;
        self
    }

    /// Overrides the token to look up, keeping the modifiers declared so
    /// far.
    pub fn inject(mut self, token: impl Into<TokenRef>) -> DepSpec {
        self.target = DepTarget::Token(token.into());
        self
    }
}

impl From<Token> for DepSpec {
    fn from(token: Token) -> DepSpec {
        DepSpec::of(token)
    }
}

/// Compiled dependency entry consumed by the resolution engine.
#[derive(Clone)]
pub(crate) enum Dep {
    /// Look the token up, honoring the scoping flags
    Lookup { token: Token, options: DepOptions },
    /// The value itself, returned verbatim
    Literal(AnyArc),
}

pub(crate) type DepList = SmallVec<[Dep; 4]>;

/// Lowers raw dependency declarations into normalized entries.
///
/// Forward-referenced tokens are unwrapped here, exactly once, before any
/// resolution begins.
pub(crate) fn compile_deps(specs: &[DepSpec]) -> DepList {
    specs
        .iter()
        .map(|spec| match &spec.target {
            DepTarget::Literal(value) => Dep::Literal(value.clone()),
            DepTarget::Token(token) => {
                let mut options = DepOptions::DEFAULT;
                if spec.optional {
                    options |= DepOptions::OPTIONAL;
                }
                if spec.skip_self {
                    options.remove(DepOptions::CHECK_SELF);
                }
                if spec.self_only {
                    options.remove(DepOptions::CHECK_PARENT);
                }
                Dep::Lookup {
                    token: token.resolve(),
                    options,
                }
            }
        })
        .collect()
}
