//! The static injector: one provider table, one parent link, and the
//! resolution engine that walks, caches, and delegates.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use tracing::trace;

use crate::deps::{Dep, DepOptions};
use crate::error::{InjectError, InjectResult};
use crate::provider::ProviderList;
use crate::record::{Record, RecordFn, Slot};
use crate::table::build_table;
use crate::token::Token;
use crate::traits::{Injector, InjectorCore};
use crate::value::{null_value, AnyArc};

/// An injector built from a declarative provider list.
///
/// Owns exactly one provider table, built once at construction and never
/// reshaped afterwards (only the per-record cache slots mutate), plus a
/// reference to a parent injector consulted when a token is absent
/// locally. Values are singletons per injector: a provider function runs
/// at most once for the lifetime of the injector that owns its record.
///
/// # Examples
///
/// ```rust
/// use token_di::{DepSpec, Injector, Provider, StaticInjector, Token};
///
/// struct Database {
///     url: String,
/// }
///
/// struct UserService {
///     db: std::sync::Arc<Database>,
/// }
///
/// let db = Token::new("Database");
/// let users = Token::new("UserService");
///
/// let injector = StaticInjector::create(
///     vec![
///         Provider::class(db.clone(), vec![], |_| Database {
///             url: "postgres://localhost".to_string(),
///         }),
///         Provider::factory(users.clone(), vec![DepSpec::of(db.clone())], |deps| {
///             UserService {
///                 db: deps[0].clone().downcast::<Database>().ok().unwrap(),
///             }
///         }),
///     ],
///     None,
/// )
/// .unwrap();
///
/// let service = injector.get_as::<UserService>(&users).unwrap();
/// assert_eq!(service.db.url, "postgres://localhost");
///
/// // Shared singleton: the service holds the same Database instance.
/// let database = injector.get_as::<Database>(&db).unwrap();
/// assert!(std::sync::Arc::ptr_eq(&service.db, &database));
/// ```
pub struct StaticInjector {
    records: HashMap<Token, Record>,
    parent: Arc<dyn Injector>,
    self_weak: Weak<StaticInjector>,
}

impl StaticInjector {
    /// Builds an injector from `providers`, delegating misses to `parent`
    /// (the terminal [`NullInjector`] when absent).
    ///
    /// Table-build conflicts such as mixing `multi` and regular providers
    /// for one token fail here, before the injector exists at all.
    pub fn create(
        providers: impl Into<ProviderList>,
        parent: Option<Arc<dyn Injector>>,
    ) -> InjectResult<Arc<StaticInjector>> {
        let records = build_table(providers.into())?;
        let parent = parent.unwrap_or_else(|| Arc::new(NullInjector) as Arc<dyn Injector>);
        Ok(Arc::new_cyclic(|self_weak| StaticInjector {
            records,
            parent,
            self_weak: self_weak.clone(),
        }))
    }

    /// The parent this injector delegates to.
    pub fn parent(&self) -> &Arc<dyn Injector> {
        &self.parent
    }

    fn activate(
        &self,
        token: &Token,
        record: &Record,
        path: &mut Vec<&'static str>,
    ) -> InjectResult<AnyArc> {
        {
            let mut slot = record.slot.lock().unwrap();
            match &*slot {
                Slot::Resolved(value) => return Ok(value.clone()),
                Slot::InProgress => {
                    return Err(InjectError::Circular { path: path.clone() });
                }
                Slot::Unresolved => {}
            }
            *slot = Slot::InProgress;
        }

        // The lock is not held while dependencies resolve and the provider
        // function runs, so reentrant `get` calls from inside a provider
        // cannot deadlock; the InProgress sentinel is the reentrancy guard.
        trace!(token = token.display_name(), "constructing record");
        let result = self.construct(record, path);

        let mut slot = record.slot.lock().unwrap();
        match result {
            Ok(value) => {
                *slot = Slot::Resolved(value.clone());
                Ok(value)
            }
            Err(err) => {
                // A failed attempt must not wedge the record.
                *slot = Slot::Unresolved;
                Err(err)
            }
        }
    }

    fn construct(&self, record: &Record, path: &mut Vec<&'static str>) -> InjectResult<AnyArc> {
        let mut args: Vec<AnyArc> = Vec::with_capacity(record.deps.len());
        for dep in record.deps.iter() {
            match dep {
                Dep::Literal(value) => args.push(value.clone()),
                Dep::Lookup { token, options } => {
                    args.push(self.resolve_token(token, *options, None, path)?);
                }
            }
        }
        Ok(match &record.func {
            // Aliases carry exactly one dependency; value records are
            // pre-seeded and never reach construction.
            RecordFn::Identity => args.into_iter().next().unwrap_or_else(null_value),
            RecordFn::Multi => Arc::new(args) as AnyArc,
            RecordFn::Call(func) => func(&args),
        })
    }
}

impl InjectorCore for StaticInjector {
    fn resolve_token(
        &self,
        token: &Token,
        options: DepOptions,
        not_found: Option<&AnyArc>,
        path: &mut Vec<&'static str>,
    ) -> InjectResult<AnyArc> {
        // Optional is equivalent to supplying the null marker as fallback.
        let null;
        let not_found = match not_found {
            None if options.contains(DepOptions::OPTIONAL) => {
                null = null_value();
                Some(&null)
            }
            other => other,
        };

        if options.contains(DepOptions::CHECK_SELF) {
            if matches!(token, Token::Injector) {
                // Every injector provides itself; the weak handle only
                // fails to upgrade during teardown.
                if let Some(me) = self.self_weak.upgrade() {
                    return Ok(me as AnyArc);
                }
            }
            if let Some(record) = self.records.get(token) {
                path.push(token.display_name());
                let result = self.activate(token, record, path);
                if result.is_ok() {
                    path.pop();
                }
                return result;
            }
        }

        if options.contains(DepOptions::CHECK_PARENT) {
            trace!(token = token.display_name(), "delegating to parent injector");
            return self
                .parent
                .resolve_token(token, DepOptions::DEFAULT, not_found, path);
        }

        match not_found {
            Some(value) => Ok(value.clone()),
            None => {
                path.push(token.display_name());
                Err(InjectError::NotFound {
                    token: token.display_name(),
                    path: path.clone(),
                })
            }
        }
    }
}

impl Injector for StaticInjector {}

impl fmt::Display for StaticInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&'static str> = self
            .records
            .keys()
            .filter(|token| !matches!(token, Token::MultiItem(..)))
            .map(|token| token.display_name())
            .collect();
        names.sort_unstable();
        write!(f, "StaticInjector[{}]", names.join(", "))
    }
}

#[cfg(feature = "diagnostics")]
impl StaticInjector {
    /// Dump of every record and its cache state.
    pub fn to_debug_string(&self) -> String {
        let mut s = String::new();
        s.push_str("=== Static Injector Debug ===\n");
        let mut lines: Vec<String> = self
            .records
            .iter()
            .map(|(token, record)| {
                let state = match &*record.slot.lock().unwrap() {
                    Slot::Unresolved => "unresolved",
                    Slot::InProgress => "in-progress",
                    Slot::Resolved(_) => "resolved",
                };
                format!("  {:?}: {} deps, {}\n", token, record.deps.len(), state)
            })
            .collect();
        lines.sort();
        for line in lines {
            s.push_str(&line);
        }
        s
    }
}

/// Terminal injector at the top of every parent chain.
///
/// Holds no provider table; every lookup fails with
/// [`InjectError::NotFound`] unless a fallback value was supplied.
pub struct NullInjector;

impl InjectorCore for NullInjector {
    fn resolve_token(
        &self,
        token: &Token,
        options: DepOptions,
        not_found: Option<&AnyArc>,
        path: &mut Vec<&'static str>,
    ) -> InjectResult<AnyArc> {
        let null;
        let not_found = match not_found {
            None if options.contains(DepOptions::OPTIONAL) => {
                null = null_value();
                Some(&null)
            }
            other => other,
        };
        match not_found {
            Some(value) => Ok(value.clone()),
            None => {
                path.push(token.display_name());
                Err(InjectError::NotFound {
                    token: token.display_name(),
                    path: path.clone(),
                })
            }
        }
    }
}

impl Injector for NullInjector {}

/// Builds an injector from a flattened provider list and an optional
/// parent. The construction entry point for application code.
pub fn create_injector(
    providers: impl Into<ProviderList>,
    parent: Option<Arc<dyn Injector>>,
) -> InjectResult<Arc<StaticInjector>> {
    StaticInjector::create(providers, parent)
}
