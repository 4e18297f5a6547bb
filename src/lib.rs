//! # token-di
//!
//! Hierarchical, token-keyed dependency injection for Rust, inspired by
//! Angular's StaticInjector.
//!
//! ## Features
//!
//! - **Token identity**: opaque, identity-compared injection tokens — no
//!   accidental collisions between registrations that share a name
//! - **Five provider shapes**: value, alias, class, self-constructing, and
//!   factory providers as a closed set, matched exhaustively
//! - **Singleton-per-injector**: each record's provider function runs at
//!   most once for the lifetime of the injector that owns it
//! - **Hierarchies**: parent delegation with `Optional`, `Self`, and
//!   `SkipSelf` scoping flags per dependency
//! - **Multi-providers**: ordered aggregation of many contributions under
//!   one shared token
//! - **Circular dependency detection**: in-progress cache sentinels with
//!   full resolution paths in error messages
//!
//! ## Quick Start
//!
//! ```rust
//! use token_di::{DepSpec, Injector, Provider, StaticInjector, Token};
//! use std::sync::Arc;
//!
//! // Define your services
//! struct Database {
//!     connection_string: String,
//! }
//!
//! struct UserService {
//!     db: Arc<Database>,
//! }
//!
//! // Mint tokens and declare providers
//! let db = Token::new("Database");
//! let users = Token::new("UserService");
//!
//! let injector = StaticInjector::create(
//!     vec![
//!         Provider::value(
//!             db.clone(),
//!             Database { connection_string: "postgres://localhost".to_string() },
//!         ),
//!         Provider::factory(users.clone(), vec![DepSpec::of(db.clone())], |deps| {
//!             UserService {
//!                 db: deps[0].clone().downcast::<Database>().ok().unwrap(),
//!             }
//!         }),
//!     ],
//!     None,
//! )
//! .unwrap();
//!
//! let user_service = injector.get_as::<UserService>(&users).unwrap();
//! assert_eq!(user_service.db.connection_string, "postgres://localhost");
//! ```
//!
//! ## Injector Hierarchies
//!
//! A token absent from an injector's own table is looked up in its parent
//! chain; dependency declarations can narrow that with `skip_self`,
//! `self_only`, and `optional`:
//!
//! ```rust
//! use token_di::{Injector, Provider, StaticInjector, Token};
//!
//! let endpoint = Token::new("ENDPOINT");
//!
//! let platform = StaticInjector::create(
//!     vec![Provider::value(endpoint.clone(), "https://api.example.com".to_string())],
//!     None,
//! )
//! .unwrap();
//!
//! let app = StaticInjector::create(Vec::<Provider>::new(), Some(platform)).unwrap();
//!
//! // No own provider for ENDPOINT: delegated to the parent.
//! let url = app.get_as::<String>(&endpoint).unwrap();
//! assert_eq!(&*url, "https://api.example.com");
//! ```
//!
//! ## Multi-Providers
//!
//! Several providers can contribute to one ordered sequence under a shared
//! token:
//!
//! ```rust
//! use token_di::{Injector, Provider, StaticInjector, Token};
//!
//! let plugins = Token::new("PLUGINS");
//!
//! let injector = StaticInjector::create(
//!     vec![
//!         Provider::value(plugins.clone(), "auth").multi(),
//!         Provider::value(plugins.clone(), "logging").multi(),
//!         Provider::value(plugins.clone(), "metrics").multi(),
//!     ],
//!     None,
//! )
//! .unwrap();
//!
//! let all = injector.get_all(&plugins).unwrap();
//! let names: Vec<&str> = all
//!     .iter()
//!     .map(|p| *p.downcast_ref::<&str>().unwrap())
//!     .collect();
//! assert_eq!(names, ["auth", "logging", "metrics"]);
//! ```

// Module declarations
pub mod deps;
pub mod error;
pub mod injector;
pub mod provider;
pub mod token;
pub mod traits;
pub mod value;

// Internal modules
mod record;
mod table;

// Re-export core types
pub use deps::{DepOptions, DepSpec};
pub use error::{InjectError, InjectResult};
pub use injector::{create_injector, NullInjector, StaticInjector};
pub use provider::{forward_ref, FactoryFn, Provider, ProviderList, TokenRef};
pub use token::{token_of, OpaqueToken, Token};
pub use traits::{Injector, InjectorCore};
pub use value::{is_null, null_value, AnyArc, Null};
