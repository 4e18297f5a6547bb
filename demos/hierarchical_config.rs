//! Two-level injector hierarchy: a platform injector owning shared
//! configuration, and an application injector layering services on top.
//!
//! Run with: cargo run --example hierarchical_config

use std::sync::Arc;
use token_di::{DepSpec, Injector, Provider, StaticInjector, Token};

// ===== Domain Types =====

#[derive(Debug)]
struct DatabaseConfig {
    url: String,
    pool_size: u32,
}

struct Database {
    config: Arc<DatabaseConfig>,
}

impl Database {
    fn describe(&self) -> String {
        format!("{} (pool={})", self.config.url, self.config.pool_size)
    }
}

struct UserService {
    db: Arc<Database>,
    greeting: Arc<String>,
}

impl UserService {
    fn greet(&self, name: &str) -> String {
        format!("{} {} via {}", self.greeting, name, self.db.describe())
    }
}

fn main() {
    // Tokens are minted once and shared by both layers.
    let config = Token::new("DatabaseConfig");
    let database = Token::new("Database");
    let greeting = Token::new("GREETING");
    let users = Token::new("UserService");

    // Platform layer: configuration values shared by every application.
    let platform = StaticInjector::create(
        vec![
            Provider::value(
                config.clone(),
                DatabaseConfig {
                    url: "postgres://localhost".to_string(),
                    pool_size: 8,
                },
            ),
            Provider::value(greeting.clone(), "Hello,".to_string()),
        ],
        None,
    )
    .expect("platform providers are well-formed");

    // Application layer: services wired against the platform's records.
    let app = StaticInjector::create(
        vec![
            Provider::factory(database.clone(), vec![DepSpec::of(config.clone())], |deps| {
                Database {
                    config: deps[0].clone().downcast::<DatabaseConfig>().ok().unwrap(),
                }
            }),
            Provider::factory(
                users.clone(),
                vec![DepSpec::of(database.clone()), DepSpec::of(greeting.clone())],
                |deps| UserService {
                    db: deps[0].clone().downcast::<Database>().ok().unwrap(),
                    greeting: deps[1].clone().downcast::<String>().ok().unwrap(),
                },
            ),
        ],
        Some(platform.clone()),
    )
    .expect("app providers are well-formed");

    let service = app.get_as::<UserService>(&users).unwrap();
    println!("{}", service.greet("Alice"));

    // The config instance is owned by the platform and shared downward.
    let from_platform = platform.get_as::<DatabaseConfig>(&config).unwrap();
    let from_app = app.get_as::<DatabaseConfig>(&config).unwrap();
    println!(
        "config shared across layers: {}",
        Arc::ptr_eq(&from_platform, &from_app)
    );

    println!("app table: {}", app);
}
