//! Multi-provider aggregation: independent modules each contribute one
//! plugin under a shared token, and the host resolves them as one ordered
//! sequence.
//!
//! Run with: cargo run --example plugin_registry

use std::sync::Arc;
use token_di::{DepSpec, Injector, Provider, ProviderList, StaticInjector, Token};

trait Plugin: Send + Sync {
    fn name(&self) -> &str;
    fn activate(&self) -> String;
}

struct AuthPlugin;
impl Plugin for AuthPlugin {
    fn name(&self) -> &str {
        "auth"
    }
    fn activate(&self) -> String {
        "auth: sessions enabled".to_string()
    }
}

struct MetricsPlugin {
    prefix: String,
}
impl Plugin for MetricsPlugin {
    fn name(&self) -> &str {
        "metrics"
    }
    fn activate(&self) -> String {
        format!("metrics: reporting under {}", self.prefix)
    }
}

fn main() {
    let plugins = Token::new("PLUGINS");
    let metrics_prefix = Token::new("METRICS_PREFIX");

    // Each module hands back its own provider list; the host flattens them.
    let auth_module: ProviderList =
        Provider::value(plugins.clone(), Arc::new(AuthPlugin) as Arc<dyn Plugin>)
            .multi()
            .into();

    let metrics_module: ProviderList = vec![
        Provider::value(metrics_prefix.clone(), "app.demo".to_string()),
        Provider::factory(
            plugins.clone(),
            vec![DepSpec::of(metrics_prefix.clone())],
            |deps| {
                Arc::new(MetricsPlugin {
                    prefix: deps[0].downcast_ref::<String>().unwrap().clone(),
                }) as Arc<dyn Plugin>
            },
        )
        .multi(),
    ]
    .into();

    let injector = StaticInjector::create(
        ProviderList::Many(vec![auth_module, metrics_module]),
        None,
    )
    .expect("plugin providers are well-formed");

    for entry in injector.get_all(&plugins).unwrap() {
        let plugin = entry.downcast_ref::<Arc<dyn Plugin>>().unwrap();
        println!("[{}] {}", plugin.name(), plugin.activate());
    }
}
