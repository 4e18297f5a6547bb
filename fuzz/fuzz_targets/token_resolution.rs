#![no_main]

use libfuzzer_sys::fuzz_target;
use token_di::{DepSpec, InjectError, Injector, Provider, StaticInjector, Token};

// Build arbitrary dependency edges between a fixed set of factories and
// resolve every token. Each attempt must terminate with a value, NotFound,
// or Circular — never a panic or a wedged record.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 || data.len() > 32 {
        return;
    }

    const N: usize = 4;
    let tokens: Vec<Token> = (0..N).map(|_| Token::new("node")).collect();

    // One factory per token; byte i wires token i to depend on token
    // (byte % (N + 1)), where N means "no dependency".
    let mut providers = Vec::with_capacity(N);
    for (i, token) in tokens.iter().enumerate() {
        let edge = (data[i % data.len()] as usize) % (N + 1);
        let deps = if edge < N {
            vec![DepSpec::of(tokens[edge].clone())]
        } else {
            vec![]
        };
        providers.push(Provider::factory(token.clone(), deps, move |args| {
            args.len() as u64
        }));
    }

    let injector = StaticInjector::create(providers, None).expect("build cannot conflict");

    for token in &tokens {
        match injector.get(token) {
            Ok(_) => {}
            Err(InjectError::Circular { path }) => {
                assert!(path.len() >= 2, "cycle path must show the revisit");
            }
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    // A failed cycle must not wedge the records: a second pass behaves
    // identically.
    for token in &tokens {
        match injector.get(token) {
            Ok(_) | Err(InjectError::Circular { .. }) => {}
            Err(other) => panic!("unexpected error on second pass: {}", other),
        }
    }
});
