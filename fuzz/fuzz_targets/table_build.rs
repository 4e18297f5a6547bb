#![no_main]

use libfuzzer_sys::fuzz_target;
use token_di::{InjectError, Injector, Provider, StaticInjector, Token};

// Drive the table builder with arbitrary interleavings of multi and
// regular registrations across a small token set. Building must either
// succeed or fail with MixedMultiProvider; it must never panic, and a
// successful build must resolve every token it registered.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 64 {
        return;
    }

    let tokens = [Token::new("T0"), Token::new("T1"), Token::new("T2")];

    let mut providers = Vec::with_capacity(data.len());
    for (i, byte) in data.iter().enumerate() {
        let token = tokens[(byte & 0x03) as usize % tokens.len()].clone();
        let value = i as u64;
        let provider = if byte & 0x04 != 0 {
            Provider::value(token, value).multi()
        } else {
            Provider::value(token, value)
        };
        providers.push(provider);
    }

    match StaticInjector::create(providers, None) {
        Ok(injector) => {
            for token in &tokens {
                match injector.get(token) {
                    Ok(_) => {}
                    Err(InjectError::NotFound { .. }) => {} // token never registered
                    Err(other) => panic!("unexpected resolution error: {}", other),
                }
            }
        }
        Err(InjectError::MixedMultiProvider { .. }) => {} // legal build failure
        Err(other) => panic!("unexpected build error: {}", other),
    }
});
