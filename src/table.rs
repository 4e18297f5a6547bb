//! Provider table construction: flattening, normalization, and
//! multi-provider aggregation.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use smallvec::smallvec;
use tracing::debug;

use crate::deps::{compile_deps, Dep, DepOptions};
use crate::error::{InjectError, InjectResult};
use crate::provider::{Provider, ProviderList};
use crate::record::{Record, RecordFn};
use crate::token::Token;

/// Folds an ordered, possibly nested provider list into one token table.
///
/// Later non-multi registrations silently overwrite earlier ones for the
/// same token (last registration wins). Multi registrations aggregate:
/// the token maps to a collector record whose dependency list grows by one
/// synthetic sub-entry per contribution, preserving declaration order.
/// Mixing the two forms under one token fails the build.
pub(crate) fn build_table(providers: ProviderList) -> InjectResult<HashMap<Token, Record>> {
    let mut records = HashMap::new();
    insert_list(&mut records, providers)?;
    debug!(records = records.len(), "provider table built");
    Ok(records)
}

fn insert_list(records: &mut HashMap<Token, Record>, list: ProviderList) -> InjectResult<()> {
    match list {
        ProviderList::Skip => Ok(()),
        ProviderList::One(provider) => insert_provider(records, provider),
        ProviderList::Many(items) => {
            for item in items {
                insert_list(records, item)?;
            }
            Ok(())
        }
    }
}

fn insert_provider(records: &mut HashMap<Token, Record>, provider: Provider) -> InjectResult<()> {
    let token = provider.token();
    let record = resolve_provider(&provider);

    if provider.is_multi() {
        let collector = match records.entry(token.clone()) {
            Entry::Occupied(entry) if !matches!(entry.get().func, RecordFn::Multi) => {
                return Err(InjectError::MixedMultiProvider {
                    token: token.display_name(),
                });
            }
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(Record::new(RecordFn::Multi, smallvec![])),
        };

        let item_token = Token::MultiItem(Arc::new(token), collector.deps.len());
        collector.deps.push(Dep::Lookup {
            token: item_token.clone(),
            options: DepOptions::DEFAULT,
        });
        records.insert(item_token, record);
    } else {
        if let Some(existing) = records.get(&token) {
            if matches!(existing.func, RecordFn::Multi) {
                return Err(InjectError::MixedMultiProvider {
                    token: token.display_name(),
                });
            }
        }
        // Last registration wins, matching declaration order.
        records.insert(token, record);
    }
    Ok(())
}

/// Normalizes one provider description into a record, without knowledge of
/// any other provider.
pub(crate) fn resolve_provider(provider: &Provider) -> Record {
    match provider {
        Provider::Value { value, .. } => Record::resolved(value.clone()),
        Provider::Existing { source, .. } => Record::new(
            RecordFn::Identity,
            smallvec![Dep::Lookup {
                token: source.resolve(),
                options: DepOptions::DEFAULT,
            }],
        ),
        Provider::Class { ctor, deps, .. } | Provider::Construct { ctor, deps, .. } => {
            Record::new(RecordFn::Call(ctor.clone()), compile_deps(deps))
        }
        Provider::Factory { factory, deps, .. } => {
            Record::new(RecordFn::Call(factory.clone()), compile_deps(deps))
        }
    }
}
