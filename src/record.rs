//! Normalized provider records and their cache slots.

use std::sync::Mutex;

use crate::deps::DepList;
use crate::provider::FactoryFn;
use crate::value::AnyArc;

/// Resolution strategy stored for one token.
pub(crate) enum RecordFn {
    /// Pass the single resolved dependency through (aliases), or hold a
    /// pre-seeded literal (value providers, never invoked)
    Identity,
    /// Collect the resolved dependencies into an ordered sequence
    Multi,
    /// Invoke the provider function with the resolved argument list
    ///
    /// Constructor and factory forms both land here: invocation is uniform,
    /// the `new`-vs-call distinction of the description does not survive
    /// normalization.
    Call(FactoryFn),
}

/// Cache slot state machine: `Unresolved -> InProgress -> Resolved`.
///
/// `InProgress` observed on re-entry is the circular-dependency signal; a
/// failed construction resets the slot to `Unresolved` so one bad `get`
/// never wedges the record.
pub(crate) enum Slot {
    Unresolved,
    InProgress,
    Resolved(AnyArc),
}

/// Internal normalized form of one provider.
pub(crate) struct Record {
    pub(crate) func: RecordFn,
    pub(crate) deps: DepList,
    pub(crate) slot: Mutex<Slot>,
}

impl Record {
    pub(crate) fn new(func: RecordFn, deps: DepList) -> Record {
        Record {
            func,
            deps,
            slot: Mutex::new(Slot::Unresolved),
        }
    }

    /// A record whose value needs no construction (value providers).
    pub(crate) fn resolved(value: AnyArc) -> Record {
        Record {
            func: RecordFn::Identity,
            deps: DepList::new(),
            slot: Mutex::new(Slot::Resolved(value)),
        }
    }
}
