use crate::model::building::Building;
use std::sync::Arc;

///
/// RecordSource
///
/// Read-only provider of the full record set.
/// Each call hands out one immutable snapshot; a query never observes a
/// record set that changes underneath it.
///

pub trait RecordSource {
    fn snapshot(&self) -> Arc<[Building]>;
}

impl<S: RecordSource + ?Sized> RecordSource for Arc<S> {
    fn snapshot(&self) -> Arc<[Building]> {
        (**self).snapshot()
    }
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn snapshot(&self) -> Arc<[Building]> {
        (**self).snapshot()
    }
}
