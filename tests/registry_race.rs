use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    thread,
};

use rowscope::{
    registry::{intersect_named, ResourceRegistry},
    Result, RowKeyRange, RowKeySet,
};

#[derive(Default)]
struct SharedRegistry {
    inner: Mutex<HashMap<String, Arc<RowKeySet>>>,
    builds: AtomicUsize,
}

impl ResourceRegistry<RowKeySet> for SharedRegistry {
    fn lookup_or_create<F>(&self, name: &str, create: F) -> Result<Arc<RowKeySet>>
    where
        F: FnOnce() -> Result<RowKeySet>,
    {
        let mut guard = self.inner.lock().expect("registry lock");
        if let Some(existing) = guard.get(name) {
            return Ok(existing.clone());
        }
        self.builds.fetch_add(1, Ordering::SeqCst);
        let value = Arc::new(create()?);
        guard.insert(name.to_owned(), value.clone());
        Ok(value)
    }
}

#[test]
fn racing_intersections_resolve_to_one_set() {
    let registry = SharedRegistry::default();
    let mut set = RowKeySet::new();
    set.append_range(RowKeyRange::closed("a", "z"));
    set.append_key("m");
    let range = RowKeyRange::right_open("m", "n");
    let expected = set.intersect(&range);

    let results: Vec<Arc<RowKeySet>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| intersect_named(&registry, "clipped", &set, &range)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("thread").expect("intersect"))
            .collect()
    });

    assert_eq!(registry.builds.load(Ordering::SeqCst), 1);
    for result in &results {
        assert!(Arc::ptr_eq(result, &results[0]));
        assert_eq!(**result, expected);
    }
}

#[test]
fn repeated_builds_are_identical() {
    let mut set = RowKeySet::new();
    set.append_range(RowKeyRange::prefix("user#"));
    set.append_key("user#42");
    let range = RowKeyRange::closed("user#1", "user#5");

    let first = thread::spawn({
        let (set, range) = (set.clone(), range.clone());
        move || set.intersect(&range).to_canonical_text()
    })
    .join()
    .expect("thread");
    assert_eq!(first, set.intersect(&range).to_canonical_text());
}
