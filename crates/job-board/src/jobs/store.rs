use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::domain::{JobPosting, PostingId, WorkRequest};
use super::format::next_identifier;
use super::seed;

/// Point-in-time view of a collection. Entities are shared, not copied.
pub type Snapshot<T> = Vec<Arc<T>>;

#[derive(Debug, Default)]
struct StoreState {
    postings: Vec<Arc<JobPosting>>,
    requests: Vec<Arc<WorkRequest>>,
    posting_count: u64,
}

/// Append-only holder of postings and requests.
///
/// One lock guards both collections together with the running posting count,
/// so identifier allocation and the append it belongs to are a single step.
/// Snapshots share the read side and only wait on an in-flight append.
#[derive(Debug, Default)]
pub struct EntityStore {
    state: RwLock<StoreState>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the literal mock dataset.
    pub fn seeded() -> Self {
        let store = Self::new();
        for posting in seed::postings() {
            store.append_posting(posting);
        }
        for request in seed::requests() {
            store.append_request(request);
        }
        store
    }

    /// Append a posting whose identifier the caller already allocated.
    ///
    /// Only seeding uses this: the literal dataset is numbered `000001..`
    /// in count order, which keeps later allocations unique.
    pub(crate) fn append_posting(&self, posting: JobPosting) {
        let mut state = self.write();
        state.postings.push(Arc::new(posting));
        state.posting_count += 1;
    }

    /// Allocate the next identifier and append the posting built from it
    /// without releasing the write lock in between.
    pub fn insert_posting_with<F>(&self, build: F) -> Arc<JobPosting>
    where
        F: FnOnce(PostingId) -> JobPosting,
    {
        let mut state = self.write();
        let id = PostingId(next_identifier(state.posting_count));
        let posting = Arc::new(build(id));
        state.postings.push(Arc::clone(&posting));
        state.posting_count += 1;
        posting
    }

    pub fn append_request(&self, request: WorkRequest) {
        self.write().requests.push(Arc::new(request));
    }

    pub fn snapshot_postings(&self) -> Snapshot<JobPosting> {
        self.read().postings.clone()
    }

    pub fn snapshot_requests(&self) -> Snapshot<WorkRequest> {
        self.read().requests.clone()
    }

    pub fn posting_count(&self) -> u64 {
        self.read().posting_count
    }

    /// First posting carrying `id`, if any.
    pub fn find_posting(&self, id: &PostingId) -> Option<Arc<JobPosting>> {
        self.read()
            .postings
            .iter()
            .find(|posting| &posting.number == id)
            .cloned()
    }

    // Appends cannot leave the collections half-written, so a panic on
    // another thread never invalidates the state.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
