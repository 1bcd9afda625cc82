/// Snapshot handed to the progress observer after each collection is done.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    /// Id of the collection that just finished.
    pub collection_id: &'a str,
    /// Number of collections processed so far, including this one.
    pub completed: usize,
    /// Total number of collections in the batch.
    pub total: usize,
}
