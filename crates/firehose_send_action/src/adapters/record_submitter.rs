/// Single-record ingestion capability.
///
/// Returns the service-assigned record id when the backend provides one. Errors
/// carry the backend's message unmodified.
pub trait RecordSubmitter {
    fn put_record(&self, stream_name: &str, data: &[u8]) -> Result<Option<String>, String>;
}
