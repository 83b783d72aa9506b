pub mod fixtures;

pub use fixtures::{SampleRecords, asset_record, batch_record, collection_record, run_record};
