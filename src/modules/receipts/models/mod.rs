mod metadata;

pub use metadata::ReceiptMetadata;
