// Adapters layer: concrete implementations for external systems (remote chat API, storage)

pub mod azure;
pub mod storage;
