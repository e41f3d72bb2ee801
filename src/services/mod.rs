pub mod probe;
pub mod report;
pub mod storage;
pub mod upload_service;
