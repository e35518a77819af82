pub mod export_service;
pub mod import_service;
