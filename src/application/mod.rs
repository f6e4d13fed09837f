pub mod catalog_service;
