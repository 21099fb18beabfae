pub mod query_service;
