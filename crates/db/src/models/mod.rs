pub mod query_log;
