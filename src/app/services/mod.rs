//! Core business logic services

pub mod aggregators;
pub mod company_registry;
pub mod csv_parser;
pub mod fund_metrics;
pub mod grade_mapper;
pub mod numeric;
pub mod pipeline;
pub mod record_merger;
