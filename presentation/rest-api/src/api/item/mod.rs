pub mod dto;
mod error_mapper;
pub mod routes;
