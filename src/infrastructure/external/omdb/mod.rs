mod client;
mod dto;
mod mapper;

pub use client::{OmdbClient, OMDB_PAGE_SIZE};
