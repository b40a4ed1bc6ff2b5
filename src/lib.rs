pub mod audit;
pub mod catalog;
pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod extract;
pub mod imagery;
pub mod middleware;
pub mod models;
pub mod recommend;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
