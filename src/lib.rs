pub mod audit;
pub mod cart;
pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod i18n;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod watcher;
pub mod whatsapp;
