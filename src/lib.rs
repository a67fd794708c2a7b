pub mod app;
pub mod auth;
pub mod blogs;
pub mod bookmarks;
pub mod config;
pub mod db;
pub mod drafts;
pub mod error;
pub mod extract;
pub mod history;
pub mod readlater;
pub mod response;
pub mod state;
pub mod tags;
pub mod users;
