pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod crud;
pub mod icons;
pub mod modal;
pub mod notifications;
pub mod view_guard;
