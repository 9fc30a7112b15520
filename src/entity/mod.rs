pub mod orders;
pub mod orders_utils;
pub mod users;
pub mod users_utils;
