pub mod category_page;
pub mod community_page;
pub mod home;
pub mod level_page;
pub mod not_found;
pub mod question_page;
