pub mod category_modal;
pub mod category_selector;
pub mod community_list;
pub mod confirm_dialog;
pub mod create_community;
pub mod entity_row;
pub mod level_modal;
pub mod level_selector;
pub mod list_view;
pub mod modal_shell;
pub mod nav_buttons;
pub mod notice_banner;
pub mod question_modal;
pub mod question_selector;
pub mod text_form;
