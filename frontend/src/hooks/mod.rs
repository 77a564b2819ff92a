pub mod use_api;
pub mod use_entity_list;
pub mod use_form_modal;
pub mod use_notices;
pub mod use_pending_delete;
