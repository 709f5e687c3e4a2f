pub mod member_form;
pub mod picker;
