pub mod district;
pub mod index;
pub mod map;
pub mod search_form;
