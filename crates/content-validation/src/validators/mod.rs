//! Shape checks shared by the entity validator

pub(crate) mod email;
pub(crate) mod phone;
pub(crate) mod required;
