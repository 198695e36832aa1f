//! Platform-agnostic application logic: navigation state, the consultation
//! form machine, the submission seam, and small shared helpers.

pub mod accordion;
pub mod form;
pub mod nav;
pub mod submit;
pub mod timing;
