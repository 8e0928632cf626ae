pub mod adbox;
pub mod badge;
pub mod compare;
pub mod cta;
pub mod modals;
pub mod plot;
pub mod table;
pub mod template;
pub mod toast;
