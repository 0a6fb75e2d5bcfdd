pub mod courses;
pub mod detail;
pub mod faculty;
pub mod filter_bar;
pub mod form_dialog;
pub mod list_table;
pub mod notifications;
pub mod shell;
pub mod students;
