pub mod course;
pub mod faculty;
pub mod notification;
pub mod student;
