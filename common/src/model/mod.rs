pub mod comment;
pub mod course;
pub mod lesson;
pub mod video;
