pub mod chapters;
pub mod progress;

pub use chapters::{chapter_detail, list_chapters};
pub use progress::{get_progress, get_resume_point, save_quiz_progress, save_video_progress};
