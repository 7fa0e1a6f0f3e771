pub mod chapter;
pub mod progress;

pub use chapter::{quiz_percentage, Chapter, ChapterDetail, ChapterWithProgress, QuizQuestion};
pub use progress::{ContentType, ProgressRecord, ResumePoint};
