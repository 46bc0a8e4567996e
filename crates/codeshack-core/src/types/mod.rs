//! Backend documents and request payloads

mod catalog;
mod payloads;
mod populated;
mod question;
mod user;

pub use catalog::{Company, Course, Topic};
pub use payloads::{
    CommentLink, CourseQuestionLink, CoursePatch, HistoryEntry, NewComment, NewCompany,
    NewCourse, NewQuestion, NewTopic, NewUser, ReplyLink,
};
pub use populated::{HasId, Populated, documents};
pub use question::{Comment, Question};
pub use user::{ADMIN_ROLE, User};
