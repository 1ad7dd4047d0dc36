// Master Library: seeding CV sections from reusable experiences, and bullet
// edits that keep one level of previous content.

pub mod editing;
pub mod handlers;
pub mod seeding;
