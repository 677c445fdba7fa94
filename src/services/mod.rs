pub mod auth;
pub mod classes;
pub mod marks;
pub mod progress;
pub mod reports;
pub mod students;
pub mod subjects;
pub mod system;
pub mod teachers;

pub use auth::AuthService;
pub use classes::ClassService;
pub use marks::MarkService;
pub use progress::ProgressService;
pub use reports::ReportService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use system::SystemService;
pub use teachers::TeacherService;
