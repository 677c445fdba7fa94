pub mod auth;

pub mod students;

pub mod teachers;

pub mod classes;

pub mod subjects;

pub mod marks;

pub mod reports;

pub mod progress;

pub mod system;

pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use marks::configure_marks_routes;
pub use progress::configure_progress_routes;
pub use reports::configure_reports_routes;
pub use students::configure_students_routes;
pub use subjects::configure_subjects_routes;
pub use system::configure_system_routes;
pub use teachers::configure_teachers_routes;
