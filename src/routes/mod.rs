pub mod absences;
pub mod assessments;
pub mod auth;
pub mod classes;
pub mod classrooms;
pub mod curriculum;
pub mod dashboard;
pub mod finance;
pub mod quran;
pub mod quran_logs;
pub mod results;
pub mod rosters;
pub mod school_years;
pub mod students;
pub mod teachers;
pub mod users;

pub use absences::configure_absences_routes;
pub use assessments::configure_assessments_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use classrooms::configure_classrooms_routes;
pub use curriculum::configure_curriculum_routes;
pub use dashboard::configure_dashboard_routes;
pub use finance::configure_finance_routes;
pub use quran::configure_quran_routes;
pub use quran_logs::configure_quran_logs_routes;
pub use results::configure_results_routes;
pub use rosters::configure_rosters_routes;
pub use school_years::configure_school_years_routes;
pub use students::configure_students_routes;
pub use teachers::configure_teachers_routes;
pub use users::configure_user_routes;
