pub mod assignments;

pub mod classes;

pub mod grades;

pub mod oss;

pub use assignments::configure_assignments_routes;
pub use classes::configure_classes_routes;
pub use grades::configure_grades_routes;
pub use oss::configure_oss_routes;
