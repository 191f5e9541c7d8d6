pub mod assignments;
pub mod classes;
pub mod grades;
pub mod oss;

pub use assignments::AssignmentService;
pub use classes::ClassService;
pub use grades::GradeService;
pub use oss::OssService;
