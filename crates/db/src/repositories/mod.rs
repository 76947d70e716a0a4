//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod dashboard_repo;
pub mod game_repo;
pub mod note_repo;
pub mod solution_repo;

pub use dashboard_repo::DashboardRepo;
pub use game_repo::GameRepo;
pub use note_repo::NoteRepo;
pub use solution_repo::SolutionRepo;
