pub mod maintenance_repo;
pub use maintenance_repo::MaintenanceRepository;
pub mod requirement_repo;
pub use requirement_repo::RequirementRepository;
