pub mod maintenance_service;
pub use maintenance_service::MaintenanceService;
pub mod requirement_service;
pub use requirement_service::RequirementService;
