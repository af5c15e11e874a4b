pub mod auth_service;
pub mod finance_service;
pub mod resource_service;

pub use auth_service::{AuthApi, AuthService, Credentials};
pub use finance_service::FinanceService;
pub use resource_service::{ExamService, QuestionService, Resource, ResourceService, UserService};
