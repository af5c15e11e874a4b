pub mod enums;
pub mod format;
pub mod models;
pub mod table;

pub use models::exam::{Exam, Subject};
pub use models::finance::{FinancialStatistics, MonthlyRevenue, PeriodError, StatisticsPeriod};
pub use models::pagination::{
    BaseFilters, FilterError, PaginatedResponse, PaginationError, SingleObjectResponse,
};
pub use models::question::{AnswerOption, Question};
pub use models::user::{ManagedUser, Role, RoleQuery, User, UserProfile};
pub use table::{cell_text, cell_value, TableHeader, TableResource};
