pub mod app_info;
pub mod tenants;

pub use app_info::AppInfoPanel;
pub use tenants::TenantsPanel;
