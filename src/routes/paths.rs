pub const ROOT: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";
pub const SCANNER: &str = "/scanner";
pub const HISTORY: &str = "/history";
